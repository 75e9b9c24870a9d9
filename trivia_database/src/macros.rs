/// Declares a pin-projected wrapper around a boxed row stream that maps
/// every polled item with the given closure-like expression.
///
/// The expression receives the raw `Option<Item>` produced by the wrapped stream,
/// so `None` (end of stream) must be passed through.
///
/// ```rust,ignore
/// type RawNumberStream<'c> = BoxStream<'c, Result<i32, sqlx::Error>>;
///
/// create_async_stream_wrapper!(
///     pub struct PositiveNumberStream<'c>;
///     transforms stream RawNumberStream<'c> => stream of QueryResult<u32>:
///         |value| value.map(|item| item.map(|number| number.unsigned_abs()).map_err(QueryError::from))
/// );
/// ```
///
/// The generated struct has a private `new` constructor taking the wrapped stream,
/// and implements [`futures_core::Stream`].
macro_rules! create_async_stream_wrapper {
    (
        $struct_visibility:vis struct $struct_identifier:ident<$struct_lifetime:lifetime>;
        transforms stream $wrapped_type:ty => stream of $resulting_type:ty:
            |$captured_value:ident| $mapper:expr
    ) => {
        pin_project_lite::pin_project! {
            $struct_visibility struct $struct_identifier<$struct_lifetime> {
                #[pin]
                wrapped: $wrapped_type
            }
        }

        impl<$struct_lifetime> $struct_identifier<$struct_lifetime> {
            #[inline]
            fn new(wrapped: $wrapped_type) -> Self {
                Self { wrapped }
            }
        }

        impl<$struct_lifetime> futures_core::Stream for $struct_identifier<$struct_lifetime> {
            type Item = $resulting_type;

            fn poll_next(
                self: std::pin::Pin<&mut Self>,
                cx: &mut std::task::Context<'_>,
            ) -> std::task::Poll<Option<Self::Item>> {
                let this = self.project();

                match <$wrapped_type as futures_core::Stream>::poll_next(this.wrapped, cx) {
                    std::task::Poll::Ready($captured_value) => std::task::Poll::Ready($mapper),
                    std::task::Poll::Pending => std::task::Poll::Pending,
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                <$wrapped_type as futures_core::Stream>::size_hint(&self.wrapped)
            }
        }
    };
}
