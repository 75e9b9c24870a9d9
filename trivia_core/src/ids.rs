use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


macro_rules! create_integer_id_newtype {
    ($(#[$attribute:meta])* $struct_name:ident) => {
        $(#[$attribute])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[derive(Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        pub struct $struct_name(pub(crate) i32);

        impl $struct_name {
            #[inline]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $struct_name {
            #[inline]
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}


create_integer_id_newtype!(
    /// Database-generated identifier of a category.
    CategoryId
);

create_integer_id_newtype!(
    /// Database-generated identifier of a question.
    QuestionId
);
