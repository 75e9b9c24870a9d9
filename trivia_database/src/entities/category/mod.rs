mod model;
mod query;

pub use model::*;
pub use query::*;
