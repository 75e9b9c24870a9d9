mod category;
mod question;

pub use category::*;
pub use question::*;
