pub mod dir;
pub mod kind;
pub mod types;

pub use dir::*;
pub use kind::*;
pub use types::*;
