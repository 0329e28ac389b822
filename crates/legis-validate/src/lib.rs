pub mod engine;
pub mod error;
pub mod result;

pub use engine::*;
pub use error::*;
pub use result::*;
