pub mod busdays;
pub mod ids;
pub mod model;
pub mod quorum;
pub mod similarity;
pub mod status;
pub mod types;

pub use busdays::*;
pub use ids::*;
pub use model::*;
pub use quorum::*;
pub use similarity::*;
pub use status::*;
pub use types::*;
