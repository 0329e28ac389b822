pub mod proposal;
pub mod sanction;
pub mod session;
pub mod transitions;

pub use proposal::*;
pub use sanction::*;
pub use session::*;
pub use transitions::*;
