pub mod mode;
pub mod scenario;

pub use mode::*;
pub use scenario::*;
