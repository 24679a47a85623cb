pub mod frame;
pub mod notify;

pub use frame::*;
pub use notify::*;
