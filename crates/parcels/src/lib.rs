pub mod focus;
pub mod parcel;
pub mod selection;
pub mod store;
pub mod summary;
pub mod zoning;

pub use focus::*;
pub use parcel::*;
pub use selection::*;
pub use store::*;
pub use summary::*;
pub use zoning::*;
