pub mod basemap;
pub mod layer;
pub mod parcel_layer;
pub mod picking;
pub mod symbology;

pub use layer::*;
