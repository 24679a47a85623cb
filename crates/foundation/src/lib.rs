pub mod bounds;
pub mod ids;
pub mod latlng;
pub mod text;

// Foundation crate: small, well-tested primitives only.
pub use bounds::*;
pub use ids::*;
pub use latlng::*;
