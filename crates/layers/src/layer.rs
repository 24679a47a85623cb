#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

/// Anything drawn on the map, stacked by id (lower ids draw first).
pub trait Layer {
    fn id(&self) -> LayerId;
}
