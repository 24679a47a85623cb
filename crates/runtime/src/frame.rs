/// Frame metadata handed to per-frame consumers (viewport, camera animation).
///
/// Frames are produced by the event loop once per processed event; `dt_s` is
/// the wall-clock time since the previous frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Seconds since the previous frame.
    pub dt_s: f64,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s: dt_s.max(0.0),
        }
    }

    pub fn first() -> Self {
        Self::new(0, 0.0)
    }

    pub fn next(self, dt_s: f64) -> Self {
        Self::new(self.index + 1, dt_s)
    }
}
