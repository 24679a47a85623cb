//! Decides when the map camera should follow the selection.
//!
//! The controller is a one-shot trigger: a new selection arms it, the next
//! frame with a focus consumes it and yields exactly one [`CameraTransition`].
//! Deselection disarms it, and so does turning auto-move off, so no move is
//! ever replayed late.

use foundation::LatLng;
use tracing::debug;

/// Map center before anything is selected.
pub const DEFAULT_CENTER: LatLng = LatLng::new(32.964713, -96.791278);

/// Map zoom before anything is selected.
pub const DEFAULT_ZOOM: f64 = 15.0;

/// Zoom level the camera flies to when following a selection.
pub const FOCUS_ZOOM: f64 = 17.0;

/// Duration of the follow animation (seconds).
pub const FLY_DURATION_S: f64 = 1.5;

/// A single animated camera move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraTransition {
    pub target: LatLng,
    pub zoom: f64,
    pub duration_s: f64,
}

impl CameraTransition {
    pub fn follow(target: LatLng) -> Self {
        Self {
            target,
            zoom: FOCUS_ZOOM,
            duration_s: FLY_DURATION_S,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    /// User toggle; when off, selections never move the camera.
    auto_move: bool,
    /// Armed by a new selection, consumed by the next eligible frame.
    pending_move: bool,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ViewportController {
    pub fn new(auto_move: bool) -> Self {
        Self {
            auto_move,
            pending_move: false,
        }
    }

    pub fn auto_move(&self) -> bool {
        self.auto_move
    }

    pub fn pending_move(&self) -> bool {
        self.pending_move
    }

    /// A parcel was appended to the selection.
    pub fn on_selection_added(&mut self) {
        self.pending_move = true;
    }

    /// A parcel was removed, or the selection cleared. Never moves the camera.
    pub fn on_selection_removed(&mut self) {
        self.pending_move = false;
    }

    /// Turning auto-move off drops any armed move; turning it back on does
    /// not replay moves missed in between.
    pub fn set_auto_move(&mut self, enabled: bool) {
        self.auto_move = enabled;
        self.pending_move = false;
    }

    /// Flips auto-move and returns the new value.
    pub fn toggle_auto_move(&mut self) -> bool {
        self.set_auto_move(!self.auto_move);
        self.auto_move
    }

    /// Called once per rendered frame with the current focus position.
    ///
    /// Returns the transition to start, if any. The trigger is consumed, so a
    /// repeated call with the same focus yields `None`.
    pub fn on_frame_ready(&mut self, focus: Option<LatLng>) -> Option<CameraTransition> {
        if !self.auto_move || !self.pending_move {
            return None;
        }
        let target = focus?;
        self.pending_move = false;
        let transition = CameraTransition::follow(target);
        debug!(lat = target.lat, lng = target.lng, zoom = transition.zoom, "camera follow");
        Some(transition)
    }
}
