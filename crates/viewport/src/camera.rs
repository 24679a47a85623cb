//! Map camera with animated fly-to.

use foundation::LatLng;

use crate::controller::{CameraTransition, DEFAULT_CENTER, DEFAULT_ZOOM};

/// Closest zoom level the tile providers serve.
pub const MAX_ZOOM: f64 = 19.0;

/// Widest zoom level (whole world).
pub const MIN_ZOOM: f64 = 0.0;

/// Cap on a single animation step to avoid jumps after a stall (seconds).
const MAX_STEP_S: f64 = 0.25;

#[derive(Debug, Copy, Clone, PartialEq)]
struct Flight {
    from: LatLng,
    from_zoom: f64,
    to: LatLng,
    to_zoom: f64,
    duration_s: f64,
    elapsed_s: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub center: LatLng,
    pub zoom: f64,
    flight: Option<Flight>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            flight: None,
        }
    }
}

impl Camera {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            flight: None,
        }
    }

    /// Starts animating toward `transition`, replacing any active flight.
    pub fn fly_to(&mut self, transition: CameraTransition) {
        let to_zoom = transition.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if transition.duration_s <= 0.0 {
            self.center = transition.target;
            self.zoom = to_zoom;
            self.flight = None;
            return;
        }
        self.flight = Some(Flight {
            from: self.center,
            from_zoom: self.zoom,
            to: transition.target,
            to_zoom,
            duration_s: transition.duration_s,
            elapsed_s: 0.0,
        });
    }

    /// Jumps to a view, cancelling any animation (user pan/zoom).
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.flight = None;
    }

    /// Zooms by `delta` levels around the current center.
    pub fn zoom_by(&mut self, delta: f64) {
        self.set_view(self.center, self.zoom + delta);
    }

    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    /// Where the active flight ends, if any.
    pub fn destination(&self) -> Option<(LatLng, f64)> {
        self.flight.map(|f| (f.to, f.to_zoom))
    }

    /// Advances the active flight by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        let Some(mut flight) = self.flight else {
            return;
        };
        flight.elapsed_s += dt.clamp(0.0, MAX_STEP_S);
        let t = (flight.elapsed_s / flight.duration_s).min(1.0);
        let k = ease_in_out(t);
        self.center = flight.from.lerp(flight.to, k);
        self.zoom = flight.from_zoom + (flight.to_zoom - flight.from_zoom) * k;

        if t >= 1.0 {
            self.center = flight.to;
            self.zoom = flight.to_zoom;
            self.flight = None;
        } else {
            self.flight = Some(flight);
        }
    }
}

fn ease_in_out(t: f64) -> f64 {
    // Cubic smoothstep.
    t * t * (3.0 - 2.0 * t)
}
