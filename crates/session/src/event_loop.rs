//! Drives a [`Session`] from a channel of events.
//!
//! User input arrives through [`EventSender`]s. Effects returned by the
//! session are spawned as tasks against the backend; every task sends exactly
//! one completion event back into the same channel. The loop itself never
//! awaits the network, so the map stays interactive while requests are
//! pending.

use std::sync::Arc;
use std::time::{Duration, Instant};

use client::Backend;
use foundation::LatLng;
use runtime::Notification;
use tokio::sync::mpsc;
use tracing::{debug, info};
use viewport::CameraTransition;

use crate::event::{Effect, Event};
use crate::session::Session;

/// Interval between animation frames while the camera is flying (~30 fps).
pub const ANIMATION_FRAME: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum LoopMessage {
    Event(Event),
    Quit,
}

/// Cloneable handle for feeding events into an [`EventLoop`].
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<LoopMessage>,
}

impl EventSender {
    /// Queues `event`. Returns `false` once the loop is gone.
    pub fn send(&self, event: Event) -> bool {
        self.tx.send(LoopMessage::Event(event)).is_ok()
    }

    /// Asks the loop to stop after the events already queued.
    pub fn quit(&self) {
        let _ = self.tx.send(LoopMessage::Quit);
    }
}

/// What changed during one processed event or animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub transition: Option<CameraTransition>,
    pub notifications: Vec<Notification>,
    pub center: LatLng,
    pub zoom: f64,
    pub animating: bool,
}

pub struct EventLoop {
    session: Session,
    backend: Arc<dyn Backend>,
    tx: mpsc::UnboundedSender<LoopMessage>,
    rx: mpsc::UnboundedReceiver<LoopMessage>,
    last_frame_at: Instant,
}

impl EventLoop {
    pub fn new(session: Session, backend: Arc<dyn Backend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session,
            backend,
            tx,
            rx,
            last_frame_at: Instant::now(),
        }
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Kicks off the initial parcel load. Must be called inside a tokio
    /// runtime.
    pub fn start(&mut self) -> Tick {
        info!("session starting");
        let effects = self.session.start();
        self.run_effects(effects);
        self.tick()
    }

    /// Handles one event to completion and renders a frame.
    pub fn dispatch(&mut self, event: Event) -> Tick {
        let effects = self.session.dispatch(event);
        self.run_effects(effects);
        self.tick()
    }

    /// Waits for the next queued event. `None` after [`EventSender::quit`].
    pub async fn next_event(&mut self) -> Option<Event> {
        match self.rx.recv().await? {
            LoopMessage::Event(event) => Some(event),
            LoopMessage::Quit => None,
        }
    }

    /// Processes the next event, or advances the camera animation when no
    /// event arrives within one frame. `None` after [`EventSender::quit`].
    pub async fn next(&mut self) -> Option<Tick> {
        if !self.session.camera().is_animating() {
            let event = self.next_event().await?;
            return Some(self.dispatch(event));
        }
        tokio::select! {
            event = self.next_event() => Some(self.dispatch(event?)),
            _ = tokio::time::sleep(ANIMATION_FRAME) => Some(self.tick()),
        }
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.spawn_effect(effect);
        }
    }

    fn spawn_effect(&self, effect: Effect) {
        debug!(?effect, "spawning effect");
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = match effect {
                Effect::FetchParcels => Event::ParcelsLoaded(backend.fetch_parcels().await),
                Effect::SubmitZoning(request) => {
                    Event::SubmitFinished(backend.update_zoning(request).await)
                }
            };
            if tx.send(LoopMessage::Event(event)).is_err() {
                debug!("event loop closed before effect completed");
            }
        });
    }

    fn tick(&mut self) -> Tick {
        let now = Instant::now();
        let dt_s = now.duration_since(self.last_frame_at).as_secs_f64();
        self.last_frame_at = now;

        let transition = self.session.frame(dt_s);
        let camera = self.session.camera();
        Tick {
            transition,
            center: camera.center,
            zoom: camera.zoom,
            animating: camera.is_animating(),
            notifications: self.session.drain_notifications(),
        }
    }
}
