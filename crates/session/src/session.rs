use foundation::ParcelId;
use layers::basemap::BasemapLayer;
use layers::parcel_layer::{ParcelLayer, ParcelLayerSnapshot};
use layers::picking::pick_parcel;
use layers::symbology::Theme;
use layers::{Layer, LayerId};
use parcels::{ParcelStore, SelectionModel, SelectionSummary, Toggled};
use runtime::{Frame, Notification, NotificationBus};
use tracing::{debug, info, warn};
use viewport::{Camera, CameraTransition, ViewportController};

use crate::error::SessionError;
use crate::event::{Effect, Event};
use crate::submit::ZoningSubmitter;

pub const BASEMAP_LAYER_ID: u64 = 0;
pub const PARCEL_LAYER_ID: u64 = 1;

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub theme: Theme,
    pub auto_move: bool,
    pub maptiler_key: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            auto_move: true,
            maptiler_key: String::new(),
        }
    }
}

/// Single owner of all application state.
///
/// Events are handled to completion one at a time; there is no interior
/// mutability and no locking.
#[derive(Debug)]
pub struct Session {
    store: ParcelStore,
    selection: SelectionModel,
    viewport: ViewportController,
    camera: Camera,
    submitter: ZoningSubmitter,
    hovered: Option<ParcelId>,
    theme: Theme,
    parcel_layer: ParcelLayer,
    basemap: BasemapLayer,
    notifications: NotificationBus,
    frame: Frame,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            store: ParcelStore::new(),
            selection: SelectionModel::new(),
            viewport: ViewportController::new(options.auto_move),
            camera: Camera::default(),
            submitter: ZoningSubmitter::new(),
            hovered: None,
            theme: options.theme,
            parcel_layer: ParcelLayer::new(PARCEL_LAYER_ID),
            basemap: BasemapLayer::new(BASEMAP_LAYER_ID, options.maptiler_key),
            notifications: NotificationBus::new(),
            frame: Frame::first(),
        }
    }

    /// Initial load.
    pub fn start(&mut self) -> Vec<Effect> {
        self.dispatch(Event::ReloadRequested)
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::ParcelClicked(id) => {
                self.toggle_parcel(id);
                Vec::new()
            }
            Event::MapClicked(point) => {
                match pick_parcel(&self.store, point) {
                    Some(id) => self.toggle_parcel(id),
                    None => debug!(lat = point.lat, lng = point.lng, "click hit no parcel"),
                }
                Vec::new()
            }
            Event::PointerMoved(point) => {
                self.hovered = pick_parcel(&self.store, point);
                Vec::new()
            }
            Event::PointerLeft => {
                self.hovered = None;
                Vec::new()
            }
            Event::ZoningChosen(zoning) => {
                debug!(zoning = %zoning, "zoning chosen");
                self.selection.choose_zoning(zoning);
                Vec::new()
            }
            Event::ClearRequested => {
                self.selection.clear();
                self.viewport.on_selection_removed();
                self.notifications.info(self.frame, "Cleared all selections");
                Vec::new()
            }
            Event::SubmitRequested => match self.submitter.begin(&self.selection) {
                Ok(request) => vec![Effect::SubmitZoning(request)],
                Err(err) => {
                    self.report(err);
                    Vec::new()
                }
            },
            Event::SubmitFinished(result) => self.finish_submit(result),
            Event::ReloadRequested => {
                self.store.begin_reload();
                self.reconcile_selection();
                vec![Effect::FetchParcels]
            }
            Event::ParcelsLoaded(result) => {
                match result {
                    Ok(parcels) => {
                        self.store.complete_reload(parcels);
                        info!(count = self.store.len(), "parcel store replaced");
                    }
                    Err(err) => {
                        self.store.fail_reload();
                        self.report(SessionError::Fetch(err));
                    }
                }
                self.reconcile_selection();
                Vec::new()
            }
            Event::AutoMoveToggled => {
                let enabled = self.viewport.toggle_auto_move();
                info!(enabled, "auto-move toggled");
                Vec::new()
            }
            Event::DarkModeToggled => {
                self.theme = self.theme.toggled();
                Vec::new()
            }
            Event::Zoomed(delta) => {
                self.camera.zoom_by(delta);
                Vec::new()
            }
        }
    }

    /// Runs one frame: consumes a pending camera follow, or advances the
    /// active camera flight by `dt_s`.
    ///
    /// A flight starting on this frame begins from its origin; time spent
    /// idle before it is not counted.
    pub fn frame(&mut self, dt_s: f64) -> Option<CameraTransition> {
        self.frame = self.frame.next(dt_s);
        let focus = self.selection.focus().map(|f| f.position);
        let transition = self.viewport.on_frame_ready(focus);
        match transition {
            Some(t) => self.camera.fly_to(t),
            None => self.camera.update(self.frame.dt_s),
        }
        transition
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    pub fn store(&self) -> &ParcelStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn summary(&self) -> SelectionSummary {
        self.selection.summary(&self.store)
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn hovered(&self) -> Option<ParcelId> {
        self.hovered
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitter.in_flight()
    }

    pub fn parcel_layer(&self) -> ParcelLayerSnapshot {
        self.parcel_layer
            .extract(&self.store, &self.selection, self.hovered, self.theme)
    }

    pub fn basemap_template(&self) -> String {
        self.basemap.tile_template(self.theme)
    }

    pub fn basemap_attribution(&self) -> &'static str {
        self.basemap.attribution(self.theme)
    }

    /// Layer ids bottom to top.
    pub fn layer_stack(&self) -> [LayerId; 2] {
        let mut stack = [self.parcel_layer.id(), self.basemap.id()];
        stack.sort();
        stack
    }

    fn toggle_parcel(&mut self, id: ParcelId) {
        if self.store.is_loading() {
            debug!(parcel = %id, "selection disabled while loading");
            return;
        }
        match self.selection.toggle(id, &self.store) {
            Ok(Toggled::Added { first }) => {
                debug!(parcel = %id, first, "parcel selected");
                self.viewport.on_selection_added();
            }
            Ok(Toggled::Removed { now_empty }) => {
                debug!(parcel = %id, now_empty, "parcel deselected");
                self.viewport.on_selection_removed();
            }
            Err(err) => debug!("ignoring toggle: {err}"),
        }
    }

    fn finish_submit(&mut self, result: Result<(), client::BackendError>) -> Vec<Effect> {
        self.submitter.finish();
        match result {
            Ok(()) => {
                self.selection.clear();
                self.viewport.on_selection_removed();
                self.notifications
                    .success(self.frame, "Zoning updated successfully!");
                self.dispatch(Event::ReloadRequested)
            }
            Err(err) => {
                self.report(SessionError::Submit(err));
                Vec::new()
            }
        }
    }

    /// Keeps the selection a subset of the current snapshot.
    fn reconcile_selection(&mut self) {
        let dropped = self.selection.retain_known(&self.store);
        if dropped > 0 {
            warn!(dropped, "pruned selection after store change");
            self.viewport.on_selection_removed();
        }
        if self.hovered.is_some_and(|id| !self.store.contains(id)) {
            self.hovered = None;
        }
    }

    fn report(&mut self, err: SessionError) {
        warn!("{err}");
        let message = err.user_message();
        match err {
            SessionError::Fetch(_) | SessionError::Submit(_) => {
                self.notifications.error(self.frame, message)
            }
            SessionError::Validation(_) | SessionError::Busy(_) => {
                self.notifications.warning(self.frame, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BASEMAP_LAYER_ID, PARCEL_LAYER_ID, Session, SessionOptions};
    use crate::event::{Effect, Event};
    use client::{BackendError, ZoningUpdateRequest};
    use foundation::{LatLng, ParcelId};
    use layers::LayerId;
    use layers::symbology::{Rgb, Theme};
    use parcels::{Parcel, ZoningType};
    use pretty_assertions::assert_eq;
    use runtime::Severity;

    fn ring(points: &[[f64; 2]]) -> Vec<LatLng> {
        points.iter().copied().map(LatLng::from).collect()
    }

    fn scenario_parcels() -> Vec<Parcel> {
        vec![
            Parcel::new(ParcelId(1), ring(&[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]))
                .with_zoning(ZoningType::Residential)
                .with_area(100.0),
            Parcel::new(ParcelId(2), ring(&[[5.0, 5.0], [5.0, 6.0], [6.0, 6.0]]))
                .with_zoning(ZoningType::Commercial)
                .with_area(200.0),
        ]
    }

    fn loaded_session() -> Session {
        let mut s = Session::new(SessionOptions::default());
        assert_eq!(s.start(), vec![Effect::FetchParcels]);
        assert!(s.is_loading());
        s.dispatch(Event::ParcelsLoaded(Ok(scenario_parcels())));
        assert!(!s.is_loading());
        s
    }

    fn severities(s: &mut Session) -> Vec<Severity> {
        s.drain_notifications().into_iter().map(|n| n.severity).collect()
    }

    #[test]
    fn selection_scenario_tracks_focus_and_pending_choice() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        assert_eq!(
            s.selection().focus().unwrap().zoning_type,
            Some(ZoningType::Residential)
        );
        assert_eq!(s.selection().pending_zoning(), Some(&ZoningType::Residential));

        s.dispatch(Event::ParcelClicked(ParcelId(2)));
        assert_eq!(
            s.selection().focus().unwrap().zoning_type,
            Some(ZoningType::Commercial)
        );
        assert_eq!(s.selection().pending_zoning(), Some(&ZoningType::Residential));

        let summary = s.summary();
        assert_eq!(summary.total_area, 300.0);
        assert_eq!(summary.count_for("Residential"), 1);
        assert_eq!(summary.count_for("Commercial"), 1);

        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        assert_eq!(s.selection().selected_ids(), &[ParcelId(2)]);
        assert_eq!(s.selection().focus().unwrap().parcel_id, ParcelId(2));
    }

    #[test]
    fn new_selection_moves_camera_once_and_deselection_never() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        let t = s.frame(0.0).expect("camera follows new selection");
        assert_eq!(t.target, LatLng::new(0.0, 1.0));
        assert!(s.frame(0.0).is_none());

        s.dispatch(Event::ParcelClicked(ParcelId(2)));
        s.dispatch(Event::ParcelClicked(ParcelId(2)));
        assert!(s.frame(0.0).is_none());
    }

    #[test]
    fn auto_move_off_suppresses_follow() {
        let mut s = loaded_session();
        s.dispatch(Event::AutoMoveToggled);
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        assert!(s.frame(0.0).is_none());
        s.dispatch(Event::AutoMoveToggled);
        assert!(s.frame(0.0).is_none());
    }

    #[test]
    fn empty_submit_is_rejected_locally() {
        let mut s = loaded_session();
        s.dispatch(Event::ZoningChosen(ZoningType::Residential));
        assert!(s.dispatch(Event::SubmitRequested).is_empty());
        assert!(!s.is_submitting());
        assert_eq!(severities(&mut s), vec![Severity::Warning]);
    }

    #[test]
    fn successful_submit_resets_selection_and_reloads() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        s.dispatch(Event::ParcelClicked(ParcelId(2)));
        s.dispatch(Event::ZoningChosen(ZoningType::Planned));

        let effects = s.dispatch(Event::SubmitRequested);
        assert_eq!(
            effects,
            vec![Effect::SubmitZoning(ZoningUpdateRequest::new(
                vec![ParcelId(1), ParcelId(2)],
                ZoningType::Planned
            ))]
        );
        assert!(s.is_submitting());

        let effects = s.dispatch(Event::SubmitFinished(Ok(())));
        assert_eq!(effects, vec![Effect::FetchParcels]);
        assert!(!s.is_submitting());
        assert!(s.selection().is_empty());
        assert!(s.selection().focus().is_none());
        assert!(s.selection().pending_zoning().is_none());
        assert_eq!(severities(&mut s), vec![Severity::Success]);

        let updated: Vec<Parcel> = scenario_parcels()
            .into_iter()
            .map(|p| p.with_zoning(ZoningType::Planned))
            .collect();
        s.dispatch(Event::ParcelsLoaded(Ok(updated)));
        assert_eq!(s.store().len(), 2);
        assert!(
            s.store()
                .iter()
                .all(|p| p.zoning_type == Some(ZoningType::Planned))
        );
    }

    #[test]
    fn failed_submit_keeps_selection() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(2)));
        s.dispatch(Event::ZoningChosen(ZoningType::Industrial));
        s.dispatch(Event::SubmitRequested);

        let effects = s.dispatch(Event::SubmitFinished(Err(BackendError::status(500, "boom"))));
        assert!(effects.is_empty());
        assert_eq!(s.selection().selected_ids(), &[ParcelId(2)]);
        assert_eq!(s.selection().pending_zoning(), Some(&ZoningType::Industrial));
        assert_eq!(s.store().len(), 2);
        assert_eq!(severities(&mut s), vec![Severity::Error]);
    }

    #[test]
    fn repeated_submit_while_in_flight_is_disabled() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        assert_eq!(s.dispatch(Event::SubmitRequested).len(), 1);
        assert!(s.dispatch(Event::SubmitRequested).is_empty());
        assert_eq!(severities(&mut s), vec![Severity::Warning]);
    }

    #[test]
    fn failed_load_leaves_store_empty() {
        let mut s = Session::new(SessionOptions::default());
        s.start();
        s.dispatch(Event::ParcelsLoaded(Err(BackendError::status(503, "down"))));
        assert!(s.store().is_empty());
        assert!(!s.is_loading());
        assert_eq!(severities(&mut s), vec![Severity::Error]);
    }

    #[test]
    fn clicks_during_loading_and_unknown_ids_are_ignored() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(99)));
        assert!(s.selection().is_empty());

        s.dispatch(Event::ReloadRequested);
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        assert!(s.selection().is_empty());
        assert!(s.drain_notifications().is_empty());
    }

    #[test]
    fn reload_prunes_selection_to_new_snapshot() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        s.dispatch(Event::ReloadRequested);
        assert!(s.selection().is_empty());
        assert!(s.selection().focus().is_none());
    }

    #[test]
    fn map_clicks_and_hover_resolve_through_picking() {
        let mut s = loaded_session();
        s.dispatch(Event::PointerMoved(LatLng::new(5.2, 5.9)));
        assert_eq!(s.hovered(), Some(ParcelId(2)));
        assert_eq!(
            s.parcel_layer().shape(ParcelId(2)).unwrap().style.color,
            Rgb::ORANGE
        );

        s.dispatch(Event::MapClicked(LatLng::new(5.2, 5.9)));
        assert_eq!(s.selection().selected_ids(), &[ParcelId(2)]);

        s.dispatch(Event::PointerLeft);
        assert_eq!(
            s.parcel_layer().shape(ParcelId(2)).unwrap().style.color,
            Rgb::BLUE
        );
    }

    #[test]
    fn dark_mode_switches_basemap() {
        let mut s = Session::new(SessionOptions {
            maptiler_key: "k".to_string(),
            ..SessionOptions::default()
        });
        assert!(s.basemap_template().contains("openstreetmap"));
        s.dispatch(Event::DarkModeToggled);
        assert_eq!(s.theme(), Theme::Dark);
        assert!(s.basemap_template().ends_with("key=k"));
    }

    #[test]
    fn follow_flight_ignores_idle_time_before_it() {
        let mut s = loaded_session();
        let start = s.camera().center;
        s.dispatch(Event::ParcelClicked(ParcelId(1)));

        // A long idle gap before the click must not eat into the flight.
        assert!(s.frame(10.0).is_some());
        assert_eq!(s.camera().center, start);
        assert!(s.camera().is_animating());

        s.frame(0.25);
        assert_ne!(s.camera().center, start);
        assert!(s.camera().is_animating());
    }

    #[test]
    fn blank_zoning_choice_blocks_submit() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        for blank in ["", "  "] {
            s.dispatch(Event::ZoningChosen(ZoningType::from(blank.to_string())));
            assert!(s.dispatch(Event::SubmitRequested).is_empty());
            assert!(!s.is_submitting());
            assert_eq!(severities(&mut s), vec![Severity::Warning]);
        }
    }

    #[test]
    fn parcels_draw_above_the_basemap() {
        let s = Session::new(SessionOptions::default());
        assert_eq!(
            s.layer_stack(),
            [LayerId(BASEMAP_LAYER_ID), LayerId(PARCEL_LAYER_ID)]
        );
    }

    #[test]
    fn clear_notifies_and_resets() {
        let mut s = loaded_session();
        s.dispatch(Event::ParcelClicked(ParcelId(1)));
        s.dispatch(Event::ClearRequested);
        assert!(s.selection().is_empty());
        assert!(s.frame(0.0).is_none());
        assert_eq!(severities(&mut s), vec![Severity::Info]);
    }
}
