use foundation::text::{format_area, title_case};
use layers::symbology::Theme;
use parcels::{FocusRecord, SelectionSummary, UNKNOWN_ZONING, ZoningType};

use crate::session::Session;

/// Details of the focused parcel, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusPanel {
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub usedesc: Option<String>,
    pub zoning: String,
    /// Formatted area with unit, e.g. `"1,234.5 m²"`.
    pub area: String,
}

impl FocusPanel {
    pub fn from_focus(focus: &FocusRecord) -> Self {
        Self {
            latitude: focus.latitude(),
            longitude: focus.longitude(),
            address: focus.address.as_deref().map(title_case),
            usedesc: focus.usedesc.as_deref().map(title_case),
            zoning: focus
                .zoning_type
                .as_ref()
                .map(|z| z.as_str().to_string())
                .unwrap_or_else(|| UNKNOWN_ZONING.to_string()),
            area: format!("{} m²", format_area(focus.area)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryPanel {
    pub count: usize,
    pub total_area: String,
    /// `(label, count)` in label order.
    pub zoning_counts: Vec<(String, usize)>,
}

impl SummaryPanel {
    pub fn from_summary(summary: &SelectionSummary) -> Self {
        Self {
            count: summary.count,
            total_area: format!("{} m²", format_area(summary.total_area)),
            zoning_counts: summary
                .zoning_counts
                .iter()
                .map(|(label, n)| (label.clone(), *n))
                .collect(),
        }
    }
}

/// Read-only view model of the information panel and its controls.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanel {
    pub focus: Option<FocusPanel>,
    pub pending_zoning: Option<ZoningType>,
    pub selected_count: usize,
    /// Present only when more than one parcel is selected.
    pub summary: Option<SummaryPanel>,
    pub loading: bool,
    pub submitting: bool,
    pub auto_move: bool,
    pub theme: Theme,
}

impl InfoPanel {
    pub fn build(session: &Session) -> Self {
        let selection = session.selection();
        let summary = session.summary();
        Self {
            focus: selection.focus().map(FocusPanel::from_focus),
            pending_zoning: selection.pending_zoning().cloned(),
            selected_count: selection.len(),
            summary: summary.is_multi().then(|| SummaryPanel::from_summary(&summary)),
            loading: session.is_loading(),
            submitting: session.is_submitting(),
            auto_move: session.viewport().auto_move(),
            theme: session.theme(),
        }
    }

    /// Submit is only offered when it would pass validation and nothing is
    /// outstanding.
    pub fn can_submit(&self) -> bool {
        self.selected_count > 0 && self.pending_zoning.is_some() && !self.submitting
    }
}
