use std::fmt::Write;

use foundation::text::format_area;
use parcels::UNKNOWN_ZONING;
use runtime::Notification;
use session::{InfoPanel, Session, Tick};

pub fn notification(n: &Notification) -> String {
    format!("[{}] {}", n.severity.label(), n.message)
}

/// Lines worth printing for one tick; animation frames without news print
/// nothing.
pub fn tick(tick: &Tick) -> Vec<String> {
    let mut lines: Vec<String> = tick.notifications.iter().map(notification).collect();
    if let Some(t) = tick.transition {
        lines.push(format!(
            "camera -> {} at zoom {} over {}s",
            t.target, t.zoom, t.duration_s
        ));
    }
    lines
}

pub fn camera(tick: &Tick) -> String {
    format!("camera at {} zoom {:.2}", tick.center, tick.zoom)
}

pub fn panel(panel: &InfoPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "theme: {:?}  auto-move: {}  loading: {}  submitting: {}",
        panel.theme,
        on_off(panel.auto_move),
        yes_no(panel.loading),
        yes_no(panel.submitting)
    );
    match &panel.focus {
        None => {
            let _ = writeln!(out, "no parcel selected");
        }
        Some(focus) => {
            let _ = writeln!(out, "latitude:  {}", focus.latitude);
            let _ = writeln!(out, "longitude: {}", focus.longitude);
            if let Some(address) = &focus.address {
                let _ = writeln!(out, "address:   {address}");
            }
            if let Some(usedesc) = &focus.usedesc {
                let _ = writeln!(out, "use:       {usedesc}");
            }
            let _ = writeln!(out, "zoning:    {}", focus.zoning);
            let _ = writeln!(out, "area:      {}", focus.area);
        }
    }
    let pending = panel
        .pending_zoning
        .as_ref()
        .map(|z| z.as_str())
        .unwrap_or("-");
    let _ = writeln!(out, "new zoning: {pending}");
    if let Some(summary) = &panel.summary {
        let _ = writeln!(out, "selected:   {} parcels", summary.count);
        let _ = writeln!(out, "total area: {}", summary.total_area);
        for (label, n) in &summary.zoning_counts {
            let _ = writeln!(out, "  {label}: {n}");
        }
    }
    out
}

pub fn parcels(session: &Session) -> String {
    if session.is_loading() {
        return "loading parcels...\n".to_string();
    }
    let snapshot = session.parcel_layer();
    let mut out = String::new();
    for shape in &snapshot.shapes {
        let Some(parcel) = session.store().get(shape.id) else {
            continue;
        };
        let zoning = parcel
            .zoning_type
            .as_ref()
            .map(|z| z.as_str())
            .unwrap_or(UNKNOWN_ZONING);
        let _ = writeln!(
            out,
            "{} {:>8}  {:<12} {:>12} m²  {}",
            if shape.selected { "*" } else { " " },
            shape.id.get(),
            zoning,
            format_area(parcel.area_or_zero()),
            shape.style.color.hex()
        );
    }
    let _ = writeln!(out, "{} parcels", snapshot.shapes.len());
    out
}

pub fn basemap(session: &Session) -> String {
    format!(
        "basemap: {} ({})",
        redact_key(&session.basemap_template()),
        session.basemap_attribution()
    )
}

/// Hides the API key when echoing tile URLs to the terminal.
fn redact_key(template: &str) -> String {
    match template.split_once("key=") {
        Some((head, _)) => format!("{head}key=***"),
        None => template.to_string(),
    }
}

fn on_off(v: bool) -> &'static str {
    if v { "on" } else { "off" }
}

fn yes_no(v: bool) -> &'static str {
    if v { "yes" } else { "no" }
}
