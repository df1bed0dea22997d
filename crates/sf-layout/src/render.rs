//! Drawing seam.
//!
//! Layout does not draw anything itself. A renderer implements
//! [`MarkerSink`] and receives one styled marker per placed head.

use crate::mount::PanelLayout;
use serde::Serialize;
use sf_sizing::FrequencyClass;

pub const COLOR_28_KHZ: &str = "#d32f2f";
pub const COLOR_40_KHZ: &str = "#1976d2";
pub const LABEL_COLOR: &str = "white";
pub const MARKER_RADIUS_CM: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub fill: &'static str,
    pub label: String,
    pub label_color: &'static str,
    pub radius_cm: f64,
}

impl MarkerStyle {
    /// Red for 28 kHz, blue for 40 kHz, labeled with the frequency.
    pub fn for_frequency(frequency: FrequencyClass) -> Self {
        let fill = match frequency {
            FrequencyClass::K28 => COLOR_28_KHZ,
            FrequencyClass::K40 => COLOR_40_KHZ,
        };
        Self {
            fill,
            label: frequency.khz().to_string(),
            label_color: LABEL_COLOR,
            radius_cm: MARKER_RADIUS_CM,
        }
    }
}

/// Anything that can put a labeled marker at a point.
pub trait MarkerSink {
    fn place_marker(&mut self, x: f64, y: f64, style: &MarkerStyle);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub style: MarkerStyle,
}

/// Sink that just keeps the markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkerList {
    pub markers: Vec<Marker>,
}

impl MarkerSink for MarkerList {
    fn place_marker(&mut self, x: f64, y: f64, style: &MarkerStyle) {
        self.markers.push(Marker {
            x,
            y,
            style: style.clone(),
        });
    }
}

/// Feed every head of `panel` to `sink`, in placement order.
pub fn draw_panel<S: MarkerSink + ?Sized>(panel: &PanelLayout, sink: &mut S) {
    for head in &panel.heads {
        let style = MarkerStyle::for_frequency(head.frequency);
        sink.place_marker(head.x, head.y, &style);
    }
}
