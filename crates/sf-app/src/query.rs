//! Query helpers for turning reports into rows for display and export.

use serde::Serialize;
use sf_layout::{draw_panel, MarkerList};
use sf_sizing::DENSITY_BRACKETS;

use crate::design_service::DesignReport;

/// One placed marker, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerRow {
    pub panel: String,
    pub index: usize,
    pub frequency_khz: String,
    pub x_cm: f64,
    pub y_cm: f64,
    pub color: String,
}

/// One row of the W/L reference table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BracketRow {
    pub volume: String,
    pub base_density: f64,
    pub advisory_range: String,
    pub approx_total_power: String,
}

/// Markers for every panel in the report, drawn through a [`MarkerList`].
pub fn marker_rows(report: &DesignReport) -> Vec<MarkerRow> {
    let mut rows = Vec::new();
    for panel in &report.panels {
        let mut sink = MarkerList::default();
        draw_panel(panel, &mut sink);
        rows.extend(
            sink.markers
                .into_iter()
                .enumerate()
                .map(|(index, marker)| MarkerRow {
                    panel: panel.title.clone(),
                    index,
                    frequency_khz: marker.style.label,
                    x_cm: marker.x,
                    y_cm: marker.y,
                    color: marker.style.fill.to_string(),
                }),
        );
    }
    rows
}

/// CSV with a header row.
pub fn markers_to_csv(rows: &[MarkerRow]) -> String {
    let mut csv = String::from("panel,index,frequency_khz,x_cm,y_cm,color\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{:.3},{:.3},{}\n",
            row.panel, row.index, row.frequency_khz, row.x_cm, row.y_cm, row.color
        ));
    }
    csv
}

/// Reference table of volume brackets.
pub fn bracket_rows() -> Vec<BracketRow> {
    let mut lower = 0.0;
    DENSITY_BRACKETS
        .iter()
        .map(|b| {
            let volume = if b.max_volume_l.is_finite() {
                format!("{lower} - {} L", b.max_volume_l)
            } else {
                format!("> {lower} L")
            };
            lower = b.max_volume_l;
            BracketRow {
                volume,
                base_density: b.base_density,
                advisory_range: b.advisory_range.unwrap_or("-").to_string(),
                approx_total_power: b.approx_total_power.unwrap_or("-").to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_service::evaluate;
    use sf_project::DesignFile;

    #[test]
    fn marker_rows_cover_every_head() {
        let report = evaluate(&DesignFile::default()).unwrap();
        let rows = marker_rows(&report);
        assert_eq!(rows.len(), report.heads.len());
        assert!(rows.iter().all(|r| r.panel == "Bottom View (23 Heads)"));
        assert_eq!(
            rows.iter().filter(|r| r.frequency_khz == "28").count(),
            14
        );
        assert!(
            rows.iter()
                .all(|r| (r.frequency_khz == "28") == (r.color == "#d32f2f"))
        );
    }

    #[test]
    fn csv_has_header_and_one_line_per_marker() {
        let report = evaluate(&DesignFile::default()).unwrap();
        let rows = marker_rows(&report);
        let csv = markers_to_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "panel,index,frequency_khz,x_cm,y_cm,color");
        assert_eq!(lines.len(), rows.len() + 1);
    }

    #[test]
    fn bracket_rows_span_all_volumes() {
        let rows = bracket_rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].volume, "0 - 10 L");
        assert_eq!(rows[4].advisory_range, "-");
        assert_eq!(rows[5].volume, "> 190 L");
        assert_eq!(rows[5].base_density, 5.3);
    }
}
