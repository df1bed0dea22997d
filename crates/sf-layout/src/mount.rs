//! Mounting views: where on the tank the heads go.

use crate::heads::split_for_side_walls;
use crate::placement::{PlacedHead, PlacementOptions, place_heads};
use serde::{Deserialize, Serialize};
use sf_sizing::{FrequencyClass, TankGeometry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountView {
    /// All heads on the tank floor.
    #[default]
    Bottom,
    /// Heads split across two opposite side walls, below the water line.
    Side,
}

/// Usable rectangle on a tank face (cm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width_cm: f64,
    pub height_cm: f64,
}

/// One drawable face of the tank with its placed heads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub title: String,
    /// Area heads are placed on.
    pub surface: Surface,
    /// Full height of the drawn face; on side walls this is the tank height,
    /// above the usable surface.
    pub canvas_height_cm: f64,
    pub water_line_cm: Option<f64>,
    pub heads: Vec<PlacedHead>,
}

impl PanelLayout {
    pub fn count(&self, class: FrequencyClass) -> usize {
        self.heads.iter().filter(|h| h.frequency == class).count()
    }
}

/// Lay out a head sequence for the chosen view.
///
/// `Side` gives two panels: "Side A" takes the first half of the sequence
/// and "Side B" the rest, shifted by a half column so the two grids
/// interleave instead of mirroring.
pub fn plan_mounting(
    tank: &TankGeometry,
    heads: &[FrequencyClass],
    view: MountView,
) -> Vec<PanelLayout> {
    let length = tank.length_cm();
    match view {
        MountView::Bottom => {
            let width = tank.width_cm();
            vec![PanelLayout {
                title: format!("Bottom View ({} Heads)", heads.len()),
                surface: Surface {
                    width_cm: length,
                    height_cm: width,
                },
                canvas_height_cm: width,
                water_line_cm: None,
                heads: place_heads(length, width, heads, PlacementOptions::default()),
            }]
        }
        MountView::Side => {
            let water = tank.water_level_cm();
            let (side_a, side_b) = split_for_side_walls(heads);
            [("Side A", side_a, false), ("Side B", side_b, true)]
                .into_iter()
                .map(|(title, half, half_offset)| PanelLayout {
                    title: title.to_string(),
                    surface: Surface {
                        width_cm: length,
                        height_cm: water,
                    },
                    canvas_height_cm: tank.height_cm(),
                    water_line_cm: Some(water),
                    heads: place_heads(length, water, half, PlacementOptions { half_offset }),
                })
                .collect()
        }
    }
}
