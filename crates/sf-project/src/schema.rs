//! Design file schema definitions.

use serde::{Deserialize, Serialize};
use sf_layout::{DEFAULT_SHUFFLE_SEED, MountView};
use sf_sizing::{
    BoardPair, BoardSpec, CheckRequest, DesignRequest, SizingMode, TankGeometry, UsageConditions,
};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignFile {
    pub version: u32,
    pub name: String,
    pub tank: TankDef,
    #[serde(default)]
    pub conditions: ConditionsDef,
    pub boards: BoardsDef,
    pub mode: ModeDef,
    #[serde(default)]
    pub layout: LayoutDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TankDef {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub water_level_cm: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ConditionsDef {
    #[serde(default)]
    pub chemistry: bool,
    #[serde(default)]
    pub heavy_load: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoardsDef {
    pub k28: BoardDef,
    pub k40: BoardDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoardDef {
    pub watts: f64,
    pub heads: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ModeDef {
    /// Size new hardware for a target density.
    New {
        /// Falls back to the recommendation when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_density_w_per_l: Option<f64>,
        #[serde(default = "default_ratio_28_percent")]
        ratio_28_percent: f64,
    },
    /// Check boards already on hand against the recommendation.
    Existing { boards_28: u32, boards_40: u32 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutDef {
    #[serde(default)]
    pub mount: MountView,
    #[serde(default = "default_shuffle_seed")]
    pub shuffle_seed: u64,
}

fn default_ratio_28_percent() -> f64 {
    70.0
}

fn default_shuffle_seed() -> u64 {
    DEFAULT_SHUFFLE_SEED
}

impl Default for LayoutDef {
    fn default() -> Self {
        Self {
            mount: MountView::default(),
            shuffle_seed: DEFAULT_SHUFFLE_SEED,
        }
    }
}

impl Default for DesignFile {
    /// Starter design: a 170 x 80 x 50 cm tank filled to 10 cm, flux removal
    /// with chemistry and dense parts, 120 W boards at both frequencies.
    fn default() -> Self {
        Self {
            version: LATEST_VERSION,
            name: "Ultrasonic tank".to_string(),
            tank: TankDef {
                length_cm: 170.0,
                width_cm: 80.0,
                height_cm: 50.0,
                water_level_cm: 10.0,
            },
            conditions: ConditionsDef {
                chemistry: true,
                heavy_load: true,
            },
            boards: BoardsDef {
                k28: BoardDef {
                    watts: 120.0,
                    heads: 2,
                },
                k40: BoardDef {
                    watts: 120.0,
                    heads: 3,
                },
            },
            mode: ModeDef::New {
                target_density_w_per_l: None,
                ratio_28_percent: default_ratio_28_percent(),
            },
            layout: LayoutDef::default(),
        }
    }
}

impl ModeDef {
    /// Starter values for checking existing hardware.
    pub fn default_existing() -> Self {
        ModeDef::Existing {
            boards_28: 3,
            boards_40: 1,
        }
    }

    /// Engine request, with the target filled in from `recommended` if unset.
    pub fn to_sizing_mode(&self, recommended: f64) -> SizingMode {
        match *self {
            ModeDef::New {
                target_density_w_per_l,
                ratio_28_percent,
            } => SizingMode::New(DesignRequest {
                target_density: target_density_w_per_l.unwrap_or(recommended),
                ratio_28: ratio_28_percent / 100.0,
            }),
            ModeDef::Existing {
                boards_28,
                boards_40,
            } => SizingMode::Existing(CheckRequest {
                boards_28,
                boards_40,
            }),
        }
    }
}

impl TankDef {
    pub fn to_geometry(&self) -> TankGeometry {
        TankGeometry::from_cm(
            self.length_cm,
            self.width_cm,
            self.height_cm,
            self.water_level_cm,
        )
    }
}

impl From<ConditionsDef> for UsageConditions {
    fn from(def: ConditionsDef) -> Self {
        UsageConditions {
            chemistry: def.chemistry,
            heavy_load: def.heavy_load,
        }
    }
}

impl BoardDef {
    pub fn to_spec(&self) -> BoardSpec {
        BoardSpec::new(self.watts, self.heads)
    }
}

impl BoardsDef {
    pub fn to_pair(&self) -> BoardPair {
        BoardPair {
            k28: self.k28.to_spec(),
            k40: self.k40.to_spec(),
        }
    }
}
