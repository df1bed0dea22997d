//! Design evaluation: recommendation, sizing, and layout in one pass.

use serde::Serialize;
use sf_layout::{build_head_sequence, plan_mounting, MountView, PanelLayout};
use sf_project::{validate_head_count, validate_tank, ConditionsDef, DesignFile, TankDef};
use sf_sizing::{
    recommend as recommend_density, size, FrequencyClass, SizingResult, UsageConditions,
};
use tracing::{debug, info};

use crate::error::AppResult;

/// Bill of materials line for one frequency class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BomLine {
    pub frequency: FrequencyClass,
    pub boards: u32,
    pub heads: u32,
    pub watts_per_board: f64,
}

/// Recommendation for a tank without any board data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub volume_liters: f64,
    pub recommended_density: f64,
    pub total_power_w: f64,
}

/// Everything a frontend needs to show for a design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    pub name: String,
    pub volume_liters: f64,
    pub recommended_density: f64,
    pub sizing: SizingResult,
    pub bom: Vec<BomLine>,
    pub mount: MountView,
    pub heads: Vec<FrequencyClass>,
    pub panels: Vec<PanelLayout>,
}

/// Recommended W/L (and the total power it implies) for a tank.
pub fn recommend(tank: &TankDef, conditions: ConditionsDef) -> AppResult<Recommendation> {
    validate_tank(tank)?;
    let geometry = tank.to_geometry();
    let volume_liters = geometry.volume_liters();
    let recommended_density = recommend_density(&geometry, UsageConditions::from(conditions));
    Ok(Recommendation {
        volume_liters,
        recommended_density,
        total_power_w: volume_liters * recommended_density,
    })
}

/// Evaluate a design using the mount view it specifies.
pub fn evaluate(design: &DesignFile) -> AppResult<DesignReport> {
    evaluate_with_mount(design, design.layout.mount)
}

/// Evaluate a design, laying heads out for `mount`.
pub fn evaluate_with_mount(design: &DesignFile, mount: MountView) -> AppResult<DesignReport> {
    sf_project::validate_design(design)?;

    let tank = design.tank.to_geometry();
    let volume_liters = tank.volume_liters();
    let recommended_density = recommend_density(&tank, UsageConditions::from(design.conditions));
    debug!(volume_liters, recommended_density, "recommendation");

    let boards = design.boards.to_pair();
    let mode = design.mode.to_sizing_mode(recommended_density);
    let sizing = size(volume_liters, &mode, &boards, recommended_density);
    info!(
        boards_28 = sizing.board_count_28,
        boards_40 = sizing.board_count_40,
        actual_density = sizing.actual_density,
        passed = sizing.passed,
        "sized design"
    );
    for class in FrequencyClass::ALL {
        validate_head_count(class, sizing.boards(class), boards.get(class).heads)?;
    }

    let bom = FrequencyClass::ALL
        .iter()
        .map(|&class| BomLine {
            frequency: class,
            boards: sizing.boards(class),
            heads: sizing.heads(class),
            watts_per_board: boards.get(class).watts_per_board(),
        })
        .collect();

    let heads = build_head_sequence(
        sizing.head_count_28,
        sizing.head_count_40,
        design.layout.shuffle_seed,
    );
    let panels = plan_mounting(&tank, &heads, mount);
    debug!(heads = heads.len(), panels = panels.len(), ?mount, "laid out heads");

    Ok(DesignReport {
        name: design.name.clone(),
        volume_liters,
        recommended_density,
        sizing,
        bom,
        mount,
        heads,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use sf_project::{ModeDef, ValidationError};

    #[test]
    fn starter_design_report() {
        let report = evaluate(&DesignFile::default()).unwrap();
        assert!((report.volume_liters - 136.0).abs() < 1e-9);
        assert_eq!(report.recommended_density, 8.0);
        assert_eq!(report.sizing.board_count_28, 7);
        assert_eq!(report.sizing.board_count_40, 3);
        assert!(report.sizing.passed);
        assert_eq!(report.heads.len(), 23);
        assert_eq!(report.panels.len(), 1);
        assert_eq!(report.bom[0].frequency, FrequencyClass::K28);
        assert_eq!(report.bom[0].heads, 14);
        assert_eq!(report.bom[1].heads, 9);
    }

    #[test]
    fn explicit_target_overrides_recommendation() {
        let design = DesignFile {
            mode: ModeDef::New {
                target_density_w_per_l: Some(16.0),
                ratio_28_percent: 50.0,
            },
            ..DesignFile::default()
        };
        let report = evaluate(&design).unwrap();
        assert_eq!(report.sizing.target_density, 16.0);
        // 2176 W split evenly over 120 W boards
        assert_eq!(report.sizing.board_count_28, 10);
        assert_eq!(report.sizing.board_count_40, 10);
    }

    #[test]
    fn existing_mode_targets_recommendation() {
        let design = DesignFile {
            mode: ModeDef::default_existing(),
            ..DesignFile::default()
        };
        let report = evaluate_with_mount(&design, MountView::Side).unwrap();
        assert_eq!(report.sizing.target_density, report.recommended_density);
        assert!(!report.sizing.passed);
        assert_eq!(report.panels.len(), 2);
        let placed: usize = report.panels.iter().map(|p| p.heads.len()).sum();
        assert_eq!(placed, 9);
    }

    #[test]
    fn invalid_design_is_rejected_before_sizing() {
        let mut design = DesignFile::default();
        design.tank.height_cm = 5.0;
        assert!(evaluate(&design).is_err());
    }

    #[test]
    fn underpowered_boards_hit_the_head_limit() {
        let mut design = DesignFile::default();
        design.boards.k28.watts = 1e-6;
        let err = evaluate(&design).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::TooManyHeads {
                class: FrequencyClass::K28,
                ..
            })
        ));
    }

    #[test]
    fn recommend_reports_total_power() {
        let rec = recommend(
            &TankDef {
                length_cm: 20.0,
                width_cm: 10.0,
                height_cm: 30.0,
                water_level_cm: 25.0,
            },
            ConditionsDef::default(),
        )
        .unwrap();
        // 5 L tank: 35 W/L, 175 W
        assert!((rec.volume_liters - 5.0).abs() < 1e-9);
        assert_eq!(rec.recommended_density, 35.0);
        assert!((rec.total_power_w - 175.0).abs() < 1e-6);
    }
}
