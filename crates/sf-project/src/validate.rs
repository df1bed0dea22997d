//! Design validation logic.

use crate::schema::{BoardDef, DesignFile, LATEST_VERSION, ModeDef, TankDef};
use sf_core::numeric::{ensure_in_range, ensure_positive};
use sf_sizing::FrequencyClass;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid dimension: {field} = {value} (must be a positive number)")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("Water level {water_level_cm} cm is above the tank height {height_cm} cm")]
    WaterAboveRim { water_level_cm: f64, height_cm: f64 },

    #[error("Invalid 28 kHz ratio: {value} (must be within 0..=1)")]
    InvalidRatio { value: f64 },

    #[error("Invalid board spec for {class}: {reason}")]
    InvalidBoardSpec {
        class: FrequencyClass,
        reason: String,
    },

    #[error("Too many {class} heads: {heads} (at most {max})")]
    TooManyHeads {
        class: FrequencyClass,
        heads: u64,
        max: u64,
    },

    #[error("Invalid target density: {value} W/L (must be a positive number)")]
    InvalidTargetDensity { value: f64 },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Most heads of one frequency class a design may carry.
pub const MAX_HEADS_PER_CLASS: u64 = 100_000;

pub fn validate_design(design: &DesignFile) -> Result<(), ValidationError> {
    if design.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: design.version,
        });
    }

    validate_tank(&design.tank)?;
    validate_board(FrequencyClass::K28, &design.boards.k28)?;
    validate_board(FrequencyClass::K40, &design.boards.k40)?;

    match design.mode {
        ModeDef::New {
            target_density_w_per_l,
            ratio_28_percent,
        } => {
            let ratio = ratio_28_percent / 100.0;
            ensure_in_range(ratio, 0.0, 1.0, "ratio_28")
                .map_err(|_| ValidationError::InvalidRatio { value: ratio })?;

            if let Some(target) = target_density_w_per_l {
                ensure_positive(target, "target_density")
                    .map_err(|_| ValidationError::InvalidTargetDensity { value: target })?;
            }
        }
        ModeDef::Existing {
            boards_28,
            boards_40,
        } => {
            validate_head_count(FrequencyClass::K28, boards_28, design.boards.k28.heads)?;
            validate_head_count(FrequencyClass::K40, boards_40, design.boards.k40.heads)?;
        }
    }

    Ok(())
}

/// Every dimension positive, and water no higher than the tank.
pub fn validate_tank(tank: &TankDef) -> Result<(), ValidationError> {
    for (field, value) in [
        ("length_cm", tank.length_cm),
        ("width_cm", tank.width_cm),
        ("height_cm", tank.height_cm),
        ("water_level_cm", tank.water_level_cm),
    ] {
        ensure_positive(value, field)
            .map_err(|_| ValidationError::InvalidDimension { field, value })?;
    }

    if tank.water_level_cm > tank.height_cm {
        return Err(ValidationError::WaterAboveRim {
            water_level_cm: tank.water_level_cm,
            height_cm: tank.height_cm,
        });
    }
    Ok(())
}

/// `boards` x `heads_per_board` must stay within [`MAX_HEADS_PER_CLASS`].
pub fn validate_head_count(
    class: FrequencyClass,
    boards: u32,
    heads_per_board: u32,
) -> Result<(), ValidationError> {
    let heads = u64::from(boards) * u64::from(heads_per_board);
    if heads > MAX_HEADS_PER_CLASS {
        return Err(ValidationError::TooManyHeads {
            class,
            heads,
            max: MAX_HEADS_PER_CLASS,
        });
    }
    Ok(())
}

fn validate_board(class: FrequencyClass, board: &BoardDef) -> Result<(), ValidationError> {
    if ensure_positive(board.watts, "watts").is_err() {
        return Err(ValidationError::InvalidBoardSpec {
            class,
            reason: format!("watts per board must be positive, got {}", board.watts),
        });
    }
    if board.heads < 1 {
        return Err(ValidationError::InvalidBoardSpec {
            class,
            reason: "a board needs at least one head".to_string(),
        });
    }
    Ok(())
}
