use clap::{Parser, Subcommand, ValueEnum};
use sf_app::{
    AppError, AppResult, DesignReport, bracket_rows, design_service, marker_rows, markers_to_csv,
    project_service,
};
use sf_layout::MountView;
use sf_project::{ConditionsDef, ModeDef, TankDef};
use sf_sizing::PASS_FRACTION;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "SonoFlow CLI - Ultrasonic tank sizing and head layout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter design file
    Init {
        /// Output path (.yaml, .yml or .json)
        design_path: PathBuf,
        /// Start from existing boards instead of a new design
        #[arg(long)]
        existing: bool,
        /// Overwrite the file if it exists
        #[arg(long)]
        force: bool,
    },
    /// Validate design file syntax and values
    Validate {
        /// Path to the design file
        design_path: PathBuf,
    },
    /// Recommend a power density for a tank
    Recommend {
        /// Tank length (cm)
        #[arg(long)]
        length: f64,
        /// Tank width (cm)
        #[arg(long)]
        width: f64,
        /// Water level (cm)
        #[arg(long)]
        water_level: f64,
        /// Tank height (cm), defaults to the water level
        #[arg(long)]
        height: Option<f64>,
        /// Chemistry or acid in the bath
        #[arg(long)]
        chemistry: bool,
        /// Dense parts in the load
        #[arg(long)]
        heavy_load: bool,
    },
    /// Size boards for a design and report pass/fail
    Design {
        /// Path to the design file
        design_path: PathBuf,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export placed head markers as CSV
    Layout {
        /// Path to the design file
        design_path: PathBuf,
        /// Mounting view, overriding the design file
        #[arg(long, value_enum)]
        mount: Option<MountArg>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the W/L reference table
    Brackets,
}

#[derive(Clone, Copy, ValueEnum)]
enum MountArg {
    Bottom,
    Side,
}

impl From<MountArg> for MountView {
    fn from(arg: MountArg) -> Self {
        match arg {
            MountArg::Bottom => MountView::Bottom,
            MountArg::Side => MountView::Side,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            design_path,
            existing,
            force,
        } => cmd_init(&design_path, existing, force),
        Commands::Validate { design_path } => cmd_validate(&design_path),
        Commands::Recommend {
            length,
            width,
            water_level,
            height,
            chemistry,
            heavy_load,
        } => cmd_recommend(
            TankDef {
                length_cm: length,
                width_cm: width,
                height_cm: height.unwrap_or(water_level),
                water_level_cm: water_level,
            },
            ConditionsDef {
                chemistry,
                heavy_load,
            },
        ),
        Commands::Design { design_path, json } => cmd_design(&design_path, json),
        Commands::Layout {
            design_path,
            mount,
            output,
        } => cmd_layout(&design_path, mount.map(MountView::from), output.as_deref()),
        Commands::Brackets => cmd_brackets(),
    }
}

fn cmd_init(design_path: &Path, existing: bool, force: bool) -> AppResult<()> {
    if design_path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            design_path.display()
        )));
    }

    let mut design = project_service::starter_design();
    if existing {
        design.mode = ModeDef::default_existing();
    }
    project_service::save_design(design_path, &design)?;
    println!("✓ Wrote starter design: {}", design_path.display());
    Ok(())
}

fn cmd_validate(design_path: &Path) -> AppResult<()> {
    println!("Validating design: {}", design_path.display());
    let design = project_service::load_design(design_path)?;
    project_service::validate_design(&design)?;
    println!("✓ Design is valid");
    Ok(())
}

fn cmd_recommend(tank: TankDef, conditions: ConditionsDef) -> AppResult<()> {
    let rec = design_service::recommend(&tank, conditions)?;
    println!("Water volume:        {:.2} L", rec.volume_liters);
    println!("Recommended density: {} W/L", rec.recommended_density);
    println!("Total power:         {:.0} W", rec.total_power_w);
    Ok(())
}

fn cmd_design(design_path: &Path, json: bool) -> AppResult<()> {
    let design = project_service::load_design(design_path)?;
    let report = design_service::evaluate(&design)?;

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Export(format!("Failed to serialize report: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    print_report(&design.mode, &report);
    Ok(())
}

fn print_report(mode: &ModeDef, report: &DesignReport) {
    let sizing = &report.sizing;

    println!("Design: {}", report.name);
    match mode {
        ModeDef::New { .. } => println!(
            "  Mode: design new (recommended {} W/L, target {} W/L)",
            report.recommended_density, sizing.target_density
        ),
        ModeDef::Existing { .. } => println!(
            "  Mode: check existing (comparing with recommended {} W/L)",
            report.recommended_density
        ),
    }

    println!("\nResults:");
    println!("  Water volume:   {:.2} L", report.volume_liters);
    println!("  Total power:    {:.0} W", sizing.total_power_w);
    println!(
        "  Actual density: {:.2} W/L ({:+.2})",
        sizing.actual_density,
        sizing.density_delta()
    );

    println!("\nAnalysis:");
    if sizing.passed {
        println!("  ✓ PASSED ({:.2} W/L)", sizing.actual_density);
    } else {
        println!(
            "  ✗ BELOW standard (missing {:.1} W/L, pass threshold {:.0}% of target)",
            sizing.shortfall(),
            PASS_FRACTION * 100.0
        );
    }

    println!("\nBill of materials:");
    for line in &report.bom {
        println!(
            "  {}: {} boards x {:.0} W (= {} heads)",
            line.frequency, line.boards, line.watts_per_board, line.heads
        );
    }
}

fn cmd_layout(
    design_path: &Path,
    mount: Option<MountView>,
    output: Option<&Path>,
) -> AppResult<()> {
    let design = project_service::load_design(design_path)?;
    let mount = mount.unwrap_or(design.layout.mount);
    let report = design_service::evaluate_with_mount(&design, mount)?;

    let rows = marker_rows(&report);
    let csv = markers_to_csv(&rows);

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        for panel in &report.panels {
            println!("  {}: {} heads", panel.title, panel.heads.len());
        }
        println!("✓ Exported {} markers to {}", rows.len(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_brackets() -> AppResult<()> {
    println!(
        "{:<14} {:>10}  {:<14} {}",
        "Tank size", "Base W/L", "Advisory", "Approx total"
    );
    for row in bracket_rows() {
        println!(
            "{:<14} {:>10.1}  {:<14} {}",
            row.volume, row.base_density, row.advisory_range, row.approx_total_power
        );
    }
    Ok(())
}
