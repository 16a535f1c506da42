use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fingerbox_core::{format_length, parse_quantity, LengthUnit};
use fingerbox_joinery::{template, BoxCutPlan, LayoutStyle, TabbedBoxMaker};
use fingerbox_settings::{default_config_path, BoxJobConfig, OutputFormat};
use tracing::info;

use crate::export;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Debug, Parser)]
#[command(
    name = "fingerbox",
    about = "Cut geometry for laser-cut finger-jointed boxes",
    version,
    long_version = LONG_VERSION
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a box and write its cut plan.
    Generate(GenerateArgs),

    /// Write a box job file with default values.
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Print the available layout styles.
    Layouts,
}

/// Export format selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Svg,
    Gcode,
    PathData,
    Json,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Svg => ExportFormat::Svg,
            OutputFormat::Gcode => ExportFormat::Gcode,
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Box job file (.toml or .json); defaults to the user config file if present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Unit of the job; overrides may also carry their own label ("12mm")
    #[arg(long)]
    pub unit: Option<LengthUnit>,

    #[arg(long)]
    pub length: Option<String>,
    #[arg(long)]
    pub width: Option<String>,
    #[arg(long)]
    pub height: Option<String>,

    /// Dimensions are measured inside the walls
    #[arg(long, conflicts_with = "outside")]
    pub inside: bool,
    /// Dimensions are measured outside the walls
    #[arg(long)]
    pub outside: bool,

    /// Material thickness
    #[arg(long)]
    pub thickness: Option<String>,
    /// Nominal finger width
    #[arg(long)]
    pub tab: Option<String>,
    /// Stretch tabs and gaps to equal widths
    #[arg(long)]
    pub equal_tabs: bool,
    #[arg(long)]
    pub kerf: Option<String>,
    #[arg(long)]
    pub clearance: Option<String>,
    /// Distance between panels
    #[arg(long)]
    pub spacing: Option<String>,
    /// Layout style, 1 to 4 (see `fingerbox layouts`)
    #[arg(long)]
    pub layout: Option<u8>,

    /// Export format; defaults to the job's output format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitConfigArgs {
    /// Destination; defaults to the user config file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateArgs {
    /// Fold command line overrides into `config`
    pub fn apply(&self, config: &mut BoxJobConfig) -> Result<()> {
        if let Some(unit) = self.unit {
            config.convert_units(unit);
        }
        let unit = config.unit;

        let lengths = [
            ("length", &self.length, &mut config.dimensions.length),
            ("width", &self.width, &mut config.dimensions.width),
            ("height", &self.height, &mut config.dimensions.height),
            ("thickness", &self.thickness, &mut config.material.thickness),
            ("tab", &self.tab, &mut config.material.tab_width),
            ("kerf", &self.kerf, &mut config.material.kerf),
            ("clearance", &self.clearance, &mut config.material.clearance),
            ("spacing", &self.spacing, &mut config.layout.spacing),
        ];
        for (name, input, target) in lengths {
            if let Some(input) = input {
                *target = parse_quantity(input, unit)
                    .with_context(|| format!("Invalid --{} value", name))?;
            }
        }

        if self.inside {
            config.dimensions.inside = true;
        }
        if self.outside {
            config.dimensions.inside = false;
        }
        if self.equal_tabs {
            config.material.equal_tabs = true;
        }
        if let Some(layout) = self.layout {
            config.layout.style = layout;
        }

        Ok(())
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::InitConfig(args) => run_init_config(&args),
        Commands::Layouts => {
            print!("{}", describe_layouts());
            Ok(())
        }
    }
}

/// Load, override, validate and generate. Returns the plan and the job it came from.
pub fn build_plan(args: &GenerateArgs) -> Result<(BoxJobConfig, BoxCutPlan)> {
    let mut config = BoxJobConfig::load_or_default(args.config.as_deref())
        .context("Failed to load box job")?;
    args.apply(&mut config)?;
    config.validate()?;

    let params = config.to_box_parameters()?;
    let plan = TabbedBoxMaker::new(params)?.generate();
    info!(
        "Outside size {} x {} x {} {}",
        format_length(plan.dimensions.x, config.unit),
        format_length(plan.dimensions.y, config.unit),
        format_length(plan.dimensions.z, config.unit),
        config.unit
    );
    Ok((config, plan))
}

pub fn render(plan: &BoxCutPlan, config: &BoxJobConfig, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Svg => export::to_svg_document(plan, &config.output),
        ExportFormat::Gcode => export::to_gcode(plan, &config.output),
        ExportFormat::PathData => export::to_path_data(plan),
        ExportFormat::Json => plan.to_json()?,
    })
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let (config, plan) = build_plan(args)?;
    let format = args
        .format
        .unwrap_or_else(|| ExportFormat::from(config.output.format));
    let text = render(&plan, &config, format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} panels as {:?} to {}",
                plan.panels.len(),
                format,
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to replace it)", path.display());
    }
    BoxJobConfig::default().save_to_file(path)?;
    Ok(())
}

fn run_init_config(args: &InitConfigArgs) -> Result<()> {
    let path = match &args.output {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    init_config(&path, args.force)?;
    println!("{}", path.display());
    Ok(())
}

pub fn describe_layouts() -> String {
    let mut out = String::new();
    for style in LayoutStyle::ALL {
        let names: Vec<&str> = template(style).iter().map(|p| p.name).collect();
        out.push_str(&format!(
            "{}  {:<30} {}\n",
            style.number(),
            style.label(),
            names.join(", ")
        ));
    }
    out
}
