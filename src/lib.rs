//! # fingerbox
//!
//! Cut geometry for laser-cut boxes joined with finger (tab-and-slot)
//! joints, plus a small host around it: box job files, a command line and
//! SVG / G-code export.
//!
//! ## Architecture
//!
//! 1. **fingerbox-core** - points, directions, length units, core errors
//! 2. **fingerbox-joinery** - edge joint generator, layout templates,
//!    validation and the tabbed box maker
//! 3. **fingerbox-settings** - box job configuration and persistence
//! 4. **fingerbox** - logging, CLI and export

pub mod cli;
pub mod export;

pub use fingerbox_core::{Direction, LengthUnit, Point};
pub use fingerbox_joinery::{
    compute_box_cut_plan, BoxCutPlan, BoxDimensions, BoxParameters, EdgeJointGenerator,
    EdgePolyline, EdgeSpec, JoineryError, LayoutStyle, MaterialParameters, PanelCut,
    TabbedBoxMaker,
};
pub use fingerbox_settings::{BoxJobConfig, OutputFormat, OutputSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so exported data on stdout stays clean. The level
/// defaults to `warn` and follows `RUST_LOG` when set.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
