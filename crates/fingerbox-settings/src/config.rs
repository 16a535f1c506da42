//! Box job configuration
//!
//! A job file describes one box: the unit it was authored in, its
//! dimensions, the sheet material, the layout and how the cut plan is
//! exported. Supports JSON and TOML files; the default location is a
//! platform-specific config directory.
//!
//! Configuration is organized into sections:
//! - Dimensions (length, width, height, inside/outside)
//! - Material (thickness, tab width, kerf, clearance)
//! - Layout (template style, panel spacing, optional canvas)
//! - Output (export format, laser parameters, placement)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use fingerbox_core::LengthUnit;
use fingerbox_joinery::{
    BoxDimensions, BoxParameters, Canvas, LayoutStyle, MaterialParameters,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// File name used under the platform config directory
pub const DEFAULT_CONFIG_FILE: &str = "box.toml";

/// Box dimensions in the job's unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSettings {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Dimensions are measured inside the walls
    pub inside: bool,
}

impl Default for DimensionSettings {
    fn default() -> Self {
        Self {
            length: 100.0,
            width: 100.0,
            height: 100.0,
            inside: false,
        }
    }
}

/// Sheet material and cutter settings in the job's unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSettings {
    pub thickness: f64,
    /// Nominal finger width
    pub tab_width: f64,
    /// Stretch tabs and gaps to the same width instead of fixed tabs
    pub equal_tabs: bool,
    pub kerf: f64,
    pub clearance: f64,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            thickness: 10.0,
            tab_width: 25.0,
            equal_tabs: false,
            kerf: 0.5,
            clearance: 0.01,
        }
    }
}

/// Panel arrangement on the sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Template number, 1 to 4
    pub style: u8,
    /// Distance between panels and from the sheet origin
    pub spacing: f64,
    /// Sheet width; with `canvas_height` enables the fit check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_height: Option<f64>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            style: LayoutStyle::Diagrammatic.number(),
            spacing: 25.0,
            canvas_width: None,
            canvas_height: None,
        }
    }
}

/// Export format of a cut plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG document, one path per edge
    Svg,
    /// Laser G-code
    Gcode,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Svg
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Gcode => write!(f, "gcode"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "gcode" | "nc" | "ngc" => Ok(Self::Gcode),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Passes per edge in G-code output
    pub laser_passes: u32,
    /// Spindle value sent with M3, 0 to 1000
    pub laser_power: f64,
    /// Cutting feed rate (mm/min)
    pub feed_rate: f64,
    /// Z lowered per pass; 0 keeps the head at one height
    pub z_step_down: f64,
    /// Where the lower left of the plan lands on the machine
    pub offset_x: f64,
    pub offset_y: f64,
    /// SVG stroke width (mm)
    pub stroke_width: f64,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Svg,
            laser_passes: 1,
            laser_power: 1000.0,
            feed_rate: 500.0,
            z_step_down: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            stroke_width: 0.1,
        }
    }
}

/// A complete box job
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxJobConfig {
    /// Unit of every length in the dimensions, material and layout sections
    pub unit: LengthUnit,
    pub dimensions: DimensionSettings,
    pub material: MaterialSettings,
    pub layout: LayoutSettings,
    /// Export settings; always millimetres
    pub output: OutputSettings,
}

fn config_format(path: &Path) -> ConfigResult<&str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok("json"),
        Some("toml") => Ok("toml"),
        Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
        None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

fn require_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn require_non_negative(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

impl BoxJobConfig {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = config_format(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            "json" => serde_json::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded box job from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = config_format(path)?;

        let content = match format {
            "json" => serde_json::to_string_pretty(self)?,
            _ => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        info!("Saved box job to {}", path.display());
        Ok(())
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Config-level sanity checks. Geometric rules (tab fit, thickness
    /// ratio and so on) are left to the box maker.
    pub fn validate(&self) -> ConfigResult<()> {
        let d = &self.dimensions;
        require_positive("dimensions.length", d.length)?;
        require_positive("dimensions.width", d.width)?;
        require_positive("dimensions.height", d.height)?;

        let m = &self.material;
        require_positive("material.thickness", m.thickness)?;
        require_positive("material.tab_width", m.tab_width)?;
        require_non_negative("material.kerf", m.kerf)?;
        require_non_negative("material.clearance", m.clearance)?;

        require_non_negative("layout.spacing", self.layout.spacing)?;
        LayoutStyle::try_from(self.layout.style)
            .map_err(|_| ConfigError::UnknownLayout(self.layout.style))?;
        if let Some(w) = self.layout.canvas_width {
            require_positive("layout.canvas_width", w)?;
        }
        if let Some(h) = self.layout.canvas_height {
            require_positive("layout.canvas_height", h)?;
        }

        let o = &self.output;
        if o.laser_passes == 0 {
            return Err(ConfigError::out_of_range("output.laser_passes", 0));
        }
        if !(0.0..=1000.0).contains(&o.laser_power) {
            return Err(ConfigError::out_of_range("output.laser_power", o.laser_power));
        }
        require_positive("output.feed_rate", o.feed_rate)?;
        require_non_negative("output.z_step_down", o.z_step_down)?;
        require_positive("output.stroke_width", o.stroke_width)?;

        Ok(())
    }

    /// Re-express every job length in `unit`; output settings stay in mm
    pub fn convert_units(&mut self, unit: LengthUnit) {
        let from = self.unit;
        if from == unit {
            return;
        }
        let convert = |value: &mut f64| *value = unit.from_mm(from.to_mm(*value));

        convert(&mut self.dimensions.length);
        convert(&mut self.dimensions.width);
        convert(&mut self.dimensions.height);
        convert(&mut self.material.thickness);
        convert(&mut self.material.tab_width);
        convert(&mut self.material.kerf);
        convert(&mut self.material.clearance);
        convert(&mut self.layout.spacing);
        if let Some(width) = self.layout.canvas_width.as_mut() {
            convert(width);
        }
        if let Some(height) = self.layout.canvas_height.as_mut() {
            convert(height);
        }

        debug!("Converted box job from {} to {}", from, unit);
        self.unit = unit;
    }

    pub fn layout_style(&self) -> ConfigResult<LayoutStyle> {
        LayoutStyle::try_from(self.layout.style)
            .map_err(|_| ConfigError::UnknownLayout(self.layout.style))
    }

    /// Box maker parameters with every length converted to millimetres
    pub fn to_box_parameters(&self) -> ConfigResult<BoxParameters> {
        let layout = self.layout_style()?;
        let mm = |value: f64| self.unit.to_mm(value);

        let canvas = match (self.layout.canvas_width, self.layout.canvas_height) {
            (Some(width), Some(height)) => Some(Canvas {
                width: mm(width),
                height: mm(height),
            }),
            _ => None,
        };

        Ok(BoxParameters {
            dimensions: BoxDimensions::new(
                mm(self.dimensions.length),
                mm(self.dimensions.width),
                mm(self.dimensions.height),
            )
            .with_inside(self.dimensions.inside),
            material: MaterialParameters {
                thickness: mm(self.material.thickness),
                nominal_tab: mm(self.material.tab_width),
                equal_tabs: self.material.equal_tabs,
                kerf: mm(self.material.kerf),
                clearance: mm(self.material.clearance),
            },
            layout,
            spacing: mm(self.layout.spacing),
            canvas,
        })
    }
}

/// `<config dir>/fingerbox/box.toml`, falling back to the home directory
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let mut path = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config or home directory".to_string())
        })?;
    path.push("fingerbox");
    path.push(DEFAULT_CONFIG_FILE);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_the_reference_box() {
        let config = BoxJobConfig::default();
        assert_eq!(config.unit, LengthUnit::Millimeter);
        assert_eq!(config.dimensions.length, 100.0);
        assert!(!config.dimensions.inside);
        assert_eq!(config.material.tab_width, 25.0);
        assert_eq!(config.material.kerf, 0.5);
        assert_eq!(config.layout.style, 1);
        assert_eq!(config.layout.spacing, 25.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BoxJobConfig::default();
        config.material.thickness = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::out_of_range("material.thickness", 0.0))
        );

        let mut config = BoxJobConfig::default();
        config.layout.style = 5;
        assert_eq!(config.validate(), Err(ConfigError::UnknownLayout(5)));

        let mut config = BoxJobConfig::default();
        config.dimensions.height = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = BoxJobConfig::default();
        config.output.laser_passes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_box_parameters_normalizes_inches() {
        let mut config = BoxJobConfig::default();
        config.unit = LengthUnit::Inch;
        config.dimensions = DimensionSettings {
            length: 4.0,
            width: 3.0,
            height: 2.0,
            inside: true,
        };
        config.material.thickness = 0.125;
        config.material.tab_width = 0.5;
        config.layout.spacing = 1.0;
        config.layout.style = 3;

        let params = config.to_box_parameters().unwrap();
        assert!((params.dimensions.length - 101.6).abs() < 1e-9);
        assert!((params.material.thickness - 3.175).abs() < 1e-9);
        assert!((params.material.nominal_tab - 12.7).abs() < 1e-9);
        assert!((params.spacing - 25.4).abs() < 1e-9);
        assert!(params.dimensions.inside);
        assert_eq!(params.layout, LayoutStyle::Inline);
        assert!(params.canvas.is_none());
    }

    #[test]
    fn test_convert_units_keeps_physical_sizes() {
        let mut config = BoxJobConfig::default();
        config.layout.canvas_width = Some(254.0);
        let before = config.to_box_parameters().unwrap();

        config.convert_units(LengthUnit::Inch);
        assert_eq!(config.unit, LengthUnit::Inch);
        assert!((config.dimensions.width - 100.0 / 25.4).abs() < 1e-12);
        assert!((config.material.kerf - 0.5 / 25.4).abs() < 1e-12);
        assert!((config.layout.spacing - 25.0 / 25.4).abs() < 1e-12);
        let canvas_width = config.layout.canvas_width.unwrap();
        assert!((canvas_width - 10.0).abs() < 1e-12);
        assert!(config.layout.canvas_height.is_none());

        let after = config.to_box_parameters().unwrap();
        assert!((after.material.kerf - before.material.kerf).abs() < 1e-9);
        assert!((after.spacing - before.spacing).abs() < 1e-9);
        assert!((after.dimensions.length - before.dimensions.length).abs() < 1e-9);
    }

    #[test]
    fn test_canvas_needs_both_sides() {
        let mut config = BoxJobConfig::default();
        config.layout.canvas_width = Some(600.0);
        assert!(config.to_box_parameters().unwrap().canvas.is_none());

        config.layout.canvas_height = Some(400.0);
        let canvas = config.to_box_parameters().unwrap().canvas.unwrap();
        assert_eq!(canvas.width, 600.0);
        assert_eq!(canvas.height, 400.0);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("SVG".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert_eq!("ngc".parse::<OutputFormat>(), Ok(OutputFormat::Gcode));
        assert_eq!(
            "dxf".parse::<OutputFormat>(),
            Err(ConfigError::UnknownFormat("dxf".to_string()))
        );
        assert_eq!(OutputFormat::Gcode.to_string(), "gcode");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = BoxJobConfig::default()
            .save_to_file(Path::new("box.yaml"))
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"
        ));
    }

    #[test]
    fn test_default_config_path() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("fingerbox/box.toml"));
        }
    }
}
