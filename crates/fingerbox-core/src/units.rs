//! Length unit conversion
//!
//! The geometry engine works in one consistent unit (millimetres). User
//! input arrives in whatever unit the job was authored in and is normalized
//! here. Supports decimal values in every unit and mixed fractions for
//! inches ("1 1/2").

use crate::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MM_PER_INCH: f64 = 25.4;

/// Length unit a job may be authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    /// PostScript point, 1/72 in
    #[serde(rename = "pt")]
    Point,
    /// Pica, 12 pt
    #[serde(rename = "pc")]
    Pica,
    /// CSS pixel, 1/96 in
    #[serde(rename = "px")]
    Pixel,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Millimeter
    }
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Point,
        LengthUnit::Pica,
        LengthUnit::Pixel,
    ];

    /// Millimetres in one of this unit
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
            Self::Meter => 1000.0,
            Self::Inch => MM_PER_INCH,
            Self::Foot => MM_PER_INCH * 12.0,
            Self::Point => MM_PER_INCH / 72.0,
            Self::Pica => MM_PER_INCH / 6.0,
            Self::Pixel => MM_PER_INCH / 96.0,
        }
    }

    pub fn to_mm(self, value: f64) -> f64 {
        value * self.mm_per_unit()
    }

    pub fn from_mm(self, value_mm: f64) -> f64 {
        value_mm / self.mm_per_unit()
    }

    /// Short label ("mm", "in", ...)
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Point => "pt",
            Self::Pica => "pc",
            Self::Pixel => "px",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" | "metric" => Ok(Self::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeter),
            "m" | "meter" | "meters" => Ok(Self::Meter),
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inch),
            "ft" | "foot" | "feet" => Ok(Self::Foot),
            "pt" | "point" | "points" => Ok(Self::Point),
            "pc" | "pica" | "picas" => Ok(Self::Pica),
            "px" | "pixel" | "pixels" => Ok(Self::Pixel),
            _ => Err(UnitError::UnknownUnit(s.to_string())),
        }
    }
}

/// Format a millimetre value in the target unit, three decimals
pub fn format_length(value_mm: f64, unit: LengthUnit) -> String {
    format!("{:.3}", unit.from_mm(value_mm))
}

/// Parse a length string in `unit` and return millimetres
///
/// An empty string parses as zero. Fractions are accepted for inches only.
pub fn parse_length(input: &str, unit: LengthUnit) -> Result<f64, UnitError> {
    Ok(unit.to_mm(parse_value(input, unit)?))
}

/// Parse a length that may carry its own unit label ("12mm", "4 1/2 in")
/// and express it in `unit`. Without a label the number is already in `unit`.
pub fn parse_quantity(input: &str, unit: LengthUnit) -> crate::Result<f64> {
    let input = input.trim();
    let number_len = input
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .len();
    let (number, label) = input.split_at(number_len);

    if label.is_empty() {
        return Ok(parse_value(number, unit)?);
    }
    let given: LengthUnit = label.parse()?;
    if given == unit {
        Ok(parse_value(number, given)?)
    } else {
        Ok(unit.from_mm(parse_length(number, given)?))
    }
}

/// The number in `input`, still in `unit`
fn parse_value(input: &str, unit: LengthUnit) -> Result<f64, UnitError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    if unit == LengthUnit::Inch && input.contains('/') {
        let negative = input.starts_with('-');
        let body = input.trim_start_matches('-');
        let mut total_inches = 0.0;

        for part in body.split_whitespace() {
            if part.contains('/') {
                let frac_parts: Vec<&str> = part.split('/').collect();
                if frac_parts.len() != 2 {
                    return Err(UnitError::InvalidFraction(input.to_string()));
                }
                let num = frac_parts[0]
                    .parse::<f64>()
                    .map_err(|_| UnitError::InvalidFraction(input.to_string()))?;
                let den = frac_parts[1]
                    .parse::<f64>()
                    .map_err(|_| UnitError::InvalidFraction(input.to_string()))?;
                if den == 0.0 {
                    return Err(UnitError::DivisionByZero(input.to_string()));
                }
                total_inches += num / den;
            } else {
                total_inches += part
                    .parse::<f64>()
                    .map_err(|_| UnitError::InvalidNumber(input.to_string()))?;
            }
        }

        return Ok(if negative { -total_inches } else { total_inches });
    }

    input
        .parse::<f64>()
        .map_err(|_| UnitError::InvalidNumber(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_metric_conversion() {
        assert_eq!(format_length(10.5, LengthUnit::Millimeter), "10.500");
        assert_eq!(parse_length("10.5", LengthUnit::Millimeter).unwrap(), 10.5);
        assert_eq!(parse_length("2.5", LengthUnit::Centimeter).unwrap(), 25.0);
    }

    #[test]
    fn test_imperial_decimal() {
        assert_eq!(format_length(25.4, LengthUnit::Inch), "1.000");
        assert!(close(parse_length("0.5", LengthUnit::Inch).unwrap(), 12.7));
    }

    #[test]
    fn test_imperial_fraction() {
        assert!(close(parse_length("1 1/2", LengthUnit::Inch).unwrap(), 38.1));
        assert!(close(parse_length("1/4", LengthUnit::Inch).unwrap(), 6.35));
        assert!(close(parse_length("-1/2", LengthUnit::Inch).unwrap(), -12.7));
    }

    #[test]
    fn test_document_units() {
        assert!(close(LengthUnit::Pixel.to_mm(96.0), 25.4));
        assert!(close(LengthUnit::Point.to_mm(72.0), 25.4));
        assert!(close(LengthUnit::Pica.to_mm(6.0), 25.4));
        assert!(close(LengthUnit::Foot.to_mm(1.0), 304.8));
    }

    #[test]
    fn test_unit_labels_round_trip() {
        for unit in LengthUnit::ALL {
            assert_eq!(unit.label().parse::<LengthUnit>().unwrap(), unit);
        }
        assert!("furlong".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(parse_length("", LengthUnit::Millimeter).unwrap(), 0.0);
        assert_eq!(parse_length("  10.5  ", LengthUnit::Millimeter).unwrap(), 10.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            parse_length("abc", LengthUnit::Millimeter),
            Err(UnitError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_length("1/0", LengthUnit::Inch),
            Err(UnitError::DivisionByZero(_))
        ));
        assert!(matches!(
            parse_length("1/2/3", LengthUnit::Inch),
            Err(UnitError::InvalidFraction(_))
        ));
        // fractions are an inch-only notation
        assert!(parse_length("1/2", LengthUnit::Millimeter).is_err());
    }

    #[test]
    fn test_quantity_keeps_the_job_unit() {
        assert_eq!(parse_quantity("4 1/2", LengthUnit::Inch).unwrap(), 4.5);
        assert_eq!(parse_quantity("120", LengthUnit::Millimeter).unwrap(), 120.0);
        assert_eq!(parse_quantity("3 mm", LengthUnit::Millimeter).unwrap(), 3.0);
    }

    #[test]
    fn test_quantity_with_label() {
        assert!(close(parse_quantity("1in", LengthUnit::Millimeter).unwrap(), 25.4));
        assert!(close(parse_quantity("1 1/2 in", LengthUnit::Millimeter).unwrap(), 38.1));
        assert!(close(parse_quantity("25.4mm", LengthUnit::Inch).unwrap(), 1.0));
        assert!(close(parse_quantity("2cm", LengthUnit::Millimeter).unwrap(), 20.0));
    }

    #[test]
    fn test_quantity_errors() {
        let err = parse_quantity("3 furlongs", LengthUnit::Millimeter).unwrap_err();
        assert!(err.is_unit_error());
        assert_eq!(err.to_string(), "Unknown length unit: furlongs");
        assert!(parse_quantity("x", LengthUnit::Millimeter).is_err());
    }
}
