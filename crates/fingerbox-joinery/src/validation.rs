//! Parameter validation
//!
//! Runs before any geometry. Every rule is checked and all failures are
//! returned together; the plan is only built when the list is empty.

use tracing::warn;

use crate::error::{ValidationErrors, ValidationIssue};
use crate::tabbed_box::types::{Canvas, MaterialParameters, OutsideDimensions};

/// Dimensions may not exceed this multiple of the larger canvas side
pub const CANVAS_SIZE_FACTOR: f64 = 10.0;
/// Spacing may not exceed this multiple of the largest box dimension
pub const SPACING_SIZE_FACTOR: f64 = 10.0;
/// An edge must hold at least this many nominal tabs
pub const MIN_TABS_PER_EDGE: f64 = 3.0;
/// Upper bound on the divisions of the longest edge
pub const MAX_DIVISIONS_PER_EDGE: usize = 10_000;

pub fn validate(
    dims: &OutsideDimensions,
    material: &MaterialParameters,
    spacing: f64,
    canvas: Option<&Canvas>,
) -> Result<(), ValidationErrors> {
    let mut issues = Vec::new();

    let inputs = [
        ("length", dims.x),
        ("width", dims.y),
        ("height", dims.z),
        ("thickness", material.thickness),
        ("tab", material.nominal_tab),
        ("kerf", material.kerf),
        ("clearance", material.clearance),
        ("spacing", spacing),
    ];
    for (name, value) in inputs {
        if !value.is_finite() {
            issues.push(ValidationIssue::NotFinite(name));
        }
    }
    // comparisons against NaN are meaningless, report only the above
    if !issues.is_empty() {
        return Err(report(issues));
    }

    let min = dims.min();
    let max = dims.max();
    let correction = material.correction();

    if min <= 0.0 {
        issues.push(ValidationIssue::DimensionZero);
    }

    if let Some(canvas) = canvas {
        let limit = canvas.width.max(canvas.height) * CANVAS_SIZE_FACTOR;
        if max > limit {
            issues.push(ValidationIssue::DimensionTooLarge { max, limit });
        }
    }

    let required = MIN_TABS_PER_EDGE * material.nominal_tab;
    if min < required {
        issues.push(ValidationIssue::TabTooLarge {
            nominal_tab: material.nominal_tab,
            required,
            min_dimension: min,
        });
    }

    if max / material.nominal_tab > MAX_DIVISIONS_PER_EDGE as f64 {
        issues.push(ValidationIssue::TabTooNarrow {
            nominal_tab: material.nominal_tab,
            max_dimension: max,
            limit: MAX_DIVISIONS_PER_EDGE,
        });
    }

    if material.nominal_tab < material.thickness {
        issues.push(ValidationIssue::TabTooSmall {
            nominal_tab: material.nominal_tab,
            thickness: material.thickness,
        });
    }

    if material.thickness <= 0.0 {
        issues.push(ValidationIssue::ThicknessZero);
    }

    let third = min / 3.0;
    if material.thickness > third {
        issues.push(ValidationIssue::ThicknessTooLarge {
            thickness: material.thickness,
            limit: third,
        });
    }

    if correction.abs() > third {
        issues.push(ValidationIssue::CorrectionTooLarge {
            correction,
            limit: third,
        });
    }

    let spacing_limit = max * SPACING_SIZE_FACTOR;
    if spacing > spacing_limit {
        issues.push(ValidationIssue::SpacingTooLarge {
            spacing,
            limit: spacing_limit,
        });
    }

    if spacing < material.kerf {
        issues.push(ValidationIssue::SpacingTooSmall {
            spacing,
            kerf: material.kerf,
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(report(issues))
    }
}

fn report(issues: Vec<ValidationIssue>) -> ValidationErrors {
    for issue in &issues {
        warn!("Box parameter rejected: {}", issue);
    }
    ValidationErrors(issues)
}
