//! Error types for the joinery crate.
//!
//! Parameter validation reports every failed rule at once, so a box with
//! several problems is described in a single error.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while building a cut plan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JoineryError {
    /// The layout style selector is not one of the known templates.
    #[error("Unknown layout style: {0} (valid: 1..4)")]
    UnknownLayoutStyle(u8),

    /// One or more parameters failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// A single failed validation rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    #[error("Dimensions must be non zero")]
    DimensionZero,

    #[error("Dimensions too large: {max} exceeds {limit}")]
    DimensionTooLarge { max: f64, limit: f64 },

    #[error("Tab size too large: {nominal_tab} needs edges of at least {required}, smallest is {min_dimension}")]
    TabTooLarge {
        nominal_tab: f64,
        required: f64,
        min_dimension: f64,
    },

    #[error("Tab size too narrow: {nominal_tab} splits a {max_dimension} edge into more than {limit} divisions")]
    TabTooNarrow {
        nominal_tab: f64,
        max_dimension: f64,
        limit: usize,
    },

    #[error("Tab size too small: {nominal_tab} is narrower than the material ({thickness})")]
    TabTooSmall { nominal_tab: f64, thickness: f64 },

    #[error("Thickness is zero")]
    ThicknessZero,

    #[error("Material too thick: {thickness} exceeds {limit}")]
    ThicknessTooLarge { thickness: f64, limit: f64 },

    #[error("Kerf/clearance too large: correction {correction} exceeds {limit}")]
    CorrectionTooLarge { correction: f64, limit: f64 },

    #[error("Spacing too large: {spacing} exceeds {limit}")]
    SpacingTooLarge { spacing: f64, limit: f64 },

    #[error("Spacing too small: {spacing} is less than the kerf ({kerf})")]
    SpacingTooSmall { spacing: f64, kerf: f64 },

    #[error("Parameter '{0}' is not a finite number")]
    NotFinite(&'static str),
}

/// All validation failures of one parameter set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors(pub Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, predicate: impl Fn(&ValidationIssue) -> bool) -> bool {
        self.0.iter().any(predicate)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid box parameters")?;
        for (i, issue) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type alias for joinery operations.
pub type JoineryResult<T> = Result<T, JoineryError>;
