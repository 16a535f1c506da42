//! # fingerbox Core
//!
//! Shared types for the fingerbox workspace: 2D points and axis-aligned
//! travel directions used by the joint generator, length units used to
//! normalize user input, and the top-level error type.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, Result, UnitError};
pub use geometry::{Direction, Point};
pub use units::{format_length, parse_length, parse_quantity, LengthUnit};
