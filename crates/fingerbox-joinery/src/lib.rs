//! # fingerbox Joinery
//!
//! Cut geometry for laser-cut boxes whose six panels interlock through
//! finger (tab-and-slot) joints.
//!
//! ## Components
//!
//! - **Edge Joint Generator**: turns one panel edge into the open polyline of
//!   its tab or slot pattern, with kerf/clearance correction
//! - **Layout Templates**: four fixed panel arrangements in drawing space
//! - **Validation**: accumulated parameter checks run before any geometry
//! - **Tabbed Box Maker**: assembles the full plan, four edges per panel
//!
//! All computation is pure and synchronous. Lengths are `f64` in one
//! consistent unit; normalizing user input is the caller's job.

pub mod edge_joint;
pub mod error;
pub mod layout;
pub mod tabbed_box;
pub mod validation;

pub use edge_joint::{
    division_count, division_widths, generate_tabbed_edge, nominal_widths, DivisionWidths,
    EdgeJointGenerator, EdgePolyline, EdgeSpec, JointSettings, NotchPhase, PathCommand,
    Transition,
};
pub use error::{JoineryError, JoineryResult, ValidationErrors, ValidationIssue};
pub use layout::{layout_pieces, template, PanelTemplate, PlacedPanel, RootFormula};
pub use tabbed_box::types::{
    BoxAxis, BoxDimensions, BoxParameters, Canvas, JointKind, LayoutStyle, MaterialParameters,
    OutsideDimensions, PanelEdge, TabPattern,
};
pub use tabbed_box::{compute_box_cut_plan, BoxCutPlan, PanelCut, TabbedBoxMaker};
pub use validation::validate;
