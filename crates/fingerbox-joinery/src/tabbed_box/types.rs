//! Type definitions for the Tabbed Box Maker

use fingerbox_core::Direction;
use serde::{Deserialize, Serialize};

use crate::edge_joint::JointSettings;
use crate::error::JoineryError;

/// State of one panel edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointKind {
    /// Fingers of material protrude outward
    Tab,
    /// Matching notches receive the neighbour's fingers
    Slot,
}

impl JointKind {
    pub fn is_tab(self) -> bool {
        self == JointKind::Tab
    }

    /// Corner offset in material-thickness units: 1 for a tab edge, 0 for a slot edge
    pub fn offset(self) -> f64 {
        match self {
            JointKind::Tab => 1.0,
            JointKind::Slot => 0.0,
        }
    }
}

/// The four sides of a panel in winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelEdge {
    /// Top, travels +X
    A,
    /// Right, travels +Y
    B,
    /// Bottom, travels -X
    C,
    /// Left, travels -Y
    D,
}

impl PanelEdge {
    pub const ALL: [PanelEdge; 4] = [PanelEdge::A, PanelEdge::B, PanelEdge::C, PanelEdge::D];

    pub fn direction(self) -> Direction {
        match self {
            PanelEdge::A => Direction::PosX,
            PanelEdge::B => Direction::PosY,
            PanelEdge::C => Direction::NegX,
            PanelEdge::D => Direction::NegY,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Tab/slot state of a panel's four edges, indexed by [`PanelEdge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabPattern(pub [JointKind; 4]);

impl TabPattern {
    /// Build from the `0bABCD` notation used to author layout templates
    pub const fn from_bits(bits: u8) -> Self {
        const fn kind(bit: u8) -> JointKind {
            if bit & 1 == 1 {
                JointKind::Tab
            } else {
                JointKind::Slot
            }
        }
        TabPattern([kind(bits >> 3), kind(bits >> 2), kind(bits >> 1), kind(bits)])
    }

    pub fn edge(&self, edge: PanelEdge) -> JointKind {
        self.0[edge.index()]
    }

    pub fn tab_count(&self) -> usize {
        self.0.iter().filter(|k| k.is_tab()).count()
    }
}

/// Box dimensions as entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// X
    pub length: f64,
    /// Y
    pub width: f64,
    /// Z
    pub height: f64,
    /// Dimensions measure the inside of the box
    pub inside: bool,
}

impl BoxDimensions {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            inside: false,
        }
    }

    pub fn with_inside(mut self, inside: bool) -> Self {
        self.inside = inside;
        self
    }

    /// Outside dimensions; inside measurements grow by two material thicknesses
    pub fn outside(&self, thickness: f64) -> OutsideDimensions {
        let grow = if self.inside { 2.0 * thickness } else { 0.0 };
        OutsideDimensions {
            x: self.length + grow,
            y: self.width + grow,
            z: self.height + grow,
        }
    }
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self::new(100.0, 100.0, 100.0)
    }
}

/// Outside box dimensions, the only form the geometry works with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutsideDimensions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl OutsideDimensions {
    pub fn min(&self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    pub fn max(&self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    pub fn axis(&self, axis: BoxAxis) -> f64 {
        match axis {
            BoxAxis::X => self.x,
            BoxAxis::Y => self.y,
            BoxAxis::Z => self.z,
        }
    }
}

/// One of the three box dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxAxis {
    X,
    Y,
    Z,
}

/// Material and fit parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParameters {
    pub thickness: f64,
    /// Target tab width before division adjustment
    pub nominal_tab: f64,
    /// Force uniform tab and gap widths
    pub equal_tabs: bool,
    /// Width of the cut beam
    pub kerf: f64,
    /// Desired joint slack
    pub clearance: f64,
}

impl MaterialParameters {
    /// Signed fit correction, `kerf - clearance`
    pub fn correction(&self) -> f64 {
        self.kerf - self.clearance
    }

    pub fn joint_settings(&self) -> JointSettings {
        JointSettings {
            thickness: self.thickness,
            nominal_tab: self.nominal_tab,
            equal_tabs: self.equal_tabs,
            correction: self.correction(),
        }
    }
}

impl Default for MaterialParameters {
    fn default() -> Self {
        Self {
            thickness: 10.0,
            nominal_tab: 25.0,
            equal_tabs: false,
            kerf: 0.5,
            clearance: 0.01,
        }
    }
}

/// Named arrangement of the panels in drawing space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Unfolded-box diagram
    Diagrammatic = 1,
    /// Three panels, one of each size
    ThreePiece = 2,
    /// All panels in one row
    Inline = 3,
    /// Unfolded-box diagram with an alternate tab arrangement
    DiagrammaticAlternate = 4,
}

impl LayoutStyle {
    pub const ALL: [LayoutStyle; 4] = [
        LayoutStyle::Diagrammatic,
        LayoutStyle::ThreePiece,
        LayoutStyle::Inline,
        LayoutStyle::DiagrammaticAlternate,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutStyle::Diagrammatic => "Diagrammatic",
            LayoutStyle::ThreePiece => "3 piece",
            LayoutStyle::Inline => "Inline (compact)",
            LayoutStyle::DiagrammaticAlternate => "Diagrammatic, alternate tabs",
        }
    }
}

impl TryFrom<u8> for LayoutStyle {
    type Error = JoineryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LayoutStyle::Diagrammatic),
            2 => Ok(LayoutStyle::ThreePiece),
            3 => Ok(LayoutStyle::Inline),
            4 => Ok(LayoutStyle::DiagrammaticAlternate),
            other => Err(JoineryError::UnknownLayoutStyle(other)),
        }
    }
}

/// Drawing canvas the plan is meant for; used only for the size sanity check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// Everything needed to produce a cut plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxParameters {
    pub dimensions: BoxDimensions,
    pub material: MaterialParameters,
    pub layout: LayoutStyle,
    /// Gap between parts in the drawing
    pub spacing: f64,
    pub canvas: Option<Canvas>,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            dimensions: BoxDimensions::default(),
            material: MaterialParameters::default(),
            layout: LayoutStyle::Diagrammatic,
            spacing: 25.0,
            canvas: None,
        }
    }
}
