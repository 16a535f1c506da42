//! Panel layout templates
//!
//! Each layout style is a fixed table of panel records. A record places the
//! panel's root corner as an integer combination of the part spacing and
//! the three box dimensions, names which dimensions the panel spans, and
//! fixes the tab/slot state of its four edges. The tables are authored
//! independently; none is derived from another.

use fingerbox_core::Point;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::edge_joint::EdgeSpec;
use crate::tabbed_box::types::{
    BoxAxis, JointKind, LayoutStyle, OutsideDimensions, PanelEdge, TabPattern,
};

/// Integer coefficients on (spacing, X, Y, Z) for one root coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootFormula {
    pub spacing: i32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl RootFormula {
    pub const fn new(spacing: i32, x: i32, y: i32, z: i32) -> Self {
        Self { spacing, x, y, z }
    }

    pub fn resolve(&self, spacing: f64, dims: &OutsideDimensions) -> f64 {
        spacing * self.spacing as f64
            + dims.x * self.x as f64
            + dims.y * self.y as f64
            + dims.z * self.z as f64
    }
}

/// One panel of a layout template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelTemplate {
    pub name: &'static str,
    pub root_x: RootFormula,
    pub root_y: RootFormula,
    pub dx: BoxAxis,
    pub dy: BoxAxis,
    pub pattern: TabPattern,
}

const fn panel(
    name: &'static str,
    root_x: (i32, i32, i32, i32),
    root_y: (i32, i32, i32, i32),
    dx: BoxAxis,
    dy: BoxAxis,
    bits: u8,
) -> PanelTemplate {
    PanelTemplate {
        name,
        root_x: RootFormula::new(root_x.0, root_x.1, root_x.2, root_x.3),
        root_y: RootFormula::new(root_y.0, root_y.1, root_y.2, root_y.3),
        dx,
        dy,
        pattern: TabPattern::from_bits(bits),
    }
}

use BoxAxis::{X, Y, Z};

static DIAGRAMMATIC: [PanelTemplate; 6] = [
    panel("Front", (2, 0, 0, 1), (3, 0, 1, 1), X, Z, 0b1010),
    panel("Left", (1, 0, 0, 0), (2, 0, 0, 1), Z, Y, 0b1111),
    panel("Bottom", (2, 0, 0, 1), (2, 0, 0, 1), X, Y, 0b0000),
    panel("Right", (3, 1, 0, 1), (2, 0, 0, 1), Z, Y, 0b1111),
    panel("Top", (4, 1, 0, 2), (2, 0, 0, 1), X, Y, 0b0000),
    panel("Back", (2, 0, 0, 1), (1, 0, 0, 0), X, Z, 0b1010),
];

static THREE_PIECE: [PanelTemplate; 3] = [
    panel("Front", (2, 0, 0, 1), (2, 0, 1, 0), X, Z, 0b1010),
    panel("Side", (1, 0, 0, 0), (1, 0, 0, 0), Z, Y, 0b1111),
    panel("Bottom", (2, 0, 0, 1), (1, 0, 0, 0), X, Y, 0b0000),
];

static INLINE: [PanelTemplate; 6] = [
    panel("Bottom", (1, 0, 0, 0), (1, 0, 0, 0), X, Y, 0b0000),
    panel("Top", (2, 1, 0, 0), (1, 0, 0, 0), X, Y, 0b0000),
    panel("Left", (3, 2, 0, 0), (1, 0, 0, 0), Z, Y, 0b0101),
    panel("Right", (4, 2, 0, 1), (1, 0, 0, 0), Z, Y, 0b0101),
    panel("Front", (5, 2, 0, 2), (1, 0, 0, 0), X, Z, 0b1111),
    panel("Back", (6, 3, 0, 2), (1, 0, 0, 0), X, Z, 0b1111),
];

static DIAGRAMMATIC_ALTERNATE: [PanelTemplate; 6] = [
    panel("Front", (2, 0, 0, 1), (3, 0, 1, 1), X, Z, 0b1001),
    panel("Left", (1, 0, 0, 0), (2, 0, 0, 1), Z, Y, 0b1100),
    panel("Bottom", (2, 0, 0, 1), (2, 0, 0, 1), X, Y, 0b1100),
    panel("Right", (3, 1, 0, 1), (2, 0, 0, 1), Z, Y, 0b0110),
    panel("Top", (4, 1, 0, 2), (2, 0, 0, 1), X, Y, 0b0110),
    panel("Back", (2, 0, 0, 1), (1, 0, 0, 0), X, Z, 0b1100),
];

/// The template table for a style
pub fn template(style: LayoutStyle) -> &'static [PanelTemplate] {
    match style {
        LayoutStyle::Diagrammatic => &DIAGRAMMATIC,
        LayoutStyle::ThreePiece => &THREE_PIECE,
        LayoutStyle::Inline => &INLINE,
        LayoutStyle::DiagrammaticAlternate => &DIAGRAMMATIC_ALTERNATE,
    }
}

/// A panel resolved into drawing space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedPanel {
    pub name: &'static str,
    pub root: Point,
    pub dx: f64,
    pub dy: f64,
    pub pattern: TabPattern,
}

impl PlacedPanel {
    /// Inputs for the four edge generator calls, in winding order
    pub fn edge_specs(&self, thickness: f64) -> [EdgeSpec; 4] {
        let bit = |edge| self.pattern.edge(edge).offset();
        let (a, b, c, d) = (
            bit(PanelEdge::A),
            bit(PanelEdge::B),
            bit(PanelEdge::C),
            bit(PanelEdge::D),
        );
        let kind = |edge| self.pattern.edge(edge);
        let t = thickness;
        let (x, y, dx, dy) = (self.root.x, self.root.y, self.dx, self.dy);

        // A and D step toward -t when tabbed, B and C toward +t
        let height = |edge: PanelEdge, outward: f64| {
            if kind(edge).is_tab() {
                outward * t
            } else {
                -outward * t
            }
        };

        [
            EdgeSpec {
                root: Point::new(x, y),
                start_offset: (d, a),
                end_offset: (-b, a),
                tab_height: height(PanelEdge::A, -1.0),
                length: dx,
                direction: PanelEdge::A.direction(),
                kind: kind(PanelEdge::A),
            },
            EdgeSpec {
                root: Point::new(x + dx, y),
                start_offset: (-b, a),
                end_offset: (-b, -c),
                tab_height: height(PanelEdge::B, 1.0),
                length: dy,
                direction: PanelEdge::B.direction(),
                kind: kind(PanelEdge::B),
            },
            EdgeSpec {
                root: Point::new(x + dx, y + dy),
                start_offset: (-b, -c),
                end_offset: (d, -c),
                tab_height: height(PanelEdge::C, 1.0),
                length: dx,
                direction: PanelEdge::C.direction(),
                kind: kind(PanelEdge::C),
            },
            EdgeSpec {
                root: Point::new(x, y + dy),
                start_offset: (d, -c),
                end_offset: (d, a),
                tab_height: height(PanelEdge::D, -1.0),
                length: dy,
                direction: PanelEdge::D.direction(),
                kind: kind(PanelEdge::D),
            },
        ]
    }
}

fn edge_code(pattern: &TabPattern) -> String {
    PanelEdge::ALL
        .iter()
        .map(|&edge| match pattern.edge(edge) {
            JointKind::Tab => 'T',
            JointKind::Slot => 'S',
        })
        .collect()
}

/// Resolve every panel of `style` for a box of the given outside dimensions
pub fn layout_pieces(dims: &OutsideDimensions, spacing: f64, style: LayoutStyle) -> Vec<PlacedPanel> {
    template(style)
        .iter()
        .map(|t| {
            let placed = PlacedPanel {
                name: t.name,
                root: Point::new(t.root_x.resolve(spacing, dims), t.root_y.resolve(spacing, dims)),
                dx: dims.axis(t.dx),
                dy: dims.axis(t.dy),
                pattern: t.pattern,
            };
            debug!(
                "Placed {} at {} ({} x {}, edges {})",
                placed.name,
                placed.root,
                placed.dx,
                placed.dy,
                edge_code(&placed.pattern)
            );
            placed
        })
        .collect()
}
