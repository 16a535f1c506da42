//! Finger-joint edge generator
//!
//! Turns one straight panel edge into the open polyline that cuts its tab or
//! slot pattern. An edge is split into an odd number of divisions so that it
//! starts and ends the same way; divisions alternate between gaps (drawn on
//! the edge's baseline) and fingers (drawn one material thickness away).
//!
//! Kerf and clearance are folded into one signed `correction`. A tab edge
//! widens its fingers and narrows its gaps by `correction`, a slot edge does
//! the opposite, and the first division absorbs half a correction so the
//! pattern stays centred on the edge.

use fingerbox_core::{Direction, Point};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::tabbed_box::types::JointKind;

/// Joint parameters shared by every edge of a box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointSettings {
    pub thickness: f64,
    pub nominal_tab: f64,
    pub equal_tabs: bool,
    /// `kerf - clearance`
    pub correction: f64,
}

/// Input for one edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Corner the edge is anchored to
    pub root: Point,
    /// Start offset in material-thickness units
    pub start_offset: (f64, f64),
    /// End offset in material-thickness units
    pub end_offset: (f64, f64),
    /// Signed perpendicular distance of a finger
    pub tab_height: f64,
    /// Nominal edge length
    pub length: f64,
    pub direction: Direction,
    pub kind: JointKind,
}

/// Widths of the divisions along one edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionWidths {
    pub divisions: usize,
    pub tab_count: usize,
    /// Width of a finger (tab edge) or a notch (slot edge)
    pub tab: f64,
    /// Width of the divisions between them
    pub gap: f64,
    /// Extra advance applied once, on the first division
    pub first_offset: f64,
}

impl DivisionWidths {
    pub fn gap_count(&self) -> usize {
        self.divisions - self.tab_count
    }

    /// Sum of all division widths, excluding the first offset
    pub fn total(&self) -> f64 {
        self.tab_count as f64 * self.tab + self.gap_count() as f64 * self.gap
    }
}

/// Perpendicular step state while walking an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotchPhase {
    /// Stepping away from the baseline
    Outbound,
    /// Stepping back to the baseline
    Return,
}

impl NotchPhase {
    pub fn step(self, tab_height: f64) -> f64 {
        match self {
            NotchPhase::Outbound => tab_height,
            NotchPhase::Return => -tab_height,
        }
    }

    pub fn toggle(self) -> NotchPhase {
        match self {
            NotchPhase::Outbound => NotchPhase::Return,
            NotchPhase::Return => NotchPhase::Outbound,
        }
    }
}

/// One internal division boundary: a run along the edge, then a step across it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub advance: Point,
    pub step: Point,
}

/// Drawing instruction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

impl PathCommand {
    pub fn point(&self) -> Point {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
        }
    }
}

/// Open polyline for one edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgePolyline {
    pub start: Point,
    pub transitions: Vec<Transition>,
    pub end: Point,
}

impl EdgePolyline {
    /// Leading move, one instruction per transition, trailing line
    pub fn instruction_count(&self) -> usize {
        self.transitions.len() + 2
    }

    pub fn vertices(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.transitions.len() * 2 + 2);
        points.push(self.start);
        for t in &self.transitions {
            points.push(t.advance);
            points.push(t.step);
        }
        points.push(self.end);
        points
    }

    pub fn commands(&self) -> Vec<PathCommand> {
        let vertices = self.vertices();
        let mut commands = Vec::with_capacity(vertices.len());
        let mut iter = vertices.into_iter();
        if let Some(first) = iter.next() {
            commands.push(PathCommand::MoveTo(first));
        }
        commands.extend(iter.map(PathCommand::LineTo));
        commands
    }

    pub fn net_displacement(&self) -> Point {
        self.end - self.start
    }

    /// SVG path data, `M x,y L x,y ...`
    pub fn to_path_data(&self) -> String {
        let mut d = String::new();
        for command in self.commands() {
            let (letter, p) = match command {
                PathCommand::MoveTo(p) => ('M', p),
                PathCommand::LineTo(p) => ('L', p),
            };
            let _ = write!(d, "{} {},{} ", letter, p.x, p.y);
        }
        d.truncate(d.trim_end().len());
        d
    }
}

/// Number of divisions that fit `length`: odd, at least one
pub fn division_count(length: f64, nominal_tab: f64) -> usize {
    let raw = (length / nominal_tab).floor();
    if !raw.is_finite() || raw < 1.0 {
        return 1;
    }
    let raw = raw as usize;
    if raw % 2 == 0 {
        raw - 1
    } else {
        raw
    }
}

/// Division widths before kerf/clearance correction
pub fn nominal_widths(settings: &JointSettings, length: f64) -> DivisionWidths {
    let divisions = division_count(length, settings.nominal_tab);
    let tab_count = (divisions - 1) / 2;

    let (tab, gap) = if settings.equal_tabs {
        let w = length / divisions as f64;
        (w, w)
    } else {
        let tab = settings.nominal_tab;
        let gap = (length - tab_count as f64 * tab) / (divisions - tab_count) as f64;
        (tab, gap)
    };

    DivisionWidths {
        divisions,
        tab_count,
        tab,
        gap,
        first_offset: 0.0,
    }
}

/// Division widths with the correction applied for an edge of `kind`
pub fn division_widths(settings: &JointSettings, length: f64, kind: JointKind) -> DivisionWidths {
    let mut widths = nominal_widths(settings, length);
    let c = settings.correction;
    match kind {
        JointKind::Tab => {
            widths.gap -= c;
            widths.tab += c;
            widths.first_offset = c / 2.0;
        }
        JointKind::Slot => {
            widths.gap += c;
            widths.tab -= c;
            widths.first_offset = -c / 2.0;
        }
    }
    widths
}

/// Generates edge polylines for one set of joint settings
#[derive(Debug, Clone, Copy)]
pub struct EdgeJointGenerator {
    settings: JointSettings,
}

impl EdgeJointGenerator {
    pub fn new(settings: JointSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &JointSettings {
        &self.settings
    }

    pub fn generate(&self, spec: &EdgeSpec) -> EdgePolyline {
        generate_tabbed_edge(&self.settings, spec)
    }
}

/// Build the polyline for one tabbed or slotted edge
pub fn generate_tabbed_edge(settings: &JointSettings, spec: &EdgeSpec) -> EdgePolyline {
    let t = settings.thickness;
    let widths = division_widths(settings, spec.length, spec.kind);
    let along = spec.direction.unit();
    let across = spec.direction.across();

    let start = spec.root + Point::new(spec.start_offset.0 * t, spec.start_offset.1 * t);
    // walk from the root's position on the travel axis, keep the offset across it
    let mut cursor = spec.direction.align_to(start, spec.root);

    let mut phase = NotchPhase::Outbound;
    let mut first = widths.first_offset;
    let mut transitions = Vec::with_capacity(widths.divisions.saturating_sub(1));

    for n in 1..widths.divisions {
        let width = if n % 2 == 1 {
            widths.gap + first
        } else {
            widths.tab
        };
        cursor = cursor + along * width;
        let advance = cursor;
        cursor = cursor + across * phase.step(spec.tab_height);
        transitions.push(Transition {
            advance,
            step: cursor,
        });

        phase = phase.toggle();
        first = 0.0;
    }

    let end = spec.root
        + Point::new(spec.end_offset.0 * t, spec.end_offset.1 * t)
        + along * spec.length;

    EdgePolyline {
        start,
        transitions,
        end,
    }
}
