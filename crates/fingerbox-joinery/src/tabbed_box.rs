//! Tabbed Box Maker
//!
//! Builds the complete cut plan for a six-panel finger-jointed box: converts
//! the entered dimensions to outside dimensions, validates the parameter
//! set, places the panels of the chosen layout and generates the four edge
//! polylines of every panel.

pub mod types;

use fingerbox_core::Point;
use serde::Serialize;
use tracing::{debug, info};

use crate::edge_joint::{EdgeJointGenerator, EdgePolyline};
use crate::error::JoineryResult;
use crate::layout::{layout_pieces, PlacedPanel};
use crate::validation::validate;
use types::{BoxDimensions, BoxParameters, MaterialParameters, OutsideDimensions, TabPattern};

pub use types::LayoutStyle;

/// Cut geometry of one panel: four open polylines in winding order A, B, C, D
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelCut {
    pub name: &'static str,
    pub root: Point,
    pub dx: f64,
    pub dy: f64,
    pub pattern: TabPattern,
    pub edges: [EdgePolyline; 4],
}

impl PanelCut {
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.edges.iter().flat_map(|e| e.vertices())
    }
}

/// The cut plan for a whole box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxCutPlan {
    pub panels: Vec<PanelCut>,
    pub dimensions: OutsideDimensions,
    pub thickness: f64,
    pub correction: f64,
    pub layout: LayoutStyle,
}

impl BoxCutPlan {
    pub fn edge_count(&self) -> usize {
        self.panels.len() * 4
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgePolyline> {
        self.panels.iter().flat_map(|p| p.edges.iter())
    }

    /// Minimum and maximum corner over every vertex, `None` for an empty plan
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut vertices = self.panels.iter().flat_map(|p| p.vertices());
        let first = vertices.next()?;
        Some(vertices.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }

    /// Pretty-printed JSON of the whole plan
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub struct TabbedBoxMaker {
    params: BoxParameters,
    dims: OutsideDimensions,
    generator: EdgeJointGenerator,
}

impl TabbedBoxMaker {
    /// Validate the parameters; nothing is generated unless every rule passes
    pub fn new(params: BoxParameters) -> JoineryResult<Self> {
        let material = params.material;
        let dims = params.dimensions.outside(material.thickness);

        validate(&dims, &material, params.spacing, params.canvas.as_ref())?;

        Ok(Self {
            generator: EdgeJointGenerator::new(material.joint_settings()),
            params,
            dims,
        })
    }

    pub fn parameters(&self) -> &BoxParameters {
        &self.params
    }

    /// Outside dimensions the geometry is built on
    pub fn outside_dimensions(&self) -> OutsideDimensions {
        self.dims
    }

    fn cut_panel(&self, placed: &PlacedPanel) -> PanelCut {
        let specs = placed.edge_specs(self.params.material.thickness);
        let edges = specs.map(|spec| {
            let edge = self.generator.generate(&spec);
            debug!(
                "{} edge {:?}: length {} -> {} transitions",
                placed.name,
                spec.direction,
                spec.length,
                edge.transitions.len()
            );
            edge
        });

        PanelCut {
            name: placed.name,
            root: placed.root,
            dx: placed.dx,
            dy: placed.dy,
            pattern: placed.pattern,
            edges,
        }
    }

    pub fn generate(&self) -> BoxCutPlan {
        let panels: Vec<PanelCut> = layout_pieces(&self.dims, self.params.spacing, self.params.layout)
            .iter()
            .map(|placed| self.cut_panel(placed))
            .collect();

        info!(
            "Generated {} panels ({} edges) for a {}x{}x{} box, layout {:?}",
            panels.len(),
            panels.len() * 4,
            self.dims.x,
            self.dims.y,
            self.dims.z,
            self.params.layout
        );

        BoxCutPlan {
            panels,
            dimensions: self.dims,
            thickness: self.params.material.thickness,
            correction: self.params.material.correction(),
            layout: self.params.layout,
        }
    }
}

/// Validate and build the cut plan in one call
pub fn compute_box_cut_plan(
    dimensions: BoxDimensions,
    material: MaterialParameters,
    layout: LayoutStyle,
    spacing: f64,
) -> JoineryResult<BoxCutPlan> {
    let maker = TabbedBoxMaker::new(BoxParameters {
        dimensions,
        material,
        layout,
        spacing,
        canvas: None,
    })?;
    Ok(maker.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JoineryError;

    #[test]
    fn test_default_box() {
        let maker = TabbedBoxMaker::new(BoxParameters::default()).unwrap();
        let plan = maker.generate();
        assert_eq!(plan.panels.len(), 6);
        assert_eq!(plan.edge_count(), 24);
        assert!(plan.edges().all(|e| e.vertices().iter().all(|p| p.is_finite())));
    }

    #[test]
    fn test_invalid_box_produces_no_plan() {
        let params = BoxParameters {
            dimensions: BoxDimensions::new(50.0, 100.0, 100.0),
            ..BoxParameters::default()
        };
        match TabbedBoxMaker::new(params) {
            Err(JoineryError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_inside_dimensions_validated_after_growth() {
        // 60 + 2*10 = 80 >= 3*25
        let params = BoxParameters {
            dimensions: BoxDimensions::new(60.0, 60.0, 60.0).with_inside(true),
            ..BoxParameters::default()
        };
        let maker = TabbedBoxMaker::new(params).unwrap();
        assert_eq!(maker.outside_dimensions().x, 80.0);
    }

    #[test]
    fn test_bounds_cover_panels() {
        let plan = TabbedBoxMaker::new(BoxParameters::default())
            .unwrap()
            .generate();
        let (min, max) = plan.bounds().unwrap();
        // diagrammatic layout: leftmost panel starts one spacing in
        assert_eq!(min, Point::new(25.0, 25.0));
        assert_eq!(max, Point::new(4.0 * 25.0 + 100.0 + 200.0 + 100.0, 3.0 * 25.0 + 200.0 + 100.0));
    }
}
