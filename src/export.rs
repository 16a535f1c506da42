//! Cut plan export
//!
//! Renders a [`BoxCutPlan`] as an SVG document, raw SVG path data or laser
//! G-code. All coordinates are millimetres.

use fingerbox_core::Point;
use fingerbox_joinery::BoxCutPlan;
use fingerbox_settings::OutputSettings;

/// Margin around the plan bounds in SVG output
const SVG_PADDING: f64 = 10.0;
/// Z height for rapid moves between edges
const SAFE_Z: f64 = 5.0;

fn bounds_or_origin(plan: &BoxCutPlan) -> (Point, Point) {
    plan.bounds().unwrap_or((Point::ORIGIN, Point::ORIGIN))
}

fn group_id(index: usize, name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("panel-{}-{}", index + 1, slug)
}

/// Standalone SVG: one `<g>` per panel holding one `<path>` per edge
pub fn to_svg_document(plan: &BoxCutPlan, output: &OutputSettings) -> String {
    let (min, max) = bounds_or_origin(plan);
    let min_x = min.x - SVG_PADDING;
    let min_y = min.y - SVG_PADDING;
    let width = max.x - min.x + 2.0 * SVG_PADDING;
    let height = max.y - min.y + 2.0 * SVG_PADDING;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{:.2}mm" height="{:.2}mm" viewBox="{:.2} {:.2} {:.2} {:.2}" xmlns="http://www.w3.org/2000/svg">
"#,
        width, height, min_x, min_y, width, height
    ));
    svg.push_str(&format!(
        "<!-- {}x{}x{} mm box, {} mm material, layout {} -->\n",
        plan.dimensions.x,
        plan.dimensions.y,
        plan.dimensions.z,
        plan.thickness,
        plan.layout.label()
    ));

    let style = format!(
        "fill:none;stroke:black;stroke-width:{}",
        output.stroke_width
    );
    for (i, panel) in plan.panels.iter().enumerate() {
        svg.push_str(&format!(r#"<g id="{}">"#, group_id(i, panel.name)));
        svg.push('\n');
        for edge in &panel.edges {
            svg.push_str(&format!(
                r#"<path d="{}" style="{}" />"#,
                edge.to_path_data(),
                style
            ));
            svg.push('\n');
        }
        svg.push_str("</g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Path data only, one edge per line in panel order
pub fn to_path_data(plan: &BoxCutPlan) -> String {
    let mut out = String::new();
    for edge in plan.edges() {
        out.push_str(&edge.to_path_data());
        out.push('\n');
    }
    out
}

/// Laser G-code. Every edge is cut as its own open path; the plan is
/// shifted so its lower left corner lands on the configured offset.
pub fn to_gcode(plan: &BoxCutPlan, output: &OutputSettings) -> String {
    let mut gcode = String::new();

    gcode.push_str("; Finger-jointed box G-code\n");
    gcode.push_str(";\n");
    gcode.push_str("; --- Box Dimensions ---\n");
    gcode.push_str(&format!(
        "; Outside dimensions: {}x{}x{} mm\n",
        plan.dimensions.x, plan.dimensions.y, plan.dimensions.z
    ));
    gcode.push_str(&format!("; Layout: {}\n", plan.layout.label()));
    gcode.push_str(&format!("; Panels: {}\n", plan.panels.len()));
    gcode.push_str(";\n");

    gcode.push_str("; --- Material Settings ---\n");
    gcode.push_str(&format!("; Material thickness: {} mm\n", plan.thickness));
    gcode.push_str(&format!("; Joint correction: {} mm\n", plan.correction));
    gcode.push_str(";\n");

    gcode.push_str("; --- Laser Settings ---\n");
    gcode.push_str(&format!("; Laser passes: {}\n", output.laser_passes));
    gcode.push_str(&format!("; Laser power: S{}\n", output.laser_power));
    gcode.push_str(&format!("; Feed rate: {:.0} mm/min\n", output.feed_rate));
    gcode.push_str(&format!("; Offset X: {} mm\n", output.offset_x));
    gcode.push_str(&format!("; Offset Y: {} mm\n", output.offset_y));
    gcode.push_str(";\n");

    gcode.push_str("G21 ; Set units to millimeters\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str("G17 ; XY plane selection\n");
    gcode.push_str("G54 ; Select work coordinate system 1\n");
    gcode.push_str(&format!("G0 Z{:.2} ; Move to safe height\n\n", SAFE_Z));

    let (min, _) = bounds_or_origin(plan);
    let shift = Point::new(output.offset_x - min.x, output.offset_y - min.y);

    for panel in &plan.panels {
        gcode.push_str(&format!("; Panel: {}\n", panel.name));

        for (e, edge) in panel.edges.iter().enumerate() {
            let path: Vec<Point> = edge.vertices().into_iter().map(|p| p + shift).collect();
            let Some(first) = path.first() else {
                continue;
            };

            gcode.push_str(&format!("; Edge {}\n", e + 1));
            gcode.push_str(&format!(
                "G0 X{:.3} Y{:.3} ; Rapid to start\n",
                first.x, first.y
            ));

            for pass in 1..=output.laser_passes {
                let z_depth = -(pass as f64 - 1.0) * output.z_step_down;
                if output.laser_passes > 1 {
                    gcode.push_str(&format!(
                        "; Pass {}/{} at Z{:.2}\n",
                        pass, output.laser_passes, z_depth
                    ));
                }
                if pass > 1 && output.z_step_down > 0.0 {
                    gcode.push_str(&format!("G0 Z{:.2} ; Move to pass depth\n", z_depth));
                }

                gcode.push_str(&format!("M3 S{} ; Laser on\n", output.laser_power));
                for (idx, point) in path.iter().skip(1).enumerate() {
                    if idx == 0 {
                        gcode.push_str(&format!(
                            "G1 X{:.3} Y{:.3} F{:.0}\n",
                            point.x, point.y, output.feed_rate
                        ));
                    } else {
                        gcode.push_str(&format!("G1 X{:.3} Y{:.3}\n", point.x, point.y));
                    }
                }
                gcode.push_str("M5 ; Laser off\n");

                if pass < output.laser_passes {
                    gcode.push_str(&format!(
                        "G0 X{:.3} Y{:.3} ; Return to start\n",
                        first.x, first.y
                    ));
                }
            }
        }

        gcode.push('\n');
    }

    gcode.push_str("M5 ; Ensure laser off\n");
    gcode.push_str(&format!("G0 Z{:.2} ; Move to safe height\n", SAFE_Z));
    gcode.push_str("G0 X0 Y0 ; Return to origin\n");
    gcode.push_str("M2 ; Program end\n");

    gcode
}
