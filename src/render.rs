use super::state::*;
use super::style::*;

use quad_curves::*;
use quad_curves::bezier;
use quad_canvas::*;

///
/// How the main curve interprets the dragged interpolation point
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum CurveMode {
    /// cp1 is used directly as the curve's control point
    Standard,

    /// The control point is adjusted so that the curve passes through cp1
    PassThroughControlPoint
}

///
/// Options for what the render pass draws
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct RenderOptions {
    /// How the main curve is built from the points
    pub mode: CurveMode,

    /// Set to false to hide the two fitted curves
    pub show_fit_curves: bool,

    /// Parameter range that the extended fit is sampled over
    pub extended_range: (f64, f64),

    /// Parameter distance between samples of the fitted curves
    pub sample_step: f64
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            mode:               CurveMode::PassThroughControlPoint,
            show_fit_curves:    true,
            extended_range:     (-0.5, 1.5),
            sample_step:        0.01
        }
    }
}

impl RenderOptions {
    ///
    /// The extended range, clamped to the parameter range that the extended fit supports
    ///
    pub fn clamped_extended_range(&self) -> (f64, f64) {
        let (min_t, max_t) = self.extended_range;

        (min_t.max(bezier::EXTENDED_RANGE_MIN), max_t.min(bezier::EXTENDED_RANGE_MAX))
    }
}

///
/// Converts a set of sampled points to the coordinate pairs used by the canvas
///
fn polyline_coords<Point: Coordinate2D>(points: &[Point]) -> Vec<(f32, f32)> {
    points.iter()
        .map(|point| (point.x() as f32, point.y() as f32))
        .collect()
}

///
/// Renders the demo into a graphics context
///
/// The elements are drawn back to front: the control polygon, then the main curve, then the
/// fitted curves when they're enabled, then the point markers. A degenerate interpolation
/// point (one on top of an end point) skips the curves that can't be built from it; the rest
/// of the frame still renders.
///
pub fn render_demo(gc: &mut dyn GraphicsPrimitives, points: &PointSet, style: &StyleSpec, options: &RenderOptions) {
    let p1  = points.p1;
    let cp1 = points.cp1;
    let p2  = points.p2;

    gc.clear_canvas();
    gc.line_join(LineJoin::Round);
    gc.line_cap(LineCap::Round);

    // Control polygon between the three points
    gc.new_path();
    gc.line_width(style.control_line.width);
    gc.stroke_color(style.control_line.color);
    gc.move_to(p1.x() as _, p1.y() as _);
    gc.line_to(cp1.x() as _, cp1.y() as _);
    gc.line_to(p2.x() as _, p2.y() as _);
    gc.stroke();

    // Main curve, using the canvas's native quadratic instruction
    gc.new_path();
    gc.line_width(style.curve.width);
    gc.stroke_color(style.curve.color);
    gc.move_to(p1.x() as _, p1.y() as _);

    match options.mode {
        CurveMode::Standard => {
            let curve = bezier::Curve::from_points(p1, cp1, p2);

            gc_draw_bezier(gc, &curve);
        },

        CurveMode::PassThroughControlPoint => {
            let through_curve: Result<bezier::Curve<_>, _> = bezier::curve_through_point(p1, cp1, p2);

            match through_curve {
                Ok(curve)   => { gc_draw_bezier(gc, &curve); },
                Err(err)    => { warn!("Not drawing the pass-through curve: {:?}", err); }
            }
        }
    }

    gc.stroke();

    // The experimental fitted curves, drawn as polylines
    if options.show_fit_curves {
        let steps = (1.0/options.sample_step).round().max(1.0) as usize;

        match bezier::fit_through_point(&p1, &cp1, &p2) {
            Ok(fitted) => {
                gc.new_path();
                gc.line_width(style.fitted_curve.width);
                gc.stroke_color(style.fitted_curve.color);
                gc.polyline(&polyline_coords(&fitted.sample(steps)));
                gc.stroke();
            },

            Err(err) => { warn!("Not drawing the fitted curve: {:?}", err); }
        }

        match bezier::fit_through_point_extended(&p1, &cp1, &p2) {
            Ok(extended) => {
                let (min_t, max_t) = options.clamped_extended_range();

                gc.new_path();
                gc.line_width(style.extended_curve.width);
                gc.stroke_color(style.extended_curve.color);
                gc.polyline(&polyline_coords(&extended.sample_range(min_t, max_t, options.sample_step)));
                gc.stroke();
            },

            Err(err) => { warn!("Not drawing the extended fit: {:?}", err); }
        }
    }

    // Markers for the draggable points
    for (_, position) in points.ordered_points() {
        gc.new_path();
        gc.line_width(style.point.width);
        gc.stroke_color(style.point.color);
        gc.fill_color(style.point.fill);
        gc.circle(position.x() as _, position.y() as _, style.point.radius);
        gc.fill();
        gc.stroke();
    }
}
