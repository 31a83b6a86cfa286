use super::draw::*;
use super::color::*;

use curves::*;
use curves::bezier::QuadraticCurve;

use std::f32;

///
/// A graphics context provides the basic set of graphics actions that can be performed
///
pub trait GraphicsContext {
    fn new_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quadratic_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn arc(&mut self, center_x: f32, center_y: f32, radius: f32, start_angle: f32, end_angle: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn line_width(&mut self, width: f32);
    fn line_join(&mut self, join: LineJoin);
    fn line_cap(&mut self, cap: LineCap);
    fn stroke_color(&mut self, col: Color);
    fn fill_color(&mut self, col: Color);
    fn clear_canvas(&mut self);

    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            NewPath                                 => self.new_path(),
            Move(x, y)                              => self.move_to(x, y),
            Line(x, y)                              => self.line_to(x, y),
            QuadraticCurve((x1, y1), (x2, y2))      => self.quadratic_curve_to(x1, y1, x2, y2),
            Arc((x, y), radius, (start, end))       => self.arc(x, y, radius, start, end),
            ClosePath                               => self.close_path(),
            Fill                                    => self.fill(),
            Stroke                                  => self.stroke(),
            LineWidth(width)                        => self.line_width(width),
            LineJoin(join)                          => self.line_join(join),
            LineCap(cap)                            => self.line_cap(cap),
            StrokeColor(col)                        => self.stroke_color(col),
            FillColor(col)                          => self.fill_color(col),
            ClearCanvas                             => self.clear_canvas()
        }
    }
}

///
/// GraphicsPrimitives adds new primitives that can be built directly from a graphics context
///
pub trait GraphicsPrimitives : GraphicsContext {
    ///
    /// Draws a circle at a particular point
    ///
    fn circle(&mut self, center_x: f32, center_y: f32, radius: f32) {
        for d in draw_circle(center_x, center_y, radius) {
            self.draw(d);
        }
    }

    ///
    /// Draws a series of connected lines through a set of points
    ///
    fn polyline(&mut self, points: &[(f32, f32)]) {
        for d in draw_polyline(points) {
            self.draw(d);
        }
    }
}

///
/// Returns the drawing commands for a circle
///
pub fn draw_circle(center_x: f32, center_y: f32, radius: f32) -> Vec<Draw> {
    use self::Draw::*;

    // The arc starts at angle 0, on the positive x side of the center
    vec![
        Move(center_x+radius, center_y),
        Arc((center_x, center_y), radius, (0.0, 2.0*f32::consts::PI)),
        ClosePath
    ]
}

///
/// Returns the drawing commands for a series of connected lines
///
pub fn draw_polyline(points: &[(f32, f32)]) -> Vec<Draw> {
    use self::Draw::*;

    let mut line_drawing = vec![];

    for (index, (x, y)) in points.iter().enumerate() {
        if index == 0 {
            line_drawing.push(Move(*x, *y));
        } else {
            line_drawing.push(Line(*x, *y));
        }
    }

    line_drawing
}

impl<'a, Curve: QuadraticCurve> From<&'a Curve> for Draw
where Curve::Point: Coordinate2D {
    fn from(curve: &'a Curve) -> Draw {
        let end = curve.end_point();
        let cp  = curve.control_point();

        Draw::QuadraticCurve(
            (end.x() as f32, end.y() as f32),
            (cp.x() as f32, cp.y() as f32))
    }
}

///
/// Draws the specified bezier curve in a graphics context (assuming we're already at the start position)
///
pub fn gc_draw_bezier<Gc: GraphicsContext+?Sized, Curve: QuadraticCurve>(gc: &mut Gc, curve: &Curve)
where Curve::Point: Coordinate2D {
    gc.draw(Draw::from(curve))
}

///
/// A Vec<Draw> can be treated as a target for graphics primitives (just pushing the appropriate draw instructions)
///
impl GraphicsContext for Vec<Draw> {
    #[inline] fn new_path(&mut self)                                                    { self.push(Draw::NewPath); }
    #[inline] fn move_to(&mut self, x: f32, y: f32)                                     { self.push(Draw::Move(x, y)); }
    #[inline] fn line_to(&mut self, x: f32, y: f32)                                     { self.push(Draw::Line(x, y)); }
    #[inline] fn quadratic_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32)      { self.push(Draw::QuadraticCurve((x1, y1), (x2, y2))); }
    #[inline] fn arc(&mut self, center_x: f32, center_y: f32, radius: f32, start_angle: f32, end_angle: f32) { self.push(Draw::Arc((center_x, center_y), radius, (start_angle, end_angle))); }
    #[inline] fn close_path(&mut self)                                                  { self.push(Draw::ClosePath); }
    #[inline] fn fill(&mut self)                                                        { self.push(Draw::Fill); }
    #[inline] fn stroke(&mut self)                                                      { self.push(Draw::Stroke); }
    #[inline] fn line_width(&mut self, width: f32)                                      { self.push(Draw::LineWidth(width)); }
    #[inline] fn line_join(&mut self, join: LineJoin)                                   { self.push(Draw::LineJoin(join)); }
    #[inline] fn line_cap(&mut self, cap: LineCap)                                      { self.push(Draw::LineCap(cap)); }
    #[inline] fn stroke_color(&mut self, col: Color)                                    { self.push(Draw::StrokeColor(col)); }
    #[inline] fn fill_color(&mut self, col: Color)                                      { self.push(Draw::FillColor(col)); }
    #[inline] fn clear_canvas(&mut self)                                                { self.push(Draw::ClearCanvas); }

    #[inline]
    fn draw(&mut self, d: Draw) {
        self.push(d);
    }
}

///
/// A Vec<Draw> can be treated as a target for graphics primitives (just pushing the appropriate draw instructions)
///
impl GraphicsPrimitives for Vec<Draw> {

}
