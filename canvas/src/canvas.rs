use super::gc::*;
use super::draw::*;
use super::color::*;

use std::sync::*;
use std::mem;

///
/// The core structure used to store details of a canvas
///
struct CanvasCore {
    /// What was drawn since the last clear command was sent to this canvas
    drawing_since_last_clear: Vec<Draw>
}

///
/// A canvas is an abstract interface for drawing graphics. It doesn't actually provide a means to
/// render anything, but rather a way to describe how things should be drawn and pass those on to
/// a renderer elsewhere.
///
pub struct Canvas {
    /// The core is shared with any graphics contexts that are drawing to this canvas
    core: Mutex<CanvasCore>
}

impl CanvasCore {
    ///
    /// Writes some drawing commands to this core
    ///
    fn write(&mut self, to_draw: Vec<Draw>) {
        // Process the drawing commands
        to_draw.iter().for_each(|draw| {
            match draw {
                &Draw::ClearCanvas => {
                    // Clearing the canvas empties the command list, so only the latest frame is kept
                    self.drawing_since_last_clear = vec![];

                    // Start the new drawing with the 'clear' command
                    self.drawing_since_last_clear.push(*draw);
                },

                // Default is to add to the current drawing
                _ => self.drawing_since_last_clear.push(*draw)
            }
        });
    }
}

impl Canvas {
    ///
    /// Creates a new, blank, canvas
    ///
    pub fn new() -> Canvas {
        // A canvas is initially just a clear command
        let core = CanvasCore {
            drawing_since_last_clear: vec![ Draw::ClearCanvas ]
        };

        Canvas {
            core: Mutex::new(core)
        }
    }

    ///
    /// Sends some new drawing commands to this canvas
    ///
    pub fn write(&self, to_draw: Vec<Draw>) {
        // Only draw if there are any drawing commands
        if to_draw.len() != 0 {
            self.core.lock().unwrap().write(to_draw);
        }
    }

    ///
    /// Provides a way to draw on this canvas via a GC
    ///
    pub fn draw<FnAction>(&self, action: FnAction)
    where FnAction: FnOnce(&mut dyn GraphicsPrimitives) -> () {
        let mut core = self.core.lock().unwrap();

        let mut graphics_context = CoreContext {
            core:       &mut *core,
            pending:    vec![]
        };

        action(&mut graphics_context);
    }

    ///
    /// Retrieves the list of drawing actions in this canvas
    ///
    pub fn get_drawing(&self) -> Vec<Draw> {
        self.core.lock().unwrap().drawing_since_last_clear.clone()
    }
}

///
/// Graphics context built from a canvas core
///
struct CoreContext<'a> {
    core:       &'a mut CanvasCore,
    pending:    Vec<Draw>
}

impl<'a> GraphicsContext for CoreContext<'a> {
    fn new_path(&mut self)                          { self.pending.push(Draw::NewPath); }
    fn move_to(&mut self, x: f32, y: f32)           { self.pending.push(Draw::Move(x, y)); }
    fn line_to(&mut self, x: f32, y: f32)           { self.pending.push(Draw::Line(x, y)); }

    fn quadratic_curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.pending.push(Draw::QuadraticCurve((x1, y1), (x2, y2)));
    }

    fn arc(&mut self, center_x: f32, center_y: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.pending.push(Draw::Arc((center_x, center_y), radius, (start_angle, end_angle)));
    }

    fn close_path(&mut self)                        { self.pending.push(Draw::ClosePath); }
    fn fill(&mut self)                              { self.pending.push(Draw::Fill); }
    fn stroke(&mut self)                            { self.pending.push(Draw::Stroke); }
    fn line_width(&mut self, width: f32)            { self.pending.push(Draw::LineWidth(width)); }
    fn line_join(&mut self, join: LineJoin)         { self.pending.push(Draw::LineJoin(join)); }
    fn line_cap(&mut self, cap: LineCap)            { self.pending.push(Draw::LineCap(cap)); }
    fn stroke_color(&mut self, col: Color)          { self.pending.push(Draw::StrokeColor(col)); }
    fn fill_color(&mut self, col: Color)            { self.pending.push(Draw::FillColor(col)); }
    fn clear_canvas(&mut self)                      { self.pending.push(Draw::ClearCanvas); }

    fn draw(&mut self, d: Draw)                     { self.pending.push(d); }
}

impl<'a> GraphicsPrimitives for CoreContext<'a> { }

impl<'a> Drop for CoreContext<'a> {
    fn drop(&mut self) {
        let mut to_draw = vec![];
        mem::swap(&mut self.pending, &mut to_draw);
        self.core.write(to_draw);
    }
}
