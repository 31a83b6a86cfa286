use super::events::*;
use super::render::*;
use super::state::*;
use super::style::*;

use quad_curves::*;
use quad_canvas::*;

///
/// Finds the point under a location, if there is one
///
/// Points are tried in the point set's fixed order and the first one whose marker contains
/// the location wins. The marker boundary itself is a miss.
///
pub fn hit_test(points: &PointSet, location: Coord2, radius: f64) -> Option<PointLabel> {
    for (label, position) in points.ordered_points() {
        let offset = position - location;

        if offset.dot(&offset) < radius*radius {
            return Some(label);
        }
    }

    None
}

///
/// Moves one point of a point set by a delta, leaving the other points alone
///
pub fn apply_drag(points: &mut PointSet, label: PointLabel, delta: Coord2) {
    let new_position = points.position(label) + delta;

    points.set_position(label, new_position);
}

///
/// Runs the demo: tracks the three points as the pointer drags them around and keeps a
/// canvas up to date with what they currently look like
///
pub struct DemoController {
    /// The points that define the curve
    points: PointSet,

    /// The point being dragged, if there is one
    drag: Option<DragState>,

    /// Styles for the rendered elements
    style: StyleSpec,

    /// What the render pass draws
    options: RenderOptions,

    /// Offset from window coordinates to canvas coordinates
    window_offset: (f64, f64),

    /// Canvas that displays the demo
    canvas: Canvas
}

impl DemoController {
    ///
    /// Creates a controller showing the initial demo curve
    ///
    pub fn new(style: StyleSpec, options: RenderOptions, window_offset: (f64, f64)) -> DemoController {
        let points      = PointSet::new(Coord2(200.0, 350.0), Coord2(500.0, 200.0), Coord2(600.0, 350.0));

        let controller  = DemoController {
            points:         points,
            drag:           None,
            style:          style,
            options:        options,
            window_offset:  window_offset,
            canvas:         Canvas::new()
        };

        controller.redraw();
        controller
    }

    ///
    /// The current positions of the three points
    ///
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    ///
    /// True while a point is being dragged
    ///
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    ///
    /// The drawing instructions for the current state of the demo
    ///
    pub fn drawing(&self) -> Vec<Draw> {
        self.canvas.get_drawing()
    }

    ///
    /// Updates the controller with a pointer event
    ///
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event.action {
            PointerAction::ButtonDown   => self.start_drag(event),
            PointerAction::Move         => self.continue_drag(event),

            PointerAction::ButtonUp     |
            PointerAction::Leave        => self.finish_drag()
        }
    }

    ///
    /// Renders the current state of the demo to the canvas
    ///
    pub fn redraw(&self) {
        self.canvas.draw(|gc| {
            render_demo(gc, &self.points, &self.style, &self.options);
        });
    }

    ///
    /// Converts an event's window location to canvas coordinates
    ///
    fn canvas_location(&self, event: PointerEvent) -> Coord2 {
        let (x, y)                  = event.location_in_window;
        let (offset_x, offset_y)    = self.window_offset;

        Coord2(x - offset_x, y - offset_y)
    }

    ///
    /// Begins dragging if the pointer went down over one of the points
    ///
    fn start_drag(&mut self, event: PointerEvent) {
        if self.drag.is_some() {
            return;
        }

        let location    = self.canvas_location(event);
        let radius      = self.style.point.radius as f64;

        if let Some(hit) = hit_test(&self.points, location, radius) {
            debug!("Started dragging {}", hit);

            self.drag = Some(DragState {
                dragged_point: hit,
                last_position: location
            });
        }
    }

    ///
    /// Moves the dragged point along with the pointer
    ///
    fn continue_drag(&mut self, event: PointerEvent) {
        let location = self.canvas_location(event);

        if location.is_nan() {
            debug!("Ignoring a pointer move to a non-finite location");
            return;
        }

        let dragged = if let Some(drag) = &mut self.drag {
            let delta           = location - drag.last_position;
            drag.last_position  = location;

            Some((drag.dragged_point, delta))
        } else {
            None
        };

        if let Some((label, delta)) = dragged {
            apply_drag(&mut self.points, label, delta);
            self.redraw();
        }
    }

    ///
    /// Stops dragging (the pointer was released or left the window)
    ///
    fn finish_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!("Finished dragging {}", drag.dragged_point);

            self.redraw();
        }
    }
}
