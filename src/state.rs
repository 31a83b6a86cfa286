use quad_curves::*;

use std::fmt;

///
/// Identifies one of the three points that define the demo curve
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum PointLabel {
    /// The start point of the curve
    P1,

    /// The interpolation point (the control point in standard mode)
    Cp1,

    /// The end point of the curve
    P2
}

impl fmt::Display for PointLabel {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PointLabel::P1  => write!(formatter, "p1"),
            PointLabel::Cp1 => write!(formatter, "cp1"),
            PointLabel::P2  => write!(formatter, "p2")
        }
    }
}

///
/// The three points that define the demo curve
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PointSet {
    /// Start point of the curve
    pub p1: Coord2,

    /// Point the curve is dragged towards
    pub cp1: Coord2,

    /// End point of the curve
    pub p2: Coord2
}

impl PointSet {
    ///
    /// Creates a point set from the positions of the three points
    ///
    pub fn new(p1: Coord2, cp1: Coord2, p2: Coord2) -> PointSet {
        PointSet {
            p1:     p1,
            cp1:    cp1,
            p2:     p2
        }
    }

    ///
    /// Returns the current position of a point
    ///
    pub fn position(&self, label: PointLabel) -> Coord2 {
        match label {
            PointLabel::P1  => self.p1,
            PointLabel::Cp1 => self.cp1,
            PointLabel::P2  => self.p2
        }
    }

    ///
    /// Moves a point to a new position
    ///
    pub fn set_position(&mut self, label: PointLabel, new_position: Coord2) {
        match label {
            PointLabel::P1  => { self.p1 = new_position; },
            PointLabel::Cp1 => { self.cp1 = new_position; },
            PointLabel::P2  => { self.p2 = new_position; }
        }
    }

    ///
    /// The points with their labels, in the order they are hit-tested and rendered
    ///
    pub fn ordered_points(&self) -> Vec<(PointLabel, Coord2)> {
        vec![
            (PointLabel::P1,    self.p1),
            (PointLabel::Cp1,   self.cp1),
            (PointLabel::P2,    self.p2)
        ]
    }
}

///
/// Tracks the point that is currently being dragged
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DragState {
    /// The point that is being dragged
    pub dragged_point: PointLabel,

    /// The last pointer position, in canvas coordinates
    pub last_position: Coord2
}
