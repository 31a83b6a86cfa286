use super::basis::*;
use super::solve::*;

use super::super::geo::*;
use super::super::coordinate::*;

use itertools::*;

const LENGTH_SUBDIVISIONS: usize = 16;

///
/// Trait implemented by quadratic bezier curves that can create new versions of themselves
///
pub trait QuadraticCurveFactory: QuadraticCurve {
    ///
    /// Creates a new curve of the same type from a start point, a control point and an end point
    ///
    fn from_points(start: Self::Point, control_point: Self::Point, end: Self::Point) -> Self;
}

///
/// Trait implemented by things representing a quadratic bezier curve
///
pub trait QuadraticCurve: Geo+Clone+Sized {
    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// The control point of this curve
    ///
    fn control_point(&self) -> Self::Point;

    ///
    /// Reverses the direction of this curve
    ///
    fn reverse<Curve: QuadraticCurveFactory<Point=Self::Point>>(self) -> Curve {
        Curve::from_points(self.end_point(), self.control_point(), self.start_point())
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Self::Point {
        basis(t, self.start_point(), self.control_point(), self.end_point())
    }

    ///
    /// Given a point that is on or very close to the curve, returns the t value where the point can be found
    /// (or None if the point is not very close to the curve)
    ///
    #[inline]
    fn t_for_point(&self, point: &Self::Point) -> Option<f64> {
        solve_curve_for_t(self, point)
    }

    ///
    /// Returns a polyline approximation of this curve, sampled at evenly spaced t values
    ///
    /// The result contains `steps+1` points: the first is the start point of the curve and
    /// the last is the end point.
    ///
    fn sample(&self, steps: usize) -> Vec<Self::Point> {
        let steps = steps.max(1);

        (0..=steps)
            .map(|step| self.point_at_pos((step as f64)/(steps as f64)))
            .collect()
    }

    ///
    /// Attempts to estimate the length of this curve between t=0 and max_t
    ///
    fn estimate_length(&self, max_t: f64) -> f64 {
        let samples = (0..=LENGTH_SUBDIVISIONS)
            .map(|step| self.point_at_pos((step as f64)/(LENGTH_SUBDIVISIONS as f64)*max_t))
            .collect::<Vec<_>>();

        polyline_length(&samples)
    }
}

///
/// Computes the length of a polyline by summing the lengths of its chords
///
pub fn polyline_length<Point: Coordinate>(points: &[Point]) -> f64 {
    points.iter()
        .tuple_windows()
        .map(|(p1, p2)| p1.distance_to(p2))
        .sum()
}

///
/// Represents a quadratic bezier curve
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curve<Coord: Coordinate> {
    pub start_point:    Coord,
    pub control_point:  Coord,
    pub end_point:      Coord
}

impl<Coord: Coordinate> Geo for Curve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> QuadraticCurveFactory for Curve<Coord> {
    fn from_points(start: Coord, control_point: Coord, end: Coord) -> Self {
        Curve {
            start_point:    start,
            control_point:  control_point,
            end_point:      end
        }
    }
}

impl<Coord: Coordinate> QuadraticCurve for Curve<Coord> {
    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn control_point(&self) -> Coord {
        self.control_point
    }
}
