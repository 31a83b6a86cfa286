use super::fit::*;
use super::curve::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// Computes the control point that makes a quadratic bezier curve between `start` and `end` pass
/// through the `through` point
///
/// The control point is pushed out to the far side of the through point, which pulls the curve
/// across it: the curve reaches the through point at the t value returned by
/// `pass_through_parameter`.
///
pub fn control_point_through<Point: Coordinate>(start: &Point, through: &Point, end: &Point) -> Result<Point, CurveFitError> {
    let offset1     = *start - *through;
    let offset2     = *end - *through;

    let distance1   = offset1.magnitude();
    let distance2   = offset2.magnitude();

    // No control point exists if the through point is on top of either end point
    if distance1 < SMALL_DISTANCE || distance2 < SMALL_DISTANCE {
        return Err(CurveFitError::DegenerateControlPoint);
    }

    let direction   = offset1.to_unit_vector() + offset2.to_unit_vector();

    Ok(*through - direction*(f64::sqrt(distance1*distance2)/2.0))
}

///
/// Creates a quadratic bezier curve that starts at `start`, ends at `end` and passes through the
/// `through` point
///
pub fn curve_through_point<Curve: QuadraticCurveFactory>(start: Curve::Point, through: Curve::Point, end: Curve::Point) -> Result<Curve, CurveFitError> {
    let control_point = control_point_through(&start, &through, &end)?;

    Ok(Curve::from_points(start, control_point, end))
}

///
/// Returns the t value where a curve created by `curve_through_point` passes through its
/// `through` point
///
/// This is the same parameterization that `fit_through_point` uses for its interpolation point:
/// the two constructions describe the same curve, so evaluating the curve at this t value
/// recovers the through point.
///
pub fn pass_through_parameter<Point: Coordinate>(start: &Point, through: &Point, end: &Point) -> Result<f64, CurveFitError> {
    weighted_chord_parameter(start, through, end, FIT_CHORD_EXPONENT)
}
