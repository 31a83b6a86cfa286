use super::curve::*;
use super::super::consts::*;
use super::super::coordinate::*;

/// Exponent applied to the squared length of a chord when weighting the chords on either side of
/// the interpolation point
pub const FIT_CHORD_EXPONENT: f64 = 0.25;

/// Smallest parameter value where the extended fit still maps into the fitted polynomial
pub const EXTENDED_RANGE_MIN: f64 = -1.0;

/// Largest parameter value where the extended fit still maps into the fitted polynomial
pub const EXTENDED_RANGE_MAX: f64 = 2.0;

///
/// Possible error from fitting a curve through an interpolation point
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveFitError {
    /// The interpolation point is too close to one of the end points for a fit to exist
    DegenerateControlPoint
}

///
/// Computes the t value where a curve fitted through an interpolation point should pass through
/// that point
///
/// The chords on either side of the interpolation point are weighted by raising their squared
/// lengths to the supplied exponent: an exponent of 0.5 produces the usual chord-length
/// parameterization, and lower exponents move the parameter towards the centre of the curve.
///
pub fn weighted_chord_parameter<Point: Coordinate>(start: &Point, interpolation_point: &Point, end: &Point, exponent: f64) -> Result<f64, CurveFitError> {
    let offset1 = *interpolation_point - *start;
    let offset2 = *end - *interpolation_point;

    // If the interpolation point is on top of either end point there's no useful parameterization
    let min_distance_sq = SMALL_DISTANCE * SMALL_DISTANCE;
    if offset1.dot(&offset1) < min_distance_sq || offset2.dot(&offset2) < min_distance_sq {
        return Err(CurveFitError::DegenerateControlPoint);
    }

    let weight1 = offset1.dot(&offset1).powf(exponent);
    let weight2 = offset2.dot(&offset2).powf(exponent);

    Ok(weight1 / (weight1 + weight2))
}

///
/// A quadratic curve in polynomial form, evaluated as `a + b*t + c*t^2`
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePolynomial<Point: Coordinate> {
    pub a: Point,
    pub b: Point,
    pub c: Point
}

impl<Point: Coordinate> CurvePolynomial<Point> {
    ///
    /// Evaluates this polynomial at a particular t value
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> Point {
        self.a + self.b*t + self.c*(t*t)
    }

    ///
    /// Converts this polynomial to the equivalent bezier curve
    ///
    pub fn to_curve<Curve: QuadraticCurveFactory<Point=Point>>(&self) -> Curve {
        let start           = self.a;
        let control_point   = self.a + self.b*0.5;
        let end             = self.a + self.b + self.c;

        Curve::from_points(start, control_point, end)
    }

    ///
    /// Returns a polyline approximation of this polynomial, sampled at evenly spaced t values
    /// between 0 and 1
    ///
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);

        (0..=steps)
            .map(|step| self.point_at_pos((step as f64)/(steps as f64)))
            .collect()
    }
}

///
/// A quadratic curve fit whose parameter range extends beyond the curve's end points
///
/// Parameter 0 maps to the start point and parameter 1 to the end point, as for an ordinary
/// curve, but the fit can also be evaluated between `EXTENDED_RANGE_MIN` and
/// `EXTENDED_RANGE_MAX` to continue the curve past its end points.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtendedFit<Point: Coordinate> {
    /// The fitted polynomial
    polynomial: CurvePolynomial<Point>,

    /// Value to add to a parameter to convert to a t value on the polynomial
    t_c: f64,

    /// Value to multiply a parameter by to convert to a t value on the polynomial
    t_m: f64
}

impl<Point: Coordinate> ExtendedFit<Point> {
    ///
    /// Returns the t value on the fitted polynomial for a parameter on the extended fit
    ///
    #[inline]
    fn t_for_t(&self, t: f64) -> f64 {
        t*self.t_m + self.t_c
    }

    ///
    /// Evaluates this fit at a particular parameter value
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> Point {
        self.polynomial.point_at_pos(self.t_for_t(t))
    }

    ///
    /// Returns a polyline approximation of this fit between two parameter values, sampled every
    /// `step` units of the parameter (both ends included)
    ///
    pub fn sample_range(&self, min_t: f64, max_t: f64, step: f64) -> Vec<Point> {
        let num_steps = ((max_t-min_t)/step).round().max(1.0) as usize;

        (0..=num_steps)
            .map(|step_num| self.point_at_pos(min_t + (step_num as f64)*step))
            .collect()
    }
}

///
/// Creates a quadratic curve polynomial that starts at `start`, ends at `end` and passes through
/// `interpolation_point` at the chord-weighted t value
///
pub fn fit_through_point<Point: Coordinate>(start: &Point, interpolation_point: &Point, end: &Point) -> Result<CurvePolynomial<Point>, CurveFitError> {
    // Decide where along the curve the interpolation point should fall
    let t1      = weighted_chord_parameter(start, interpolation_point, end, FIT_CHORD_EXPONENT)?;

    // Offsets from the start point to the interpolation point and the end point
    let delta1  = *interpolation_point - *start;
    let delta3  = *end - *start;

    // Solve for the polynomial coefficients (a is the start point, a+b+c the end point)
    let b       = (delta1 - delta3*(t1*t1)) * (1.0/(t1 - t1*t1));
    let c       = delta3 - b;

    Ok(CurvePolynomial {
        a: *start,
        b: b,
        c: c
    })
}

///
/// Creates an extended fit that starts at `start`, ends at `end` and passes through
/// `interpolation_point` at the chord-weighted t value
///
/// The result matches the curve produced by `fit_through_point` between parameters 0 and 1 but
/// remains well-defined from `EXTENDED_RANGE_MIN` to `EXTENDED_RANGE_MAX`, so the fitted curve
/// can be drawn continuing beyond its end points.
///
pub fn fit_through_point_extended<Point: Coordinate>(start: &Point, interpolation_point: &Point, end: &Point) -> Result<ExtendedFit<Point>, CurveFitError> {
    let t1      = weighted_chord_parameter(start, interpolation_point, end, FIT_CHORD_EXPONENT)?;

    let delta1  = *interpolation_point - *start;
    let delta3  = *end - *start;

    // Solve for a polynomial that covers the extended parameter range, then remap so that
    // parameters -1 to 2 fall between t=0 and t=1 on the polynomial
    let c       = (delta1*9.0 - delta3*(9.0*t1)) * (1.0/(t1*t1 - t1));
    let b       = delta3*3.0 - c;
    let a       = *start - b*(1.0/3.0) - c*(1.0/9.0);

    Ok(ExtendedFit {
        polynomial: CurvePolynomial {
            a: a,
            b: b,
            c: c
        },

        t_c: 1.0/3.0,
        t_m: 1.0/3.0
    })
}
