use quad_curves::*;
use quad_curves::bezier::*;

use super::approx_equal;

#[test]
fn chord_parameter_is_half_for_symmetric_points() {
    let t1 = weighted_chord_parameter(&Coord2(200.0, 350.0), &Coord2(400.0, 200.0), &Coord2(600.0, 350.0), FIT_CHORD_EXPONENT).unwrap();

    assert!(approx_equal(t1, 0.5));
}

#[test]
fn chord_parameter_reflects_the_chord_lengths() {
    // The interpolation point is further from the start point than the end point, so it falls in
    // the later half of the curve
    let t1 = weighted_chord_parameter(&Coord2(200.0, 350.0), &Coord2(500.0, 200.0), &Coord2(600.0, 350.0), FIT_CHORD_EXPONENT).unwrap();

    assert!(t1 > 0.5);
    assert!(t1 < 1.0);
}

#[test]
fn chord_parameter_degenerate_when_point_is_on_an_end_point() {
    let p1  = Coord2(200.0, 350.0);
    let p2  = Coord2(600.0, 350.0);

    assert!(weighted_chord_parameter(&p1, &p1, &p2, FIT_CHORD_EXPONENT) == Err(CurveFitError::DegenerateControlPoint));
    assert!(weighted_chord_parameter(&p1, &p2, &p2, FIT_CHORD_EXPONENT) == Err(CurveFitError::DegenerateControlPoint));
}

#[test]
fn fit_passes_through_all_three_points() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let fit = fit_through_point(&p1, &cp1, &p2).unwrap();
    let t1  = weighted_chord_parameter(&p1, &cp1, &p2, FIT_CHORD_EXPONENT).unwrap();

    assert!(fit.point_at_pos(0.0).distance_to(&p1) < 0.001);
    assert!(fit.point_at_pos(1.0).distance_to(&p2) < 0.001);
    assert!(fit.point_at_pos(t1).distance_to(&cp1) < 0.001);
}

#[test]
fn fit_degenerate_when_point_is_on_an_end_point() {
    let p1  = Coord2(200.0, 350.0);
    let p2  = Coord2(600.0, 350.0);

    assert!(fit_through_point(&p1, &p1, &p2) == Err(CurveFitError::DegenerateControlPoint));
}

#[test]
fn fitted_polynomial_converts_to_curve() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let fit             = fit_through_point(&p1, &cp1, &p2).unwrap();
    let curve: Curve<_> = fit.to_curve();

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        assert!(curve.point_at_pos(t).distance_to(&fit.point_at_pos(t)) < 0.001);
    }
}

#[test]
fn fitted_polynomial_samples_from_start_to_end() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let fit     = fit_through_point(&p1, &cp1, &p2).unwrap();
    let samples = fit.sample(100);

    assert!(samples.len() == 101);
    assert!(samples[0].distance_to(&p1) < 0.001);
    assert!(samples[100].distance_to(&p2) < 0.001);
}

#[test]
fn extended_fit_matches_fit_between_end_points() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let fit         = fit_through_point(&p1, &cp1, &p2).unwrap();
    let extended    = fit_through_point_extended(&p1, &cp1, &p2).unwrap();

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        assert!(extended.point_at_pos(t).distance_to(&fit.point_at_pos(t)) < 0.001);
    }
}

#[test]
fn extended_fit_passes_through_all_three_points() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let extended    = fit_through_point_extended(&p1, &cp1, &p2).unwrap();
    let t1          = weighted_chord_parameter(&p1, &cp1, &p2, FIT_CHORD_EXPONENT).unwrap();

    assert!(extended.point_at_pos(0.0).distance_to(&p1) < 0.001);
    assert!(extended.point_at_pos(1.0).distance_to(&p2) < 0.001);
    assert!(extended.point_at_pos(t1).distance_to(&cp1) < 0.001);
}

#[test]
fn extended_fit_continues_beyond_the_end_points() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let extended    = fit_through_point_extended(&p1, &cp1, &p2).unwrap();

    let before      = extended.point_at_pos(-0.5);
    let after       = extended.point_at_pos(1.5);

    assert!(before.distance_to(&p1) > 1.0);
    assert!(after.distance_to(&p2) > 1.0);
}

#[test]
fn extended_fit_samples_the_requested_range() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let extended    = fit_through_point_extended(&p1, &cp1, &p2).unwrap();
    let samples     = extended.sample_range(-0.5, 1.5, 0.01);

    assert!(samples.len() == 201);
    assert!(samples[0].distance_to(&extended.point_at_pos(-0.5)) < 0.001);
    assert!(samples[200].distance_to(&extended.point_at_pos(1.5)) < 0.001);

    // The samples between the end points retrace the ordinary fit
    let fit = fit_through_point(&p1, &cp1, &p2).unwrap();

    assert!(samples[50].distance_to(&fit.point_at_pos(0.0)) < 0.001);
    assert!(samples[150].distance_to(&fit.point_at_pos(1.0)) < 0.001);
}
