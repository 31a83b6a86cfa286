use quad_curves::*;
use quad_curves::bezier::*;

use super::approx_equal;

#[test]
fn symmetric_through_point_reflects_the_control_point() {
    // With equal chords the control point lands on the far side of the through point from the
    // baseline, at twice the height
    let cp = control_point_through(&Coord2(0.0, 0.0), &Coord2(1.0, 1.0), &Coord2(2.0, 0.0)).unwrap();

    assert!(cp.distance_to(&Coord2(1.0, 2.0)) < 0.001);
}

#[test]
fn collinear_points_leave_the_control_point_in_place() {
    // The two unit vectors cancel out, so the curve is the straight line itself and still
    // crosses the through point at the chord-weighted parameter
    let p1  = Coord2(0.0, 0.0);
    let cp1 = Coord2(1.0, 0.0);
    let p2  = Coord2(4.0, 0.0);

    let cp  = control_point_through(&p1, &cp1, &p2).unwrap();
    let t1  = pass_through_parameter(&p1, &cp1, &p2).unwrap();

    assert!(cp.distance_to(&cp1) < 0.001);
    assert!(approx_equal(t1, (f64::sqrt(3.0)-1.0)/2.0));

    let curve: Curve<_> = curve_through_point(p1, cp1, p2).unwrap();

    assert!(curve.point_at_pos(t1).distance_to(&cp1) < 0.001);
}

#[test]
fn curve_passes_through_the_through_point() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let curve: Curve<_> = curve_through_point(p1, cp1, p2).unwrap();
    let t1              = pass_through_parameter(&p1, &cp1, &p2).unwrap();

    assert!(curve.start_point() == p1);
    assert!(curve.end_point() == p2);
    assert!(curve.point_at_pos(t1).distance_to(&cp1) < 0.001);
}

#[test]
fn through_point_can_be_recovered_by_solving() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let curve: Curve<_> = curve_through_point(p1, cp1, p2).unwrap();
    let t1              = pass_through_parameter(&p1, &cp1, &p2).unwrap();
    let solved          = curve.t_for_point(&cp1);

    assert!(solved.is_some());
    assert!(approx_equal(solved.unwrap(), t1));
}

#[test]
fn through_curve_matches_the_fitted_curve() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let through: Curve<_>   = curve_through_point(p1, cp1, p2).unwrap();
    let fitted: Curve<_>    = fit_through_point(&p1, &cp1, &p2).unwrap().to_curve();

    assert!(through.control_point().distance_to(&fitted.control_point()) < 0.001);

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        assert!(through.point_at_pos(t).distance_to(&fitted.point_at_pos(t)) < 0.001);
    }
}

#[test]
fn reversed_through_curve_passes_through_at_the_mirrored_parameter() {
    let p1  = Coord2(200.0, 350.0);
    let cp1 = Coord2(500.0, 200.0);
    let p2  = Coord2(600.0, 350.0);

    let curve: Curve<_>     = curve_through_point(p1, cp1, p2).unwrap();
    let reversed: Curve<_>  = curve.reverse();
    let t1                  = pass_through_parameter(&p1, &cp1, &p2).unwrap();

    assert!(reversed.point_at_pos(1.0-t1).distance_to(&cp1) < 0.001);
}

#[test]
fn through_point_on_end_point_is_degenerate() {
    let p1  = Coord2(200.0, 350.0);
    let p2  = Coord2(600.0, 350.0);

    assert!(control_point_through(&p1, &p1, &p2) == Err(CurveFitError::DegenerateControlPoint));
    assert!(pass_through_parameter(&p1, &p2, &p2) == Err(CurveFitError::DegenerateControlPoint));
}
