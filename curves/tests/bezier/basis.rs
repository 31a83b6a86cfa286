use quad_curves::*;
use quad_curves::bezier;

use super::approx_equal;

#[test]
fn basis_at_t0_is_w1() {
    assert!(bezier::basis(0.0, 2.0, 3.0, 4.0) == 2.0);
}

#[test]
fn basis_at_t1_is_w3() {
    assert!(bezier::basis(1.0, 2.0, 3.0, 4.0) == 4.0);
}

#[test]
fn basis_at_t_half_weights_the_control_point() {
    assert!(approx_equal(bezier::basis(0.5, 0.0, 1.0, 0.0), 0.5));
    assert!(approx_equal(bezier::basis(0.5, 2.0, 3.0, 4.0), 3.0));
}

#[test]
fn basis_midpoint_mixes_all_three_weights() {
    // Halfway along, the curve sits between the chord midpoint and the control point
    let midpoint = bezier::basis(0.5, Coord2(200.0, 350.0), Coord2(500.0, 200.0), Coord2(600.0, 350.0));

    assert!(midpoint.distance_to(&Coord2(450.0, 275.0)) < 0.001);
}

#[test]
fn basis_matches_de_casteljau() {
    for x in 0..=16 {
        let t = (x as f64)/16.0;

        assert!(approx_equal(bezier::basis(t, 2.0, 3.0, 5.0), bezier::de_casteljau3(t, 2.0, 3.0, 5.0)));
        assert!(approx_equal(bezier::basis(t, 2.0, -1.0, 3.0), bezier::de_casteljau3(t, 2.0, -1.0, 3.0)));
    }
}

#[test]
fn de_casteljau2_is_linear_interpolation() {
    assert!(bezier::de_casteljau2(0.0, 2.0, 4.0) == 2.0);
    assert!(bezier::de_casteljau2(0.5, 2.0, 4.0) == 3.0);
    assert!(bezier::de_casteljau2(1.0, 2.0, 4.0) == 4.0);
}
