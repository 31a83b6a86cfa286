use quad_curves::*;
use quad_curves::bezier;

use super::approx_equal;

#[test]
fn read_curve_control_points() {
    let curve = bezier::Curve::from_points(Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(2.0, 2.0));

    assert!(curve.start_point() == Coord2(1.0, 1.0));
    assert!(curve.control_point() == Coord2(3.0, 3.0));
    assert!(curve.end_point() == Coord2(2.0, 2.0));
}

#[test]
fn read_curve_points() {
    let curve = bezier::Curve::from_points(Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(2.0, 2.0));

    for x in 0..100 {
        let t = (x as f64)/100.0;

        let point           = curve.point_at_pos(t);
        let another_point   = bezier::de_casteljau3(t, Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(2.0, 2.0));

        assert!(point.distance_to(&another_point) < 0.001);
    }
}

#[test]
fn reverse_curve_swaps_end_points() {
    let curve               = bezier::Curve::from_points(Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(2.0, 2.0));
    let reversed: bezier::Curve<_> = curve.reverse();

    assert!(reversed.start_point() == Coord2(2.0, 2.0));
    assert!(reversed.control_point() == Coord2(3.0, 3.0));
    assert!(reversed.end_point() == Coord2(1.0, 1.0));

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        assert!(reversed.point_at_pos(t).distance_to(&curve.point_at_pos(1.0-t)) < 0.001);
    }
}

#[test]
fn sample_covers_curve_from_start_to_end() {
    let curve   = bezier::Curve::from_points(Coord2(200.0, 350.0), Coord2(500.0, 200.0), Coord2(600.0, 350.0));
    let samples = curve.sample(100);

    assert!(samples.len() == 101);
    assert!(samples[0] == curve.start_point());
    assert!(samples[100] == curve.end_point());

    for (idx, sample) in samples.iter().enumerate() {
        let t = (idx as f64)/100.0;

        assert!(sample.distance_to(&curve.point_at_pos(t)) < 0.001);
    }
}

#[test]
fn polyline_length_sums_the_chords() {
    let length = bezier::polyline_length(&vec![Coord2(0.0, 0.0), Coord2(3.0, 4.0), Coord2(3.0, 10.0)]);

    assert!(approx_equal(length, 11.0));
}

#[test]
fn length_of_flat_curve_is_the_chord_length() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 2.0));

    assert!(approx_equal(curve.estimate_length(1.0), f64::sqrt(8.0)));
}

#[test]
fn length_of_curved_curve_exceeds_the_chord_length() {
    let curve = bezier::Curve::from_points(Coord2(200.0, 350.0), Coord2(500.0, 200.0), Coord2(600.0, 350.0));

    let chord_length = curve.start_point().distance_to(&curve.end_point());

    assert!(curve.estimate_length(1.0) > chord_length);
    assert!(curve.estimate_length(0.5) < curve.estimate_length(1.0));
}
