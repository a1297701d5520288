//! Property tests for the distance metric, clamping and threshold seams

use cielab_core::color::lab::LAB_EPSILON;
use cielab_core::{D65, Lab, Rgb8, Xyz, delta_e_squared, delta_e76};
use cielab_tests::random_labs;

#[test]
fn test_distance_symmetric() {
    let labs = random_labs(1, 500);
    for pair in labs.windows(2) {
        let (p, v) = (&pair[0], &pair[1]);
        assert_eq!(delta_e_squared(p, v), delta_e_squared(v, p));
        assert_eq!(p.distance_squared(v), v.distance_squared(p));
    }
}

#[test]
fn test_distance_identity_and_non_negative() {
    let labs = random_labs(2, 500);
    for p in &labs {
        assert_eq!(p.distance_squared(p), 0.0);
    }
    for pair in labs.windows(2) {
        let d = delta_e_squared(&pair[0], &pair[1]);
        assert!(d >= 0.0, "negative distance {} for {:?}", d, pair);
    }
}

#[test]
fn test_squared_preserves_ordering() {
    let labs = random_labs(3, 300);
    let origin = Lab::new(50.0, 0.0, 0.0);

    let mut by_squared = labs.clone();
    by_squared.sort_by(|x, y| {
        delta_e_squared(&origin, x).total_cmp(&delta_e_squared(&origin, y))
    });
    let mut by_cie76 = labs;
    by_cie76.sort_by(|x, y| delta_e76(&origin, x).total_cmp(&delta_e76(&origin, y)));

    assert_eq!(by_squared, by_cie76);
}

#[test]
fn test_squared_is_not_delta_e() {
    // One unit along each axis: ΔE*ab is √3, the squared metric is 3
    let p = Lab::new(50.0, 10.0, 10.0);
    let v = Lab::new(51.0, 11.0, 11.0);
    assert!((p.distance_squared(&v) - 3.0).abs() < 1e-9);
    assert!((p.delta_e76(&v) - 3.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_out_of_gamut_lab_clamps() {
    let rgb = Lab::new(50.0, 200.0, 200.0).to_rgb8();
    assert_eq!(rgb, Rgb8::new(255, 0, 0));

    // Anything finite converts without panicking
    for lab in random_labs(4, 2_000) {
        let _ = lab.to_rgb8();
    }
    for lab in [
        Lab::new(1e6, 1e6, -1e6),
        Lab::new(-1e6, -1e6, 1e6),
        Lab::new(100.0, -500.0, 500.0),
    ] {
        let _ = lab.to_rgb8();
    }
}

#[test]
fn test_fixed_points() {
    let black = Lab::from_rgb8(Rgb8::BLACK);
    assert!(black.approx_eq(&Lab::new(0.0, 0.0, 0.0), 1e-3), "{}", black);

    let white = Lab::from_rgb8(Rgb8::WHITE);
    assert!(white.approx_eq(&Lab::new(100.0, 0.0, 0.0), 1e-2), "{}", white);
}

#[test]
fn test_forward_seam_continuity() {
    // Gray XYZ whose white-relative ratio sits on the cube-root threshold
    let gray = |t: f64| Xyz::new(D65.xyz.x * t, D65.xyz.y * t, D65.xyz.z * t);
    let at = Lab::from_xyz(gray(LAB_EPSILON));

    for delta in [1e-12, 1e-10, 1e-9] {
        let above = Lab::from_xyz(gray(LAB_EPSILON + delta));
        let below = Lab::from_xyz(gray(LAB_EPSILON - delta));
        assert!(
            (above.l() - below.l()).abs() < 1e-4,
            "L jumps across the seam: {} vs {}",
            below,
            above
        );
        assert!((above.l() - at.l()).abs() < 1e-4);
        assert!(above.a().abs() < 1e-9 && above.b().abs() < 1e-9);
    }
}

#[test]
fn test_values_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Rgb8>();
    assert_send_sync::<Xyz>();
    assert_send_sync::<Lab>();
}
