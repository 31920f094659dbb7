use glam::DVec3;
use terra_core::algebra::{matrix_mul_vec, rotor_to_matrix};
use terra_core::config::SceneConfig;
use terra_core::lighting::{Light, Spotlight};

#[test]
fn test_light_orbits_at_half_world_size() {
    let mut light = Light::from_config(&SceneConfig::default());
    light.update(0.0);
    assert_eq!(light.position, DVec3::new(16.0, 3.0, 0.0));

    light.update(std::f64::consts::FRAC_PI_2 * 1000.0);
    assert!(light.position.x.abs() < 1e-9);
    assert!((light.position.z - 16.0).abs() < 1e-9);
    assert_eq!(light.position.y, 3.0);
}

#[test]
fn test_manual_position_stops_orbit() {
    let mut light = Light::from_config(&SceneConfig::default());
    light.set_position(DVec3::new(1.0, 2.0, 3.0));
    assert!(!light.auto_move);
    light.update(1234.0);
    assert_eq!(light.position, DVec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_height_change_keeps_orbit() {
    let mut light = Light::from_config(&SceneConfig::default());
    light.set_height(7.0);
    assert!(light.auto_move);
    light.update(500.0);
    assert_eq!(light.position.y, 7.0);
}

#[test]
fn test_light_model_matrix() {
    let mut light = Light::from_config(&SceneConfig::default());
    light.set_position(DVec3::new(1.0, 2.0, 3.0));
    let p = matrix_mul_vec(light.model_matrix(), DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(p, DVec3::new(3.0, 2.0, 3.0));
}

#[test]
fn test_spotlight_direction_is_unit() {
    let spot = Spotlight::from_config(&SceneConfig::default());
    for i in 0..100 {
        let d = spot.direction(i as f64 * 137.0);
        assert!((d.length() - 1.0).abs() < 1e-9, "direction {:?} not unit", d);
    }
}

#[test]
fn test_spotlight_at_time_zero_only_tilts() {
    let spot = Spotlight::from_config(&SceneConfig::default());
    let d = spot.direction(0.0);
    // 0.5 rad about X carries +Z toward -Y
    let expected = DVec3::new(0.0, -(0.5f64).sin(), (0.5f64).cos());
    assert!((d - expected).length() < 1e-12, "direction {:?}", d);
}

#[test]
fn test_spotlight_sweep_keeps_elevation() {
    let spot = Spotlight::from_config(&SceneConfig::default());
    let y0 = spot.direction(0.0).y;
    for i in 1..20 {
        let d = spot.direction(i as f64 * 400.0);
        assert!((d.y - y0).abs() < 1e-9, "sweep changed elevation: {} vs {}", d.y, y0);
    }
}

#[test]
fn test_spotlight_model_stretches_along_beam() {
    let spot = Spotlight::from_config(&SceneConfig::default());
    let t = 2500.0;
    let m = spot.model_matrix(t);
    let tip = matrix_mul_vec(m, DVec3::Z) - spot.position;
    let beam = spot.direction(t) * 4.0;
    assert!((tip - beam).length() < 1e-9, "tip {:?} vs beam {:?}", tip, beam);

    let rot = rotor_to_matrix(spot.orientation(t));
    assert!((matrix_mul_vec(rot, DVec3::Z) - spot.direction(t)).length() < 1e-12);
}
