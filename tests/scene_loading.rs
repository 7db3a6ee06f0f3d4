use approx::assert_abs_diff_eq;

use slice_range::json_parser::parse_scene_json;

fn input_path(name: &str) -> String {
    format!("{}/inputs/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn unit_cube_scene_reports_focal_point_outside_the_cube() {
    let scene = parse_scene_json(&input_path("unit_cube.json")).unwrap();
    let range = scene.slice_range().unwrap();

    assert_abs_diff_eq!(range.min, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.max, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.current, 2.0, epsilon = 1e-9);
    assert!(!range.contains_current());
}

#[test]
fn oriented_volume_is_measured_in_world_space() {
    // k axis of the grid runs along world +y, the camera looks down +y
    let scene = parse_scene_json(&input_path("oblique_ct.json")).unwrap();
    let range = scene.slice_range().unwrap();

    assert_abs_diff_eq!(range.min, -175.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.max, 125.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.current, 0.0, epsilon = 1e-9);
    assert!(range.contains_current());
}

#[test]
fn missing_file_is_an_error() {
    assert!(parse_scene_json(&input_path("does_not_exist.json")).is_err());
}
