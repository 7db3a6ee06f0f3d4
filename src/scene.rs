/*

    Declare SliceScene, a volume seen through a camera, as
    described by a scene JSON file (see json_parser.rs).

    @date: Oct, 2025
    @author: Bartu
*/

use crate::prelude::*;
use crate::camera::Camera;
use crate::error::SliceRangeError;
use crate::slice_range::SliceRange;
use crate::volume::ImageData;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SliceScene {
    #[serde(rename = "Volume")]
    pub volume: ImageData,

    #[serde(rename = "Camera")]
    pub camera: Camera,
}

impl SliceScene {
    pub fn slice_range(&self) -> Result<SliceRange<&ImageData>, SliceRangeError> {
        self.camera.slice_range(&self.volume)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let scene = parse_scene_str(r#"{
            "Volume": { "Dimensions": "2 3 4" },
            "Camera": { "Position": "0 0 10", "FocalPoint": "0 0 1" }
        }"#).unwrap();

        assert_eq!(scene.volume, ImageData::new([2, 3, 4]));
        assert_eq!(scene.camera.view_up, Vector3::Y);

        let range = scene.slice_range().unwrap();
        assert_abs_diff_eq!(range.min, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(range.max, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(range.current, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn missing_sections_are_an_error() {
        assert!(parse_scene_str(r#"{ "Volume": { "Dimensions": "2 3 4" } }"#).is_err());
    }
}
