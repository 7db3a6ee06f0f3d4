/*

    Declare Camera, the source of the view plane normal and the focal
    point fed to the slice range computation.

    The view plane normal points from the focal point back towards the
    camera position, i.e. it is the negated direction of projection.

    @date: Oct, 2025
    @author: bartu
*/

use crate::prelude::*;
use crate::error::SliceRangeError;
use crate::rotation::{ArcAligner, AxisAligner, unit_direction};
use crate::slice_range::{SliceRange, compute_slice_range};
use crate::volume::ImageVolume;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct Camera {
    #[default(Vector3::Z)]
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,

    #[serde(rename = "FocalPoint", deserialize_with = "deser_vec3")]
    pub focal_point: Vector3,

    #[default(Vector3::Y)]
    #[serde(rename = "ViewUp", deserialize_with = "deser_vec3")]
    pub view_up: Vector3,
}

impl Camera {
    pub fn new(position: Vector3, focal_point: Vector3, view_up: Vector3) -> Self {
        Self {
            position,
            focal_point,
            view_up,
        }
    }

    pub fn distance(&self) -> Float {
        self.position.distance(self.focal_point)
    }

    pub fn view_plane_normal(&self) -> Result<Vector3, SliceRangeError> {
        unit_direction(self.position - self.focal_point)
    }

    pub fn slice_range<V: ImageVolume>(&self, volume: V) -> Result<SliceRange<V>, SliceRangeError> {
        compute_slice_range(volume, self.view_plane_normal()?, self.focal_point)
    }

    /// Move focal point and position together along the view plane normal
    /// until the focal point sits at `slice`, as reported by slice_range( ).
    /// Distance and orientation are kept.
    pub fn set_focal_point_along_normal(&mut self, slice: Float) -> Result<(), SliceRangeError> {
        let normal = self.view_plane_normal()?;
        let rotation = ArcAligner::default().align_to_axis(normal)?;
        let current = transform_point(&rotation, &self.focal_point).x;

        let offset = normal * (slice - current);
        debug!("Moving camera focal point by {} to reach slice {}", offset, slice);
        self.focal_point += offset;
        self.position += offset;
        Ok(())
    }
}
