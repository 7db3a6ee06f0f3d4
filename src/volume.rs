/*

    Declare the read-only view of a volumetric dataset that the
    slice range computation consumes, and ImageData, a regular
    grid with origin, spacing and orientation.

    Index coordinates are continuous, world = origin + D * (ijk * spacing)
    where D is the 3x3 direction (orientation) matrix whose columns are
    the world directions of the i, j, k axes.

    @date: Oct, 2025
    @author: bartu
*/

use crate::prelude::*;
use crate::interval::Interval;

pub trait ImageVolume {
    /// Number of samples along i, j, k
    fn dimensions(&self) -> [usize; 3];

    fn index_to_world(&self, ijk: Vector3) -> Vector3;
}

impl<T: ImageVolume + ?Sized> ImageVolume for &T {
    fn dimensions(&self) -> [usize; 3] {
        (**self).dimensions()
    }

    fn index_to_world(&self, ijk: Vector3) -> Vector3 {
        (**self).index_to_world(ijk)
    }
}

/// World positions of the eight corners, taking every combination of
/// {0, dim} per axis. Order is
/// (0,0,0), (dx,0,0), (0,dy,0), (dx,dy,0), (0,0,dz), (dx,0,dz), (0,dy,dz), (dx,dy,dz)
///
/// NOTE: the dimension counts themselves are used as the far index, not dim - 1.
pub fn volume_corners<V: ImageVolume + ?Sized>(volume: &V) -> [Vector3; 8] {
    let [dx, dy, dz] = volume.dimensions().map(|d| d as Float);
    [
        Vector3::new(0., 0., 0.),
        Vector3::new(dx, 0., 0.),
        Vector3::new(0., dy, 0.),
        Vector3::new(dx, dy, 0.),
        Vector3::new(0., 0., dz),
        Vector3::new(dx, 0., dz),
        Vector3::new(0., dy, dz),
        Vector3::new(dx, dy, dz),
    ]
    .map(|ijk| volume.index_to_world(ijk))
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[derive(SmartDefault)]
#[serde(default)]
pub struct ImageData {
    #[serde(rename = "Dimensions", deserialize_with = "deser_dims")]
    pub dimensions: [usize; 3],

    #[serde(rename = "Origin", deserialize_with = "deser_vec3")]
    pub origin: Vector3,

    #[default(Vector3::ONE)]
    #[serde(rename = "Spacing", deserialize_with = "deser_vec3")]
    pub spacing: Vector3,

    #[default(Matrix3::IDENTITY)]
    #[serde(rename = "Direction", deserialize_with = "deser_matrix3")]
    pub direction: Matrix3,
}

impl ImageData {
    pub fn new(dimensions: [usize; 3]) -> Self {
        Self {
            dimensions,
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: Vector3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_spacing(mut self, spacing: Vector3) -> Self {
        self.spacing = spacing;
        self
    }

    /// Any matrix is accepted, sheared or scaled grids included
    pub fn with_direction(mut self, direction: Matrix3) -> Self {
        self.direction = direction;
        self
    }

    /// Axis aligned world bounds of the corners, as x, y, z intervals
    pub fn world_bounds(&self) -> [Interval; 3] {
        let corners = volume_corners(self);
        [
            Interval::from_values(corners.iter().map(|c| c.x)),
            Interval::from_values(corners.iter().map(|c| c.y)),
            Interval::from_values(corners.iter().map(|c| c.z)),
        ]
    }
}

impl ImageVolume for ImageData {
    fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    fn index_to_world(&self, ijk: Vector3) -> Vector3 {
        self.origin + self.direction * (ijk * self.spacing)
    }
}
