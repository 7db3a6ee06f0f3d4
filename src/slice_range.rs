/*

    Range of slice positions a volume spans along a view direction,
    and where the focal point currently sits along that direction.

    The eight grid corners and the focal point are rotated so that the
    view plane normal lands on +X. After that only the x coordinates
    matter: min/max over the corners give the extent of the volume,
    the focal point's x gives the current slice.

    Nothing is clamped. The focal point may lie outside [min, max],
    callers decide what to do with that.

    @date: Oct, 2025
    @author: bartu
*/

use crate::prelude::*;
use crate::error::SliceRangeError;
use crate::interval::Interval;
use crate::rotation::{ArcAligner, AxisAligner};
use crate::volume::{ImageVolume, volume_corners};

/// Result of a slice range computation. Non-finite inputs are not guarded,
/// they show up as NaN/inf in min, max or current and should be treated
/// as invalid by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceRange<V> {
    pub min: Float,
    pub max: Float,
    pub current: Float,

    // Passed through untouched
    pub volume: V,
    pub view_plane_normal: Vector3,
    pub focal_point: Vector3,
}

impl<V> SliceRange<V> {
    pub fn extent(&self) -> Interval {
        Interval::new(self.min, self.max)
    }

    pub fn thickness(&self) -> Float {
        self.extent().size()
    }

    pub fn contains_current(&self) -> bool {
        self.extent().contains(self.current)
    }
}

/// Slice range with the view plane normal rotated onto +X, see ArcAligner
/// for the exact rotation convention. min, max and current are then the
/// dot products of the corners and focal point with the unit normal.
pub fn compute_slice_range<V: ImageVolume>(
    volume: V,
    view_plane_normal: Vector3,
    focal_point: Vector3,
) -> Result<SliceRange<V>, SliceRangeError> {
    compute_slice_range_with(&ArcAligner::default(), volume, view_plane_normal, focal_point)
}

pub fn compute_slice_range_with<V, A>(
    aligner: &A,
    volume: V,
    view_plane_normal: Vector3,
    focal_point: Vector3,
) -> Result<SliceRange<V>, SliceRangeError>
where
    V: ImageVolume,
    A: AxisAligner + ?Sized,
{
    let span = tracing::span!(tracing::Level::DEBUG, "compute_slice_range");
    let _enter = span.enter();

    let corners = volume_corners(&volume);

    // Zero-length normal is an error here, there is no identity fallback
    let rotation = aligner.align_to_axis(view_plane_normal)?;

    let extent = Interval::from_values(
        corners.iter().map(|corner| transform_point(&rotation, corner).x)
    );
    let current = transform_point(&rotation, &focal_point).x;

    debug!("Slice range min: {}, max: {}, current: {}", extent.min, extent.max, current);
    if !extent.contains(current) {
        debug!("Focal point lies outside of the volume along {}", view_plane_normal);
    }

    Ok(SliceRange {
        min: extent.min,
        max: extent.max,
        current,
        volume,
        view_plane_normal,
        focal_point,
    })
}
