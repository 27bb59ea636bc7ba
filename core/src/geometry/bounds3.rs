//! 3-D Axis Aligned Bounding Boxes.

use super::Point3f;
use crate::common::*;

/// 3-D Axis Aligned Bounding Box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3f {
    /// Minimum bounds.
    pub p_min: Point3f,

    /// Maximum bounds.
    pub p_max: Point3f,
}

impl Bounds3f {
    /// Returns a bounding box where minimum and maximum bounds are maximum and
    /// minimum values respectively of the type's limits. This is so we can
    /// easily grow the bounding box from nothing iteratively.
    pub fn empty() -> Self {
        Self {
            p_min: Point3f::new(Float::MAX, Float::MAX, Float::MAX),
            p_max: Point3f::new(Float::MIN, Float::MIN, Float::MIN),
        }
    }

    /// Returns true if no point was ever added to the box.
    pub fn is_empty(&self) -> bool {
        self.p_max.x < self.p_min.x || self.p_max.y < self.p_min.y || self.p_max.z < self.p_min.z
    }

    /// Grows the bounding box to include a point.
    ///
    /// * `p` - The point.
    pub fn union_point(&self, p: &Point3f) -> Self {
        Self {
            p_min: Point3f::new(
                self.p_min.x.min(p.x),
                self.p_min.y.min(p.y),
                self.p_min.z.min(p.z),
            ),
            p_max: Point3f::new(
                self.p_max.x.max(p.x),
                self.p_max.y.max(p.y),
                self.p_max.z.max(p.z),
            ),
        }
    }
}

impl<'a> FromIterator<&'a Point3f> for Bounds3f {
    /// Bounds a collection of points.
    fn from_iter<I: IntoIterator<Item = &'a Point3f>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bounds3f::empty(), |b, p| b.union_point(p))
    }
}
