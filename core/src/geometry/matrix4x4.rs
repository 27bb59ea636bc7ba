//! 4x4 Matrix

use super::{Point3f, Vector3f};
use crate::common::*;

/// A 4x4 matrix containing `Float` values stored row-major.
///
/// Host matrices use the row-vector convention: rows 0, 1 and 2 hold the x, y
/// and z basis axes and row 3 holds the translation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4 {
    /// Stores a 2-D array of Float
    pub m: [[Float; 4]; 4],
}

impl Matrix4x4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Create a 4x4 matrix from 16 values in row-major order.
    ///
    /// * `v` - The values.
    pub fn from_row_major(v: &[Float]) -> Result<Self, String> {
        if v.len() != 16 {
            return Err(format!("Expected 16 matrix values, got {}", v.len()));
        }
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row.copy_from_slice(&v[i * 4..i * 4 + 4]);
        }
        Ok(Self { m })
    }

    /// Returns one of the x, y or z basis axes.
    ///
    /// * `axis` - Axis index (0, 1 or 2).
    pub fn axis(&self, axis: usize) -> Vector3f {
        Vector3f::new(self.m[axis][0], self.m[axis][1], self.m[axis][2])
    }

    /// Returns the translation.
    pub fn translation(&self) -> Point3f {
        Point3f::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// Transforms a point by this matrix treating it as a row vector.
    ///
    /// * `p` - The point.
    pub fn transform_point(&self, p: &Point3f) -> Point3f {
        let m = &self.m;
        let x = p.x * m[0][0] + p.y * m[1][0] + p.z * m[2][0] + m[3][0];
        let y = p.x * m[0][1] + p.y * m[1][1] + p.z * m[2][1] + m[3][1];
        let z = p.x * m[0][2] + p.y * m[1][2] + p.z * m[2][2] + m[3][2];
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];
        if w == 1.0 || w == 0.0 {
            Point3f::new(x, y, z)
        } else {
            Point3f::new(x / w, y / w, z / w)
        }
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const MOVED: [Float; 16] = [
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        2.0, 3.0, 4.0, 1.0,
    ];

    #[test]
    fn translation_is_last_row() {
        let m = Matrix4x4::from_row_major(&MOVED).unwrap();
        assert_eq!(m.translation(), Point3f::new(2.0, 3.0, 4.0));
        assert_eq!(m.axis(2), Vector3f::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn points_are_row_vectors() {
        let m = Matrix4x4::from_row_major(&MOVED).unwrap();
        assert_eq!(
            m.transform_point(&Point3f::new(1.0, 1.0, 1.0)),
            Point3f::new(3.0, 4.0, 5.0)
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(Matrix4x4::from_row_major(&[1.0; 9]).is_err());
    }
}
