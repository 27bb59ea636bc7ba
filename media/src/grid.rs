//! Grid Volume Files
//!
//! Heterogeneous media read their density from a binary grid file written
//! next to the scene:
//!
//! ```text
//! "VOL" | version: i8 = 3 | encoding: i32 = 1 (float32)
//! height: i32 | width: i32 | depth: i32 | channels: i32 = 1
//! xmin ymin zmin xmax ymax zmax: f32
//! data: f32 * depth * height * width * channels
//! ```
//!
//! All values are little-endian.

use byteorder::{LittleEndian, WriteBytesExt};
use pbrt_core::common::*;
use pbrt_core::geometry::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Size of the file header in bytes.
pub const GRID_HEADER_SIZE: usize = 48;

/// File format version.
const GRID_VERSION: i8 = 3;

/// Dense float32 encoding.
const GRID_ENCODING_FLOAT32: i32 = 1;

/// A single channel density grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridVolume {
    /// Number of cells along y.
    pub height: usize,

    /// Number of cells along x.
    pub width: usize,

    /// Number of cells along z.
    pub depth: usize,

    /// World space extent of the grid.
    pub bounds: Bounds3f,

    /// Densities indexed by `(k * height + j) * width + i`.
    pub data: Vec<Float>,
}

impl GridVolume {
    /// Create a new grid. Missing densities are zero and surplus values are
    /// dropped.
    ///
    /// * `height` - Number of cells along y.
    /// * `width`  - Number of cells along x.
    /// * `depth`  - Number of cells along z.
    /// * `bounds` - World space extent.
    /// * `data`   - Densities.
    pub fn new(height: usize, width: usize, depth: usize, bounds: Bounds3f, mut data: Vec<Float>) -> Self {
        let n = height * width * depth;
        if data.len() != n {
            warn!(
                "Grid {height}x{width}x{depth} expects {n} values, got {}",
                data.len()
            );
            data.resize(n, 0.0);
        }
        Self {
            height,
            width,
            depth,
            bounds,
            data,
        }
    }

    /// Returns the density of a cell.
    ///
    /// * `i` - Cell along x.
    /// * `j` - Cell along y.
    /// * `k` - Cell along z.
    pub fn density(&self, i: usize, j: usize, k: usize) -> Float {
        self.data[(k * self.height + j) * self.width + i]
    }

    /// Writes the grid.
    ///
    /// * `out` - Output stream.
    pub fn write<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(b"VOL")?;
        out.write_i8(GRID_VERSION)?;
        out.write_i32::<LittleEndian>(GRID_ENCODING_FLOAT32)?;
        out.write_i32::<LittleEndian>(self.height as i32)?;
        out.write_i32::<LittleEndian>(self.width as i32)?;
        out.write_i32::<LittleEndian>(self.depth as i32)?;
        out.write_i32::<LittleEndian>(1)?;

        let (p0, p1) = (self.bounds.p_min, self.bounds.p_max);
        for v in [p0.x, p0.y, p0.z, p1.x, p1.y, p1.z] {
            out.write_f32::<LittleEndian>(v)?;
        }

        for k in 0..self.depth {
            for j in 0..self.height {
                for i in 0..self.width {
                    out.write_f32::<LittleEndian>(self.density(i, j, k))?;
                }
            }
        }
        Ok(())
    }

    /// Writes the grid to a new file.
    ///
    /// * `path` - Output file.
    pub fn write_file(&self, path: &Path) -> Result<(), String> {
        let file = File::create(path)
            .map_err(|e| format!("Unable to create '{}'. {e}", path.display()))?;
        let mut out = BufWriter::new(file);
        self.write(&mut out)
            .and_then(|_| out.flush())
            .map_err(|e| format!("Unable to write '{}'. {e}", path.display()))?;
        info!("Wrote grid volume '{}'", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{LittleEndian, ReadBytesExt};
    use proptest::prelude::*;
    use std::io::Cursor;

    fn unit_bounds() -> Bounds3f {
        Bounds3f {
            p_min: Point3f::new(-1.0, 0.0, -2.0),
            p_max: Point3f::new(1.0, 3.0, 2.0),
        }
    }

    fn bytes(grid: &GridVolume) -> Vec<u8> {
        let mut out = vec![];
        grid.write(&mut out).unwrap();
        out
    }

    #[test]
    fn header_layout() {
        let grid = GridVolume::new(2, 3, 4, unit_bounds(), vec![0.5; 24]);
        let out = bytes(&grid);
        assert_eq!(&out[0..8], b"VOL\x03\x01\x00\x00\x00");
        assert_eq!(&out[8..24], &[2, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 0]);

        let mut rdr = Cursor::new(&out[24..48]);
        let aabb: Vec<f32> = (0..6).map(|_| rdr.read_f32::<LittleEndian>().unwrap()).collect();
        assert_eq!(aabb, vec![-1.0, 0.0, -2.0, 1.0, 3.0, 2.0]);
        assert_eq!(out.len(), GRID_HEADER_SIZE + 24 * 4);
    }

    #[test]
    fn payload_order_is_x_fastest() {
        let data: Vec<Float> = (0..8).map(|v| v as Float).collect();
        let grid = GridVolume::new(2, 2, 2, unit_bounds(), data);
        let out = bytes(&grid);
        let mut rdr = Cursor::new(&out[GRID_HEADER_SIZE..]);
        let payload: Vec<f32> = (0..8).map(|_| rdr.read_f32::<LittleEndian>().unwrap()).collect();
        assert_eq!(payload, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(grid.density(1, 0, 1), 5.0);
    }

    #[test]
    fn short_data_is_zero_padded() {
        let grid = GridVolume::new(1, 2, 2, unit_bounds(), vec![1.0]);
        assert_eq!(grid.data, vec![1.0, 0.0, 0.0, 0.0]);
    }

    proptest! {
        #[test]
        fn header_matches_dimensions(h in 1usize..6, w in 1usize..6, d in 1usize..6) {
            let grid = GridVolume::new(h, w, d, unit_bounds(), vec![]);
            let out = bytes(&grid);
            let mut rdr = Cursor::new(&out[8..20]);
            prop_assert_eq!(rdr.read_i32::<LittleEndian>().unwrap(), h as i32);
            prop_assert_eq!(rdr.read_i32::<LittleEndian>().unwrap(), w as i32);
            prop_assert_eq!(rdr.read_i32::<LittleEndian>().unwrap(), d as i32);
            prop_assert_eq!(out.len(), GRID_HEADER_SIZE + h * w * d * 4);
        }
    }
}
