//! Dense 3D grid storage
//!
//! A `Grid3D` owns a flat array of samples indexed by (x, y, z) with X the
//! fastest-varying axis. Out-of-range access through [`Grid3D::get`] or
//! [`Grid3D::set`] is a programmer error and panics; it is never clamped or
//! wrapped. [`Grid3D::is_valid`] is the only non-fatal bounds check, for
//! callers that must probe before writing (e.g. radius-based field edits).

use terramesh_math::IVec3;

/// Dense 3D array with little-endian (X fastest) index ordering
#[derive(Clone, Debug, PartialEq)]
pub struct Grid3D<T> {
    data: Vec<T>,
    size_x: i32,
    size_y: i32,
    size_z: i32,
}

impl<T: Clone> Grid3D<T> {
    /// Create a grid of the given dimensions, filled with `default_value`.
    ///
    /// # Panics
    /// Panics if any dimension is less than 1.
    pub fn new(size_x: i32, size_y: i32, size_z: i32, default_value: T) -> Self {
        assert!(
            size_x >= 1 && size_y >= 1 && size_z >= 1,
            "Grid dimensions must be at least 1, received ({size_x}, {size_y}, {size_z})"
        );
        let len = (size_x as usize) * (size_y as usize) * (size_z as usize);
        Self {
            data: vec![default_value; len],
            size_x,
            size_y,
            size_z,
        }
    }

    /// Get the element at the given coordinates.
    ///
    /// # Panics
    /// Panics if any coordinate is out of range.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> T {
        self.data[self.array_index(x, y, z)].clone()
    }

    /// Get the element at the given coordinate vector.
    #[inline]
    pub fn get_at(&self, coords: IVec3) -> T {
        self.get(coords.x, coords.y, coords.z)
    }

    /// Set the element at the given coordinates.
    ///
    /// # Panics
    /// Panics if any coordinate is out of range.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, z: i32, value: T) {
        let index = self.array_index(x, y, z);
        self.data[index] = value;
    }

    /// Size along one axis (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn size(&self, axis: usize) -> i32 {
        match axis {
            0 => self.size_x,
            1 => self.size_y,
            2 => self.size_z,
            _ => panic!("Invalid grid axis {axis}, expected 0, 1 or 2"),
        }
    }

    #[inline]
    pub fn size_x(&self) -> i32 {
        self.size_x
    }

    #[inline]
    pub fn size_y(&self) -> i32 {
        self.size_y
    }

    #[inline]
    pub fn size_z(&self) -> i32 {
        self.size_z
    }

    /// Whether the coordinates address a sample inside the grid.
    #[inline]
    pub fn is_valid(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.size_x && y >= 0 && y < self.size_y && z >= 0 && z < self.size_z
    }

    /// The raw sample storage in index order, for bulk upload.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Convert (x, y, z) into the flat array index using little-endian
    /// ordering: x + y*size_x + z*size_x*size_y.
    #[inline]
    fn array_index(&self, x: i32, y: i32, z: i32) -> usize {
        if !self.is_valid(x, y, z) {
            panic!(
                "Grid index ({x}, {y}, {z}) out of range for {}x{}x{} grid",
                self.size_x, self.size_y, self.size_z
            );
        }
        (x as usize)
            + (y as usize) * (self.size_x as usize)
            + (z as usize) * (self.size_x as usize) * (self.size_y as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_default() {
        let grid = Grid3D::new(2, 3, 4, 7.5_f32);
        assert_eq!(grid.as_slice().len(), 24);
        assert_eq!(grid.get(1, 2, 3), 7.5);
    }

    #[test]
    fn test_index_ordering_x_fastest() {
        let mut grid = Grid3D::new(2, 2, 2, 0_i32);
        grid.set(1, 0, 0, 1);
        grid.set(0, 1, 0, 2);
        grid.set(0, 0, 1, 3);
        // x + y*sx + z*sx*sy
        assert_eq!(grid.as_slice()[1], 1);
        assert_eq!(grid.as_slice()[2], 2);
        assert_eq!(grid.as_slice()[4], 3);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = Grid3D::new(3, 3, 3, 0.0_f32);
        grid.set(2, 1, 0, -4.25);
        assert_eq!(grid.get(2, 1, 0), -4.25);
        assert_eq!(grid.get_at(IVec3::new(2, 1, 0)), -4.25);
    }

    #[test]
    fn test_size() {
        let grid = Grid3D::new(2, 3, 4, 0.0_f32);
        assert_eq!(grid.size(0), 2);
        assert_eq!(grid.size(1), 3);
        assert_eq!(grid.size(2), 4);
        assert_eq!(grid.size_x(), 2);
        assert_eq!(grid.size_y(), 3);
        assert_eq!(grid.size_z(), 4);
    }

    #[test]
    fn test_is_valid() {
        let grid = Grid3D::new(2, 2, 2, 0.0_f32);
        assert!(grid.is_valid(0, 0, 0));
        assert!(grid.is_valid(1, 1, 1));
        assert!(!grid.is_valid(2, 0, 0));
        assert!(!grid.is_valid(0, -1, 0));
        assert!(!grid.is_valid(0, 0, 2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let grid = Grid3D::new(2, 2, 2, 0.0_f32);
        let _ = grid.get(2, 0, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_negative_panics() {
        let mut grid = Grid3D::new(2, 2, 2, 0.0_f32);
        grid.set(0, 0, -1, 1.0);
    }

    #[test]
    #[should_panic(expected = "dimensions must be at least 1")]
    fn test_zero_dimension_panics() {
        let _ = Grid3D::new(0, 2, 2, 0.0_f32);
    }
}
