//! Scalar field fills and edits
//!
//! Helpers for seeding a density grid and for applying localized brush
//! edits before re-extracting the surface.

use rand::Rng;
use terramesh_math::Vec3;

use crate::grid3d::Grid3D;

/// Fill every sample with a uniform random value from `range`
pub fn fill_random<R: Rng>(grid: &mut Grid3D<f32>, rng: &mut R, range: std::ops::Range<f32>) {
    for z in 0..grid.size_z() {
        for y in 0..grid.size_y() {
            for x in 0..grid.size_x() {
                grid.set(x, y, z, rng.gen_range(range.clone()));
            }
        }
    }
}

/// Fill with the negated distance from the grid origin, a field that
/// falls off radially and crosses any negative isovalue on a sphere octant
pub fn fill_radial(grid: &mut Grid3D<f32>) {
    for z in 0..grid.size_z() {
        for y in 0..grid.size_y() {
            for x in 0..grid.size_x() {
                let d = ((x * x + y * y + z * z) as f32).sqrt();
                grid.set(x, y, z, -d);
            }
        }
    }
}

/// Fill with a signed sphere field: positive inside, zero on the sphere,
/// negative outside
pub fn fill_sphere(grid: &mut Grid3D<f32>, center: Vec3, radius: f32) {
    for z in 0..grid.size_z() {
        for y in 0..grid.size_y() {
            for x in 0..grid.size_x() {
                let p = Vec3::new(x as f32, y as f32, z as f32);
                grid.set(x, y, z, radius - p.distance(center));
            }
        }
    }
}

/// Add `amount` to every sample inside the ellipsoid of per-axis `radius`
/// around `center`, in grid index space. The ellipsoid may extend past the
/// grid; samples outside are skipped.
pub fn add_in_radius(grid: &mut Grid3D<f32>, center: Vec3, radius: Vec3, amount: f32) {
    assert!(
        radius.x > 0.0 && radius.y > 0.0 && radius.z > 0.0,
        "Brush radius must be positive on every axis, received {radius:?}"
    );
    let min_x = (center.x - radius.x).floor() as i32;
    let max_x = (center.x + radius.x).ceil() as i32;
    let min_y = (center.y - radius.y).floor() as i32;
    let max_y = (center.y + radius.y).ceil() as i32;
    let min_z = (center.z - radius.z).floor() as i32;
    let max_z = (center.z + radius.z).ceil() as i32;

    let mut touched = 0_u64;
    for z in min_z..=max_z {
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if !grid.is_valid(x, y, z) {
                    continue;
                }
                let offset = Vec3::new(x as f32, y as f32, z as f32) - center;
                let n = offset.component_div(radius);
                if n.length_squared() <= 1.0 {
                    grid.set(x, y, z, grid.get(x, y, z) + amount);
                    touched += 1;
                }
            }
        }
    }
    log::trace!("Brush at {center:?} radius {radius:?} touched {touched} samples");
}
