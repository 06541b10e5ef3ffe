//! 1D grid representation.
//!
//! The solver runs on a uniform partition of an interval [x_min, x_max] into
//! zones of equal width `dx`. Guard-zone storage is a property of the stage
//! buffers, not of the grid.

/// Uniform 1D grid of an interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid1D {
    /// Left endpoint of the domain
    pub x_min: f64,
    /// Right endpoint of the domain
    pub x_max: f64,
    /// Number of zones (guard zones excluded)
    pub num_zones: usize,
    /// Zone width, (x_max - x_min) / num_zones
    pub dx: f64,
}

impl Grid1D {
    /// Create a uniform grid of [x_min, x_max] with `num_zones` zones.
    ///
    /// Panics if `num_zones` is zero or the interval is empty, so a
    /// constructed grid always has `dx > 0`.
    pub fn uniform(x_min: f64, x_max: f64, num_zones: usize) -> Self {
        assert!(num_zones >= 1, "need at least one zone");
        assert!(x_max > x_min, "x_max must be greater than x_min");

        let dx = (x_max - x_min) / num_zones as f64;
        Self {
            x_min,
            x_max,
            num_zones,
            dx,
        }
    }

    /// Center coordinate of zone `i`.
    pub fn zone_center(&self, i: usize) -> f64 {
        self.x_min + (i as f64 + 0.5) * self.dx
    }

    /// Map reference coordinate xi in [-1, 1] of zone `i` to physical x.
    pub fn reference_to_physical(&self, i: usize, xi: f64) -> f64 {
        self.zone_center(i) + 0.5 * self.dx * xi
    }
}
