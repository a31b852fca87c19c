//! Scene geometry: vectors, axes, and axis-aligned boxes.
//!
//! Every scene is three-dimensional internally.  Planar (canvas-style) scenes
//! keep `z = 0` for all particles and use [`Aabb::planar`] for their regions,
//! which gives the box a thin slab of depth around the `z = 0` plane.

/// Double-precision 3-vector used for positions and velocities.
pub type Vec3 = glam::DVec3;

/// Half-depth of the slab produced by [`Aabb::planar`].
pub const PLANAR_HALF_DEPTH: f64 = 0.5;

// ── Axis ──────────────────────────────────────────────────────────────────────

/// A coordinate axis.  Used as a barrier's surface normal and as a field's
/// transverse (deflected) direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index into a [`Vec3`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector along this axis.
    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

// ── Aabb ──────────────────────────────────────────────────────────────────────

/// An axis-aligned box with inclusive bounds.
///
/// A box with zero extent along any axis is *degenerate*: it is a valid
/// value but [`contains`](Self::contains) never matches it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build from any two opposite corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Build from a centre point and half-extents (negative extents are
    /// taken by magnitude).
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let h = half_extents.abs();
        Self { min: center - h, max: center + h }
    }

    /// A planar rectangle `[x, x + width] × [y, y + height]` in canvas
    /// coordinates, extruded into a thin slab around `z = 0`.
    pub fn planar(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Vec3::new(x, y, -PLANAR_HALF_DEPTH),
            Vec3::new(x + width, y + height, PLANAR_HALF_DEPTH),
        )
    }

    /// `max - min` per axis.
    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// `true` if any axis has zero (or non-finite) extent.
    pub fn is_degenerate(&self) -> bool {
        let e = self.extent();
        !(e.x > 0.0 && e.y > 0.0 && e.z > 0.0)
    }

    /// Inclusive point-in-box test.  Always `false` for degenerate boxes.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        !self.is_degenerate()
            && p.x >= self.min.x && p.x <= self.max.x
            && p.y >= self.min.y && p.y <= self.max.y
            && p.z >= self.min.z && p.z <= self.max.z
    }

    /// Lower bound along `axis`.
    #[inline]
    pub fn low(&self, axis: Axis) -> f64 {
        self.min[axis.index()]
    }

    /// Upper bound along `axis`.
    #[inline]
    pub fn high(&self, axis: Axis) -> f64 {
        self.max[axis.index()]
    }
}

impl std::fmt::Display for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}, {:.3}]..[{:.3}, {:.3}, {:.3}]",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z
        )
    }
}
