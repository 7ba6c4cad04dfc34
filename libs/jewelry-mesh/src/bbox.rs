//! # Bounding Box
//!
//! Axis-aligned min/max reduction over a vertex buffer.

use crate::point::Point3D;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box. `min[i] <= max[i]` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point3D,
    pub max: Point3D,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: DVec3::ZERO,
            max: DVec3::ZERO,
        }
    }
}

impl BoundingBox {
    /// Computes the box enclosing `vertices`.
    ///
    /// An empty buffer yields the degenerate box `(0,0,0)-(0,0,0)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jewelry_mesh::bbox::BoundingBox;
    /// use glam::DVec3;
    ///
    /// let empty = BoundingBox::from_vertices(&[]);
    /// assert_eq!(empty.min, DVec3::ZERO);
    /// assert_eq!(empty.max, DVec3::ZERO);
    ///
    /// let points = [DVec3::new(-1.0, 2.0, 0.0), DVec3::new(3.0, -4.0, 1.0)];
    /// let bbox = BoundingBox::from_vertices(&points);
    /// assert_eq!(bbox.min, DVec3::new(-1.0, -4.0, 0.0));
    /// assert_eq!(bbox.max, DVec3::new(3.0, 2.0, 1.0));
    /// ```
    pub fn from_vertices(vertices: &[Point3D]) -> Self {
        let Some((first, rest)) = vertices.split_first() else {
            return Self::default();
        };

        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |bbox, v| Self {
                min: bbox.min.min(*v),
                max: bbox.max.max(*v),
            },
        )
    }

    /// Edge lengths along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center point of the box.
    #[inline]
    pub fn center(&self) -> Point3D {
        (self.min + self.max) * 0.5
    }

    /// Returns true if `point` lies inside or on the box.
    pub fn contains(&self, point: Point3D) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_vertex_is_point_box() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        let bbox = BoundingBox::from_vertices(&[p]);
        assert_eq!(bbox.min, p);
        assert_eq!(bbox.max, p);
        assert_eq!(bbox.size(), DVec3::ZERO);
    }

    #[test]
    fn test_contains_every_vertex() {
        let vertices = [
            DVec3::new(-1.0, -2.0, -3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(0.5, -7.0, 2.0),
        ];
        let bbox = BoundingBox::from_vertices(&vertices);
        assert!(vertices.iter().all(|v| bbox.contains(*v)));
        assert_eq!(bbox.min, DVec3::new(-1.0, -7.0, -3.0));
        assert_eq!(bbox.center(), DVec3::new(1.5, -1.0, 1.5));
    }
}
