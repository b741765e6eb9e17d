use serde::{Deserialize, Serialize};

/// A 3-component `f64` vector.
///
/// Carries only the operations the predicate layer needs; it is not a
/// general linear-algebra type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Unit-length copy of this vector, or `None` for a degenerate
    /// (zero-length) vector.
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Self::new(self.x / len, self.y / len, self.z / len))
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_length() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.length() - 5.0).abs() < f64::EPSILON);
        assert!((v.dot(&Vec3::new(1.0, 0.0, 0.0)) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
        assert!((a.distance(&b) - b.distance(&a)).abs() < f64::EPSILON);
    }

    #[test]
    fn normalized_zero_vector() {
        assert!(Vec3::ZERO.normalized().is_none());
        let unit = Vec3::new(0.0, 2.0, 0.0).normalized().unwrap();
        assert!((unit.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn serde_roundtrip() {
        let v = Vec3::new(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
