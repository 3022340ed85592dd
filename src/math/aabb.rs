use glam::Vec3;

/// Axis-aligned box in a shape's local frame
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centred on the origin
    pub fn centered(half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self::new(-half, half)
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Distance from the origin to the farthest corner
    pub fn enclosing_radius(&self) -> f32 {
        self.min.length().max(self.max.length())
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_box() {
        let aabb = AABB::centered(Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(aabb.min, Vec3::new(-0.5, -1.0, -1.5));
        assert_eq!(aabb.center(), Vec3::ZERO);
        assert_eq!(aabb.half_extents(), Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_centered_ignores_sign() {
        let aabb = AABB::centered(Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_enclosing_radius_of_unit_cube() {
        let aabb = AABB::centered(Vec3::splat(0.5));
        assert!((aabb.enclosing_radius() - 0.75f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_enclosing_radius_off_center() {
        let aabb = AABB::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(aabb.enclosing_radius(), 3.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let aabb = AABB::centered(Vec3::ONE);
        assert!(aabb.contains(Vec3::ZERO));
        assert!(aabb.contains(Vec3::ONE));
        assert!(!aabb.contains(Vec3::new(0.0, 1.01, 0.0)));
    }
}
