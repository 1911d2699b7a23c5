//! Camera that follows a single world point.
use glam::{Mat4, Vec2, Vec3};

/// Tracks a world-space center and derives the view translation from it.
///
/// There is no smoothing: the director snaps the center onto the player once
/// per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFollow {
    center: Vec2,
    viewport: Vec2,
}

impl CameraFollow {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            center: Vec2::ZERO,
            viewport,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, point: Vec2) {
        self.center = point;
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// World-to-screen translation that puts [`Self::center`] at the middle
    /// of the viewport.
    pub fn translation_matrix(&self) -> Mat4 {
        let offset = self.viewport * 0.5 - self.center;
        Mat4::from_translation(Vec3::new(offset.x, offset.y, 0.0))
    }

    /// Screen position of a world point under the current transform.
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        self.translation_matrix()
            .transform_point3(point.extend(0.0))
            .truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn center_lands_on_viewport_midpoint() {
        let mut camera = CameraFollow::new(Vec2::new(800.0, 480.0));
        camera.set_center(Vec2::new(16016.0, 16016.0));

        let screen = camera.world_to_screen(camera.center());
        assert_relative_eq!(screen.x, 400.0);
        assert_relative_eq!(screen.y, 240.0);
    }

    #[test]
    fn translation_depends_only_on_center_and_viewport() {
        let mut a = CameraFollow::new(Vec2::new(640.0, 360.0));
        let mut b = CameraFollow::new(Vec2::new(640.0, 360.0));
        a.set_center(Vec2::new(3.0, 4.0));
        b.set_center(Vec2::new(100.0, 100.0));
        b.set_center(Vec2::new(3.0, 4.0));
        assert_eq!(a.translation_matrix(), b.translation_matrix());

        let moved = a.translation_matrix().w_axis;
        assert_relative_eq!(moved.x, 317.0);
        assert_relative_eq!(moved.y, 176.0);
        assert_relative_eq!(moved.z, 0.0);
    }

    #[test]
    fn offsets_are_preserved_relative_to_center() {
        let mut camera = CameraFollow::new(Vec2::new(800.0, 480.0));
        camera.set_center(Vec2::new(50.0, 50.0));
        let screen = camera.world_to_screen(Vec2::new(82.0, 18.0));
        assert_relative_eq!(screen.x, 432.0);
        assert_relative_eq!(screen.y, 208.0);
    }
}
