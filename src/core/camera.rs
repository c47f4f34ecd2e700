use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};

use super::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, OVERVIEW_POSITION};

/// Right-handed perspective camera positioned by a translation and XYZ Euler angles.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub rotation: Vec3,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: OVERVIEW_POSITION,
            rotation: Vec3::ZERO,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            aspect: 1.0,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl PerspectiveCamera {
    #[inline]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Direction the camera looks along (its local -Z).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns `None` for points at or behind the camera plane.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * Vec4::from((world, 1.0));
        if clip.w <= 1e-6 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// World-space ray through a point given in normalized device coordinates.
    pub fn ndc_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near: Vec3 = p_near.truncate() / p_near.w;
        let far: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.position;
        let rd = (far - near).normalize_or_zero();
        (ro, rd)
    }

    /// Height in world units of the view frustum slice at `distance`.
    #[inline]
    pub fn frustum_height_at(&self, distance: f32) -> f32 {
        2.0 * (self.fovy_radians * 0.5).tan() * distance
    }
}

/// Convert canvas pixel coordinates to normalized device coordinates.
#[inline]
pub fn pixel_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(2.0 * px.x / w - 1.0, 1.0 - 2.0 * px.y / h)
}

/// Convert normalized device coordinates to canvas pixel coordinates.
#[inline]
pub fn ndc_to_pixel(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
}
