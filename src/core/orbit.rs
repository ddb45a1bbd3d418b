use glam::{Mat4, Vec3};
use std::f32::consts::PI;

const POLAR_EPS: f32 = 1e-6;

/// Damped orbit camera around a fixed target.
///
/// Spherical coordinates: `phi` is measured from +Y, `theta` from +Z toward +X.
/// Input accumulates into pending deltas which `update` applies a fraction of
/// per frame, giving the eased follow-through of orbit controls.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub damping: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitCamera {
    pub fn looking_at(eye: Vec3, target: Vec3, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            fovy_radians,
            znear,
            zfar,
            damping: 0.05,
            min_radius: 1.0,
            max_radius: 500.0,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * s * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * s * self.theta.cos(),
            )
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels on a
    /// viewport `viewport_height` pixels tall.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_theta -= 2.0 * PI * dx / h;
        self.pending_phi -= 2.0 * PI * dy / h;
    }

    /// Queue a zoom step; positive `wheel_delta` moves away from the target.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if wheel_delta > 0.0 {
            self.pending_scale /= 0.95;
        } else if wheel_delta < 0.0 {
            self.pending_scale *= 0.95;
        }
    }

    /// Apply one frame of damped motion.
    pub fn update(&mut self) {
        self.theta += self.pending_theta * self.damping;
        self.phi = (self.phi + self.pending_phi * self.damping).clamp(POLAR_EPS, PI - POLAR_EPS);
        self.radius = (self.radius * self.pending_scale).clamp(self.min_radius, self.max_radius);
        self.pending_theta *= 1.0 - self.damping;
        self.pending_phi *= 1.0 - self.damping;
        self.pending_scale = 1.0;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
    }
}
