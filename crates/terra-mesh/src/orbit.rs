//! Orbit camera data derived from the last generation.
//!
//! Only the geometry lives here; the per-frame angle update belongs to
//! whatever drives the camera.
use crate::config::TerrainConfig;

/// Camera height per unit of point spacing.
const HEIGHT_PER_SPACING: f32 = 24.5;

/// Fixed downward pitch of the orbit camera, degrees.
const PITCH_DEG: f32 = 50.0;

/// Circle the camera travels around the centred terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitRig {
    pub center: [f32; 3],
    pub radius: f32,
    pub height: f32,
}

/// Camera placement for one orbit angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: [f32; 3],
    /// Euler angles in degrees: (pitch, yaw, roll).
    pub euler_deg: [f32; 3],
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self { center: [0.0; 3], radius: 1.0, height: 0.0 }
    }
}

impl OrbitRig {
    /// Rig for a terrain generated from `config` and centred on the origin.
    pub fn for_config(config: &TerrainConfig) -> Self {
        Self {
            center: [0.0; 3],
            radius: config.orbit_radius(),
            height: HEIGHT_PER_SPACING * config.point_spacing,
        }
    }

    pub fn pose_at(&self, angle_deg: f32) -> CameraPose {
        let theta = angle_deg.to_radians();
        CameraPose {
            position: [
                self.center[0] + self.radius * theta.cos(),
                self.center[1] + self.height,
                self.center[2] + self.radius * theta.sin(),
            ],
            euler_deg: [PITCH_DEG, -90.0 - angle_deg, 0.0],
        }
    }
}

/// Advance an orbit angle by `speed_deg_per_s · dt`, wrapped to `[0, 360)`.
pub fn advance_angle(angle_deg: f32, speed_deg_per_s: f32, dt: f32) -> f32 {
    (angle_deg + speed_deg_per_s * dt).rem_euclid(360.0)
}
