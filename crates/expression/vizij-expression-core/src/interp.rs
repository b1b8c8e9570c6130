//! Interpolation helpers shared by the transition player and the blender.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalized progress through a segment, clamped to [0,1].
/// Zero-length segments report 1 so they snap straight to their target.
#[inline]
pub fn segment_ratio(elapsed: f32, duration: f32) -> f32 {
    if duration > 0.0 {
        (elapsed / duration).clamp(0.0, 1.0)
    } else {
        1.0
    }
}
