/// Pitch is kept strictly inside ±90° to avoid the Euler singularity.
pub const PITCH_LIMIT_DEGREES: f32 = 89.9;

/// Smallest mass an editor may store on a rigid body.
pub const MIN_MASS: f32 = 0.0001;

/// Clamp a pitch angle (degrees) to `±PITCH_LIMIT_DEGREES`.
pub fn clamp_pitch(degrees: f32) -> f32 {
    degrees.clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES)
}

/// Inverse mass for an edited mass value, never infinite or NaN.
pub fn inverse_mass_from(mass: f32) -> f32 {
    let mass = if mass.is_nan() { MIN_MASS } else { mass.max(MIN_MASS) };
    1.0 / mass
}

/// Mass displayed for a stored inverse mass. Zero inverse mass is an
/// immovable body and shows as infinite.
pub fn mass_from_inverse(inverse_mass: f32) -> f32 {
    if inverse_mass == 0.0 {
        f32::INFINITY
    } else {
        1.0 / inverse_mass
    }
}
