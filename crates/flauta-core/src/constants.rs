//! Physical constants and empirical correction coefficients.
//!
//! All coefficients that parameterize the placement model live in a single
//! [`PhysicalConstants`] value that callers pass into the solver. Nothing in
//! this crate reads module-level globals, so temperature-adjusted or
//! otherwise customized variants can be substituted without touching the
//! algorithm itself.

use libm::sqrt;

/// Speed of sound in dry air, mm/s.
const SPEED_OF_SOUND_MM_S: f64 = 345_000.0;

/// Reference speed of sound for the temperature model, mm/s.
/// Scaled by `sqrt(1 + T / 273.15)` in [`PhysicalConstants::at_temperature`].
const SPEED_OF_SOUND_REFERENCE_MM_S: f64 = 343_000.0;

/// Empirical coefficients and manufacturing limits for the placement model.
///
/// The defaults reproduce the standard empirical corrections for a
/// cylindrical bore with round tone holes. All lengths are millimeters,
/// all frequencies Hz.
///
/// # Example
///
/// ```rust
/// use flauta_core::PhysicalConstants;
///
/// let consts = PhysicalConstants::default();
/// assert_eq!(consts.speed_of_sound, 345_000.0);
///
/// // Warm air raises the speed of sound and with it every pitch.
/// let warm = PhysicalConstants::at_temperature(25.0);
/// assert!(warm.speed_of_sound > PhysicalConstants::at_temperature(10.0).speed_of_sound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Speed of sound in the air column, mm/s.
    pub speed_of_sound: f64,

    /// Open-end radiation correction as a fraction of the bore diameter.
    pub end_correction_factor: f64,

    /// Chimney-height extension per unit of tone-hole diameter.
    pub hole_height_factor: f64,

    /// Residual length perturbation factor for a covered tone hole.
    pub closed_hole_factor: f64,

    /// Embouchure side-branch stack coefficient.
    pub embouchure_stack_factor: f64,

    /// Largest allowed hole (or embouchure) diameter as a fraction of bore.
    pub max_hole_to_bore_ratio: f64,

    /// Minimum manufacturable distance between adjacent holes, mm.
    pub min_hole_spacing: f64,
}

impl PhysicalConstants {
    /// Constants for room-temperature air.
    pub const fn new() -> Self {
        Self {
            speed_of_sound: SPEED_OF_SOUND_MM_S,
            end_correction_factor: 0.30665,
            hole_height_factor: 0.75,
            closed_hole_factor: 0.25,
            embouchure_stack_factor: 0.6133,
            max_hole_to_bore_ratio: 0.9,
            min_hole_spacing: 5.0,
        }
    }

    /// Constants with the speed of sound derived from air temperature.
    ///
    /// Uses the empirical model `c(T) = 343000 * sqrt(1 + T / 273.15)` with
    /// `T` in degrees Celsius. Every other coefficient keeps its default.
    pub fn at_temperature(celsius: f64) -> Self {
        Self {
            speed_of_sound: SPEED_OF_SOUND_REFERENCE_MM_S * sqrt(1.0 + celsius / 273.15),
            ..Self::new()
        }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::new()
    }
}
