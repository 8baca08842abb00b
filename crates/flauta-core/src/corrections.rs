//! Empirical acoustic correction terms.
//!
//! One-dimensional horn theory treats the flute as an ideal open pipe; every
//! function here is a closed-form correction for a way the real instrument
//! departs from that ideal. All corrections are lengths in millimeters except
//! [`cutoff_frequency`], which is a diagnostic in Hz.
//!
//! | Function | Models |
//! |----------|--------|
//! | [`end_correction`] | radiation reactance of the open foot end |
//! | [`effective_wall_height`] | the "chimney" a hole bores through the wall |
//! | [`closed_hole_correction`] | residual cavity of a covered tone hole |
//! | [`embouchure_correction`] | the embouchure as an open side branch |
//! | [`cutoff_frequency`] | where a hole stops acting as an acoustic short |

use crate::constants::PhysicalConstants;
use core::f64::consts::PI;
use libm::sqrt;

/// Acoustic height of a tone-hole chimney.
///
/// The air plug inside a tone hole extends past the physical wall by a
/// fraction of the hole diameter.
///
/// # Arguments
/// * `wall` - Wall thickness in mm
/// * `hole_diameter` - Tone-hole diameter in mm
#[inline]
pub fn effective_wall_height(consts: &PhysicalConstants, wall: f64, hole_diameter: f64) -> f64 {
    wall + consts.hole_height_factor * hole_diameter
}

/// Residual length perturbation of a covered tone hole.
///
/// A closed hole still presents its side cavity to the bore, lengthening the
/// resonating column slightly. Scales with the square of the hole-to-bore
/// diameter ratio.
///
/// # Example
///
/// ```rust
/// use flauta_core::{closed_hole_correction, PhysicalConstants};
///
/// let consts = PhysicalConstants::default();
/// // An 8 mm hole in a 19 mm bore with 2 mm walls.
/// let corr = closed_hole_correction(&consts, 2.0, 8.0, 19.0);
/// assert!((corr - 0.25 * 2.0 * (8.0 / 19.0_f64).powi(2)).abs() < 1e-12);
/// ```
#[inline]
pub fn closed_hole_correction(
    consts: &PhysicalConstants,
    wall: f64,
    hole_diameter: f64,
    bore: f64,
) -> f64 {
    let ratio = hole_diameter / bore;
    consts.closed_hole_factor * wall * ratio * ratio
}

/// Open-end radiation correction.
///
/// The pressure node of the standing wave sits slightly beyond the physical
/// end of the tube; the offset is proportional to the bore diameter.
#[inline]
pub fn end_correction(consts: &PhysicalConstants, bore: f64) -> f64 {
    consts.end_correction_factor * bore
}

/// Embouchure correction, modeling the blow hole as an open side branch.
///
/// Takes the *effective* embouchure diameter, after any elliptical
/// area-equivalence conversion and lip-coverage reduction.
#[inline]
pub fn embouchure_correction(
    consts: &PhysicalConstants,
    bore: f64,
    embouchure_diameter: f64,
    wall: f64,
) -> f64 {
    let ratio = bore / embouchure_diameter;
    ratio * ratio * (bore / 2.0 + wall + consts.embouchure_stack_factor * embouchure_diameter / 2.0)
}

/// Diagnostic cutoff frequency of an open tone hole.
///
/// Above this Helmholtz-like frequency the hole no longer behaves as an ideal
/// acoustic short and the placement model degrades. The value is reported
/// alongside each solved hole and never fed back into the placement itself;
/// makers aim for a cutoff comfortably above the note the hole produces.
///
/// # Arguments
/// * `bore` - Bore diameter in mm
/// * `wall` - Wall thickness in mm
/// * `hole_diameter` - Tone-hole diameter in mm
/// * `segment_length` - Distance to the previous hole (or the anchor) in mm
#[inline]
pub fn cutoff_frequency(
    consts: &PhysicalConstants,
    bore: f64,
    wall: f64,
    hole_diameter: f64,
    segment_length: f64,
) -> f64 {
    let chimney = effective_wall_height(consts, wall, hole_diameter);
    0.5 * consts.speed_of_sound * hole_diameter / (PI * bore * sqrt(chimney * segment_length))
}
