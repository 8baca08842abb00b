//! Input value objects for the placement solver.
//!
//! A [`FluteParams`] is a read-only snapshot of one instrument: the tube,
//! the embouchure, the fundamental, and the ordered tone holes. The solver
//! never mutates it, so one snapshot can be shared across concurrent calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::f64::consts::PI;
use libm::sqrt;

/// Cylindrical tube geometry, constant for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    /// Inner bore diameter, mm.
    pub bore_diameter: f64,
    /// Wall thickness, mm.
    pub wall_thickness: f64,
}

impl Tube {
    /// A tube with the given bore diameter and wall thickness (mm).
    pub const fn new(bore_diameter: f64, wall_thickness: f64) -> Self {
        Self {
            bore_diameter,
            wall_thickness,
        }
    }
}

/// Embouchure (blow hole) geometry.
///
/// Real embouchure holes are elliptical; the model works on an equivalent
/// circular diameter with the same area, optionally reduced by how much of
/// the hole the player's lower lip covers.
///
/// # Example
///
/// ```rust
/// use flauta_core::Embouchure;
///
/// // A 12 x 10 mm elliptical hole, 30% covered by the lip.
/// let emb = Embouchure::elliptical(12.0, 10.0).with_lip_cover(30.0);
///
/// // Area equivalence: d = sqrt(4 * L * W / pi)
/// assert!((emb.diameter() - 12.3607744647).abs() < 1e-9);
/// assert!((emb.effective_diameter() - 0.7 * emb.diameter()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Embouchure {
    diameter: f64,
    lip_cover_percent: f64,
}

impl Embouchure {
    /// A circular embouchure hole of the given diameter (mm).
    pub const fn circular(diameter: f64) -> Self {
        Self {
            diameter,
            lip_cover_percent: 0.0,
        }
    }

    /// An elliptical embouchure hole, converted to the circular diameter
    /// with the same area.
    pub fn elliptical(length: f64, width: f64) -> Self {
        Self {
            diameter: sqrt(4.0 * length * width / PI),
            lip_cover_percent: 0.0,
        }
    }

    /// Set the lip coverage, in percent of the hole (0-100).
    pub const fn with_lip_cover(mut self, percent: f64) -> Self {
        self.lip_cover_percent = percent;
        self
    }

    /// The uncovered circular-equivalent diameter, mm.
    ///
    /// This is the diameter the bore-ratio limit is checked against.
    pub const fn diameter(&self) -> f64 {
        self.diameter
    }

    /// The lip coverage in percent of the hole.
    pub const fn lip_cover_percent(&self) -> f64 {
        self.lip_cover_percent
    }

    /// The playing diameter after lip coverage, mm.
    ///
    /// This is what the embouchure correction sees.
    pub fn effective_diameter(&self) -> f64 {
        self.diameter * (1.0 - 0.01 * self.lip_cover_percent)
    }
}

/// One requested tone hole: the note it must produce and its drill diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneHole {
    /// Target frequency when this is the highest open hole, Hz.
    pub frequency: f64,
    /// Hole diameter, mm.
    pub diameter: f64,
}

impl ToneHole {
    /// A tone hole sounding `frequency` Hz through a `diameter` mm hole.
    pub const fn new(frequency: f64, diameter: f64) -> Self {
        Self {
            frequency,
            diameter,
        }
    }
}

/// Complete input snapshot for one placement calculation.
///
/// Holes are ordered from the open foot end toward the embouchure: index 0
/// is the lowest hole (nearest the foot), increasing index climbs the tube.
#[derive(Debug, Clone, PartialEq)]
pub struct FluteParams {
    /// Tube geometry.
    pub tube: Tube,
    /// Embouchure geometry.
    pub embouchure: Embouchure,
    /// Fundamental frequency with every hole covered, Hz.
    pub fundamental: f64,
    /// Tone holes, foot end first.
    pub holes: Vec<ToneHole>,
}

impl FluteParams {
    /// Snapshot a flute with no tone holes yet.
    pub const fn new(tube: Tube, embouchure: Embouchure, fundamental: f64) -> Self {
        Self {
            tube,
            embouchure,
            fundamental,
            holes: Vec::new(),
        }
    }

    /// Append a tone hole above the previously added ones.
    pub fn with_hole(mut self, frequency: f64, diameter: f64) -> Self {
        self.holes.push(ToneHole::new(frequency, diameter));
        self
    }

    /// Replace the full hole list.
    pub fn with_holes(mut self, holes: impl IntoIterator<Item = ToneHole>) -> Self {
        self.holes = holes.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elliptical_area_equivalence() {
        // A circle declared as an ellipse of equal axes keeps its diameter.
        let emb = Embouchure::elliptical(10.0, 10.0);
        // d = sqrt(400 / pi) = 11.2838 for a 10 x 10 "ellipse"
        assert!((emb.diameter() - (400.0 / PI).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn lip_cover_reduces_effective_diameter_only() {
        let emb = Embouchure::circular(10.0).with_lip_cover(25.0);
        assert_eq!(emb.diameter(), 10.0);
        assert!((emb.effective_diameter() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn zero_lip_cover_is_identity() {
        let emb = Embouchure::circular(10.0);
        assert_eq!(emb.effective_diameter(), emb.diameter());
    }

    #[test]
    fn builder_orders_holes_foot_first() {
        let params = FluteParams::new(Tube::new(19.0, 2.0), Embouchure::circular(10.0), 261.63)
            .with_hole(293.66, 8.0)
            .with_hole(329.63, 8.0);
        assert_eq!(params.holes.len(), 2);
        assert!((params.holes[0].frequency - 293.66).abs() < 1e-12);
        assert!((params.holes[1].frequency - 329.63).abs() < 1e-12);
    }
}
