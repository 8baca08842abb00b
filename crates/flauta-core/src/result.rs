//! Solved placement results.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One placed tone hole with its diagnostics.
///
/// Two coordinates describe the same hole:
///
/// * `acoustic_position` - idealized 1-D coordinate measured from the
///   virtual fully-open terminus; decreases as holes climb the tube.
/// * `physical_position` - manufacturing distance from the anchor end,
///   `acoustic_end_x - acoustic_position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvedHole {
    /// Target frequency, Hz.
    pub frequency: f64,
    /// Hole diameter, mm.
    pub diameter: f64,
    /// Idealized coordinate along the air column, mm.
    pub acoustic_position: f64,
    /// Manufacturing distance from the anchor end, mm.
    pub physical_position: f64,
    /// Diagnostic cutoff frequency, Hz. Reported, never fed back.
    pub cutoff_frequency: f64,
    /// Distance to the previous hole (or the anchor, for hole 0), mm.
    pub spacing: f64,
}

impl SolvedHole {
    /// Cutoff frequency over target frequency.
    ///
    /// Makers read this as headroom: the hole behaves well when the ratio
    /// is comfortably above 1, typically 2 or more.
    pub fn cutoff_ratio(&self) -> f64 {
        self.cutoff_frequency / self.frequency
    }
}

/// Complete, validated placement of one instrument.
///
/// Either every hole solved and passed validation, or the calculation
/// returned an error; there is no partial form of this value.
#[derive(Debug, Clone, PartialEq)]
pub struct FluteResult {
    /// Anchor coordinate: acoustic length of the fundamental, mm.
    pub acoustic_end_x: f64,
    /// Embouchure center distance from the anchor end, mm.
    pub embouchure_physical_position: f64,
    /// Speed of sound the placement was computed with, mm/s.
    pub speed_of_sound: f64,
    /// Placed holes, foot end first.
    pub holes: Vec<SolvedHole>,
}
