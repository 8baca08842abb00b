//! Terminal errors for unrealizable flute geometry.

/// Why a parameter combination cannot be built.
///
/// Every variant is terminal: the solver produces no partial result, never
/// clamps, and never rounds an invalid position into a valid one. Hole
/// indices are zero-based (index 0 is the hole nearest the foot end);
/// rendered messages number holes from 1, the way makers count them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveError {
    /// The embouchure diameter exceeds the allowed fraction of the bore.
    EmbouchureTooLarge {
        /// Embouchure circular-equivalent diameter, mm.
        diameter: f64,
        /// Bore diameter, mm.
        bore: f64,
    },
    /// A tone-hole diameter exceeds the allowed fraction of the bore.
    HoleTooLarge {
        /// Zero-based index of the offending hole.
        index: usize,
        /// Hole diameter, mm.
        diameter: f64,
        /// Bore diameter, mm.
        bore: f64,
    },
    /// The hole's placement quadratic has no real root.
    Unsolvable {
        /// Zero-based index of the hole that cannot be placed.
        index: usize,
    },
    /// The solved acoustic position is negative or not a finite number.
    InvalidPosition {
        /// Zero-based index of the hole with the invalid position.
        index: usize,
    },
    /// A hole would sit at or past the previous hole's position.
    HoleOrdering {
        /// Zero-based index of the out-of-order hole.
        index: usize,
    },
    /// Two adjacent holes are closer than the manufacturing minimum.
    HolesTooClose {
        /// Zero-based index of the upper hole of the pair.
        index: usize,
        /// Measured spacing, mm.
        spacing: f64,
        /// Required minimum spacing, mm.
        minimum: f64,
    },
    /// A hole's physical position falls past the embouchure end.
    BeyondEmbouchure {
        /// Zero-based index of the out-of-bounds hole.
        index: usize,
    },
    /// The embouchure itself lands at a negative physical position.
    EmbouchureOutOfBounds,
}

impl core::fmt::Display for SolveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmbouchureTooLarge { diameter, bore } => write!(
                f,
                "embouchure diameter {diameter:.2} mm too large for {bore:.2} mm bore"
            ),
            Self::HoleTooLarge {
                index,
                diameter,
                bore,
            } => write!(
                f,
                "hole {} diameter {diameter:.2} mm too large for {bore:.2} mm bore",
                index + 1
            ),
            Self::Unsolvable { index } => write!(
                f,
                "hole {} cannot be placed (try adjusting hole size or bore diameter)",
                index + 1
            ),
            Self::InvalidPosition { index } => {
                write!(f, "hole {} position is invalid", index + 1)
            }
            Self::HoleOrdering { index } => write!(
                f,
                "hole {} would overlap or be in wrong order (try larger spacing or different frequencies)",
                index + 1
            ),
            Self::HolesTooClose {
                index,
                spacing,
                minimum,
            } => write!(
                f,
                "holes {} and {} are too close together ({spacing:.1} mm, minimum {minimum:.0} mm)",
                index,
                index + 1
            ),
            Self::BeyondEmbouchure { index } => {
                write!(f, "hole {} position is beyond embouchure", index + 1)
            }
            Self::EmbouchureOutOfBounds => write!(f, "embouchure position is negative"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SolveError {}
