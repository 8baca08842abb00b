//! Advisory design review.
//!
//! Soft playability and manufacturability checks that run before the solver.
//! Advisories never gate a calculation; the solver's own validator is the
//! authority on whether a design is buildable. These exist to warn a maker
//! that a geometrically solvable flute may still be unpleasant to play or
//! fragile to build.

use crate::design::Design;

/// Severity of an advisory finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryLevel {
    /// Playability concern; the instrument will still work.
    Warning,
    /// Likely build failure, e.g. structurally unsound walls.
    Error,
}

/// One finding from a design review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Severity.
    pub level: AdvisoryLevel,
    /// Human-readable finding.
    pub message: String,
}

impl Advisory {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Error,
            message: message.into(),
        }
    }
}

/// Bores narrower than this restrict airflow, mm.
const NARROW_BORE_MM: f64 = 15.0;
/// Bores wider than this get hard to play, mm.
const WIDE_BORE_MM: f64 = 25.0;
/// Walls thinner than this risk cracking, mm.
const THIN_WALL_MM: f64 = 1.5;
/// Walls thicker than this start to color the tone, mm.
const THICK_WALL_MM: f64 = 4.0;
/// Estimated sounding lengths outside this range are awkward to hold, mm.
const SHORT_FLUTE_MM: f64 = 250.0;
const LONG_FLUTE_MM: f64 = 550.0;

/// Review a design and return every advisory finding.
///
/// An empty vector means nothing stood out. Findings are ordered tube first,
/// then overall size.
///
/// # Example
///
/// ```rust
/// use flauta_config::{review, Design};
///
/// let design = Design::from_toml(r#"
/// name = "Thin walls"
///
/// [tube]
/// bore_diameter = 19.0
/// wall_thickness = 1.0
///
/// [embouchure]
/// diameter = 10.0
///
/// [fundamental]
/// frequency = 261.63
/// "#).unwrap();
///
/// let findings = review(&design);
/// assert!(findings.iter().any(|a| a.message.contains("thin")));
/// ```
pub fn review(design: &Design) -> Vec<Advisory> {
    let mut findings = Vec::new();

    let bore = design.tube.bore_diameter;
    if bore < NARROW_BORE_MM {
        findings.push(Advisory::warning("narrow bore may restrict airflow"));
    } else if bore > WIDE_BORE_MM {
        findings.push(Advisory::warning("wide bore may be harder to play"));
    }

    let wall = design.tube.wall_thickness;
    if wall < THIN_WALL_MM {
        findings.push(Advisory::error("walls too thin, structural integrity at risk"));
    } else if wall > THICK_WALL_MM {
        findings.push(Advisory::warning("thick walls may affect tone"));
    }

    // Rough sounding length from the fundamental alone; enough to flag
    // extremes without running the solver.
    if let Ok(params) = design.to_params() {
        let length = 0.5 * design.constants().speed_of_sound / params.fundamental;
        if length < SHORT_FLUTE_MM {
            findings.push(Advisory::warning(
                "very short flute, may be difficult to play",
            ));
        } else if length > LONG_FLUTE_MM {
            findings.push(Advisory::warning("very long flute, may be unwieldy"));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::{EmbouchureSection, PitchField, TubeSection};

    fn design(bore: f64, wall: f64, fundamental: f64) -> Design {
        Design {
            name: "test".to_string(),
            description: None,
            temperature_celsius: None,
            tube: TubeSection {
                bore_diameter: bore,
                wall_thickness: wall,
            },
            embouchure: EmbouchureSection {
                diameter: Some(10.0),
                ..EmbouchureSection::default()
            },
            fundamental: PitchField::from_frequency(fundamental),
            holes: Vec::new(),
        }
    }

    #[test]
    fn comfortable_design_passes_clean() {
        assert!(review(&design(19.0, 2.0, 440.0)).is_empty());
    }

    #[test]
    fn narrow_and_wide_bores_warn() {
        let findings = review(&design(14.0, 2.0, 440.0));
        assert!(findings.iter().any(|a| a.message.contains("narrow bore")));

        let findings = review(&design(26.0, 2.0, 440.0));
        assert!(findings.iter().any(|a| a.message.contains("wide bore")));
    }

    #[test]
    fn thin_walls_are_an_error() {
        let findings = review(&design(19.0, 1.0, 440.0));
        let thin = findings
            .iter()
            .find(|a| a.message.contains("thin"))
            .unwrap();
        assert_eq!(thin.level, AdvisoryLevel::Error);
    }

    #[test]
    fn thick_walls_only_warn() {
        let findings = review(&design(19.0, 4.5, 440.0));
        let thick = findings
            .iter()
            .find(|a| a.message.contains("thick"))
            .unwrap();
        assert_eq!(thick.level, AdvisoryLevel::Warning);
    }

    #[test]
    fn extreme_lengths_warn() {
        // 880 Hz fundamental: under 200 mm of tube.
        let findings = review(&design(19.0, 2.0, 880.0));
        assert!(findings.iter().any(|a| a.message.contains("short")));

        // 220 Hz fundamental: the better part of a meter.
        let findings = review(&design(19.0, 2.0, 220.0));
        assert!(findings.iter().any(|a| a.message.contains("long")));
    }

    #[test]
    fn boundary_values_pass() {
        assert!(review(&design(15.0, 1.5, 440.0)).is_empty());
        assert!(review(&design(25.0, 4.0, 440.0)).is_empty());
    }
}
