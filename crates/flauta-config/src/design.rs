//! Design file format and operations.
//!
//! A design is the serializable description of one flute: tube, embouchure,
//! fundamental, and tone holes. Hole pitches may be given directly in Hz, as
//! cents above the fundamental, or as MIDI note numbers; [`Design::to_params`]
//! resolves whichever form was used into a solver-ready snapshot.
//!
//! # TOML Format
//!
//! ```toml
//! name = "C4 six hole"
//! description = "Simple-system flute in C"
//!
//! [tube]
//! bore_diameter = 14.3
//! wall_thickness = 2.5
//!
//! [embouchure]
//! length = 12.0
//! width = 10.0
//! lip_cover_percent = 30.0
//!
//! [fundamental]
//! frequency = 261.63
//!
//! [[holes]]
//! cents = 200.0
//! diameter = 6.0
//!
//! [[holes]]
//! midi = 64
//! diameter = 6.5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use flauta_core::tuning::midi_to_frequency;
use flauta_core::{cents_to_frequency, Embouchure, FluteParams, PhysicalConstants, Tube};

use crate::error::ConfigError;

/// Serializable flute design.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Design {
    /// Name of the design.
    pub name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Air temperature the instrument is tuned for, degrees Celsius.
    /// Omitted means room-temperature defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_celsius: Option<f64>,

    /// Tube geometry.
    pub tube: TubeSection,

    /// Embouchure geometry.
    pub embouchure: EmbouchureSection,

    /// Fundamental pitch.
    pub fundamental: PitchField,

    /// Tone holes, foot end first.
    #[serde(default)]
    pub holes: Vec<HoleSection>,
}

/// Tube geometry section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TubeSection {
    /// Inner bore diameter, mm.
    pub bore_diameter: f64,
    /// Wall thickness, mm.
    pub wall_thickness: f64,
}

/// Embouchure geometry section: either a circular `diameter` or an
/// elliptical `length` x `width` pair, never both.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct EmbouchureSection {
    /// Circular hole diameter, mm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    /// Elliptical hole length, mm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Elliptical hole width, mm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Lip coverage in percent of the hole (0-100).
    #[serde(default)]
    pub lip_cover_percent: f64,
}

/// A pitch given as a frequency in Hz or a MIDI note number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PitchField {
    /// Frequency, Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Equal-tempered MIDI note number; fractional values are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi: Option<f64>,
}

/// One tone hole: a pitch (frequency, cents over the fundamental, or MIDI
/// note) and a drill diameter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct HoleSection {
    /// Target frequency, Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Cents above the fundamental.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cents: Option<f64>,
    /// Equal-tempered MIDI note number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi: Option<f64>,
    /// Hole diameter, mm.
    pub diameter: f64,
}

impl PitchField {
    /// A pitch from a plain frequency.
    pub const fn from_frequency(frequency: f64) -> Self {
        Self {
            frequency: Some(frequency),
            midi: None,
        }
    }

    fn resolve(&self, field: &str) -> Result<f64, ConfigError> {
        match (self.frequency, self.midi) {
            (Some(hz), None) => Ok(hz),
            (None, Some(midi)) => Ok(midi_to_frequency(midi)),
            _ => Err(ConfigError::invalid_design(
                field,
                "specify exactly one of frequency or midi",
            )),
        }
    }
}

impl EmbouchureSection {
    fn resolve(&self) -> Result<Embouchure, ConfigError> {
        let emb = match (self.diameter, self.length, self.width) {
            (Some(d), None, None) => Embouchure::circular(d),
            (None, Some(l), Some(w)) => Embouchure::elliptical(l, w),
            _ => {
                return Err(ConfigError::invalid_design(
                    "embouchure",
                    "specify either diameter or both length and width",
                ));
            }
        };
        Ok(emb.with_lip_cover(self.lip_cover_percent))
    }
}

impl HoleSection {
    fn resolve(&self, fundamental: f64, index: usize) -> Result<f64, ConfigError> {
        match (self.frequency, self.cents, self.midi) {
            (Some(hz), None, None) => Ok(hz),
            (None, Some(cents), None) => Ok(cents_to_frequency(fundamental, cents)),
            (None, None, Some(midi)) => Ok(midi_to_frequency(midi)),
            _ => Err(ConfigError::invalid_design(
                format!("holes[{index}]"),
                "specify exactly one of frequency, cents, or midi",
            )),
        }
    }
}

impl Design {
    /// Load a design from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let design: Design = toml::from_str(&content)?;
        Ok(design)
    }

    /// Load a design from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the design to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the design to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve every pitch field into a solver-ready snapshot.
    pub fn to_params(&self) -> Result<FluteParams, ConfigError> {
        let fundamental = self.fundamental.resolve("fundamental")?;
        let embouchure = self.embouchure.resolve()?;
        let tube = Tube::new(self.tube.bore_diameter, self.tube.wall_thickness);

        let mut params = FluteParams::new(tube, embouchure, fundamental);
        for (index, hole) in self.holes.iter().enumerate() {
            let frequency = hole.resolve(fundamental, index)?;
            params = params.with_hole(frequency, hole.diameter);
        }
        Ok(params)
    }

    /// Physical constants for this design's air temperature.
    pub fn constants(&self) -> PhysicalConstants {
        self.temperature_celsius
            .map_or_else(PhysicalConstants::default, PhysicalConstants::at_temperature)
    }
}

/// Default cork-face distance from the embouchure center, mm.
///
/// Half the embouchure hole plus a bore-proportional margin.
pub fn default_cork_distance(embouchure_length: f64, bore_diameter: f64) -> f64 {
    embouchure_length / 2.0 + 0.2 * bore_diameter
}

/// Default cork thickness, mm.
pub fn default_cork_thickness(bore_diameter: f64) -> f64 {
    bore_diameter * 0.4
}
