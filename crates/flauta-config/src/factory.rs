//! Factory designs bundled with the library.
//!
//! Built-in designs that are always available without external files. They
//! demonstrate the design format and serve as solvable starting points for
//! new instruments.

use crate::Design;

/// Array of factory design names for external access.
pub static FACTORY_DESIGN_NAMES: &[&str] = &["c4-six-hole", "d5-six-hole"];

/// TOML content for factory designs, embedded at compile time.
static FACTORY_DESIGNS_TOML: &[(&str, &str)] = &[
    ("c4-six-hole", C4_SIX_HOLE),
    ("d5-six-hole", D5_SIX_HOLE),
];

/// Simple-system flute in C, one whole tone per finger with the two
/// half-step crossings of the major scale.
const C4_SIX_HOLE: &str = r#"
name = "C4 six hole"
description = "Simple-system flute in C on a narrow 14.3 mm bore"

[tube]
bore_diameter = 14.3
wall_thickness = 2.5

[embouchure]
diameter = 10.0

[fundamental]
frequency = 261.63

[[holes]]
cents = 200.0
diameter = 6.0

[[holes]]
cents = 400.0
diameter = 6.5

[[holes]]
cents = 500.0
diameter = 7.0

[[holes]]
cents = 700.0
diameter = 7.0

[[holes]]
cents = 900.0
diameter = 7.5

[[holes]]
cents = 1100.0
diameter = 8.0
"#;

/// Soprano flute in D with an elliptical embouchure and played lip cover.
const D5_SIX_HOLE: &str = r#"
name = "D5 six hole"
description = "Soprano flute in D, elliptical embouchure, 30% lip cover"

[tube]
bore_diameter = 12.0
wall_thickness = 2.0

[embouchure]
length = 10.0
width = 8.0
lip_cover_percent = 30.0

[fundamental]
midi = 74

[[holes]]
cents = 200.0
diameter = 6.0

[[holes]]
cents = 400.0
diameter = 6.5

[[holes]]
cents = 500.0
diameter = 7.0

[[holes]]
cents = 700.0
diameter = 7.0

[[holes]]
cents = 900.0
diameter = 7.5

[[holes]]
cents = 1100.0
diameter = 8.0
"#;

/// Get all factory designs.
pub fn factory_designs() -> Vec<Design> {
    FACTORY_DESIGNS_TOML
        .iter()
        .filter_map(|(_, toml)| Design::from_toml(toml).ok())
        .collect()
}

/// Get a factory design by name (case-insensitive).
pub fn get_factory_design(name: &str) -> Option<Design> {
    let name_lower = name.to_lowercase();
    FACTORY_DESIGNS_TOML
        .iter()
        .find(|(n, _)| n.to_lowercase() == name_lower)
        .and_then(|(_, toml)| Design::from_toml(toml).ok())
}

/// Check whether a name refers to a factory design (case-insensitive).
pub fn is_factory_design(name: &str) -> bool {
    let name_lower = name.to_lowercase();
    FACTORY_DESIGN_NAMES
        .iter()
        .any(|n| n.to_lowercase() == name_lower)
}
