//! Configuration and design-file management for flauta.
//!
//! This crate gives the solver a durable input format: flute designs stored
//! as TOML files, with pitch fields accepted in Hz, cents over the
//! fundamental, or MIDI note numbers, plus advisory playability review and
//! a set of always-available factory designs.
//!
//! # Features
//!
//! - **Design files**: load and save designs as TOML ([`Design`])
//! - **Resolution**: convert a design into a solver-ready snapshot
//!   ([`Design::to_params`]) and temperature-aware constants
//!   ([`Design::constants`])
//! - **Advisory review**: non-fatal playability findings ([`review`])
//! - **Paths**: platform-specific user design directories ([`paths`])
//! - **Factory designs**: embedded, guaranteed-solvable starting points
//!   ([`factory_designs`])
//!
//! # Example
//!
//! ```rust
//! use flauta_config::{get_factory_design, review};
//! use flauta_core::solve;
//!
//! let design = get_factory_design("c4-six-hole").unwrap();
//! for finding in review(&design) {
//!     eprintln!("advisory: {}", finding.message); // advisories never block solving
//! }
//!
//! let params = design.to_params().unwrap();
//! let result = solve(&params, &design.constants()).unwrap();
//! assert_eq!(result.holes.len(), 6);
//! ```

mod design;
mod error;

/// Embedded factory designs.
pub mod factory;

/// Platform-specific paths for design files.
pub mod paths;

/// Advisory design review.
pub mod validation;

pub use design::{
    default_cork_distance, default_cork_thickness, Design, EmbouchureSection, HoleSection,
    PitchField, TubeSection,
};
pub use error::ConfigError;
pub use factory::{
    factory_designs, get_factory_design, is_factory_design, FACTORY_DESIGN_NAMES,
};
pub use paths::{
    design_name_from_path, ensure_user_designs_dir, find_design, list_user_designs,
    user_config_dir, user_designs_dir,
};
pub use validation::{review, Advisory, AdvisoryLevel};
