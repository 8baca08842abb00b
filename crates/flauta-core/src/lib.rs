//! Flauta Core - acoustic placement solver for cylindrical flutes
//!
//! Given a target fundamental, tube geometry, embouchure geometry, and an
//! ordered list of tone-hole frequencies and diameters, this crate computes
//! the longitudinal position of every hole along the bore using closed-form
//! empirical corrections from one-dimensional horn theory, and rejects
//! configurations that cannot physically be built.
//!
//! # Core Abstractions
//!
//! ## Inputs
//!
//! - [`Tube`] - bore diameter and wall thickness
//! - [`Embouchure`] - circular or elliptical blow hole with lip coverage
//! - [`ToneHole`] / [`FluteParams`] - the ordered hole list and full snapshot
//! - [`PhysicalConstants`] - speed of sound and every empirical coefficient,
//!   passed in explicitly so temperature or alternate models substitute
//!   cleanly
//!
//! ## Solving
//!
//! - [`solve`] - the chain solver; walks holes from the foot end toward the
//!   embouchure, one quadratic per hole, validating as it goes
//! - [`FluteResult`] / [`SolvedHole`] - validated placements with spacing and
//!   cutoff-frequency diagnostics
//! - [`SolveError`] - terminal, hole-indexed rejection reasons
//!
//! ## Correction terms
//!
//! The individual horn-theory corrections are exported from [`corrections`]
//! for callers that want to inspect the model itself.
//!
//! ## Pitch helpers
//!
//! [`tuning`] converts MIDI notes and cents offsets to frequencies and snaps
//! frequencies back to note names.
//!
//! # Example
//!
//! ```rust
//! use flauta_core::{solve, Embouchure, FluteParams, PhysicalConstants, Tube};
//! use flauta_core::tuning::cents_to_frequency;
//!
//! // A six-hole C4 flute on a 14.3 mm bore.
//! let fundamental = 261.63;
//! let mut params = FluteParams::new(
//!     Tube::new(14.3, 2.5),
//!     Embouchure::elliptical(12.0, 10.0).with_lip_cover(30.0),
//!     fundamental,
//! );
//! for (cents, diameter) in [(200.0, 6.0), (400.0, 6.5), (500.0, 7.0)] {
//!     params = params.with_hole(cents_to_frequency(fundamental, cents), diameter);
//! }
//!
//! let result = solve(&params, &PhysicalConstants::default())?;
//! for hole in &result.holes {
//!     println!("{:.2} Hz at {:.1} mm", hole.frequency, hole.physical_position);
//! }
//! # Ok::<(), flauta_core::SolveError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (with `alloc`). Disable the default
//! `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! flauta-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Pure**: the solver holds no state; identical inputs give bit-identical
//!   outputs, and concurrent calls never alias
//! - **Fail-fast**: strict validation is the only mode; no clamping, no
//!   partial results
//! - **No dependencies on std**: `libm` supplies the math in `no_std` builds

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod constants;
pub mod corrections;
pub mod error;
pub mod params;
pub mod result;
pub mod solver;
pub mod tuning;

// Re-export main types at crate root
pub use constants::PhysicalConstants;
pub use corrections::{
    closed_hole_correction, cutoff_frequency, effective_wall_height, embouchure_correction,
    end_correction,
};
pub use error::SolveError;
pub use params::{Embouchure, FluteParams, ToneHole, Tube};
pub use result::{FluteResult, SolvedHole};
pub use solver::solve;
pub use tuning::{cents_to_frequency, frequency_to_cents, midi_to_frequency, nearest_note};
