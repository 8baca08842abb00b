//! The chain placement solver.
//!
//! Walks the tone holes from the open foot end toward the embouchure and
//! solves one quadratic per hole for its acoustic position. Each hole's
//! target half-wavelength is first reduced by the closed-hole corrections of
//! every hole above it (those are still covered when this hole is the highest
//! open one), which is why corrections accumulate backward through the array
//! before each quadratic is formed.
//!
//! The position unknown appears both linearly and inside a reciprocal
//! effective-extension term; clearing denominators yields a degree-2
//! polynomial whose *smaller* real root is the physically valid placement
//! (the larger root lies outside the bore).
//!
//! Validation is strict and inline: the first violated constraint aborts the
//! whole calculation. There is no mode that skips checks.
//!
//! # Example
//!
//! ```rust
//! use flauta_core::{solve, Embouchure, FluteParams, PhysicalConstants, Tube};
//!
//! // A one-hole C4 flute: 19 mm bore, 2 mm walls, 10 mm embouchure,
//! // with a D4 hole of 8 mm.
//! let params = FluteParams::new(Tube::new(19.0, 2.0), Embouchure::circular(10.0), 261.63)
//!     .with_hole(293.66, 8.0);
//!
//! let result = solve(&params, &PhysicalConstants::default()).unwrap();
//! assert_eq!(result.holes.len(), 1);
//! assert!(result.holes[0].physical_position < result.acoustic_end_x);
//! assert!(result.embouchure_physical_position > result.holes[0].physical_position);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use libm::sqrt;

use crate::constants::PhysicalConstants;
use crate::corrections::{
    closed_hole_correction, cutoff_frequency, effective_wall_height, embouchure_correction,
    end_correction,
};
use crate::error::SolveError;
use crate::params::FluteParams;
use crate::result::{FluteResult, SolvedHole};

/// Smaller root of `a*x^2 + b*x + c`, or `None` when no real root exists.
#[inline]
fn smaller_root(a: f64, b: f64, c: f64) -> Option<f64> {
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        None
    } else {
        Some((-b - sqrt(disc)) / (2.0 * a))
    }
}

/// Place every tone hole of `params` along the bore.
///
/// Returns the complete validated placement, or the first constraint
/// violation encountered. The function is pure: identical inputs produce
/// bit-identical outputs, and nothing is retained between calls.
pub fn solve(params: &FluteParams, consts: &PhysicalConstants) -> Result<FluteResult, SolveError> {
    let bore = params.tube.bore_diameter;
    let wall = params.tube.wall_thickness;
    let c = consts.speed_of_sound;
    let hole_count = params.holes.len();

    // Structural limits first: an oversized hole can never be corrected for.
    let max_diameter = consts.max_hole_to_bore_ratio * bore;
    if params.embouchure.diameter() > max_diameter {
        return Err(SolveError::EmbouchureTooLarge {
            diameter: params.embouchure.diameter(),
            bore,
        });
    }
    for (index, hole) in params.holes.iter().enumerate() {
        if hole.diameter > max_diameter {
            return Err(SolveError::HoleTooLarge {
                index,
                diameter: hole.diameter,
                bore,
            });
        }
    }

    let closed: Vec<f64> = params
        .holes
        .iter()
        .map(|h| closed_hole_correction(consts, wall, h.diameter, bore))
        .collect();

    // Anchor: the fundamental sounds with every hole covered, so every
    // closed-hole correction shortens the effective column.
    let mut end_x = 0.5 * c / params.fundamental - end_correction(consts, bore);
    for corr in &closed {
        end_x -= corr;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(end_x, fundamental = params.fundamental, "anchor computed");

    let mut positions: Vec<f64> = Vec::with_capacity(hole_count);

    if hole_count > 0 {
        // Hole 0 couples to the open end itself, so its quadratic differs
        // from the chained form used for the rest.
        let hole = &params.holes[0];
        let mut half_wl = 0.5 * c / hole.frequency;
        for corr in &closed[1..] {
            half_wl -= corr;
        }

        let te = effective_wall_height(consts, wall, hole.diameter);
        let ratio = hole.diameter / bore;
        let a = ratio * ratio;
        let b = -(end_x + half_wl) * a;
        let cq = end_x * half_wl * a + te * (half_wl - end_x);

        let x = smaller_root(a, b, cq).ok_or(SolveError::Unsolvable { index: 0 })?;
        if !x.is_finite() || x < 0.0 {
            return Err(SolveError::InvalidPosition { index: 0 });
        }
        positions.push(x);

        for index in 1..hole_count {
            let hole = &params.holes[index];
            let mut half_wl = 0.5 * c / hole.frequency;
            for corr in &closed[index + 1..] {
                half_wl -= corr;
            }

            let te = effective_wall_height(consts, wall, hole.diameter);
            let bore_ratio = bore / hole.diameter;
            let chimney = te * bore_ratio * bore_ratio;
            let prev = positions[index - 1];

            let a = 2.0;
            let b = -prev - 3.0 * half_wl + chimney;
            let cq = prev * (half_wl - chimney) + half_wl * half_wl;

            let x = smaller_root(a, b, cq).ok_or(SolveError::Unsolvable { index })?;
            if !x.is_finite() || x < 0.0 {
                return Err(SolveError::InvalidPosition { index });
            }
            // Acoustic positions must strictly decrease toward the embouchure.
            if x >= prev {
                return Err(SolveError::HoleOrdering { index });
            }
            let spacing = prev - x;
            if spacing < consts.min_hole_spacing {
                return Err(SolveError::HolesTooClose {
                    index,
                    spacing,
                    minimum: consts.min_hole_spacing,
                });
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(index, acoustic_position = x, spacing, "hole placed");

            positions.push(x);
        }
    }

    let emb_offset = embouchure_correction(
        consts,
        bore,
        params.embouchure.effective_diameter(),
        wall,
    );
    let embouchure_physical_position = end_x - emb_offset;
    if embouchure_physical_position < 0.0 {
        return Err(SolveError::EmbouchureOutOfBounds);
    }

    // Assembly: physical conversion plus per-hole diagnostics. The bounds
    // check must precede the cutoff computation, whose sqrt takes the
    // segment length.
    let mut holes = Vec::with_capacity(hole_count);
    for (index, hole) in params.holes.iter().enumerate() {
        let spacing = if index == 0 {
            end_x - positions[0]
        } else {
            positions[index - 1] - positions[index]
        };
        let physical_position = end_x - positions[index];
        if physical_position < 0.0 {
            return Err(SolveError::BeyondEmbouchure { index });
        }
        let cutoff = cutoff_frequency(consts, bore, wall, hole.diameter, spacing);
        holes.push(SolvedHole {
            frequency: hole.frequency,
            diameter: hole.diameter,
            acoustic_position: positions[index],
            physical_position,
            cutoff_frequency: cutoff,
            spacing,
        });
    }

    Ok(FluteResult {
        acoustic_end_x: end_x,
        embouchure_physical_position,
        speed_of_sound: c,
        holes,
    })
}
