//! Derive tone-hole frequencies from a fundamental.

use anyhow::bail;
use clap::Args;

use flauta_core::tuning::{midi_to_frequency, COMMON_FUNDAMENTALS};
use flauta_core::{cents_to_frequency, nearest_note};

/// The standard six-hole layout: whole tones with the two half-step
/// crossings of the major scale.
const SIX_HOLE_CENTS: [f64; 6] = [200.0, 400.0, 500.0, 700.0, 900.0, 1100.0];

#[derive(Args)]
pub struct NotesArgs {
    /// Fundamental frequency in Hz
    #[arg(
        long,
        value_name = "HZ",
        conflicts_with_all = ["midi", "common"],
        required_unless_present_any = ["midi", "common"]
    )]
    fundamental: Option<f64>,

    /// Fundamental as a MIDI note number (69 = A4; fractional allowed)
    #[arg(long, value_name = "NOTE", conflicts_with = "common")]
    midi: Option<f64>,

    /// Comma-separated cents offsets above the fundamental
    /// (default: the six-hole layout)
    #[arg(long, value_delimiter = ',', value_name = "CENTS")]
    cents: Option<Vec<f64>>,

    /// List common fundamental pitches instead of deriving holes
    #[arg(long)]
    common: bool,
}

pub fn run(args: NotesArgs) -> anyhow::Result<()> {
    if args.common {
        println!("Common fundamentals:");
        for pitch in COMMON_FUNDAMENTALS {
            println!("  {}", pitch);
        }
        return Ok(());
    }

    let fundamental = match (args.fundamental, args.midi) {
        (Some(hz), None) => hz,
        (None, Some(midi)) => midi_to_frequency(midi),
        _ => bail!("specify exactly one of --fundamental or --midi"),
    };

    let offsets = args.cents.unwrap_or_else(|| SIX_HOLE_CENTS.to_vec());

    println!(
        "Fundamental: {:.2} Hz ({})",
        fundamental,
        nearest_note(fundamental)
    );
    println!();
    println!(
        "  {:>2}  {:>7}  {:>10}  {:<5} {:>7}",
        "#", "cents", "freq (Hz)", "note", "off"
    );
    for (index, cents) in offsets.iter().enumerate() {
        let frequency = cents_to_frequency(fundamental, *cents);
        let note = nearest_note(frequency);
        println!(
            "  {:>2}  {:>7.0}  {:>10.2}  {:<5} {:>+6.1}c",
            index + 1,
            cents,
            frequency,
            note.to_string(),
            note.cents_off,
        );
    }
    Ok(())
}
