//! Solve a design into manufacturable hole positions.

use anyhow::bail;
use clap::Args;

use flauta_config::{
    default_cork_distance, default_cork_thickness, find_design, get_factory_design, review,
    AdvisoryLevel, Design,
};
use flauta_core::{nearest_note, solve, FluteResult, PhysicalConstants};

#[derive(Args)]
pub struct SolveArgs {
    /// Design name (factory or user) or path to a design TOML file
    #[arg(value_name = "DESIGN")]
    design: String,

    /// Override the design's air temperature, degrees Celsius
    #[arg(long, value_name = "CELSIUS")]
    temperature: Option<f64>,

    /// Emit the placement as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let design = load_design(&args.design)?;

    for finding in review(&design) {
        match finding.level {
            AdvisoryLevel::Error => eprintln!("error: {}", finding.message),
            AdvisoryLevel::Warning => eprintln!("warning: {}", finding.message),
        }
    }

    let params = design.to_params()?;
    let consts = args
        .temperature
        .map_or_else(|| design.constants(), PhysicalConstants::at_temperature);

    tracing::debug!(
        design = %design.name,
        holes = params.holes.len(),
        speed_of_sound = consts.speed_of_sound,
        "solving"
    );

    let result = solve(&params, &consts)
        .map_err(|e| anyhow::anyhow!("design '{}' is not buildable: {e}", design.name))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result_json(&result))?);
    } else {
        print_table(&design, &result);
    }
    Ok(())
}

/// Resolve a design argument: factory name first, then user/file lookup.
fn load_design(name: &str) -> anyhow::Result<Design> {
    if let Some(design) = get_factory_design(name) {
        return Ok(design);
    }
    match find_design(name) {
        Some(path) => Ok(Design::load(&path)?),
        None => bail!("design not found: {name}"),
    }
}

fn print_table(design: &Design, result: &FluteResult) {
    println!("Design: {}", design.name);
    if let Some(description) = &design.description {
        println!("  {description}");
    }
    println!();
    println!("Speed of sound:   {:.0} mm/s", result.speed_of_sound);
    println!("Acoustic end:     {:.2} mm", result.acoustic_end_x);
    println!(
        "Embouchure center: {:.2} mm from the foot-end anchor",
        result.embouchure_physical_position
    );

    // Blank-length suggestion: the cork sits past the embouchure by the
    // default cork distance, plus its own thickness.
    let bore = design.tube.bore_diameter;
    let emb_length = design
        .embouchure
        .length
        .or(design.embouchure.diameter)
        .unwrap_or(0.0);
    let blank = result.embouchure_physical_position
        + default_cork_distance(emb_length, bore)
        + default_cork_thickness(bore);
    println!("Suggested blank:  {:.1} mm", blank);

    if result.holes.is_empty() {
        println!("\nNo tone holes.");
        return;
    }

    println!();
    println!(
        "  {:>2}  {:<5} {:>10}  {:>9}  {:>13}  {:>12}  {:>7}",
        "#", "note", "freq (Hz)", "hole (mm)", "position (mm)", "spacing (mm)", "cutoff"
    );
    for (index, hole) in result.holes.iter().enumerate() {
        println!(
            "  {:>2}  {:<5} {:>10.2}  {:>9.1}  {:>13.2}  {:>12.2}  {:>6.1}x",
            index + 1,
            nearest_note(hole.frequency).to_string(),
            hole.frequency,
            hole.diameter,
            hole.physical_position,
            hole.spacing,
            hole.cutoff_ratio(),
        );
    }
}

fn result_json(result: &FluteResult) -> serde_json::Value {
    serde_json::json!({
        "acoustic_end_x": result.acoustic_end_x,
        "embouchure_physical_position": result.embouchure_physical_position,
        "speed_of_sound": result.speed_of_sound,
        "holes": result
            .holes
            .iter()
            .map(|h| {
                serde_json::json!({
                    "frequency": h.frequency,
                    "diameter": h.diameter,
                    "acoustic_position": h.acoustic_position,
                    "physical_position": h.physical_position,
                    "cutoff_frequency": h.cutoff_frequency,
                    "spacing": h.spacing,
                })
            })
            .collect::<Vec<_>>(),
    })
}
