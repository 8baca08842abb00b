//! List available designs, show their TOML, or copy one into the user
//! designs directory.

use anyhow::bail;
use clap::Args;

use flauta_config::{
    design_name_from_path, ensure_user_designs_dir, find_design, get_factory_design,
    list_user_designs, Design, FACTORY_DESIGN_NAMES,
};

#[derive(Args)]
pub struct DesignsArgs {
    /// Show this design as TOML instead of listing everything
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Save the named design into the user designs directory as a
    /// starting point for edits
    #[arg(long, requires = "name")]
    save: bool,
}

pub fn run(args: DesignsArgs) -> anyhow::Result<()> {
    match args.name {
        Some(name) if args.save => save(&name),
        Some(name) => show(&name),
        None => {
            list();
            Ok(())
        }
    }
}

fn load(name: &str) -> anyhow::Result<Design> {
    if let Some(design) = get_factory_design(name) {
        return Ok(design);
    }
    if let Some(path) = find_design(name) {
        return Ok(Design::load(&path)?);
    }
    bail!("design not found: {name}");
}

fn show(name: &str) -> anyhow::Result<()> {
    let design = load(name)?;
    print!("{}", design.to_toml()?);
    Ok(())
}

fn save(name: &str) -> anyhow::Result<()> {
    let design = load(name)?;
    let dir = ensure_user_designs_dir()?;
    let path = dir.join(format!("{}.toml", name));
    design.save(&path)?;
    println!("Saved {} to {}", design.name, path.display());
    Ok(())
}

fn list() {
    println!("Factory designs:");
    for name in FACTORY_DESIGN_NAMES {
        if let Some(design) = get_factory_design(name) {
            let summary = design.description.as_deref().unwrap_or(&design.name);
            println!("  {:<16} {}", name, summary);
        }
    }

    let user = list_user_designs();
    if !user.is_empty() {
        println!("\nUser designs:");
        for path in user {
            if let Some(name) = design_name_from_path(&path) {
                println!("  {:<16} {}", name, path.display());
            }
        }
    }
}
