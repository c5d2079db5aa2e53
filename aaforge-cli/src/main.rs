//! Command-line manager for AAforge build files.
//!
//! Works against the same one-file-per-build store the desktop planner
//! writes, so builds can be listed, inspected, and moved between machines
//! without opening the app.

use std::fs;
use std::io::{Write, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use directories::ProjectDirs;

use aaforge_core::{BuildDocument, BuildStore, FileStore, Slot, Tier};

#[derive(Debug, Parser)]
#[command(name = "aaforge", version)]
#[command(about = "Manage saved AAforge character builds")]
struct Args {
    /// Directory holding the build files (defaults to the platform data dir)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List saved builds with a one-line summary each
    List,
    /// Show one build in full
    Show {
        /// Build name
        name: String,
    },
    /// Write a build document to a file or stdout
    Export {
        /// Build name
        name: String,
        /// Output path; omit to print to stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Import a build document from a JSON file
    Import {
        /// Path to the document
        file: PathBuf,
        /// Save under this name instead of the document's own
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a saved build
    Delete {
        /// Build name
        name: String,
    },
}

fn default_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "aaforge", "aaforge")
        .context("could not determine a platform data directory; pass --dir")?;
    Ok(dirs.data_dir().join("builds"))
}

fn summary_line(name: &str, doc: &BuildDocument) -> String {
    let class = doc.class_name.as_deref().unwrap_or("-");
    let race = doc.race.as_deref().unwrap_or("-");
    let credits = doc.credit_totals();
    format!(
        "{:<28} lvl {:>2}  {:<10} {:<10} {:>3} abilities  {:>5} credits",
        name,
        doc.level,
        race,
        class,
        doc.selected_abilities.len(),
        credits.total(),
    )
}

fn cmd_list(store: &FileStore) -> Result<()> {
    let names = store.list().context("listing builds")?;
    if names.is_empty() {
        println!("No builds in {}", store.dir().display());
        return Ok(());
    }
    for name in names {
        match store.load(&name).with_context(|| format!("loading '{name}'"))? {
            Some(doc) => println!("{}", summary_line(&name, &doc)),
            None => println!("{:<28} {}", name, "(missing)".dimmed()),
        }
    }
    Ok(())
}

fn cmd_show(store: &FileStore, name: &str) -> Result<()> {
    let Some(doc) = store.load(name).with_context(|| format!("loading '{name}'"))? else {
        bail!("no build named '{name}'");
    };

    println!("{}", doc.name.bold());
    println!(
        "  level {}  {}  {}",
        doc.level,
        doc.race.as_deref().unwrap_or("(no race)"),
        doc.class_name.as_deref().unwrap_or("(no class)"),
    );

    println!("\n{}", "Abilities".underline());
    if doc.selected_abilities.is_empty() {
        println!("  (none)");
    } else {
        for entry in doc.selected_abilities.values() {
            println!(
                "  {:<36} rank {}  {}",
                entry.ability_name,
                entry.ranks,
                entry.tier.name().dimmed(),
            );
        }
    }

    let credits = doc.credit_totals();
    println!("\n{}", "Credits".underline());
    for tier in Tier::ALL {
        let count = credits.get(tier);
        if count > 0 {
            println!(
                "  {:<10} {:>4}  ({}pp)",
                tier.name(),
                count,
                u64::from(count) * u64::from(tier.plat_per_credit()),
            );
        }
    }
    println!("  {:<10} {:>4}  ({}pp)", "Total", credits.total(), credits.plat_cost());

    println!("\n{}", "Equipment".underline());
    for slot in Slot::ALL {
        if let Some(Some(item)) = doc.equipment.get(slot.as_str()) {
            println!("  {:<12} {}", slot.display_name(), item.name);
        }
    }
    Ok(())
}

fn cmd_export(store: &FileStore, name: &str, output: Option<&PathBuf>) -> Result<()> {
    let Some(doc) = store.load(name).with_context(|| format!("loading '{name}'"))? else {
        bail!("no build named '{name}'");
    };
    let json = doc.to_json_pretty()?;
    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
            println!("{} exported '{name}' to {}", "ok:".green(), path.display());
        }
        None => {
            stdout().write_all(json.as_bytes())?;
            println!();
        }
    }
    Ok(())
}

fn cmd_import(store: &FileStore, file: &PathBuf, name: Option<String>) -> Result<()> {
    let json = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let doc = BuildDocument::from_json(&json)
        .with_context(|| format!("{} is not a build document", file.display()))?;
    let name = name.unwrap_or_else(|| doc.name.clone());
    store.save(&name, &doc).with_context(|| format!("saving '{name}'"))?;
    println!(
        "{} imported '{name}' ({} abilities, {} credits)",
        "ok:".green(),
        doc.selected_abilities.len(),
        doc.credit_totals().total(),
    );
    Ok(())
}

fn cmd_delete(store: &FileStore, name: &str) -> Result<()> {
    store.delete(name).with_context(|| format!("deleting '{name}'"))?;
    println!("{} deleted '{name}'", "ok:".green());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dir = match args.dir {
        Some(dir) => dir,
        None => default_dir()?,
    };
    log::debug!("using build directory {}", dir.display());
    let store = FileStore::new(dir);

    match args.command {
        Command::List => cmd_list(&store),
        Command::Show { name } => cmd_show(&store, &name),
        Command::Export { name, output } => cmd_export(&store, &name, output.as_ref()),
        Command::Import { file, name } => cmd_import(&store, &file, name),
        Command::Delete { name } => cmd_delete(&store, &name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_includes_the_basics() {
        let doc = BuildDocument::from_json(
            r#"{
                "name": "Raid Monk", "race": "Iksar", "classId": 7,
                "className": "Monk", "level": 60,
                "selectedAbilities": {
                    "1": { "ranks": 3, "abilityId": 1, "abilityName": "X", "tier": 2 }
                }
            }"#,
        )
        .unwrap();
        let line = summary_line("Raid Monk", &doc);
        assert!(line.contains("Raid Monk"));
        assert!(line.contains("lvl 60"));
        assert!(line.contains("Monk"));
        assert!(line.contains("1 abilities"));
        assert!(line.contains("3 credits"));
    }
}
