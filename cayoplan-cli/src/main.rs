use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;

use cayoplan_game::{
    Catalog, Financials, LoadoutNotice, Mode, RunInput, RunOutput, calculate, format_usd,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Standard approach payouts
    Standard,
    /// Hard mode payouts
    Hard,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Standard => Mode::Standard,
            ModeArg::Hard => Mode::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cayoplan", version)]
#[command(about = "Loadout and payout planner for the island heist")]
struct Args {
    /// Primary target id (e.g. pink_diamond, panther_statue)
    #[arg(long, default_value = "pink_diamond")]
    target: String,

    /// Heist difficulty
    #[arg(long, value_enum, default_value_t = ModeArg::Standard)]
    mode: ModeArg,

    /// Player count (clamped to 1-4)
    #[arg(long, default_value = "1")]
    players: String,

    /// Secondary stacks as id=count (repeatable, e.g. --loot weed=3)
    #[arg(long = "loot", value_name = "ID=COUNT")]
    loot: Vec<String>,

    /// Catalog JSON file overriding the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// List the catalog's targets and items and exit
    #[arg(long)]
    list_targets: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading catalog file {}", path.display()))?;
            Catalog::from_json(&json)
                .with_context(|| format!("loading catalog from {}", path.display()))?
        }
        None => Catalog::builtin().context("loading built-in catalog")?,
    };

    if args.list_targets {
        print_targets(&catalog);
        return Ok(());
    }

    let input = RunInput {
        primary_id: args.target.clone(),
        mode: args.mode.into(),
        players: args.players.clone(),
        stack_counts: parse_loot_args(&args.loot),
    };

    let output = calculate(&catalog, &input).context("calculation failed")?;
    print_report(&catalog, &args.target, &output);
    Ok(())
}

/// Split repeated `--loot id=count` arguments into the form-shaped map the
/// core expects. Values stay as raw text; the pipeline owns the defaults.
fn parse_loot_args(entries: &[String]) -> HashMap<String, String> {
    let mut counts = HashMap::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((id, raw)) => {
                counts.insert(id.trim().to_string(), raw.trim().to_string());
            }
            None => {
                log::warn!("ignoring malformed --loot entry '{entry}' (expected id=count)");
            }
        }
    }
    counts
}

fn print_targets(catalog: &Catalog) {
    println!("{}", "PRIMARY TARGETS".bold());
    for target in &catalog.targets.primary {
        println!(
            "  {:<16} {:<20} standard {:>12}  hard {:>12}",
            target.id,
            target.label,
            format_usd(target.value.standard),
            format_usd(target.value.hard)
        );
    }
    println!();
    println!("{}", "SECONDARY LOOT".bold());
    for item in &catalog.targets.secondary {
        println!(
            "  {:<16} {:<20} avg {:>12} per stack ({} units)",
            item.id,
            item.label,
            format_usd(item.value.average()),
            item.full_table_units
        );
    }
}

fn print_report(catalog: &Catalog, target_id: &str, output: &RunOutput) {
    let label = catalog
        .primary_target(target_id)
        .map_or(target_id, |target| target.label.as_str());

    println!("{}", format!("HEIST PLAN — {label}").bold());
    println!();
    print_financials(&output.financials);
    println!();

    if output.solo_warning {
        println!(
            "{}",
            "Solo run: gold and cash tables are out of reach.".yellow()
        );
    }
    match output.notice {
        Some(LoadoutNotice::NoSecondarySelected) => {
            println!("{}", "No secondary loot selected.".dimmed());
        }
        Some(LoadoutNotice::SoloRestricted) => {
            println!("{}", "No accessible loot selected for a solo bag.".dimmed());
        }
        None => {}
    }

    for bag in &output.bags {
        println!(
            "{} — {}% ({}/{})",
            format!("PLAYER {} BAG", bag.player).bold(),
            bag.fill_percent,
            bag.weight,
            bag.capacity
        );
        if bag.contents.is_empty() {
            println!("  {}", "- Empty Bag -".dimmed());
        } else {
            for line in &bag.contents {
                println!("  - {line}");
            }
        }
    }
}

fn print_financials(money: &Financials) {
    println!("  Primary target   {:>14}", format_usd(money.primary));
    println!("  Secondary loot   {:>14}", format_usd(money.secondary));
    println!("  Office safe      {:>14}", format_usd(money.safe));
    println!(
        "  Fencing fee      {:>14}",
        format!("-{}", format_usd(money.fencing_fee)).red()
    );
    println!(
        "  Pavel's cut      {:>14}",
        format!("-{}", format_usd(money.pavel_cut)).red()
    );
    println!(
        "  {}        {:>14}",
        "NET TAKE".bold(),
        format_usd(money.net).green().bold()
    );
}
