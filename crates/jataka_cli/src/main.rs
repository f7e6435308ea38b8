use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use jataka_base::{Chart, ChartInput, ChartStrengths, HouseLordship, Rashi, ordinal};
use jataka_engine::{EngineConfig, Importance, YogaEngine, YogaReport};
use jataka_yoga::{ALL_CATEGORIES, BphsCategory, CATALOG_VERSION, rules_in};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jataka", about = "Vedic yoga detection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Table,
}

/// Importance tiers accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Tier {
    Minor,
    Moderate,
    Major,
}

impl From<Tier> for Importance {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Minor => Importance::Minor,
            Tier::Moderate => Importance::Moderate,
            Tier::Major => Importance::Major,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Detect yogas in a chart JSON file
    Detect {
        /// Path to the chart record
        chart: PathBuf,
        /// Engine configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: Format,
        /// Derive the navamsha chart when none is supplied
        #[arg(long)]
        derive_navamsha: bool,
        /// Drop detections below this tier
        #[arg(long, value_enum)]
        min_importance: Option<Tier>,
        /// Evaluate rules on one thread
        #[arg(long)]
        sequential: bool,
    },
    /// House lords for an ascendant sign
    Lords {
        /// Ascendant sign number (1-12)
        #[arg(long)]
        asc: u8,
    },
    /// Per-planet strength breakdown for a chart
    Strength {
        /// Path to the chart record
        chart: PathBuf,
    },
    /// List catalog rules
    Catalog {
        /// Restrict to one category (e.g. MajorPositive)
        #[arg(long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            chart,
            config,
            format,
            derive_navamsha,
            min_importance,
            sequential,
        } => {
            let mut config = match config {
                Some(path) => EngineConfig::load(&path)?,
                None => EngineConfig::default(),
            };
            if sequential {
                config.parallel = false;
            }
            if let Some(tier) = min_importance {
                config.min_importance = Some(tier.into());
            }
            let mut input = read_input(&chart)?;
            if derive_navamsha {
                input.derive_navamsha();
            }
            let report = YogaEngine::new(config)?.detect_input(&input)?;
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                Format::Table => print_report(&report),
            }
        }

        Commands::Lords { asc } => {
            let rashi = Rashi::from_number(asc)
                .ok_or_else(|| anyhow!("ascendant sign {asc} outside 1..=12"))?;
            let lordship = HouseLordship::resolve(rashi);
            for (i, lord) in lordship.lords().iter().enumerate() {
                let house = i as u8 + 1;
                println!(
                    "{:>4}  {:<12} {}",
                    ordinal(house),
                    rashi.nth(house).name(),
                    lord.name()
                );
            }
        }

        Commands::Strength { chart } => {
            let chart = Chart::from_input(&read_input(&chart)?)?;
            let strengths = ChartStrengths::compute(&chart);
            println!(
                "{:<8} {:<12} {:>7} {:>6} {:>7} {:>6}",
                "Planet", "Dignity", "Dignity", "House", "Flags", "Score"
            );
            for s in strengths.iter() {
                let flags = match (s.combust, s.retrograde) {
                    (true, true) => "C R",
                    (true, false) => "C",
                    (false, true) => "R",
                    (false, false) => "-",
                };
                println!(
                    "{:<8} {:<12} {:>7.1} {:>6.1} {:>7} {:>6.1}",
                    s.graha.name(),
                    s.dignity.name(),
                    s.dignity_score,
                    s.house_score,
                    flags,
                    s.score
                );
            }
        }

        Commands::Catalog { category } => {
            let categories: Vec<BphsCategory> = match category {
                Some(name) => vec![
                    BphsCategory::from_name(&name)
                        .ok_or_else(|| anyhow!("unknown category '{name}'"))?,
                ],
                None => ALL_CATEGORIES.to_vec(),
            };
            println!("catalog {CATALOG_VERSION}");
            for cat in categories {
                println!("\n[{cat}]");
                for rule in rules_in(cat) {
                    let marker = if rule.simplified() { " *" } else { "" };
                    println!(
                        "  {:<28} {}{}  ({})",
                        rule.id,
                        rule.name,
                        marker,
                        rule.reference.unwrap_or("-")
                    );
                }
            }
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<ChartInput> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let input = serde_json::from_str(&text)
        .with_context(|| format!("parsing chart record {}", path.display()))?;
    debug!(path = %path.display(), "chart loaded");
    Ok(input)
}

fn print_report(report: &YogaReport) {
    println!(
        "catalog {}  chart {}",
        report.catalog_version,
        report.chart_fingerprint.get(..12).unwrap_or(&report.chart_fingerprint)
    );
    let mut current = None;
    for d in &report.detections {
        if current != Some(d.category) {
            println!("\n[{}]", d.category);
            current = Some(d.category);
        }
        let name = match &d.instance {
            Some(inst) => format!("{} ({inst})", d.name),
            None => d.name.to_string(),
        };
        let cancelled = if d.is_cancelled { "  cancelled" } else { "" };
        println!(
            "  {:<40} {:<10} {:<8}{}",
            name,
            d.strength.name(),
            d.importance.name(),
            cancelled
        );
        println!("      {}", d.formation_description);
        for reason in &d.cancellation_reasons {
            println!("      - {reason}");
        }
        if !d.merged_rule_ids.is_empty() {
            println!("      also: {}", d.merged_rule_ids.join(", "));
        }
        if !d.merged_instances.is_empty() {
            println!("      other instances: {}", d.merged_instances.join(", "));
        }
    }
    for diag in &report.diagnostics {
        eprintln!("warning: {}: {}", diag.rule_id, diag.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn min_importance(args: &[&str]) -> Result<Option<Tier>, clap::Error> {
        let cli = Cli::try_parse_from(["jataka", "detect", "chart.json"].iter().chain(args))?;
        match cli.command {
            Commands::Detect { min_importance, .. } => Ok(min_importance),
            _ => unreachable!("parsed a detect command"),
        }
    }

    #[test]
    fn min_importance_is_a_closed_set() {
        assert_eq!(min_importance(&[]).unwrap(), None);
        assert_eq!(
            min_importance(&["--min-importance", "major"]).unwrap(),
            Some(Tier::Major)
        );
        let err = min_importance(&["--min-importance", "huge"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn tiers_map_onto_importance() {
        assert_eq!(Importance::from(Tier::Minor), Importance::Minor);
        assert_eq!(Importance::from(Tier::Moderate), Importance::Moderate);
        assert_eq!(Importance::from(Tier::Major), Importance::Major);
    }
}
