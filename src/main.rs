use anyhow::{bail, Result};
use chronolife_lib::app::App;
use chronolife_lib::model::config::AppConfig;
use chronolife_lib::model::metrics::init_logging;
use chronolife_lib::model::patterns::{find_pattern, PATTERNS};
use chronolife_lib::model::rules::RuleSet;
use chronolife_lib::model::state::NeighborhoodKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Rule in B/S notation (e.g. B36/S23) or a named rule (e.g. HighLife)
    #[arg(short, long)]
    rules: Option<String>,

    /// Neighborhood shape (moore, vonneumann)
    #[arg(short, long)]
    neighborhood: Option<String>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Built-in pattern to place in the center instead of a random fill
    #[arg(short, long, conflicts_with = "density")]
    pattern: Option<String>,

    /// Fraction of cells alive in the random fill
    #[arg(short, long)]
    density: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Forward generations to run (0 = until stable)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Replay history backward after the forward run
    #[arg(long)]
    reverse: bool,

    /// Resume from a save file instead of seeding
    #[arg(long, conflicts_with_all = ["pattern", "density"])]
    load: Option<PathBuf>,

    /// Write the final state here (`.gz` for compressed)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print the final grid
    #[arg(long)]
    print: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(rules) = &self.rules {
            let rule_set = match RuleSet::named(rules).or_else(|| RuleSet::try_parse(rules)) {
                Some(rule_set) => rule_set,
                None => bail!("Unknown rule '{rules}'"),
            };
            config.rules.rule = rule_set.notation();
        }
        if let Some(name) = &self.neighborhood {
            config.rules.neighborhood = match NeighborhoodKind::try_from_name(name) {
                Some(kind) => kind,
                None => bail!("Unknown neighborhood '{name}'"),
            };
        }
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(density) = self.density {
            config.simulation.random_density = density;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if let Some(generations) = self.generations {
            config.simulation.max_generations = generations;
        }
        if self.reverse {
            config.simulation.reverse = true;
        }
        config.validate()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config)?;
    init_logging(&config.logging.level);

    let mut app = App::new(config)?;
    app.save_path = args.save.clone();

    if let Some(path) = &args.load {
        app.load_state(path)?;
    } else if let Some(name) = &args.pattern {
        let Some(pattern) = find_pattern(name) else {
            let known: Vec<&str> = PATTERNS.iter().map(|p| p.name).collect();
            bail!("Unknown pattern '{name}' (known: {})", known.join(", "));
        };
        app.seed_pattern(pattern);
    } else {
        app.seed_random();
    }

    let summary = app.run().await?;

    if args.print {
        println!("{}", app.render());
    }
    println!(
        "Stopped ({:?}) at generation {} with {} live cells",
        summary.stop_reason(),
        summary.final_generation,
        summary.alive_cells
    );

    Ok(())
}
