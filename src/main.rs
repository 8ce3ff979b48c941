use clap::{Parser, Subcommand, ValueEnum};
use house_rank::ranking::{EvaluateOptions, SortKey};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank listings by score (default if no subcommand)
    Rank,
    /// Write a config file with the default weights
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "house-rank")]
#[command(about = "Rank real-estate listings by weighted preferences", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and per-listing score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/house-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Listings JSON file (overrides `listings` in the config)
    #[arg(short, long, global = true)]
    listings: Option<String>,

    /// Only keep listings whose address, city or style contains this text
    #[arg(short, long, global = true)]
    search: Option<String>,

    /// Sort order (overrides `sort_by` in the config)
    #[arg(long, value_enum, global = true)]
    sort: Option<SortKey>,

    /// Budget limit for the over-budget flag (overrides `budget_limit`)
    #[arg(long, global = true)]
    budget: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    house_rank::logging::init_logger(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Rank);
    let config_path = cli.config.as_deref().map(house_rank::config::expand_home);

    if let Commands::Init { force } = command {
        let path = match config_path {
            Some(p) => p,
            None => match house_rank::config::get_config_path() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            },
        };
        if let Err(e) = house_rank::config::write_default_config(&path, force) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
        println!("Config written to {}", path.display());
        println!("Point `listings` at your listings file, then run `house-rank`.");
        std::process::exit(EXIT_SUCCESS);
    }

    let start_time = Instant::now();

    // Load config
    let config = match house_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate weights and budget at startup
    let weights = config.weights.unwrap_or_default();
    let budget_limit = cli
        .budget
        .or(config.budget_limit)
        .unwrap_or(house_rank::budget::DEFAULT_BUDGET_LIMIT);

    let mut errors = house_rank::scoring::validate_weights(&weights)
        .err()
        .unwrap_or_default();
    if let Err(e) = house_rank::scoring::validate_budget(budget_limit) {
        errors.push(e);
    }
    if !errors.is_empty() {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let Some(listings_path) = cli.listings.or(config.listings) else {
        eprintln!("No listings file given.");
        eprintln!("Pass --listings <FILE> or add it to the config:");
        eprintln!("  listings: ~/listings.json");
        std::process::exit(EXIT_CONFIG);
    };
    let listings_path: PathBuf = house_rank::config::expand_home(&listings_path);

    let listings = match house_rank::listing::load_listings(&listings_path) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Listings error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let opts = EvaluateOptions {
        search_term: cli.search.or(config.search),
        sort_by: cli.sort.or(config.sort_by).unwrap_or_default(),
        budget_limit,
    };
    tracing::debug!(
        sort = ?opts.sort_by,
        search = opts.search_term.as_deref().unwrap_or(""),
        budget_limit = opts.budget_limit,
        total_weight = weights.total(),
        "Evaluating listings"
    );

    let ranked = house_rank::ranking::evaluate(&listings, &weights, &opts);

    tracing::debug!(
        listings = listings.len(),
        shown = ranked.len(),
        elapsed = ?start_time.elapsed(),
        "Evaluation finished"
    );

    match cli.format {
        OutputFormat::Table => {
            let use_colors = house_rank::output::should_use_colors();
            if cli.verbose && !ranked.is_empty() {
                for scored in &ranked {
                    println!(
                        "{}",
                        house_rank::output::format_listing_detail(scored, use_colors)
                    );
                    println!();
                }
            } else {
                println!(
                    "{}",
                    house_rank::output::format_scored_table(&ranked, use_colors)
                );
            }
        }
        OutputFormat::Tsv => {
            let output = house_rank::output::format_tsv(&ranked);
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        OutputFormat::Json => match house_rank::output::format_json(&ranked) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}
