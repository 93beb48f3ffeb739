use anyhow::Result;
use cardsense_core::config::AppConfig;
use cardsense_infrastructure::ConfigService;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cardsense")]
#[command(about = "Cardsense - card-control settings advisor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive questionnaire session (default)
    Advise,
    /// Classify a one-shot set of answers and print the recommendation
    Classify(commands::classify::ClassifyArgs),
    /// Print the recommended settings for a persona label
    Recommend {
        /// Persona label, e.g. "Frequent Traveler"
        persona: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the personas the classifier can assign
    Personas,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match ConfigService::new() {
        Ok(service) => service.get_config(),
        Err(_) => AppConfig::default(),
    };
    init_tracing(&config.log_level);

    match cli.command.unwrap_or(Commands::Advise) {
        Commands::Advise => commands::advise::run(&config),
        Commands::Classify(args) => commands::classify::run(args, &config),
        Commands::Recommend { persona, json } => commands::recommend::run(&persona, json, &config),
        Commands::Personas => commands::personas::run(),
    }
}

/// Initializes tracing on stderr so log lines never interleave with the
/// interactive prompt. `RUST_LOG` overrides the configured level.
fn init_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
