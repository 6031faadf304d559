use anyhow::Result;
use clap::Parser;
use not_a_culture_fit::{
    config::{self, ConfigOverrides},
    content::ContentTables,
    interview::InterviewDriver,
    llm::OllamaClient,
    shell::{ConsoleRenderer, ConsoleShell},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Not a Culture Fit: ten absurd interview questions, critiqued by a local LLM.
#[derive(Parser, Debug)]
#[command(name = "nacf", version, about, long_about = None)]
struct Cli {
    /// YAML configuration file (overrides $NACF_CONFIG and ./nacf.yaml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Inference server address (overrides $OLLAMA_URL)
    #[arg(long)]
    server_url: Option<String>,

    /// Model name (overrides $NACF_MODEL)
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Seconds to wait for a critique before giving up
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Seed for reproducible companies, managers and questions
    #[arg(long)]
    seed: Option<u64>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging setup)
    let mut config = match config::load(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    config.apply_process_env();
    config.apply_overrides(&ConfigOverrides {
        server_url: cli.server_url,
        model: cli.model,
        timeout_secs: cli.timeout_secs,
        log_level: cli.log_level,
    });
    let config = match config.normalize() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    init_tracing(&log_level, config.logs.json);

    info!(
        "Starting Not a Culture Fit against {} with model {}",
        config.inference.server_url, config.inference.model
    );

    let client = OllamaClient::new(&config.inference)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut driver = InterviewDriver::new(
        Arc::new(client),
        Arc::new(ContentTables::builtin()),
        rng,
    );

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let renderer = ConsoleRenderer::new(std::io::stdout());
    let mut shell = ConsoleShell::new(input, renderer)
        .interruptible(true)
        .with_spinner(true);

    shell.run(&mut driver, &config.inference).await?;

    Ok(())
}
