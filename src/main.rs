//! Spendboard CLI
//!
//! Terminal front end for the expense dashboard:
//! - Show the table, statistics and charts
//! - Add an expense
//! - Delete an expense
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendboard::config::{generate_default_config, Config, LoggingConfig};
use spendboard::controller::{Clock, DashboardController, DashboardView, SystemClock};
use spendboard::gateway::HttpGateway;
use spendboard::model::ExpenseId;
use spendboard::terminal::{TerminalPrompt, TerminalView, TextChartFactory};

#[derive(Parser)]
#[command(name = "spendboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Expense tracking dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend API base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show expenses, statistics and charts
    Show,

    /// Add an expense
    Add {
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Amount (non-negative decimal)
        #[arg(short, long)]
        amount: String,
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete an expense by id
    Delete {
        /// Expense id as shown in the table
        id: String,
        /// Skip the confirmation question
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type TerminalDashboard = DashboardController<
    HttpGateway,
    TerminalView<std::io::Stdout>,
    TerminalPrompt,
    TextChartFactory<std::io::Stdout>,
>;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        write_default_config(output.as_deref())?;
        return Ok(ExitCode::SUCCESS);
    }

    let (mut config, default_load) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let loaded = Config::load_default();
            (loaded.config.clone(), Some(loaded))
        }
    };
    if let Some(url) = cli.api_url {
        config.gateway.base_url = url;
    }

    init_logging(&config.logging);
    if let Some(loaded) = &default_load {
        loaded.log();
    }
    tracing::info!(
        base_url = %config.gateway.base_url,
        "Spendboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    let gateway = HttpGateway::new(&config.gateway).context("Failed to create HTTP client")?;
    let prompt = match &cli.command {
        Commands::Delete { yes: true, .. } => TerminalPrompt::assume_yes(),
        _ => TerminalPrompt::interactive(),
    };

    let mut view = TerminalView::stdout();
    view.set_form_date(SystemClock.today());
    if let Commands::Add {
        category,
        amount,
        date,
        description,
    } = &cli.command
    {
        view.fill_form(category, amount, date.as_deref(), description);
    }
    // Snapshot taken at submit time, before the view moves into the controller
    let submitted = view.form().clone();

    let dashboard: TerminalDashboard =
        DashboardController::new(gateway, view, prompt, TextChartFactory::stdout());

    let succeeded = match cli.command {
        Commands::Show => dashboard.start().await,
        Commands::Add { .. } => dashboard.submit(submitted).await.is_success(),
        Commands::Delete { id, .. } => dashboard.delete(&ExpenseId::new(id)).await.is_success(),
        Commands::Config { .. } => true,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Install the tracing subscriber; log lines go to stderr
fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("spendboard={}", logging.level).into());
    let json = logging.is_json();

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}
