use clap::{Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;

mod app;
mod catalog;
mod config;
mod llm;
mod session;
mod ui;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Turn on verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the application
    Config {
        /// Set the API key for the generative language endpoint
        #[arg(long)]
        api_key: Option<String>,

        /// Set the model to use
        #[arg(long)]
        model: Option<String>,
    },

    /// List the component catalog
    List,

    /// Print a component's catalog source
    Show {
        /// The component name (see `list`)
        component: String,
    },

    /// Request a one-off modification without entering interactive mode
    Modify {
        /// The component name (see `list`)
        component: String,

        /// The modification to request, in plain language
        #[arg(required = true)]
        instruction: Vec<String>,
    },

    /// Probe the API endpoint and credentials
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    }
    log_builder.init();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("component-assist/config.toml")
    });

    match &cli.command {
        Some(Commands::Config { api_key, model }) => {
            config::update_config(&config_path, api_key, model)?;
            println!("Configuration updated successfully.");
            return Ok(());
        }
        Some(Commands::List) => {
            ui::display::print_catalog(catalog::all());
            return Ok(());
        }
        Some(Commands::Show { component }) => {
            let entry = catalog::find(component).ok_or_else(|| {
                anyhow::anyhow!("No component named '{}'. Run `component-assist list`.", component)
            })?;
            ui::display::print_component(entry, entry.source);
            return Ok(());
        }
        Some(Commands::Modify { component, instruction }) => {
            let config = config::load_or_create_config(&config_path)?;
            let mut app = app::App::new(config)?;
            app.select(component)?;
            app.request_modification(&instruction.join(" ")).await?;
            return Ok(());
        }
        Some(Commands::Test) => {
            let config = config::load_or_create_config(&config_path)?;
            let client = llm::client::GeminiClient::new(&config)?;
            let probe = client.test_connection().await;
            ui::display::print_probe(&probe);
            return Ok(());
        }
        None => {
            // No subcommand, enter interactive mode
            let config = config::load_or_create_config(&config_path)?;
            let mut app = app::App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}
