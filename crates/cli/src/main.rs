use crate::{error::CliError, outline::OutlineTranslator};
use clap::Parser;
use commands::Commands;
use query_builder::build_query;
use query_model::QueryDocument;
use query_syntax::{DocumentDecoder, ParseSettings};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod outline;
mod output;

#[derive(Parser)]
#[command(
    name = "querydoc",
    version,
    about = "Inspect and validate backend-neutral query documents"
)]
struct Cli {
    #[arg(long, global = true, help = "JSON file with parse settings")]
    settings: Option<String>,

    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log level used when RUST_LOG is not set"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logger
    init_tracing(&cli.log_level)?;

    let env = input::settings_env(|name| std::env::var(name).ok());
    let settings = input::load_settings(cli.settings.as_deref(), env)?;

    match cli.command {
        Commands::Ast {
            input,
            output,
            compact,
        } => {
            let doc = decode(&input, &settings)?;
            let json = output::to_json(&doc, compact)?;
            output::emit(&json, output.as_deref())?;
        }
        Commands::Check { input } => match decode(&input, &settings) {
            Ok(doc) => {
                info!(
                    "Query document {} is valid: {} filter levels, {} sort keys",
                    input,
                    doc.filter.as_ref().map_or(0, |f| f.depth()),
                    doc.sort.len()
                );
                println!("OK");
            }
            Err(err) => {
                error!("Query document {} is invalid", input);
                return Err(err);
            }
        },
        Commands::Outline { input } => {
            let doc = decode(&input, &settings)?;
            let mut translator = OutlineTranslator::new();
            build_query(&mut translator, &doc)?;
            if let Some(rendered) = translator.rendered() {
                println!("{rendered}");
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(level).map_err(|_| CliError::InvalidLogLevel(level.to_string()))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn decode(input: &str, settings: &ParseSettings) -> Result<QueryDocument, CliError> {
    let source = input::read_source(input)?;
    let doc = DocumentDecoder::new(settings.clone()).decode_str(&source)?;
    Ok(doc)
}
