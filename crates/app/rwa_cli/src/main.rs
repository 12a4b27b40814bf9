// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Commands, IntentArgs, SearchArgs};
use client::BackendClient;
use render::RenderOptions;
use rwa_core::fallback;
use rwa_core::models::{COMPANY_TYPES, EnterpriseQuery, INDUSTRIES};

mod cli;
mod client;
mod logging;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Search(search) => run_search(search).await?,
        Commands::Intent(intent) => run_intent(intent).await?,
        Commands::Options => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "行业: {}", INDUSTRIES.join(", "))?;
            writeln!(stdout, "企业类型: {}", COMPANY_TYPES.join(", "))?;
            writeln!(
                stdout,
                "内置案例行业: {}",
                fallback::covered_industries()?.join(", ")
            )?;
        }
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let query = EnterpriseQuery {
        company_name: args.company,
        industry: args.industry,
        company_type: args.company_type,
        description: args.description,
    };

    let backend = if args.offline {
        None
    } else {
        Some(BackendClient::new(&args.backend)?)
    };
    let (list, source) = client::search_with_fallback(backend.as_ref(), &query).await?;

    let output = if args.json {
        serde_json::to_string_pretty(&list)? + "\n"
    } else {
        render::render(
            &list,
            source,
            &RenderOptions {
                show_code: args.show_code,
            },
        )?
    };
    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}

async fn run_intent(args: IntentArgs) -> Result<()> {
    let backend = BackendClient::new(&args.backend)?;
    let reply = backend.predict_intent(&args.question).await?;
    writeln!(
        std::io::stdout().lock(),
        "{}",
        serde_json::to_string_pretty(&reply)?
    )?;
    Ok(())
}
