use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nestegg::api::{build_project_response, run_http_server};
use nestegg::config::{ParamArgs, build_params};
use nestegg::core::project;
use nestegg::report::{build_report, error_message, render_text};

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Retirement savings projection: capital growth from income, expenses, returns and inflation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a projection and print the table, summary and notes
    Project {
        #[command(flatten)]
        args: ParamArgs,
        /// Print the JSON document served by the HTTP API instead of text
        #[arg(long)]
        json: bool,
    },
    /// Serve the projection API over HTTP
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Project { args, json } => run_project(&args, json),
        Command::Serve { port } => {
            run_http_server(port).await?;
            Ok(())
        }
    }
}

fn run_project(args: &ParamArgs, json: bool) -> Result<()> {
    let params = build_params(args).map_err(anyhow::Error::msg)?;
    let result = match project(&params) {
        Ok(result) => result,
        Err(err) => bail!("{}", error_message(args.lang, &err)),
    };

    if json {
        let response = build_project_response(&params, &result, args.lang, &args.currency);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let report = build_report(&params, &result, args.lang, &args.currency);
        print!("{}", render_text(&report));
    }
    Ok(())
}
