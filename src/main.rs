use std::process::ExitCode;

use clap::Parser;
use ddg_zero_click::{Client, QueryOptions, Response, api::request::API_HOST};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Look up DuckDuckGo zero-click answers and print their abstracts.
#[derive(Debug, Parser)]
#[command(name = "ddg", version)]
struct Cli {
    /// Queries to look up.
    #[arg(required = true)]
    queries: Vec<String>,

    /// Use HTTPS.
    #[arg(long, env = "DDG_SECURE")]
    secure: bool,

    /// Strip HTML from text fields.
    #[arg(long, env = "DDG_NO_HTML")]
    no_html: bool,

    /// Skip disambiguation responses.
    #[arg(long, env = "DDG_SKIP_DISAMBIG")]
    skip_disambig: bool,

    /// Don't follow !bang redirects.
    #[arg(long, env = "DDG_NO_REDIRECT")]
    no_redirect: bool,

    /// Print each response as JSON.
    #[arg(long)]
    json: bool,

    /// API host to query.
    #[arg(long, env = "DDG_HOST", default_value = API_HOST)]
    host: String,
}

impl Cli {
    fn options(&self) -> QueryOptions {
        QueryOptions::default()
            .with_secure(self.secure)
            .with_no_html(self.no_html)
            .with_skip_disambig(self.skip_disambig)
            .with_no_redirect(self.no_redirect)
    }
}

fn summary(res: &Response) -> &str {
    [res.abstract_html(), res.answer(), res.definition(), res.heading()]
        .into_iter()
        .find(|s| !s.is_empty())
        .map_or("", String::as_str)
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("ddg_zero_click=warn"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    let options = cli.options();
    let client = Client::with_host(cli.host.as_str());

    let mut failures = 0;
    for query in &cli.queries {
        match client.zero_click(query, &options).await {
            Ok(res) if cli.json => println!("{}", serde_json::to_string_pretty(&res)?),
            Ok(res) if !res.redirect().is_empty() => println!("{}: {}", query, res.redirect()),
            Ok(res) if res.is_empty() => println!("{}: no zero-click result", query),
            Ok(res) => println!("{}: {}", query, summary(&res)),
            Err(err) => {
                failures += 1;
                eprintln!("Error looking up {}: {}", query, err);
            }
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
