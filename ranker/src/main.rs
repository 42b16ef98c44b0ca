use anyhow::Result;
use clap::{Parser, ValueEnum};
use newsrank::config::{DEFAULT_SELECTOR, DEFAULT_TIMEOUT_SECS, DEFAULT_URL, DEFAULT_USER_AGENT};
use newsrank::{build_client, fetch_titles, read_titles, render_json, render_text, FetchConfig, Report};
use newsrank_core::{build_frequency_table_with, rank_with_table, weigh, CharPolicy};
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "newsrank")]
#[command(about = "Rank page titles by how often their words appear across all titles")]
struct Cli {
    /// Page to fetch titles from
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
    /// CSS selector matching each title element
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    selector: String,
    /// Read titles from a file (one per line, `-` for stdin) instead of fetching
    #[arg(long)]
    input: Option<String>,
    /// Print at most this many titles (0 = all)
    #[arg(long, default_value_t = 0)]
    limit: usize,
    /// Print weights in input order instead of ranked
    #[arg(long, default_value_t = false)]
    unsorted: bool,
    /// Treat only ASCII letters and digits as word characters
    #[arg(long, default_value_t = false)]
    ascii_only: bool,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// User-Agent header for the page request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Request timeout seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Cli::parse();

    let (source, titles) = match &args.input {
        Some(path) => (path.clone(), read_titles(path)?),
        None => {
            let cfg = FetchConfig::new(&args.url, &args.selector)?
                .with_user_agent(args.user_agent.clone())
                .with_timeout(Duration::from_secs(args.timeout_secs));
            let client = build_client(&cfg)?;
            (cfg.url.to_string(), fetch_titles(&client, &cfg).await?)
        }
    };

    let policy = if args.ascii_only { CharPolicy::Ascii } else { CharPolicy::Unicode };
    let table = build_frequency_table_with(&titles, policy);
    let entries = if args.unsorted {
        weigh(&titles, &table, policy)
    } else {
        rank_with_table(&titles, &table, policy)
    };

    match args.format {
        Format::Text => {
            let out = render_text(&entries, args.limit);
            if !out.is_empty() {
                println!("{out}");
            }
        }
        Format::Json => {
            let shown = if args.limit == 0 { entries.len() } else { args.limit.min(entries.len()) };
            let report = Report::new(source, policy, titles.len(), &table, &entries[..shown]);
            println!("{}", render_json(&report)?);
        }
    }
    Ok(())
}
