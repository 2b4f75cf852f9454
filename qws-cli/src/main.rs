use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use qws_core::{JsonFormatter, WhoisClient};
use tracing_subscriber::EnvFilter;

// Exit codes: 0 help/success, 1 bad arguments, 2 lookup failure,
// 3 serialization failure.
const EXIT_BAD_ARGS: i32 = 1;
const EXIT_LOOKUP_FAILED: i32 = 2;
const EXIT_SERIALIZATION_FAILED: i32 = 3;

#[derive(Parser)]
#[command(name = "qws")]
#[command(about = "Quick WHOIS lookup utility")]
#[command(version)]
struct Cli {
    /// Domain name to look up
    domain: String,

    /// Emit the record as JSON (this is also the default output)
    #[arg(short, long)]
    json: bool,

    /// Emit the raw WHOIS reply (reserved, not yet implemented)
    #[arg(short, long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Invoked bare, behave like -h.
    if std::env::args().nth(1).is_none() {
        Cli::command().print_help()?;
        std::process::exit(0);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{}", e);
                std::process::exit(0);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(EXIT_BAD_ARGS);
            }
        },
    };

    if cli.raw {
        eprintln!("Error: raw output is not implemented yet");
        std::process::exit(EXIT_BAD_ARGS);
    }

    // -j is accepted for interface stability; JSON is already the default.
    let _ = cli.json;

    let client = WhoisClient::new();
    let record = match client.lookup(&cli.domain).await {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_LOOKUP_FAILED);
        }
    };

    match JsonFormatter::new().format(&record) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_SERIALIZATION_FAILED);
        }
    }

    Ok(())
}
