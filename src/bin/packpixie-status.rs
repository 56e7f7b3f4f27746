use clap::Parser;
use packpixie_api::checker::{CheckerState, StatusChecker};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Query a running PackPixie API and print its status report.
#[derive(Parser, Debug)]
#[command(name = "packpixie-status", version)]
struct Args {
    /// Base URL of the API.
    #[arg(long, env = "PACKPIXIE_API_URL", default_value = "http://localhost:3001")]
    url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut checker = StatusChecker::new();
    let failed = matches!(
        checker.check(&client, &args.url).await,
        CheckerState::Failure(_)
    );
    print!("{}", checker.render());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
