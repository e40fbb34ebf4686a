use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chisq_fit::{compute, parse_samples, to_json, Explanation};

// Same range the significance slider offers
const ALPHA_MIN: f64 = 0.01;
const ALPHA_MAX: f64 = 0.10;

#[derive(Parser, Debug)]
#[command(
    name = "chisq-fit",
    version,
    about = "Chi-Square goodness of fit test: does observed data match the expected distribution?"
)]
struct Cli {
    /// Observed values (comma-separated)
    #[arg(long, env = "CHISQ_OBSERVED", default_value = "50,80,120,90,60", allow_hyphen_values = true)]
    observed: String,

    /// Expected values (comma-separated)
    #[arg(long, env = "CHISQ_EXPECTED", default_value = "60,70,110,100,60", allow_hyphen_values = true)]
    expected: String,

    /// Significance level (α), between 0.01 and 0.10
    #[arg(long, env = "CHISQ_ALPHA", default_value_t = 0.05, value_parser = parse_alpha)]
    alpha: f64,

    #[arg(long, env = "CHISQ_FORMAT", value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Step-by-step explanation
    Text,
    Json,
}

fn parse_alpha(s: &str) -> Result<f64, String> {
    let alpha: f64 = s.trim().parse().map_err(|_| format!("`{s}` is not a number"))?;
    if !(ALPHA_MIN..=ALPHA_MAX).contains(&alpha) {
        return Err(format!("must be between {ALPHA_MIN} and {ALPHA_MAX}"));
    }
    Ok(alpha)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(observed = %cli.observed, expected = %cli.expected, alpha = cli.alpha, "running test");

    let result = match parse_samples(&cli.observed, &cli.expected)
        .and_then(|input| input.with_alpha(cli.alpha))
        .and_then(|input| compute(&input))
    {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "rejected input");
            eprintln!("⚠ {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        Format::Text => println!("{}", Explanation::new(&result)),
        Format::Json => match to_json(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to render result: {e}");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
