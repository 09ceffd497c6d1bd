use clap::Parser;
use log::{error, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use weatherdash::{
    error_chain, init_logging, Dashboard, DashboardConfig, DashboardError, LabelZone, SearchOutcome,
    DEFAULT_BASE_URL, DEFAULT_CITY,
};

/// Render a current-conditions and 5-day forecast dashboard for a city.
#[derive(Debug, Parser)]
#[command(name = "weatherdash", version, about)]
struct Cli {
    /// City to look up.
    #[arg(long, default_value = DEFAULT_CITY)]
    city: String,

    /// OpenWeatherMap API key.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory receiving index.html and forecast.csv.
    #[arg(long, default_value = "dashboard")]
    out: PathBuf,

    /// Clock used for the hourly chart labels.
    #[arg(long, value_enum, default_value_t = LabelZone::Local)]
    label_zone: LabelZone,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

async fn run(cli: Cli) -> Result<ExitCode, DashboardError> {
    let config = DashboardConfig::builder()
        .api_key(cli.api_key)
        .base_url(cli.base_url)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .label_zone(cli.label_zone)
        .build();
    let dashboard = Dashboard::new(config)?;

    match dashboard.search().city(cli.city).call().await? {
        SearchOutcome::Rendered(page) => {
            let written = dashboard.export(&page, &cli.out).await?;
            for path in written {
                println!("{}", path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        SearchOutcome::NotFound { message, .. } => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
