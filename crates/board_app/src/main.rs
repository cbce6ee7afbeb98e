use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

mod platform;

use platform::logging::LogDestination;

#[derive(Parser)]
#[command(name = "board")]
#[command(about = "Drive the save and pipeline buttons of a job board page")]
#[command(version)]
struct Cli {
    /// RON config file; missing file means defaults
    #[arg(short, long, default_value = "board.ron")]
    config: PathBuf,

    /// Override the board's base URL (scheme, host, port)
    #[arg(long)]
    base_url: Option<String>,

    /// Override the page path whose buttons are driven
    #[arg(long)]
    page: Option<String>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    platform::logging::initialize(cli.log, cli.verbose);

    let result = platform::config::load_config(&cli.config).and_then(|config| {
        let settings = config.into_settings(cli.base_url, cli.page);
        platform::run_app(settings)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            board_logging::board_error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
