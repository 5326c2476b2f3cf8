use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use tmux_host_stats::app::render_status_line;
use tmux_host_stats::config::{self, Settings, load_config, load_config_from_path};
use tmux_host_stats::logging;
use tmux_host_stats::system::collector::HostCollector;

#[derive(Parser)]
#[command(
    name = "tmux-host-stats",
    about = "Print a one-line CPU, memory and load summary for terminal status bars",
    disable_version_flag = true
)]
struct Cli {
    /// Status refresh interval in seconds; the CPU is sampled for just under this long
    #[arg(short, long, allow_negative_numbers = true)]
    interval: Option<i64>,

    /// Memory display mode. 0: used/total, 1: free memory, 2: usage percent
    #[arg(short, long, allow_negative_numbers = true)]
    mem_mode: Option<i64>,

    /// CPU display mode. 0: max 100%, 1: max 100% * number of threads
    #[arg(short = 't', long, allow_negative_numbers = true)]
    cpu_mode: Option<i64>,

    /// How many load averages to show (0-3)
    #[arg(short, long, allow_negative_numbers = true)]
    averages_count: Option<i64>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level for diagnostics on stderr: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Print version and exit
    #[arg(short = 'v', long, default_value_t = false)]
    version: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if cli.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config_for_cli(&cli);
    logging::init(&config.logging)?;

    // Stats errors go to stderr as a single line.
    let settings = match Settings::from_config(&config.general) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut collector = HostCollector::new();
    match render_status_line(&settings, &mut collector, std::thread::sleep) {
        Ok(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(interval) = cli.interval {
        config.general.interval = interval;
    }
    if let Some(mode) = cli.mem_mode {
        config.general.mem_mode = mode;
    }
    if let Some(mode) = cli.cpu_mode {
        config.general.cpu_mode = mode;
    }
    if let Some(count) = cli.averages_count {
        config.general.averages_count = count;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    config
}
