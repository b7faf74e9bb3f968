use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use remcal::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "remcal", version, about = "Terminal calendar for remind files")]
struct Args {
    /// Reminder file passed to remind
    source: Option<PathBuf>,

    /// Show today's reminders under the calendar
    #[arg(long)]
    today: bool,

    /// Log at debug level and show remind timings in the status bar
    #[arg(long)]
    debug: bool,

    /// remind binary to run
    #[arg(long, value_name = "BIN")]
    remind: Option<String>,
}

fn init_logging(debug: bool) {
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn usage_error() -> ExitCode {
    let usage = Args::command().render_usage();
    eprintln!("{usage}");
    ExitCode::from(1)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };
    let Some(source_path) = args.source else {
        return usage_error();
    };

    init_logging(args.debug);
    log::info!("remcal starting with {}", source_path.display());

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("remcal: {e}");
            return ExitCode::from(1);
        }
    };
    let cli = CliOverrides {
        source_path,
        today_pane: args.today,
        debug: args.debug,
        remind_binary: args.remind,
    };
    let resolved = config::resolve(&file_config, &cli);

    match remcal::tui::run(resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            eprintln!("remcal: {e}");
            ExitCode::from(1)
        }
    }
}
