use clap::Parser;
use menuframe::app::App;
use menuframe::services::{default_config_json, resolve_config, AppConfig};
use menuframe::tui::crossterm::CrosstermInput;
use menuframe::tui::{TerminalGuard, TerminalSurface};
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;

#[derive(Parser, Debug)]
#[clap(name = "menuframe", author, version, about = "Full-screen terminal frame with an inline menu bar")]
struct Cli {
    #[clap(long, short, help = "Configuration file (JSON)")]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Title shown centered in the top border")]
    title: Option<String>,

    #[clap(long, help = "Write logs to this file instead of the configured one")]
    log_file: Option<PathBuf>,

    #[clap(long, default_value = "info")]
    log_level: String,

    #[clap(long, help = "Print the default configuration and exit")]
    print_default_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_default_config {
        println!("{}", default_config_json());
        return ExitCode::SUCCESS;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("menuframe: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = resolve_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);
    config.validate()?;

    let _logging = config
        .log_file
        .as_deref()
        .and_then(|path| logging::init(path, &cli.log_level));

    let result = {
        let guard = TerminalGuard::new()?;
        #[cfg(unix)]
        let _signals = menuframe::tui::terminal_guard::install_termination_signals(guard.restorer())?;

        let surface = TerminalSurface::new()?;
        App::new(surface, CrosstermInput::new(), &config).and_then(|mut app| app.run())
    };

    if let Err(err) = &result {
        tracing::error!(fatal = true, error = %err, "menuframe exited with an error");
    }
    Ok(result?)
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(title) = &cli.title {
        config.title = title.clone();
    }
    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
