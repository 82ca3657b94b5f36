#![forbid(unsafe_code)]

//! National Digital Library landing page in the terminal.
//!
//! # Running
//!
//! ```sh
//! cargo run -p ndl-landing -- [config.toml]
//! ```
//!
//! The config path may also come from `NDL_CONFIG`. Logs go to the file
//! named by `[logging] file` (or `NDL_LOG_FILE`), never to the terminal.
//!
//! # Controls
//!
//! - Left/Right: previous/next carousel page; 1-9: jump to a page
//! - Up/Down, PgUp/PgDn, Home/End: scroll
//! - `/`: search (Enter submits, Esc leaves)
//! - `g`: language menu; `t`: toggle language
//! - Tab/Shift+Tab: cycle the active nav item; `m`: mobile menu
//! - `s`: sign in; `x`: exhibition; `p`: partner resources
//! - `r`: restart animations
//! - `q` or Ctrl+C: quit

use ndl_core::SystemClock;
use ndl_i18n::landing_catalog;
use ndl_landing::config::{CONFIG_ENV, LandingConfig, config_path};
use ndl_landing::sections::footer::current_year;
use ndl_landing::{LandingError, LandingPage, PageOptions, Program, ProgramConfig, logging};
use tracing::{error, info};

fn run() -> Result<(), LandingError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = config_path(&args, std::env::var(CONFIG_ENV).ok());
    let config = LandingConfig::load(path.as_deref())?;
    logging::init(&config.logging)?;
    info!(config = ?path, locale = %config.locale(), "starting landing page");

    let catalog = landing_catalog()?;
    let page = LandingPage::new(
        catalog,
        PageOptions::from_config(&config, current_year()),
        SystemClock,
    );
    let program_config = ProgramConfig {
        alt_screen: config.runtime.alt_screen,
        poll_timeout: config.poll_timeout(),
        ..ProgramConfig::default()
    };
    let mut program = Program::with_config(page, program_config)?;
    program.run()?;
    info!("landing page closed");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!(error = %e, "landing page failed");
        eprintln!("ndl-landing: {e}");
        std::process::exit(1);
    }
}
