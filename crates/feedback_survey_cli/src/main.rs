//! Console entry point for the feedback and survey manager.
//!
//! # Responsibility
//! - Load settings, start logging and acquire the document store once.
//! - Run the interactive menu on stdin/stdout.
//! - Release the store on the way out.

mod config;
mod shell;

use config::AppConfig;
use feedback_survey_core::{core_version, init_logging, StoreContext};
use log::{error, info};
use shell::Shell;
use std::io;

fn main() {
    let config = AppConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("Logging disabled: {err}");
    }

    let ctx = StoreContext::connect(&config.db_path);
    match ctx.startup_error() {
        Some(err) => {
            eprintln!("Error connecting to document store: {err}");
            eprintln!(
                "Make sure `{}` is a writable database path",
                config.db_path.display()
            );
        }
        None => println!(
            "Connected to document store successfully! (core v{})",
            core_version()
        ),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = Shell::new(&ctx, stdin.lock(), stdout.lock()).run() {
        error!("event=shell_run module=cli status=error error={err}");
        eprintln!("Console I/O failed: {err}");
    }

    match ctx.close() {
        Ok(()) => {
            info!("event=app_exit module=cli status=ok");
            println!("Storage connection closed.");
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("Error closing document store: {err}");
        }
    }
}
