//! CustomCreations Application
//!
//! The storefront shell: wires configuration, storage and services together
//! and drives them from a line-oriented command prompt.

mod app;
mod commands;
mod shell;

pub use app::{App, AppError};
pub use commands::{Command, CommandHelp, ParseError};
pub use shell::{Flow, Shell};

use creations_core::AppConfig;
use tokio::io::BufReader;

/// Load configuration, build the app and run the shell on stdin/stdout.
pub async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let app = App::from_config(&config)?;

    let mut shell = Shell::new(app);
    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    shell.run(input, &mut output).await?;
    Ok(())
}
