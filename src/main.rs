use dotenv::dotenv;
use sked::commands::Cli;
use sked::libs::messages::macros::is_debug_mode;
use sked::libs::messages::Message;
use sked::msg_error;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Lets a .env file in the working directory supply TODO_DBFILE
    let _ = dotenv();

    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sked=debug"));
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(Message::CommandFailed(format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}
