use clap::error::ErrorKind;
use clap::Parser;
use series_sum::utils::{error::SumError, logger};
use series_sum::{CliConfig, SumCommand};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return fail(SumError::from(e)),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let command = SumCommand::new(config);
    let stdout = std::io::stdout();
    match command.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(e: SumError) -> ExitCode {
    tracing::error!("Calculation failed: {} (Category: {:?})", e, e.category());

    let line = serde_json::to_string(&e.payload()).unwrap_or_else(|_| {
        r#"{"status":"error","message":"Failed to serialize error"}"#.to_string()
    });
    eprintln!("{}", line);

    ExitCode::from(e.exit_code())
}
