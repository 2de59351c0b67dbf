use clap::error::ErrorKind;
use ddp::{Cli, Ddp, DdpError, OutputFormatter, OutputMode, RunSummary};

fn main() {
    setup_logging();
    let output_mode = OutputMode::detect();

    // Parse CLI arguments
    let raw_args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let cli = match Cli::parse_raw(raw_args) {
        Ok(cli) => cli,
        Err(e) => {
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                }
                _ => report_error(
                    &DdpError::Cli {
                        message: e.to_string(),
                    }
                    .into(),
                    output_mode,
                ),
            }
            return;
        }
    };

    // Every failure is reported on stdout; the exit status stays 0.
    if let Err(e) = run(&cli, output_mode) {
        report_error(&e, output_mode);
    }
}

fn run(cli: &Cli, output_mode: OutputMode) -> anyhow::Result<RunSummary> {
    let ddp = Ddp::from_cli(cli, output_mode)?;
    let summary = ddp.run()?;

    log::info!(
        "{} records ({} duplicates removed) from {} written to {}",
        summary.records,
        summary.duplicates_removed,
        summary.strategy,
        summary.output.display()
    );

    Ok(summary)
}

fn report_error(error: &anyhow::Error, output_mode: OutputMode) {
    let formatter = OutputFormatter::new(output_mode);
    match error.downcast_ref::<DdpError>() {
        Some(e) => formatter.print_user_friendly_error(e),
        None => formatter.error(&error.to_string()),
    }
}

fn setup_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
