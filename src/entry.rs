use std::sync::Arc;

use clap::Parser;

use crate::app;
use crate::args::{OutputFormat, TesterArgs};
use crate::dispatch::Dispatcher;
use crate::domain::run::RunConfig;
use crate::error::{AppError, AppResult};
use crate::http::ReqwestTransport;
use crate::metrics::RunReport;

pub(crate) fn run() -> AppResult<()> {
    // Usage errors exit here with clap's non-zero status, before any dispatch.
    let args = TesterArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let config = RunConfig::try_from(&args).map_err(|err| {
        tracing::error!("{}", err);
        AppError::validation(err)
    })?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(run_async(&config))?;
    print_report(&report, args.output_format)
}

async fn run_async(config: &RunConfig) -> AppResult<RunReport> {
    let transport = Arc::new(ReqwestTransport::new()?);
    Ok(Dispatcher::new(transport).run(config).await)
}

fn print_report(report: &RunReport, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => app::print_summary(report),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&app::report_json(report))?);
        }
    }
    Ok(())
}
