use tracing::info;

use crate::cli::{Cli, ReportArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli, args: &ReportArgs) -> Result<(), CliError> {
    let history = super::fetch_history(cli).await?;

    wattbox_report::render_pdf(&history, &args.output)?;
    info!(output = %args.output.display(), "report written");

    Ok(())
}
