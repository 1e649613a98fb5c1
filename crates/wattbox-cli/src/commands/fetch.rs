use crate::cli::{Cli, FetchArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli, args: &FetchArgs) -> Result<(), CliError> {
    let history = super::fetch_history(cli).await?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&history)?
    } else {
        serde_json::to_string(&history)?
    };

    println!("{rendered}");
    Ok(())
}
