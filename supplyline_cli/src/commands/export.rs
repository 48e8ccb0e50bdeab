use crate::error::MainError;
use crate::state::AppState;
use api_client::{ExportFormat, ExportResource, cancellable};
use std::path::PathBuf;
use tracing::info;

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// chemicals, tools, kits or calibrations
    pub resource: ExportResource,

    /// csv, xlsx or pdf
    #[arg(long, short = 'f', default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Output file, defaults to `<resource>.<format>`
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub async fn run(args: ExportArgs, state: &AppState) -> Result<(), MainError> {
    let bytes = cancellable(
        &state.shutdown,
        state.client().export(args.resource, args.format),
    )
    .await?;
    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", args.resource, args.format)));
    tokio::fs::write(&path, &bytes).await?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote export");
    println!("Saved {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
