//! File upload command

use crate::error::CliResult;
use crate::output::print_success;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use teamup_client::{api, NotifyingClient};

/// Upload a local file and print its public URL.
pub async fn upload(client: &NotifyingClient, file: &Path) -> CliResult<()> {
    let bytes = tokio::fs::read(file).await?;
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.bin")
        .to_string();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Uploading {name}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = api::file::upload_file(client, &name, bytes).await;
    spinner.finish_and_clear();

    let url = result?;
    print_success(&format!("Uploaded: {url}"));
    Ok(())
}
