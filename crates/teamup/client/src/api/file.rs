//! File upload calls

use crate::error::ApiResult;
use crate::notify::NotifyingClient;
use reqwest::multipart::{Form, Part};

/// Upload a file under the `file` form field; resolves to its public URL.
///
/// Reading the file from disk is the caller's concern; this layer only ships
/// bytes.
pub async fn upload_file(
    client: &NotifyingClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> ApiResult<String> {
    let part = Part::bytes(bytes).file_name(file_name.to_string());
    let form = Form::new().part("file", part);
    client.upload("/file/upload", form).await
}
