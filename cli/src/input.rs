//! Turning command-line values into request payloads.

use std::path::Path;

use neudev::types::ImageUpload;
use serde::de::DeserializeOwned;

use crate::CliError;

/// Parse `raw` as JSON, or the contents of the file it names when it starts
/// with `@`.
pub fn json_arg<T: DeserializeOwned>(raw: &str) -> Result<T, CliError> {
    let text = match raw.strip_prefix('@') {
        Some(path) => read_file(Path::new(path))
            .and_then(|bytes| String::from_utf8(bytes).map_err(|_| CliError::NotUtf8(path.into())))?,
        None => raw.to_owned(),
    };
    Ok(serde_json::from_str(&text)?)
}

pub fn image_file(path: &Path) -> Result<ImageUpload, CliError> {
    let bytes = read_file(path)?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(ImageUpload { file_name, mime: image_mime(path).map(ToOwned::to_owned), bytes })
}

fn image_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::ReadFile { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
