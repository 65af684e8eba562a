//! Reading user-selected files from `<input type="file">`.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use crate::net::types::AvatarFile;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Assemble an upload from file metadata and contents.
///
/// Browsers report an empty MIME type for unknown extensions.
pub fn avatar_from_parts(file_name: &str, content_type: &str, bytes: Vec<u8>) -> AvatarFile {
    let content_type = if content_type.trim().is_empty() { FALLBACK_CONTENT_TYPE } else { content_type };
    AvatarFile { file_name: file_name.to_owned(), content_type: content_type.to_owned(), bytes }
}

/// Read the first selected file of an input element.
///
/// Returns `Ok(None)` when nothing is selected.
///
/// # Errors
///
/// Returns the browser's error text if the file contents cannot be read.
#[cfg(feature = "csr")]
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Result<Option<AvatarFile>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some(avatar_from_parts(&file.name(), &file.type_(), bytes)))
}
