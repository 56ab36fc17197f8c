//! Hand a finished report to the viewer: a browser download on web, a file in
//! the downloads directory on desktop.

use report::{ReportError, ReportFile};

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("failed to build report: {0}")]
    Report(#[from] ReportError),
    #[error("browser download failed: {0}")]
    Browser(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// How long a browser download's blob URL stays alive after the click.
pub const BLOB_URL_LIFETIME_MS: u32 = 60_000;

/// Save `file` and return where it went (a file name or a full path).
#[cfg(target_arch = "wasm32")]
pub fn save_report(file: &ReportFile) -> Result<String, DownloadError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Browser("no document".to_string()))?;

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| DownloadError::Browser("not an anchor element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();

    // Revoking in the same tick cancels the download in some browsers.
    gloo_timers::callback::Timeout::new(BLOB_URL_LIFETIME_MS, move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            tracing::warn!("failed to revoke download URL: {e:?}");
        }
    })
    .forget();
    Ok(file.file_name.clone())
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> DownloadError {
    DownloadError::Browser(format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_report(file: &ReportFile) -> Result<String, DownloadError> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = save_report_to(&dir, file)?;
    Ok(path.display().to_string())
}

/// Write `file` into `dir`, replacing any previous export of the same name.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_report_to(
    dir: &std::path::Path,
    file: &ReportFile,
) -> Result<std::path::PathBuf, DownloadError> {
    let path = dir.join(&file.file_name);
    std::fs::write(&path, &file.bytes).map_err(|source| DownloadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!("saved {} ({} bytes)", path.display(), file.bytes.len());
    Ok(path)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_save_report_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = report::users_report(&[]).to_file().unwrap();

        let path = save_report_to(dir.path(), &file).unwrap();
        assert_eq!(path, dir.path().join("user-details.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), file.bytes);

        // A second export overwrites the first.
        save_report_to(dir.path(), &file).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_blob_url_outlives_the_click() {
        assert!(BLOB_URL_LIFETIME_MS >= 1_000);
        assert!(BLOB_URL_LIFETIME_MS <= 5 * 60 * 1_000);
    }

    #[test]
    fn test_missing_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = report::users_report(&[]).to_file().unwrap();
        let err = save_report_to(&dir.path().join("nope"), &file).unwrap_err();
        assert!(matches!(err, DownloadError::Io { .. }));
    }
}
