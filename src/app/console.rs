//! Request console - ad-hoc GET of backend endpoints

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Prompt and output pane of the request console
#[derive(Clone, Debug, Default)]
pub struct RequestConsole {
    pub prompt_open: bool,
    pub input: String,
    pub pending: Option<u64>,
    /// Endpoint whose result is in `output`
    pub last_endpoint: Option<String>,
    /// Pretty-printed JSON of the last result
    pub output: String,
    pub scroll: u16,
}

impl RequestConsole {
    pub fn open(&mut self) {
        self.prompt_open = true;
    }

    pub fn cancel(&mut self) {
        self.prompt_open = false;
        self.input.clear();
    }

    /// Close the prompt and hand back the endpoint to fetch, if any.
    ///
    /// A missing leading slash is added so `status` and `/status` agree.
    pub fn take_endpoint(&mut self) -> Option<String> {
        self.prompt_open = false;
        let raw = std::mem::take(&mut self.input);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('/') {
            Some(trimmed.to_string())
        } else {
            Some(format!("/{}", trimmed))
        }
    }

    pub fn show_json(&mut self, endpoint: String, value: &serde_json::Value) {
        self.output = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.last_endpoint = Some(endpoint);
        self.scroll = 0;
    }
}

/// File name for a downloaded payload: last path segment without query
pub fn download_file_name(endpoint: &str) -> String {
    let path = endpoint.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .find(|s| !s.is_empty())
        .filter(|s| !s.contains(['\\', ':']) && *s != "..")
        .map(str::to_string)
        .unwrap_or_else(|| "download.bin".to_string())
}

/// Write a binary payload into `dir`, returning the written path
pub fn save_download(dir: &Path, endpoint: &str, bytes: &[u8]) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(download_file_name(endpoint));
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_take_endpoint_normalizes_slash() {
        let mut console = RequestConsole::default();
        console.open();
        console.input = " logs/today ".into();
        assert_eq!(console.take_endpoint().as_deref(), Some("/logs/today"));
        assert!(!console.prompt_open);
        assert!(console.input.is_empty());

        console.input = "   ".into();
        assert_eq!(console.take_endpoint(), None);
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("/logs/export.zip?day=3"), "export.zip");
        assert_eq!(download_file_name("/snapshot/"), "snapshot");
        assert_eq!(download_file_name("/"), "download.bin");
        assert_eq!(download_file_name("/files/.."), "download.bin");
    }

    #[test]
    fn test_save_download() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("downloads");
        let path = save_download(&target, "/camera/frame.jpg", b"\xff\xd8jpeg").unwrap();
        assert_eq!(path, target.join("frame.jpg"));
        assert_eq!(fs::read(path).unwrap(), b"\xff\xd8jpeg");
    }
}
