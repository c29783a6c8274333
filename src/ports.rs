//! Host-environment ports for the two side effects.
//!
//! Clipboard write and image save are the only places the generator
//! touches the outside world, so both sit behind narrow traits. The GUI
//! injects the real implementations; tests inject the in-memory doubles
//! from [`doubles`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Write-only system clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Destination for exported PNG images.
pub trait ImageSink {
    /// Saves `bytes` under `filename`, returning the full path written.
    fn save_png(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Disk-backed sink writing into a fixed directory.
pub struct DiskSink {
    dir: PathBuf,
}

impl DiskSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Sink writing to the user's download directory, falling back to the
    /// current working directory when the platform reports none.
    pub fn default_location() -> Self {
        let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageSink for DiskSink {
    fn save_png(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create export directory {}", self.dir.display()))?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "Exported QR image");
        Ok(path)
    }
}

/// In-memory stand-ins used by the action-handler tests.
#[cfg(test)]
pub mod doubles {
    use super::*;

    #[derive(Default)]
    pub struct MemoryClipboard {
        pub contents: Option<String>,
        pub fail: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MemorySink {
        pub saved: Vec<(String, Vec<u8>)>,
        pub fail: bool,
    }

    impl ImageSink for MemorySink {
        fn save_png(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
            if self.fail {
                anyhow::bail!("disk full");
            }
            self.saved.push((filename.to_string(), bytes.to_vec()));
            Ok(PathBuf::from(filename))
        }
    }
}
