//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::constants::defaults;

/// Key-card QR generator
#[derive(Debug, Parser)]
#[command(name = "keycard-qr", version, about)]
pub struct Args {
    /// Initial base URL the generated link points at
    #[arg(long, default_value = defaults::BASE_URL)]
    pub base_url: String,

    /// Initial access code
    #[arg(long, default_value = defaults::CODE)]
    pub code: String,

    /// Initial card identifier
    #[arg(long, default_value = defaults::ID)]
    pub id: String,

    /// Render and save the QR image without opening a window
    #[arg(long)]
    pub export: bool,

    /// Directory exported images are written to
    /// (defaults to the download directory, then the working directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let args = Args::parse_from(["keycard-qr"]);
        assert_eq!(args.base_url, defaults::BASE_URL);
        assert_eq!(args.code, defaults::CODE);
        assert_eq!(args.id, defaults::ID);
        assert!(!args.export);
        assert!(args.out_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "keycard-qr",
            "--base-url",
            "https://example.com",
            "--code",
            "abc",
            "--id",
            "7",
            "--export",
            "--out-dir",
            "/tmp/qr",
        ]);
        assert_eq!(args.base_url, "https://example.com");
        assert_eq!(args.code, "abc");
        assert_eq!(args.id, "7");
        assert!(args.export);
        assert_eq!(args.out_dir, Some(PathBuf::from("/tmp/qr")));
    }
}
