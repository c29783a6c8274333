//! Application-wide constants
//!
//! Single source of truth for the built-in field defaults and the fixed
//! QR rendering parameters.

/// Initial field values shown before any edit (overridable via CLI flags)
pub mod defaults {
    /// Default base URL the generated link points at
    pub const BASE_URL: &str = "https://dynamic-key-card-page.vercel.app/";

    /// Default access code
    pub const CODE: &str = "12345678";

    /// Default card identifier
    pub const ID: &str = "2";
}

/// QR rendering parameters
pub mod qr {
    /// Pixels per QR module in the rasterized image
    pub const MODULE_SCALE: u32 = 8;

    /// Quiet-zone border around the symbol, in modules
    pub const QUIET_ZONE_MODULES: u32 = 4;

    /// Error-correction level for every render (H tolerates ~30% damage)
    pub const EC_LEVEL: qrcode::EcLevel = qrcode::EcLevel::H;
}

/// Export parameters
pub mod export {
    /// Prefix of the exported PNG filename
    pub const FILENAME_PREFIX: &str = "qr-code";

    /// Replacement for filename components that sanitize to nothing
    pub const EMPTY_COMPONENT: &str = "blank";
}
