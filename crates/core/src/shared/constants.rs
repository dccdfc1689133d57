/// Left eye counts as open at or above this probability; right eye strictly above.
pub const DEFAULT_EYE_OPEN_THRESHOLD: f64 = 0.15;

/// A face counts as smiling strictly above this probability.
pub const DEFAULT_SMILING_THRESHOLD: f64 = 0.15;

/// Overlay width as a fraction of face width.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.9;

/// Overlay assets are stored as `<asset_name>.<OVERLAY_ASSET_EXTENSION>`.
pub const OVERLAY_ASSET_EXTENSION: &str = "png";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

pub const SETTINGS_DIR_NAME: &str = "Emojify";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
