// MwIcons - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "MwIcons";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Output layout
// =============================================================================

/// Pixel sizes generated by a default run, in write order.
pub const DEFAULT_ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// File name prefix; the size and extension follow (`icon16.svg`).
pub const ICON_FILE_PREFIX: &str = "icon";

/// File extension of generated documents (without the dot).
pub const ICON_FILE_EXTENSION: &str = "svg";

/// Anchored pattern matching any generated icon file name.
/// Capture group 1 holds the pixel size.
pub const ICON_FILE_PATTERN: &str = r"^icon(\d+)\.svg$";

// =============================================================================
// Geometry
// =============================================================================

/// Gap in pixels between the outer ring and the icon edge.
pub const OUTER_RING_MARGIN: u32 = 2;

/// Smallest stroke width ever emitted for the checkmark.
pub const MIN_STROKE_WIDTH: u32 = 1;

/// Smallest size from which the inner disc always sits strictly inside the
/// outer ring (`size / 3 < size / 2 - 2`). Sizes 12, 13 and 15 tie.
pub const MIN_RINGED_SIZE: u32 = 16;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when RUST_LOG is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Console messages
// =============================================================================

/// Printed once after every icon has been written.
pub const COMPLETION_MESSAGE: &str = "SVG icons created successfully!";

/// Printed after the completion message.
pub const RASTER_NOTE: &str =
    "Note: Browsers can use SVG icons directly, or you can convert to PNG using online tools.";
