// Site-wide constants (single source of truth)
// Al Bayt Al Atiq Web Team (c)2025

use std::time::Duration;

use tracing::Level;

/// Company name shown in the nav bar, footer and console banner.
pub const BRAND_NAME: &str = "Al Bayt Al Atiq";

/// Crate version, printed in the console banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long a form's confirmation message stays visible after submit.
pub const CONFIRMATION_DELAY: Duration = Duration::from_secs(5);

pub const COPYRIGHT_YEAR: u16 = 2025;

/// Console log level: chatty while developing, quiet in release bundles.
pub fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
