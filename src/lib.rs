//! # HexCase
//!
//! Generates laser-cut drawings for hexagonal battery cases: a grid of
//! battery holes inside finger-jointed hexagonal panels, wrapped by a
//! flexible wall strip.
//!
//! ## Architecture
//!
//! HexCase is organized as a workspace with multiple crates:
//!
//! 1. **hexcase-core** - Shared types, errors, battery presets
//! 2. **hexcase-settings** - User settings, file persistence, validation
//! 3. **hexcase-camtools** - Turtle path engine, geometry solver, panel generators
//! 4. **hexcase** - Command-line binary that ties the crates together

pub mod cli;

pub use hexcase_camtools::{BatteryCaseMaker, CaseDocument, CaseGeometry};
pub use hexcase_core::{BatteryPreset, CaseParameters, Layer};
pub use hexcase_settings::CaseSettings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log lines go to stderr so the drawing can be written to stdout.
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// debug output when `verbose` is set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
