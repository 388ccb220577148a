//! Color source implementations.
//!
//! - [`CoreSource`] - Platform-wide default palette
//! - [`ThemeSource`] - Active site theme palette
//! - [`BootstrapSource`] - Fixed built-in palette
//! - [`CustomSource`] - User custom colors from settings, plus an extension hook

mod bootstrap;
mod custom;
mod platform;
mod theme;

pub use self::bootstrap::{bootstrap_colors, BootstrapSource};
pub use self::custom::{ColorFilter, CustomSource, CUSTOM_NAME_PREFIX, CUSTOM_SLUG_PREFIX};
pub use self::platform::CoreSource;
pub use self::theme::ThemeSource;
