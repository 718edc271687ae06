//! Shell configuration.
//!
//! Everything here can be changed from the command line, and the settings
//! menu changes it in memory for the rest of the run.

use crate::error::{Result, ShellError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Shell version shown in banners.
pub const APP_VERSION: &str = "v4.1";

/// Default boot sequence steps.
pub const DEFAULT_BOOT_STEPS: [&str; 5] = [
    "BIOS check...OK",
    "Starting beast processor...OK",
    "Expanding quote buffer...OK",
    "Loading wawawa legend...OK",
    "Preparing UI...OK",
];

/// Colour theme for banners and chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Yellow.
    #[default]
    Amber,
    /// Green.
    Green,
    /// Cyan.
    Cyan,
}

impl Theme {
    /// Every theme, in menu order.
    pub const ALL: [Self; 3] = [Self::Amber, Self::Green, Self::Cyan];

    /// Lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amber => "amber",
            Self::Green => "green",
            Self::Cyan => "cyan",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| ShellError::UnknownTheme(s.trim().to_string()))
    }
}

/// Configuration for the shell.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Refresh period of live views, and the unit of every pause.
    pub tick_period: Duration,
    /// Skip the boot sequence.
    pub fast_boot: bool,
    /// Colour banners and chrome.
    pub use_color: bool,
    /// Colour theme.
    pub theme: Theme,
    /// Boot sequence steps, in order.
    pub boot_steps: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_secs(1),
            fast_boot: false,
            use_color: true,
            theme: Theme::default(),
            boot_steps: DEFAULT_BOOT_STEPS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl ShellConfig {
    /// Check the configuration before starting the shell.
    pub fn validate(&self) -> Result<()> {
        if self.tick_period.is_zero() {
            return Err(ShellError::Config("tick period must be positive".into()));
        }
        if self.boot_steps.is_empty() {
            return Err(ShellError::Config("boot sequence needs at least one step".into()));
        }
        Ok(())
    }
}
