//! Platform identification.
//!
//! Only used to pick defaults for platform-specific chrome behavior: the
//! fullscreen bounds workaround and what the maximize button does.

use serde::{Deserialize, Serialize};

/// The desktop platform the chrome runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOS
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "dragonfly",
            target_os = "netbsd",
            target_os = "openbsd"
        )) {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }

    pub fn is_macos(self) -> bool {
        self == Self::MacOS
    }

    pub fn is_linux(self) -> bool {
        self == Self::Linux
    }

    /// Whether transparent undecorated windows keep their old bounds when
    /// entering native fullscreen and must be forced to the monitor bounds.
    pub fn needs_fullscreen_bounds_workaround(self) -> bool {
        self.is_macos()
    }

    /// Whether the zoom/maximize button enters native fullscreen instead of
    /// maximizing.
    pub fn zoom_enters_fullscreen(self) -> bool {
        self.is_macos()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
