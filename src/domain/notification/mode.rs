//! Backend mode value objects

use std::fmt;

/// The single notification backend committed to for a dispatcher's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// No backend available
    #[default]
    None,
    /// Balloon messages on the host's tray icon
    TrayBalloon,
    /// `org.freedesktop.Notifications` on the session bus
    DesktopService,
    /// The OS notification center
    NativeCenter,
    /// Growl 1.2 (standalone `GrowlHelperApp`)
    ThirdPartyV1,
    /// Growl 1.3+ (bundled `Growl.app`)
    ThirdPartyV2,
}

impl Mode {
    /// Get the string identifier for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::TrayBalloon => "tray-balloon",
            Self::DesktopService => "desktop-service",
            Self::NativeCenter => "native-center",
            Self::ThirdPartyV1 => "third-party-v1",
            Self::ThirdPartyV2 => "third-party-v2",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bundle identifier the third-party notifier registers for its marker type
pub const THIRD_PARTY_BUNDLE_ID: &str = "com.Growl.GrowlHelperApp";

/// Path suffix of the bundled (1.3+) install
pub const THIRD_PARTY_BUNDLED_SUFFIX: &str = "/Growl.app/";

/// Installed flavour of the third-party notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThirdPartyVariant {
    /// Helper app installed on its own
    Standalone,
    /// Helper app shipped inside `Growl.app`
    Bundled,
}

impl ThirdPartyVariant {
    /// Classify a resolved application by bundle identity and install path.
    ///
    /// Returns `None` when the application is not the known notifier.
    pub fn classify(bundle_id: &str, path: &str) -> Option<Self> {
        if !bundle_id.eq_ignore_ascii_case(THIRD_PARTY_BUNDLE_ID) {
            return None;
        }

        if path.ends_with(THIRD_PARTY_BUNDLED_SUFFIX) {
            Some(Self::Bundled)
        } else {
            Some(Self::Standalone)
        }
    }

    /// Application name the generated script addresses
    pub const fn target_application(&self) -> &'static str {
        match self {
            Self::Standalone => "GrowlHelperApp",
            Self::Bundled => "Growl",
        }
    }

    /// Corresponding dispatcher mode
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Standalone => Mode::ThirdPartyV1,
            Self::Bundled => Mode::ThirdPartyV2,
        }
    }
}
