//! User-Agent parsing module
//!
//! Defines the parsing capability the inspector depends on and the default
//! implementation backed by `rama-ua`.

mod parse;

pub use parse::UaParser;
pub use rama_ua::{DeviceKind, PlatformKind, UserAgentKind};

use serde::Serialize;
use std::fmt;

/// Maximum length of a User-Agent header accepted by [`UaParser`] by default.
/// Agents seen in the wild stay well below 300 characters.
pub const DEFAULT_MAX_UA_LENGTH: usize = 512;

/// Capability that turns a raw `User-Agent` header into a structured value.
///
/// The inspector only renders the output, it never looks inside it.
pub trait UserAgentParser {
    type Output: Serialize + fmt::Debug;
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, raw: &str) -> Result<Self::Output, Self::Error>;
}

/// Reasons [`UaParser`] refuses a header
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("user-agent is {len} bytes long, exceeding the maximum of {max}")]
    TooLong { len: usize, max: usize },
    #[error("user-agent contains a control character at byte {position}")]
    ControlCharacter { position: usize },
}

/// Structured view of a `User-Agent` header.
///
/// Fields rama-ua cannot determine serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub browser: Option<UserAgentKind>,
    /// Major version for Chromium and Firefox, `major * 100 + minor` for Safari
    pub version: Option<usize>,
    pub platform: Option<PlatformKind>,
    pub device: Option<DeviceKind>,
    pub is_mobile: bool,
    pub is_desktop: bool,
    pub source: String,
}

impl Agent {
    pub fn from_user_agent(ua: &rama_ua::UserAgent) -> Self {
        let info = ua.info();
        let platform = ua.platform();
        let device = platform.as_ref().map(PlatformKind::device);

        Self {
            browser: info.as_ref().map(|i| i.kind),
            version: info.and_then(|i| i.version),
            platform,
            device,
            is_mobile: device == Some(DeviceKind::Mobile),
            is_desktop: device == Some(DeviceKind::Desktop),
            source: ua.header_str().to_string(),
        }
    }
}
