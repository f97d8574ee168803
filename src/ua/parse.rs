use rama_ua::UserAgent;

use super::{Agent, ParseError, UserAgentParser, DEFAULT_MAX_UA_LENGTH};

/// `User-Agent` parser backed by [`rama_ua::UserAgent`].
///
/// Headers longer than the configured maximum and headers carrying
/// control characters are refused before classification.
#[derive(Debug, Clone, Copy)]
pub struct UaParser {
    max_length: usize,
}

impl UaParser {
    pub const fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub const fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for UaParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UA_LENGTH)
    }
}

impl UserAgentParser for UaParser {
    type Output = Agent;
    type Error = ParseError;

    fn parse(&self, raw: &str) -> Result<Agent, ParseError> {
        if raw.len() > self.max_length {
            return Err(ParseError::TooLong {
                len: raw.len(),
                max: self.max_length,
            });
        }
        if let Some(position) = raw
            .bytes()
            .position(|b| b.is_ascii_control() && b != b'\t')
        {
            return Err(ParseError::ControlCharacter { position });
        }

        Ok(Agent::from_user_agent(&UserAgent::new(raw)))
    }
}
