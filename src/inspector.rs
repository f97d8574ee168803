//! Request inspection middleware
//!
//! Looks at every request, and for requests targeting the site index logs
//! the parsed `User-Agent` as a framed block:
//!
//! ```text
//! ----------------------------------------------
//! /index.html
//! {"browser":"Chrome",...}
//! ==============================================
//! ```
//!
//! The continuation handed to [`Inspector::inspect`] is always invoked once
//! the inspection completed, whether or not the request matched.

use std::collections::HashMap;
use std::error::Error;

use crate::logger::{AgentFormat, LineSink};
use crate::ua::UserAgentParser;

/// Opening line of an inspection block
pub const SEPARATOR_OPEN: &str = "----------------------------------------------";
/// Closing line of an inspection block
pub const SEPARATOR_CLOSE: &str = "==============================================";

const INDEX_PREFIX: &str = "/index.html";

/// The part of an HTTP request the inspector reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectedRequest {
    pub url: String,
    /// Header names are lowercase
    pub headers: HashMap<String, String>,
}

impl InspectedRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Add a header, lowercasing its name. An existing value is kept.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| value.into());
        self
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.headers.get("user-agent").map(String::as_str)
    }
}

/// Classification of a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct TargetClass {
    /// Path is exactly `/`
    pub is_root: bool,
    /// Path starts with `/index.html`
    pub is_index: bool,
    /// Path contains a `.`
    pub is_file: bool,
}

impl TargetClass {
    pub fn of(url: &str) -> Self {
        Self {
            is_root: url == "/",
            is_index: url.starts_with(INDEX_PREFIX),
            is_file: url.contains('.'),
        }
    }

    /// Only index requests are inspected.
    ///
    /// `is_root` and `is_file` do not take part: the match has always been
    /// `is_index && (is_index || is_file)`, which is `is_index`.
    pub const fn should_process(self) -> bool {
        self.is_index
    }
}

/// Whether a request for `url` gets its user agent logged
pub fn should_process(url: &str) -> bool {
    TargetClass::of(url).should_process()
}

#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    #[error("user-agent parsing failed: {0}")]
    Parse(#[source] Box<dyn Error + Send + Sync>),
}

/// The inspection middleware
pub struct Inspector<P, S> {
    parser: P,
    sink: S,
    format: AgentFormat,
}

impl<P, S> Inspector<P, S>
where
    P: UserAgentParser,
    S: LineSink,
{
    pub const fn new(parser: P, sink: S, format: AgentFormat) -> Self {
        Self {
            parser,
            sink,
            format,
        }
    }

    pub const fn parser(&self) -> &P {
        &self.parser
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Inspect `request`, then hand control back through `proceed`.
    ///
    /// The response is part of the middleware calling convention and is left
    /// untouched. A parser failure is returned as is and `proceed` is not
    /// called in that case.
    #[allow(clippy::needless_pass_by_ref_mut)]
    pub fn inspect<R, F>(
        &self,
        request: &InspectedRequest,
        _response: &mut R,
        proceed: F,
    ) -> Result<(), InspectError>
    where
        R: ?Sized,
        F: FnOnce(),
    {
        if should_process(&request.url) {
            self.process(request)?;
        }
        proceed();
        Ok(())
    }

    /// Parse the user agent and write the framed block.
    /// Requests without a `User-Agent` header are skipped silently.
    pub fn process(&self, request: &InspectedRequest) -> Result<(), InspectError> {
        let Some(raw) = request.user_agent() else {
            return Ok(());
        };

        let agent = self
            .parser
            .parse(raw)
            .map_err(|e| InspectError::Parse(Box::new(e)))?;
        let rendered = self.format.render(&agent);

        self.sink
            .write_lines(&[SEPARATOR_OPEN, &request.url, &rendered, SEPARATOR_CLOSE]);
        Ok(())
    }
}
