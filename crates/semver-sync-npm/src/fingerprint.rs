//! Formatting fingerprint of a package.json file.
//!
//! Rewrites must only change dependency values, so the indentation unit,
//! line ending and trailing whitespace of the original file are captured on
//! read and reapplied on write.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Line terminator used by a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// The textual layout of a JSON document, independent of its content.
///
/// # Examples
///
/// ```
/// use semver_sync_npm::FormatFingerprint;
///
/// let original = "{\n    \"name\": \"foo\"\n}\n";
/// let fingerprint = FormatFingerprint::detect(original);
///
/// let value: serde_json::Value = serde_json::from_str(original).unwrap();
/// assert_eq!(fingerprint.render(&value).unwrap(), original);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatFingerprint {
    /// Indentation unit, or `None` for single-line documents.
    pub indent: Option<String>,
    pub line_ending: LineEnding,
    /// Whitespace after the closing brace of the document.
    pub trailing: String,
}

impl Default for FormatFingerprint {
    fn default() -> Self {
        Self {
            indent: Some("  ".into()),
            line_ending: LineEnding::Lf,
            trailing: "\n".into(),
        }
    }
}

impl FormatFingerprint {
    /// Extracts the fingerprint of an existing document.
    ///
    /// The indentation unit is the whitespace that starts the line after the
    /// document's opening brace.
    pub fn detect(text: &str) -> Self {
        static INDENT_REGEX: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\{(\r?\n)([ \t]*)").unwrap());
        static TRAILING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}(\s*)\z").unwrap());

        let (indent, line_ending) = match INDENT_REGEX.captures(text) {
            Some(caps) => {
                let line_ending = if &caps[1] == "\r\n" {
                    LineEnding::CrLf
                } else {
                    LineEnding::Lf
                };
                (Some(caps[2].to_string()), line_ending)
            }
            None => (None, LineEnding::Lf),
        };

        let trailing = TRAILING_REGEX
            .captures(text)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();

        Self {
            indent,
            line_ending,
            trailing,
        }
    }

    /// Serializes `value` with this fingerprint.
    ///
    /// Object keys keep their document order.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be serialized.
    pub fn render(&self, value: &Value) -> serde_json::Result<String> {
        let mut buf = Vec::new();

        match &self.indent {
            Some(indent) => {
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = Serializer::with_formatter(&mut buf, formatter);
                value.serialize(&mut serializer)?;
            }
            None => serde_json::to_writer(&mut buf, value)?,
        }

        let mut text = String::from_utf8_lossy(&buf).into_owned();
        if self.line_ending == LineEnding::CrLf {
            text = text.replace('\n', LineEnding::CrLf.as_str());
        }
        text.push_str(&self.trailing);

        Ok(text)
    }
}
