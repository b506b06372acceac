//! Display styles shared by the identifier types.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;

/// How an identifier is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Bare characters, no separators (the canonical form)
    Plain,

    /// Punctuated display form
    Masked,

    /// Punctuated with the leading part redacted, safe for logs
    #[default]
    Safe,
}

impl FromStr for FormatStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "masked" => Ok(Self::Masked),
            "safe" => Ok(Self::Safe),
            other => Err(format!("unknown format style: {}", other)),
        }
    }
}

/// Interleave `chars` with the separators in `pattern`.
///
/// Every `#` in the pattern consumes the next character; anything else is
/// copied through.
pub(crate) fn apply_mask(chars: &str, pattern: &str) -> String {
    let mut source = chars.chars();
    pattern
        .chars()
        .filter_map(|p| if p == '#' { source.next() } else { Some(p) })
        .collect()
}

/// Replace the characters at positions in `range` with `*`.
pub(crate) fn redact(chars: &str, range: Range<usize>) -> String {
    chars
        .chars()
        .enumerate()
        .map(|(i, c)| if range.contains(&i) { '*' } else { c })
        .collect()
}
