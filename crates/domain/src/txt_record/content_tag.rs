use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The content tags a `_for-sale` record may carry after the version tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTag {
    /// Opaque for-sale code.
    Fcod,
    /// Free text.
    Ftxt,
    /// Contact or sales URI.
    Furi,
    /// Asking price.
    Fval,
}

impl ContentTag {
    pub const ALL: [ContentTag; 4] = [
        ContentTag::Fcod,
        ContentTag::Ftxt,
        ContentTag::Furi,
        ContentTag::Fval,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTag::Fcod => "fcod",
            ContentTag::Ftxt => "ftxt",
            ContentTag::Furi => "furi",
            ContentTag::Fval => "fval",
        }
    }

    pub fn from_key(key: &[u8]) -> Option<Self> {
        match key {
            b"fcod" => Some(ContentTag::Fcod),
            b"ftxt" => Some(ContentTag::Ftxt),
            b"furi" => Some(ContentTag::Furi),
            b"fval" => Some(ContentTag::Fval),
            _ => None,
        }
    }

    /// Split `<tag>=<value>` at the first `=`. Returns `None` when the key is
    /// not one of the four content tags.
    pub fn split_pair(content: &[u8]) -> Option<(Self, &[u8])> {
        let eq = content.iter().position(|&b| b == b'=')?;
        let tag = Self::from_key(&content[..eq])?;
        Some((tag, &content[eq + 1..]))
    }

    /// The `;<tag>=` marker that would indicate a second pair embedded in a value.
    pub fn embedded_marker(&self) -> String {
        format!(";{}=", self.as_str())
    }
}

impl fmt::Display for ContentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.as_bytes())
            .ok_or_else(|| format!("unknown content tag '{s}' (expected fcod, ftxt, furi or fval)"))
    }
}
