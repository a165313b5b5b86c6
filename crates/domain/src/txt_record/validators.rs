//! Grammar checks for the individual content tags.

use super::content_tag::ContentTag;
use super::unicode;
use super::verdict::Diagnostic;
use fancy_regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Upper bound on any tag value: 255 octets minus the version tag and the
/// `<tag>=` prefix.
pub const MAX_VALUE_OCTETS: usize = 239;

pub const RECOMMENDED_URI_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

const UNSAFE_URI_SCHEMES: [&str; 2] = ["javascript", "data"];

/// Currency letters, an integer amount and an optional fraction.
static FVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]+[0-9]+(?:\.[0-9]+)?$").expect("fval pattern is a valid regex")
});

/// Outcome of one tag validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCheck {
    pub accepted: bool,
    /// Accepted only because the version tag alone already signals a sale.
    pub lenient: bool,
    pub messages: Vec<Diagnostic>,
}

impl TagCheck {
    fn accept(mut self, note: impl Into<String>) -> Self {
        self.accepted = true;
        self.messages.push(Diagnostic::info(note));
        self
    }

    fn reject(mut self, reason: impl Into<String>) -> Self {
        self.accepted = false;
        self.messages.push(Diagnostic::error(reason));
        self
    }
}

/// Run the validator belonging to `tag`.
pub fn validate(tag: ContentTag, value: &[u8]) -> TagCheck {
    match tag {
        ContentTag::Fcod => validate_fcod(value),
        ContentTag::Ftxt => validate_ftxt(value),
        ContentTag::Furi => validate_furi(value),
        ContentTag::Fval => validate_fval(value),
    }
}

pub fn validate_fcod(value: &[u8]) -> TagCheck {
    let check = TagCheck::default();
    if let Err(reason) = check_octet_length(ContentTag::Fcod, value) {
        return check.reject(reason);
    }
    check.accept("fcod content tag is syntactically acceptable (its meaning is private to the seller or registry)")
}

pub fn validate_ftxt(value: &[u8]) -> TagCheck {
    let mut check = TagCheck::default();
    if let Err(reason) = check_octet_length(ContentTag::Ftxt, value) {
        return check.reject(reason);
    }

    let report = unicode::check(value);
    check
        .messages
        .extend(report.warnings.into_iter().map(Diagnostic::warning));
    if !report.errors.is_empty() {
        check
            .messages
            .extend(report.errors.into_iter().map(Diagnostic::error));
        return check;
    }

    if String::from_utf8_lossy(value)
        .to_ascii_lowercase()
        .contains("<script")
    {
        check.messages.push(Diagnostic::warning(
            "ftxt contains '<script'; this is a cross-site scripting risk if rendered unescaped",
        ));
    }

    check.accept("ftxt content tag is syntactically acceptable; prefer furi= over URIs in free text")
}

pub fn validate_furi(value: &[u8]) -> TagCheck {
    let mut check = TagCheck::default();
    if value.is_empty() {
        return check.reject("furi= has an empty value (must contain exactly one URI)");
    }

    let report = unicode::check(value);
    check
        .messages
        .extend(report.warnings.into_iter().map(Diagnostic::warning));
    if !report.errors.is_empty() {
        check
            .messages
            .extend(report.errors.into_iter().map(Diagnostic::error));
        return check;
    }

    // The guard above guarantees UTF-8.
    let text = String::from_utf8_lossy(value);
    if let Some(scheme) = uri_scheme(&text) {
        if !RECOMMENDED_URI_SCHEMES.contains(&scheme.as_str()) {
            check.messages.push(Diagnostic::warning(format!(
                "furi uses non-recommended scheme \"{scheme}\"; only http, https, mailto and tel are RECOMMENDED. Do not follow it without user confirmation"
            )));
            if UNSAFE_URI_SCHEMES.contains(&scheme.as_str()) {
                check.messages.push(Diagnostic::warning(format!(
                    "the \"{scheme}\" scheme can execute code or embed data; treat it as unsafe and review it manually"
                )));
            }
        }
    }

    match parse_uri(&text) {
        Ok(_) => check.accept("furi contains a syntactically valid URI; never redirect users to it without prompting"),
        Err(reason) => {
            check.lenient = true;
            check.messages.push(Diagnostic::warning(format!("furi parsing error: {reason}")));
            check.accept("the version tag is present, so the domain is still treated as for sale even though the furi value is not a valid URI")
        }
    }
}

pub fn validate_fval(value: &[u8]) -> TagCheck {
    let check = TagCheck::default();
    if value.len() < 2 {
        return check.reject("fval value too short (at least 2 characters: currency and amount)");
    }
    if value.len() > MAX_VALUE_OCTETS {
        return check.reject(format!(
            "fval value length {} exceeds the maximum of {MAX_VALUE_OCTETS} characters",
            value.len()
        ));
    }

    let Some(price) = std::str::from_utf8(value).ok().and_then(Price::parse) else {
        return check.reject(
            "fval value does not match <CURRENCY><AMOUNT> (e.g. USD750 or BTC0.000010): currency MUST be uppercase letters, amount MUST be digits with an optional fractional part",
        );
    };

    check.accept(format!(
        "fval content tag is syntactically acceptable ({price}); prices are indicative only"
    ))
}

/// Style hint for hand-written records: ISO 4217 codes are three letters.
pub fn currency_style_hint(price: &Price) -> Option<Diagnostic> {
    (price.currency.len() != 3).then(|| {
        Diagnostic::warning(format!(
            "currency code \"{}\" is not 3 letters; non-standard codes are allowed but not recommended",
            price.currency
        ))
    })
}

/// An `fval` value split into its currency and amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub currency: String,
    pub amount: String,
}

impl Price {
    /// Parse `<CURRENCY><AMOUNT>`; the split point is the first digit.
    pub fn parse(value: &str) -> Option<Self> {
        if !FVAL_PATTERN.is_match(value).unwrap_or(false) {
            return None;
        }
        let split = value.find(|c: char| c.is_ascii_digit())?;
        if split == 0 {
            return None;
        }
        let (currency, amount) = value.split_at(split);
        Some(Self {
            currency: currency.to_string(),
            amount: amount.to_string(),
        })
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

fn check_octet_length(tag: ContentTag, value: &[u8]) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{tag}= has an empty value (must be at least 1 octet)"));
    }
    if value.len() > MAX_VALUE_OCTETS {
        return Err(format!(
            "{tag} value length {} exceeds the maximum of {MAX_VALUE_OCTETS} octets",
            value.len()
        ));
    }
    Ok(())
}

/// The lowercased scheme, when `text` starts with `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`.
fn uri_scheme(text: &str) -> Option<String> {
    let (scheme, _) = text.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let well_formed = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    well_formed.then(|| scheme.to_ascii_lowercase())
}

/// The raw authority of a `scheme://authority/...` URI, before any normalisation.
fn raw_authority(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

// Checks on the raw text run before `Url::parse`, which maps `\` to `/`
// in special schemes and drops tabs and line breaks.
fn parse_uri(text: &str) -> Result<Url, String> {
    if text.contains(' ') {
        return Err("URI contains unencoded spaces".to_string());
    }
    if text.contains(['\t', '\r', '\n']) {
        return Err("URI contains tab or line-break characters".to_string());
    }

    let scheme = uri_scheme(text);
    if matches!(scheme.as_deref(), Some("http" | "https")) {
        if let Some(authority) = raw_authority(text) {
            if authority.chars().any(|c| c.is_control() || c == '\\') {
                return Err("URI host contains invalid characters".to_string());
            }
        }
    }

    let uri = Url::parse(text).map_err(|e| e.to_string())?;

    match uri.scheme() {
        "mailto" if uri.path().is_empty() => {
            Err("mailto: URI contains no recipient address".to_string())
        }
        "tel" if uri.path().is_empty() => Err("tel: URI contains no telephone number".to_string()),
        "http" | "https" if uri.host_str().unwrap_or_default().is_empty() => {
            Err("http(s) URI has an empty host".to_string())
        }
        _ => Ok(uri),
    }
}
