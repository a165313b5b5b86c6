//! Decoding and validation of `_for-sale` TXT records.

pub mod assembler;
pub mod classifier;
pub mod content_tag;
pub mod presentation;
pub mod raw;
pub mod unicode;
pub mod validators;
pub mod verdict;

pub use assembler::{Assembly, MAX_CHARACTER_STRING};
pub use classifier::{ContentClassifier, RECOMMENDED_MAX_TTL, VERSION_TAG};
pub use content_tag::ContentTag;
pub use presentation::{PresentationError, Unescaped};
pub use raw::RawRecord;
pub use unicode::UnicodeReport;
pub use validators::{Price, TagCheck};
pub use verdict::{ClassifiedRecord, DecodedContent, Diagnostic, Severity, Verdict};
