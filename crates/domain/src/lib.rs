//! For-sale registry domain layer: record decoding, validation and
//! RRset analysis for `_for-sale` TXT records.
pub mod config;
pub mod errors;
pub mod for_sale_name;
pub mod record_builder;
pub mod rrset;
pub mod txt_record;

pub use config::{CliOverrides, Config, ConfigError, OutputFormat, ResolverConfig};
pub use errors::DomainError;
pub use for_sale_name::ForSaleName;
pub use record_builder::{GeneratedRecord, RecordContent, RecordSetBuilder};
pub use rrset::{RRsetAnalyzer, RRsetReport, ReportEntry};
pub use txt_record::{
    ClassifiedRecord, ContentClassifier, ContentTag, DecodedContent, Diagnostic, Price, RawRecord,
    Severity, Verdict,
};
