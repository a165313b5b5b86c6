use forsale_domain::{DomainError, ForSaleName, RecordContent, RecordSetBuilder};
use tracing::{debug, info};

#[derive(Default)]
pub struct GenerateRecordsUseCase;

impl GenerateRecordsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Build every requested record, stopping at the first rejected one.
    /// An empty request produces the bare version-tag record.
    pub fn execute(
        &self,
        domain: &str,
        contents: Vec<RecordContent>,
    ) -> Result<RecordSetBuilder, DomainError> {
        let name = ForSaleName::parse(domain)?;
        let contents = if contents.is_empty() {
            vec![RecordContent::Bare]
        } else {
            contents
        };

        let mut builder = RecordSetBuilder::new(name);
        for content in contents {
            let record = builder.add(content)?;
            debug!(record = %record.content, warnings = record.warnings.len(), "Record added");
        }

        info!(
            domain = %builder.name(),
            records = builder.records().len(),
            "Generated _for-sale records"
        );
        Ok(builder)
    }
}
