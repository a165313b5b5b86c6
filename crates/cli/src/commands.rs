use crate::exit;
use crate::output::{json, GeneratedSnippet, TextReport};
use forsale_application::use_cases::{CheckForSaleUseCase, GenerateRecordsUseCase};
use forsale_domain::{Config, ContentTag, OutputFormat, RecordContent};
use forsale_infrastructure::dns::UpstreamTxtResolver;
use std::sync::Arc;
use tracing::info;

pub async fn check(config: &Config, domain: &str) -> anyhow::Result<u8> {
    let resolver = Arc::new(UpstreamTxtResolver::from_config(&config.resolver)?);
    info!(servers = resolver.servers().len(), "Resolver ready");

    let check = CheckForSaleUseCase::new(resolver).execute(domain).await?;

    match config.output.format {
        OutputFormat::Text => print!("{}", TextReport::new(&check)),
        OutputFormat::Json => println!("{}", json::render_check(&check)?),
    }

    Ok(exit::for_check(&check))
}

/// Requested contents in a fixed order: bare, then fval, furi, ftxt, fcod.
pub struct GenerateRequest {
    pub domain: String,
    pub bare: bool,
    pub fval: Vec<String>,
    pub furi: Vec<String>,
    pub ftxt: Vec<String>,
    pub fcod: Vec<String>,
}

impl GenerateRequest {
    pub fn contents(self) -> Vec<RecordContent> {
        let mut contents = Vec::new();
        if self.bare {
            contents.push(RecordContent::Bare);
        }
        let pairs = [
            (ContentTag::Fval, self.fval),
            (ContentTag::Furi, self.furi),
            (ContentTag::Ftxt, self.ftxt),
            (ContentTag::Fcod, self.fcod),
        ];
        for (tag, values) in pairs {
            contents.extend(values.into_iter().map(|v| RecordContent::Pair(tag, v)));
        }
        contents
    }
}

pub fn generate(config: &Config, request: GenerateRequest) -> anyhow::Result<u8> {
    let domain = request.domain.clone();
    let set = GenerateRecordsUseCase::new().execute(&domain, request.contents())?;

    match config.output.format {
        OutputFormat::Text => print!("{}", GeneratedSnippet::new(&set)),
        OutputFormat::Json => println!("{}", json::render_generated(&set)?),
    }

    Ok(exit::FOR_SALE)
}
