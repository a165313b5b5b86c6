#![allow(dead_code)]

use async_trait::async_trait;
use forsale_application::ports::{TransportProtocol, TxtAnswer, TxtResolver};
use forsale_domain::{DomainError, RawRecord};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockTxtResolver {
    answers: Arc<RwLock<HashMap<String, Vec<RawRecord>>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    queries: Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockTxtResolver {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub async fn set_answer(&self, qname: &str, records: Vec<RawRecord>) {
        self.answers
            .write()
            .await
            .insert(qname.to_string(), records);
    }

    pub async fn set_error(&self, qname: &str, error: DomainError) {
        self.errors.write().await.insert(qname.to_string(), error);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxtResolver for MockTxtResolver {
    async fn lookup_txt(&self, qname: &str) -> Result<TxtAnswer, DomainError> {
        self.queries.lock().unwrap().push(qname.to_string());

        if let Some(error) = self.errors.read().await.get(qname) {
            return Err(error.clone());
        }

        let records = self
            .answers
            .read()
            .await
            .get(qname)
            .cloned()
            .unwrap_or_default();
        Ok(TxtAnswer::new(records, "192.0.2.53:53", TransportProtocol::Udp))
    }
}
