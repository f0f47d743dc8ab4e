use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    entities::RawBill,
    errors::{InvalidJson, ReadError},
};

#[async_trait]
pub(crate) trait BillsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<RawBill>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<RawBill>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct BillsJsonDatasourceImpl;

impl BillsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BillsJsonDatasource for BillsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<RawBill>, ServerError> {
        serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("bill list", &e))
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<RawBill>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
