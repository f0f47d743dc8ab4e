use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::RwLock;

use crate::{
    data::datasources::bills_json_datasource::{BillsJsonDatasource, BillsJsonDatasourceImpl},
    domain::repositories::bills_repository::BillsRepository,
    entities::{BillStatus, RawBill, ReceiptUpload, UploadedReceipt},
    errors::BillNotFound,
};

/// Bill store kept in memory, seeded from a JSON bill list.
///
/// Uploading a receipt opens a pending draft bill keyed by a fresh UUID; the
/// form submission then replaces that draft. Receipt bytes are not kept, only
/// the URL they would be served from.
pub struct LocalBillsStore {
    bills: RwLock<Vec<RawBill>>,
    storage_base_url: String,
}

#[async_trait]
impl BillsRepository for LocalBillsStore {
    async fn list(&self) -> Result<Vec<RawBill>, ServerError> {
        Ok(self.bills.read().await.clone())
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<UploadedReceipt, ServerError> {
        let key = uuid::Uuid::new_v4().to_string();
        let file_url = format!(
            "{}/{}/{}",
            self.storage_base_url.trim_end_matches('/'),
            key,
            upload.file.file_name
        );
        let draft = RawBill {
            id: key.clone(),
            status: BillStatus::Pending.code().to_string(),
            email: Some(upload.email.into()),
            file_name: Some(upload.file.file_name.into()),
            file_url: Some(file_url.clone().into()),
            ..Default::default()
        };
        self.bills.write().await.push(draft);
        Ok(UploadedReceipt { file_url, key })
    }

    async fn update(&self, bill: RawBill, selector: &str) -> Result<RawBill, ServerError> {
        let mut bills = self.bills.write().await;
        let slot = bills
            .iter_mut()
            .find(|b| b.id == selector)
            .ok_or_else(|| BillNotFound::new(selector))?;
        *slot = RawBill {
            id: selector.to_string(),
            ..bill
        };
        Ok(slot.clone())
    }
}

impl LocalBillsStore {
    pub fn new(bills: Vec<RawBill>, storage_base_url: impl Into<String>) -> Self {
        LocalBillsStore {
            bills: RwLock::new(bills),
            storage_base_url: storage_base_url.into(),
        }
    }

    pub fn from_string(json: &str, storage_base_url: impl Into<String>) -> Result<Self, ServerError> {
        let bills = BillsJsonDatasourceImpl::new().from_string(json)?;
        Ok(Self::new(bills, storage_base_url))
    }

    pub async fn from_file<P>(path: P, storage_base_url: impl Into<String>) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let bills = BillsJsonDatasourceImpl::new().from_file(path).await?;
        Ok(Self::new(bills, storage_base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::ReceiptFile,
        test_support::{fixture_bills, FIXTURE_BILLS_JSON},
    };

    fn upload(name: &str) -> ReceiptUpload {
        ReceiptUpload {
            file: ReceiptFile {
                file_name: name.into(),
                content_type: "image/jpeg".into(),
                bytes: vec![0xFF, 0xD8],
            },
            email: "a@a".into(),
        }
    }

    #[tokio::test]
    async fn lists_seed_bills_in_order() {
        let store = LocalBillsStore::from_string(FIXTURE_BILLS_JSON, "https://files.tld").unwrap();
        assert_eq!(store.list().await.unwrap(), fixture_bills());
    }

    #[tokio::test]
    async fn upload_opens_a_pending_draft() {
        let store = LocalBillsStore::new(Vec::new(), "https://files.tld/");
        let receipt = store.create(upload("facture.jpg")).await.unwrap();
        assert!(receipt.file_url.starts_with("https://files.tld/"));
        assert!(receipt.file_url.ends_with(&format!("{}/facture.jpg", receipt.key)));

        let bills = store.list().await.unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].id, receipt.key);
        assert_eq!(bills[0].status, "pending");
        assert_eq!(bills[0].email, Some("a@a".into()));
    }

    #[tokio::test]
    async fn update_replaces_the_selected_bill() {
        let store = LocalBillsStore::new(Vec::new(), "https://files.tld");
        let receipt = store.create(upload("facture.png")).await.unwrap();
        let bill = RawBill {
            id: "ignored".into(),
            date: "2002-02-02".into(),
            status: "pending".into(),
            name: Some("test2".into()),
            ..Default::default()
        };
        let updated = store.update(bill, &receipt.key).await.unwrap();
        assert_eq!(updated.id, receipt.key);
        assert_eq!(store.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_of_unknown_bill_fails() {
        let store = LocalBillsStore::new(fixture_bills(), "https://files.tld");
        assert!(store.update(RawBill::default(), "nope").await.is_err());
    }
}
