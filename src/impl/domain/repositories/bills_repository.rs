use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{RawBill, ReceiptUpload, UploadedReceipt};

/// The remote bill API, as seen by the front end.
#[async_trait]
pub trait BillsRepository: Send + Sync {
    /// Every bill visible to the current user, in store order.
    async fn list(&self) -> Result<Vec<RawBill>, ServerError>;

    /// Uploads a receipt and opens a draft bill for it.
    async fn create(&self, upload: ReceiptUpload) -> Result<UploadedReceipt, ServerError>;

    /// Replaces the bill identified by `selector`.
    async fn update(&self, bill: RawBill, selector: &str) -> Result<RawBill, ServerError>;
}
