use std::{str::FromStr as _, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    data::models::form_number_model::FormNumberModel,
    domain::repositories::bills_repository::BillsRepository,
    entities::{BillStatus, NewBillForm, RawBill, ReceiptFile, ReceiptUpload, UploadedReceipt},
    errors::{InvalidConfig, UnsupportedReceiptFormat},
};

/// A receipt accepted by the store, remembered until the form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredReceipt {
    pub bill_id: String,
    pub file_url: String,
    pub file_name: String,
}

#[async_trait]
pub trait SubmitBillUsecase: Send + Sync {
    /// Rejects receipts that are not images, judged by extension.
    fn check_receipt(&self, file: &ReceiptFile) -> Result<(), ServerError>;

    /// Returns `None` when no store is configured.
    async fn upload_receipt(
        &self,
        file: ReceiptFile,
        email: &str,
    ) -> Result<Option<StoredReceipt>, ServerError>;

    /// Returns `None` when no store is configured.
    async fn submit(
        &self,
        form: &NewBillForm,
        receipt: &StoredReceipt,
        email: &str,
    ) -> Result<Option<RawBill>, ServerError>;
}

pub(crate) struct SubmitBillUsecaseImpl<R: BillsRepository> {
    store: Option<Arc<R>>,
    accepted_extensions: Regex,
    default_pct: u32,
}

#[async_trait]
impl<R: BillsRepository> SubmitBillUsecase for SubmitBillUsecaseImpl<R> {
    fn check_receipt(&self, file: &ReceiptFile) -> Result<(), ServerError> {
        if !self.accepted_extensions.is_match(&file.file_name) {
            return Err(UnsupportedReceiptFormat::new(&file.file_name));
        }
        Ok(())
    }

    async fn upload_receipt(
        &self,
        file: ReceiptFile,
        email: &str,
    ) -> Result<Option<StoredReceipt>, ServerError> {
        self.check_receipt(&file)?;
        let Some(store) = &self.store else {
            return Ok(None);
        };
        let file_name = file.file_name.clone();
        let UploadedReceipt { file_url, key } = store
            .create(ReceiptUpload {
                file,
                email: email.to_string(),
            })
            .await?;
        tracing::info!(bill_id = %key, file_name = %file_name, "receipt uploaded");
        Ok(Some(StoredReceipt {
            bill_id: key,
            file_url,
            file_name,
        }))
    }

    async fn submit(
        &self,
        form: &NewBillForm,
        receipt: &StoredReceipt,
        email: &str,
    ) -> Result<Option<RawBill>, ServerError> {
        let bill = self.build_bill(form, receipt, email)?;
        let Some(store) = &self.store else {
            return Ok(None);
        };
        let updated = store.update(bill, &receipt.bill_id).await?;
        tracing::info!(bill_id = %receipt.bill_id, "bill submitted");
        Ok(Some(updated))
    }
}

impl<R: BillsRepository> SubmitBillUsecaseImpl<R> {
    pub(crate) fn new(
        store: Option<Arc<R>>,
        extensions: &[String],
        default_pct: u32,
    ) -> Result<Self, ServerError> {
        let alternatives = extensions
            .iter()
            .map(|e| regex::escape(e))
            .collect::<Vec<_>>()
            .join("|");
        let accepted_extensions = Regex::new(&format!(r"(?i)\.({alternatives})$"))
            .map_err(|e| InvalidConfig::with_debug("receiptExtensions is not usable", &e))?;
        Ok(Self {
            store,
            accepted_extensions,
            default_pct,
        })
    }

    fn build_bill(
        &self,
        form: &NewBillForm,
        receipt: &StoredReceipt,
        email: &str,
    ) -> Result<RawBill, ServerError> {
        let amount: i64 = FormNumberModel::from_str(&form.amount)?.into();
        let pct = FormNumberModel::from_str(&form.pct)
            .ok()
            .map(i64::from)
            .filter(|p| *p != 0)
            .unwrap_or(self.default_pct as i64);
        Ok(RawBill {
            id: receipt.bill_id.clone(),
            date: form.date.clone(),
            status: BillStatus::Pending.code().to_string(),
            amount: Some(amount.into()),
            name: Some(form.expense_name.clone().into()),
            bill_type: Some(form.expense_type.clone().into()),
            file_url: Some(receipt.file_url.clone().into()),
            file_name: Some(receipt.file_name.clone().into()),
            email: Some(email.into()),
            vat: Some(form.vat.clone().into()),
            pct: Some(pct.into()),
            commentary: Some(form.commentary.clone().into()),
            comment_admin: None,
            extra: Default::default(),
        })
    }
}
