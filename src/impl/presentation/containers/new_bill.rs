use fractic_server_error::ServerError;
use tokio::sync::Mutex;

use crate::{
    domain::{
        repositories::bills_repository::BillsRepository,
        usecases::submit_bill_usecase::{
            StoredReceipt, SubmitBillUsecase as _, SubmitBillUsecaseImpl,
        },
    },
    entities::{NewBillForm, ReceiptFile, Route},
    errors::{MissingReceipt, NotConnected},
    presentation::app_context::AppContext,
};

pub struct NewBillContainer<R: BillsRepository> {
    ctx: AppContext<R>,
    submit_bill: SubmitBillUsecaseImpl<R>,
    receipt: Mutex<Option<StoredReceipt>>,
}

impl<R: BillsRepository> NewBillContainer<R> {
    pub fn new(ctx: AppContext<R>) -> Result<Self, ServerError> {
        let submit_bill = SubmitBillUsecaseImpl::new(
            ctx.store.clone(),
            &ctx.config.receipt_extensions,
            ctx.config.default_pct,
        )?;
        Ok(Self {
            ctx,
            submit_bill,
            receipt: Mutex::new(None),
        })
    }

    /// Receipt picked in the file input. Only images are accepted; anything
    /// else clears the input and is never uploaded. A failed upload leaves
    /// the picked file in place so the user can retry.
    pub async fn handle_change_file(&self, file: ReceiptFile) -> Result<(), ServerError> {
        if let Err(e) = self.submit_bill.check_receipt(&file) {
            tracing::warn!(file_name = %file.file_name, error = %e, "receipt rejected");
            self.ctx.ui.reset_file_input();
            return Err(e);
        }
        let email = self.email().await?;
        match self.submit_bill.upload_receipt(file, &email).await {
            Ok(stored) => {
                if stored.is_some() {
                    *self.receipt.lock().await = stored;
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "receipt upload failed");
                Err(e)
            }
        }
    }

    /// Sends the form and returns to the bills page once the store accepted
    /// the bill.
    pub async fn handle_submit(&self, form: NewBillForm) -> Result<(), ServerError> {
        let email = self.email().await?;
        let Some(receipt) = self.receipt.lock().await.clone() else {
            if self.ctx.store.is_none() {
                return Ok(());
            }
            return Err(MissingReceipt::new());
        };
        match self.submit_bill.submit(&form, &receipt, &email).await {
            Ok(Some(_)) => {
                *self.receipt.lock().await = None;
                self.ctx.navigator.navigate(Route::Bills);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                tracing::error!(bill_id = %receipt.bill_id, error = %e, "bill submission failed");
                Err(e)
            }
        }
    }

    /// Receipt uploaded so far, if any.
    pub async fn receipt(&self) -> Option<StoredReceipt> {
        self.receipt.lock().await.clone()
    }

    async fn email(&self) -> Result<String, ServerError> {
        self.ctx
            .session
            .read()
            .await
            .email()
            .map(str::to_string)
            .ok_or_else(NotConnected::new)
    }
}
