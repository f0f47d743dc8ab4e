use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    config::Locale,
    domain::{logic::bill_decorator::BillDecorator, repositories::bills_repository::BillsRepository},
    entities::DecoratedBill,
};

#[async_trait]
pub trait GetBillsUsecase: Send + Sync {
    async fn get_bills(&self) -> Result<Vec<DecoratedBill>, ServerError>;
}

pub(crate) struct GetBillsUsecaseImpl<R: BillsRepository> {
    store: Option<Arc<R>>,
    decorator: BillDecorator,
}

#[async_trait]
impl<R: BillsRepository> GetBillsUsecase for GetBillsUsecaseImpl<R> {
    async fn get_bills(&self) -> Result<Vec<DecoratedBill>, ServerError> {
        let Some(store) = &self.store else {
            tracing::debug!("no bill store configured, nothing to list");
            return Ok(Vec::new());
        };
        let bills = store.list().await?;
        tracing::debug!(count = bills.len(), "bills fetched");
        Ok(self.decorator.decorate_all(bills))
    }
}

impl<R: BillsRepository> GetBillsUsecaseImpl<R> {
    pub(crate) fn new(store: Option<Arc<R>>, locale: Locale) -> Self {
        Self {
            store,
            decorator: BillDecorator::new(locale),
        }
    }
}
