use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    config::BilledConfig,
    domain::usecases::get_bills_usecase::{GetBillsUsecase as _, GetBillsUsecaseImpl},
    entities::DecoratedBill,
    presentation::views::bills_ui::{bills_ui, BillsPage},
    store::LocalBillsStore,
};

pub type Html = String;

/// One-shot rendering of a bill list, without containers or navigation.
pub struct BilledUtil {
    config: BilledConfig,
}

impl BilledUtil {
    pub fn new(config: BilledConfig) -> Self {
        Self { config }
    }

    pub async fn from_string(&self, bills_json: &str) -> Result<(Vec<DecoratedBill>, Html), ServerError> {
        let store = LocalBillsStore::from_string(bills_json, &self.config.storage_base_url)?;
        self.render(store).await
    }

    pub async fn from_file<T>(&self, bills_json: T) -> Result<(Vec<DecoratedBill>, Html), ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        let store = LocalBillsStore::from_file(bills_json, &self.config.storage_base_url).await?;
        self.render(store).await
    }

    async fn render(&self, store: LocalBillsStore) -> Result<(Vec<DecoratedBill>, Html), ServerError> {
        let bills = GetBillsUsecaseImpl::new(Some(Arc::new(store)), self.config.locale)
            .get_bills()
            .await?;
        let html = bills_ui(BillsPage::Data(&bills));
        Ok((bills, html))
    }
}
