use fractic_server_error::ServerError;
use maud::html;

use crate::{
    domain::{
        repositories::bills_repository::BillsRepository,
        usecases::get_bills_usecase::{GetBillsUsecase as _, GetBillsUsecaseImpl},
    },
    entities::{DecoratedBill, PdfDocument, Route},
    errors::{PdfExportUnavailable, PdfSaveFailed},
    presentation::app_context::AppContext,
};

/// User interactions on the bills page.
#[derive(Debug, Clone, PartialEq)]
pub enum BillsEvent {
    /// "Nouvelle note de frais" button.
    NewBill,
    /// Eye icon of a row.
    IconEye { bill_url: String },
    /// Download icon of a row.
    IconDownload { bill_url: String },
    /// PDF button inside the receipt modal.
    DownloadPdf { bill_url: String },
}

pub struct BillsContainer<R: BillsRepository> {
    ctx: AppContext<R>,
    get_bills: GetBillsUsecaseImpl<R>,
}

impl<R: BillsRepository> BillsContainer<R> {
    pub fn new(ctx: AppContext<R>) -> Self {
        let get_bills = GetBillsUsecaseImpl::new(ctx.store.clone(), ctx.config.locale);
        Self { ctx, get_bills }
    }

    /// Store bills with display date and status label, in store order.
    /// Empty when no store is configured.
    pub async fn get_bills(&self) -> Result<Vec<DecoratedBill>, ServerError> {
        self.get_bills.get_bills().await
    }

    pub async fn handle(&self, event: BillsEvent) -> Result<(), ServerError> {
        match event {
            BillsEvent::NewBill => self.handle_click_new_bill(),
            BillsEvent::IconEye { bill_url } => self.handle_click_icon_eye(&bill_url),
            BillsEvent::IconDownload { bill_url } => self.handle_click_icon_download(&bill_url),
            BillsEvent::DownloadPdf { bill_url } => {
                return self.handle_click_download_pdf(&bill_url).await;
            }
        }
        Ok(())
    }

    pub fn handle_click_new_bill(&self) {
        self.ctx.navigator.navigate(Route::NewBill);
    }

    /// Shows the receipt in the modal, with a button to export it as PDF.
    pub fn handle_click_icon_eye(&self, bill_url: &str) {
        let img_width =
            (self.ctx.ui.modal_width() as f64 * self.ctx.config.modal_image_ratio).floor() as u32;
        let body = html! {
            div style="text-align: center;" class="bill-proof-container" {
                img data-testid="billpicture" width=(img_width) src=(bill_url) alt="Bill";
            }
            div style="text-align: center; margin-top: 20px;" {
                button id="downloadPdfButton" class="btn btn-primary" data-bill-url=(bill_url) {
                    "Télécharger en PDF"
                }
            }
        };
        self.ctx.ui.set_modal_body(&body.into_string());
        self.ctx.ui.show_modal();
    }

    pub async fn handle_click_download_pdf(&self, bill_url: &str) -> Result<(), ServerError> {
        let file_name = self.ctx.config.pdf_file_name.clone();
        self.download_pdf(bill_url, &file_name).await
    }

    /// Downloads the receipt file as stored, under its own file name.
    pub fn handle_click_icon_download(&self, bill_url: &str) {
        let file_name = bill_url
            .split(&['?', '#'][..])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .unwrap_or("justificatif");
        self.ctx.ui.download_file(bill_url, file_name);
    }

    /// Loads the receipt at `url` and saves it as a one-page PDF named
    /// `file_name`.
    pub async fn download_pdf(&self, url: &str, file_name: &str) -> Result<(), ServerError> {
        let result = self.export_pdf(url, file_name).await;
        match &result {
            Ok(()) => tracing::info!(%url, %file_name, "receipt exported as PDF"),
            Err(e) => tracing::error!(%url, %file_name, error = %e, "receipt PDF export failed"),
        }
        result
    }

    async fn export_pdf(&self, url: &str, file_name: &str) -> Result<(), ServerError> {
        let (Some(images), Some(pdf)) = (&self.ctx.images, &self.ctx.pdf) else {
            return Err(PdfExportUnavailable::new(file_name));
        };
        let image = images.load(url).await?;
        let document = PdfDocument::single_receipt_page(image, self.ctx.config.page_size);
        pdf.save(&document, file_name)
            .map_err(|e| PdfSaveFailed::with_debug(file_name, &e))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::BilledConfig,
        entities::PageSize,
        test_support::{
            fixture_bills, FakeImageLoader, FakeStore, RecordingNavigator, RecordingPdfWriter,
            RecordingUi, UiCall,
        },
    };

    struct Harness {
        ui: Arc<RecordingUi>,
        navigator: Arc<RecordingNavigator>,
        pdf: Arc<RecordingPdfWriter>,
        container: BillsContainer<FakeStore>,
    }

    fn harness() -> Harness {
        let ui = Arc::new(RecordingUi::new(801));
        let navigator = Arc::new(RecordingNavigator::default());
        let pdf = Arc::new(RecordingPdfWriter::default());
        let ctx = AppContext::new(ui.clone(), navigator.clone(), BilledConfig::default())
            .with_store(Arc::new(FakeStore::with_bills(fixture_bills())))
            .with_receipt_export(Arc::new(FakeImageLoader), pdf.clone());
        Harness {
            ui,
            navigator,
            pdf,
            container: BillsContainer::new(ctx),
        }
    }

    #[tokio::test]
    async fn get_bills_returns_formatted_bills() {
        let bills = harness().container.get_bills().await.unwrap();
        assert_eq!(bills.len(), 4);
        assert_eq!(bills[0].formated_date.as_deref(), Some("4 Avr. 04"));
        assert_eq!(bills[0].bill.status, "En attente");
        assert_eq!(bills[3].formated_date.as_deref(), Some("2 Fév. 02"));
        assert_eq!(bills[3].bill.status, "Refused");
    }

    #[tokio::test]
    async fn get_bills_without_store_is_empty() {
        let ctx: AppContext<FakeStore> = AppContext::new(
            Arc::new(RecordingUi::new(800)),
            Arc::new(RecordingNavigator::default()),
            BilledConfig::default(),
        );
        assert!(BillsContainer::new(ctx).get_bills().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn new_bill_button_navigates() {
        let h = harness();
        h.container.handle(BillsEvent::NewBill).await.unwrap();
        assert_eq!(h.navigator.routes(), vec![Route::NewBill]);
    }

    #[test]
    fn eye_icon_opens_modal_with_preview() {
        let h = harness();
        h.container
            .handle_click_icon_eye("https://localhost:3456/images/test.jpg");
        let calls = h.ui.calls();
        assert_eq!(calls.len(), 2);
        let UiCall::SetModalBody(body) = &calls[0] else {
            panic!("expected modal body, got {:?}", calls[0]);
        };
        assert!(body.contains(r#"data-testid="billpicture""#));
        assert!(body.contains(r#"width="400""#));
        assert!(body.contains(r#"src="https://localhost:3456/images/test.jpg""#));
        assert!(body.contains(r#"id="downloadPdfButton""#));
        assert_eq!(calls[1], UiCall::ShowModal);
    }

    #[test]
    fn modal_escapes_the_receipt_url() {
        let h = harness();
        h.container.handle_click_icon_eye(r#"x.jpg" onerror="alert(1)"#);
        let calls = h.ui.calls();
        let UiCall::SetModalBody(body) = &calls[0] else {
            panic!("expected modal body");
        };
        assert!(!body.contains(r#"" onerror=""#));
        assert!(body.contains("x.jpg&quot; onerror=&quot;alert(1)"));
    }

    #[tokio::test]
    async fn modal_button_exports_a4_pdf() {
        let h = harness();
        h.container
            .handle(BillsEvent::DownloadPdf {
                bill_url: "https://localhost:3456/images/test.jpg".into(),
            })
            .await
            .unwrap();
        let saved = h.pdf.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "nom-du-fichier.pdf");
        assert_eq!(saved[0].1.pages[0].size, PageSize::A4);
        assert_eq!(
            saved[0].1.pages[0].image.url,
            "https://localhost:3456/images/test.jpg"
        );
    }

    #[tokio::test]
    async fn image_load_failure_is_reported() {
        let h = harness();
        let result = h
            .container
            .download_pdf("https://localhost:3456/images/broken.jpg", "x.pdf")
            .await;
        assert!(result.is_err());
        assert!(h.pdf.saved().is_empty());
    }

    #[tokio::test]
    async fn export_without_capability_is_reported() {
        let ctx = AppContext::new(
            Arc::new(RecordingUi::new(800)),
            Arc::new(RecordingNavigator::default()),
            BilledConfig::default(),
        )
        .with_store(Arc::new(FakeStore::default()));
        let result = BillsContainer::new(ctx).download_pdf("u", "x.pdf").await;
        assert!(result.is_err());
    }

    #[test]
    fn download_icon_uses_the_file_name_of_the_url() {
        let h = harness();
        h.container
            .handle_click_icon_download("https://test.storage.tld/o/facture.jpg?alt=media");
        assert_eq!(
            h.ui.calls(),
            vec![UiCall::DownloadFile {
                url: "https://test.storage.tld/o/facture.jpg?alt=media".into(),
                file_name: "facture.jpg".into(),
            }]
        );
    }
}
