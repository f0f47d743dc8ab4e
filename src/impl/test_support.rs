//! Fakes shared by the unit tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    domain::repositories::bills_repository::BillsRepository,
    entities::{
        ImageFormat, ImageLoader, Navigator, PdfDocument, PdfWriter, RawBill, ReceiptImage,
        ReceiptUpload, Route, UiSurface, UploadedReceipt,
    },
    errors::{ImageLoadFailed, StoreRequestFailed},
};

pub(crate) const FIXTURE_BILLS_JSON: &str = include_str!("../../tests/fixtures/bills.json");

pub(crate) fn fixture_bills() -> Vec<RawBill> {
    serde_json::from_str(FIXTURE_BILLS_JSON).unwrap()
}

// Store.
// ---

#[derive(Default)]
pub(crate) struct FakeStore {
    bills: Vec<RawBill>,
    failure: Option<String>,
    list_calls: AtomicUsize,
    created: Mutex<Vec<ReceiptUpload>>,
    updated: Mutex<Vec<(String, RawBill)>>,
}

impl FakeStore {
    pub(crate) fn with_bills(bills: Vec<RawBill>) -> Self {
        Self {
            bills,
            ..Default::default()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn created(&self) -> Vec<ReceiptUpload> {
        self.created.lock().unwrap().clone()
    }

    pub(crate) fn updated(&self) -> Vec<(String, RawBill)> {
        self.updated.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ServerError> {
        match &self.failure {
            Some(message) => Err(StoreRequestFailed::new(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillsRepository for FakeStore {
    async fn list(&self) -> Result<Vec<RawBill>, ServerError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.bills.clone())
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<UploadedReceipt, ServerError> {
        self.check()?;
        let mut created = self.created.lock().unwrap();
        let receipt = UploadedReceipt {
            file_url: format!("https://localhost:3456/images/{}", upload.file.file_name),
            key: format!("key-{}", created.len() + 1),
        };
        created.push(upload);
        Ok(receipt)
    }

    async fn update(&self, bill: RawBill, selector: &str) -> Result<RawBill, ServerError> {
        self.check()?;
        self.updated
            .lock()
            .unwrap()
            .push((selector.to_string(), bill.clone()));
        Ok(bill)
    }
}

// Page.
// ---

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UiCall {
    RenderRoot(String),
    SetModalBody(String),
    ShowModal,
    ResetFileInput,
    DownloadFile { url: String, file_name: String },
}

pub(crate) struct RecordingUi {
    modal_width: u32,
    calls: Mutex<Vec<UiCall>>,
}

impl RecordingUi {
    pub(crate) fn new(modal_width: u32) -> Self {
        Self {
            modal_width,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<UiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last_render(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|c| match c {
            UiCall::RenderRoot(m) => Some(m),
            _ => None,
        })
    }

    fn push(&self, call: UiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl UiSurface for RecordingUi {
    fn render_root(&self, markup: &str) {
        self.push(UiCall::RenderRoot(markup.to_string()));
    }

    fn modal_width(&self) -> u32 {
        self.modal_width
    }

    fn set_modal_body(&self, markup: &str) {
        self.push(UiCall::SetModalBody(markup.to_string()));
    }

    fn show_modal(&self) {
        self.push(UiCall::ShowModal);
    }

    fn reset_file_input(&self) {
        self.push(UiCall::ResetFileInput);
    }

    fn download_file(&self, url: &str, file_name: &str) {
        self.push(UiCall::DownloadFile {
            url: url.to_string(),
            file_name: file_name.to_string(),
        });
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub(crate) fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

// Receipt export.
// ---

/// Serves a tiny jpeg for every URL except those containing `broken`.
pub(crate) struct FakeImageLoader;

#[async_trait]
impl ImageLoader for FakeImageLoader {
    async fn load(&self, url: &str) -> Result<ReceiptImage, ServerError> {
        if url.contains("broken") {
            return Err(ImageLoadFailed::new(url));
        }
        Ok(ReceiptImage {
            url: url.to_string(),
            format: ImageFormat::Jpeg,
            width_px: 640,
            height_px: 480,
            bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
        })
    }
}

#[derive(Default)]
pub(crate) struct RecordingPdfWriter {
    saved: Mutex<Vec<(String, PdfDocument)>>,
}

impl RecordingPdfWriter {
    pub(crate) fn saved(&self) -> Vec<(String, PdfDocument)> {
        self.saved.lock().unwrap().clone()
    }
}

impl PdfWriter for RecordingPdfWriter {
    fn save(&self, document: &PdfDocument, file_name: &str) -> Result<(), ServerError> {
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), document.clone()));
        Ok(())
    }
}
