use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::BilledConfig,
    domain::repositories::bills_repository::BillsRepository,
    entities::{ImageLoader, Navigator, PdfWriter, Session, UiSurface},
};

/// Everything a container talks to. Cloning is cheap and shares the same
/// collaborators and session.
pub struct AppContext<R: BillsRepository> {
    pub store: Option<Arc<R>>,
    pub ui: Arc<dyn UiSurface>,
    pub navigator: Arc<dyn Navigator>,
    pub images: Option<Arc<dyn ImageLoader>>,
    pub pdf: Option<Arc<dyn PdfWriter>>,
    pub session: Arc<RwLock<Session>>,
    pub config: Arc<BilledConfig>,
}

impl<R: BillsRepository> AppContext<R> {
    pub fn new(ui: Arc<dyn UiSurface>, navigator: Arc<dyn Navigator>, config: BilledConfig) -> Self {
        Self {
            store: None,
            ui,
            navigator,
            images: None,
            pdf: None,
            session: Arc::new(RwLock::new(Session::anonymous())),
            config: Arc::new(config),
        }
    }

    pub fn with_store(mut self, store: Arc<R>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_receipt_export(
        mut self,
        images: Arc<dyn ImageLoader>,
        pdf: Arc<dyn PdfWriter>,
    ) -> Self {
        self.images = Some(images);
        self.pdf = Some(pdf);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Arc::new(RwLock::new(session));
        self
    }
}

impl<R: BillsRepository> Clone for AppContext<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            ui: self.ui.clone(),
            navigator: self.navigator.clone(),
            images: self.images.clone(),
            pdf: self.pdf.clone(),
            session: self.session.clone(),
            config: self.config.clone(),
        }
    }
}
