use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::{
    receipt::{PdfDocument, ReceiptImage},
    route::Route,
};

// Page collaborators.
// ---

/// The page the containers render into.
pub trait UiSurface: Send + Sync {
    /// Replaces the whole page content.
    fn render_root(&self, markup: &str);

    /// Current width of the receipt modal, in pixels.
    fn modal_width(&self) -> u32;

    fn set_modal_body(&self, markup: &str);

    fn show_modal(&self);

    /// Clears the receipt file input of the new bill form.
    fn reset_file_input(&self);

    /// Starts a browser-style download of `url` under `file_name`.
    fn download_file(&self, url: &str, file_name: &str);
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

// Receipt export collaborators.
// ---

#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Fetches the image anonymously (no credentials, cross-origin allowed).
    async fn load(&self, url: &str) -> Result<ReceiptImage, ServerError>;
}

pub trait PdfWriter: Send + Sync {
    fn save(&self, document: &PdfDocument, file_name: &str) -> Result<(), ServerError>;
}

impl Navigator for tokio::sync::mpsc::UnboundedSender<Route> {
    fn navigate(&self, route: Route) {
        if self.send(route).is_err() {
            tracing::warn!(%route, "navigation dropped, router is no longer running");
        }
    }
}
