/// A receipt file picked in the new bill form, before upload.
#[derive(Debug, Clone)]
pub struct ReceiptFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// What the store receives on receipt upload.
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    pub file: ReceiptFile,
    pub email: String,
}

/// What the store answers on receipt upload. `key` is the id of the draft
/// bill created alongside the file.
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedReceipt {
    pub file_url: String,
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptImage {
    pub url: String,
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A4,
    Letter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfPage {
    pub size: PageSize,
    pub image: ReceiptImage,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfDocument {
    pub pages: Vec<PdfPage>,
}

// --

impl PageSize {
    /// Portrait (width, height) in millimetres.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
        }
    }
}
