use crate::entities::{PageSize, PdfDocument, PdfPage, ReceiptImage};

impl PdfDocument {
    /// One page holding the receipt stretched over the whole page.
    pub fn single_receipt_page(image: ReceiptImage, size: PageSize) -> Self {
        let (width_mm, height_mm) = size.dimensions_mm();
        PdfDocument {
            pages: vec![PdfPage {
                size,
                image,
                x_mm: 0.0,
                y_mm: 0.0,
                width_mm,
                height_mm,
            }],
        }
    }
}
