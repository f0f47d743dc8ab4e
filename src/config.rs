use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{
    entities::PageSize,
    errors::{InvalidConfig, InvalidJson, ReadError},
};

const DEFAULT_CONFIG: &str = include_str!("../assets/config/default.json");

/// Language used for display dates and status labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BilledConfig {
    pub locale: Locale,
    /// File name used when a receipt is exported as PDF.
    pub pdf_file_name: String,
    /// Share of the modal width taken by the receipt preview.
    pub modal_image_ratio: f64,
    pub page_size: PageSize,
    /// Base of the file URLs handed out by the local bill store.
    pub storage_base_url: String,
    /// VAT percentage applied when the form leaves it empty.
    pub default_pct: u32,
    /// Accepted receipt file extensions, lowercase, without the dot.
    pub receipt_extensions: Vec<String>,
}

impl BilledConfig {
    /// The configuration shipped with the crate.
    pub fn load_default() -> Result<Self, ServerError> {
        Self::from_str(DEFAULT_CONFIG)
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_str(&s)
    }

    fn validate(self) -> Result<Self, ServerError> {
        if !(self.modal_image_ratio > 0.0 && self.modal_image_ratio <= 1.0) {
            return Err(InvalidConfig::new("modalImageRatio must be in (0, 1]"));
        }
        if self.pdf_file_name.trim().is_empty() {
            return Err(InvalidConfig::new("pdfFileName must not be empty"));
        }
        if self.receipt_extensions.is_empty() {
            return Err(InvalidConfig::new("receiptExtensions must not be empty"));
        }
        Ok(self)
    }
}

impl FromStr for BilledConfig {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: BilledConfig =
            serde_json::from_str(s).map_err(|e| InvalidJson::with_debug("config", &e))?;
        config.validate()
    }
}

impl Default for BilledConfig {
    fn default() -> Self {
        Self {
            locale: Locale::Fr,
            pdf_file_name: "nom-du-fichier.pdf".to_string(),
            modal_image_ratio: 0.5,
            page_size: PageSize::A4,
            storage_base_url: "https://test.storage.tld/v0/b/billable-677b6.appspot.com/o"
                .to_string(),
            default_pct: 20,
            receipt_extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
        }
    }
}
