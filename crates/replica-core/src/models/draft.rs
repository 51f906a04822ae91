//! Editable form state for one submission.

use bytes::Bytes;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Which image field of the draft is authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    #[default]
    File,
    Url,
}

impl FromStr for ImageMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "upload" => Ok(ImageMode::File),
            "url" | "link" => Ok(ImageMode::Url),
            _ => Err(anyhow::anyhow!("Invalid image mode: {}", s)),
        }
    }
}

impl Display for ImageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ImageMode::File => write!(f, "file"),
            ImageMode::Url => write!(f, "url"),
        }
    }
}

/// An image picked by the user, held in memory until upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name as reported by the picker
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Text fields of the draft addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    ProductUrl,
    Budget,
    Material,
    Comments,
    Name,
    Phone,
}

impl FromStr for DraftField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "productUrl" | "product_url" => Ok(DraftField::ProductUrl),
            "budget" => Ok(DraftField::Budget),
            "material" => Ok(DraftField::Material),
            "comments" | "extra_comments" => Ok(DraftField::Comments),
            "name" => Ok(DraftField::Name),
            "phone" | "phone_number" => Ok(DraftField::Phone),
            _ => Err(anyhow::anyhow!("Unknown form field: {}", s)),
        }
    }
}

/// In-progress form state. Both image fields are kept so switching modes
/// never loses what the user entered; only the one selected by `mode` is read
/// at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub mode: ImageMode,
    pub product_url: String,
    pub image_file: Option<ImageFile>,
    pub budget: String,
    pub material: String,
    pub comments: String,
    pub name: String,
    pub phone: String,
}

impl SubmissionDraft {
    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::ProductUrl => &mut self.product_url,
            DraftField::Budget => &mut self.budget,
            DraftField::Material => &mut self.material,
            DraftField::Comments => &mut self.comments,
            DraftField::Name => &mut self.name,
            DraftField::Phone => &mut self.phone,
        };
        *slot = value;
    }
}

/// Where the product image comes from once a draft has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(ImageFile),
    Url(String),
}

impl ImageSource {
    pub fn mode(&self) -> ImageMode {
        match self {
            ImageSource::File(_) => ImageMode::File,
            ImageSource::Url(_) => ImageMode::Url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_only_named_field() {
        let mut draft = SubmissionDraft::default();
        draft.set_field(DraftField::Budget, "120".to_string());
        draft.set_field(DraftField::Name, "Ada".to_string());

        assert_eq!(draft.budget, "120");
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.mode, ImageMode::File);
    }

    #[test]
    fn field_names_parse_in_both_spellings() {
        assert_eq!("productUrl".parse::<DraftField>().unwrap(), DraftField::ProductUrl);
        assert_eq!("phone_number".parse::<DraftField>().unwrap(), DraftField::Phone);
        assert!("email".parse::<DraftField>().is_err());
    }

    #[test]
    fn image_mode_parses_aliases() {
        assert_eq!("URL".parse::<ImageMode>().unwrap(), ImageMode::Url);
        assert_eq!("upload".parse::<ImageMode>().unwrap(), ImageMode::File);
        assert!("camera".parse::<ImageMode>().is_err());
    }
}
