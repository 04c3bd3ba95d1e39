use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::errors::IngredientError;

/// An uploaded photo, accepted only when it declares an `image/*` MIME type.
/// Lives for a single identification call and is never persisted.
#[derive(Clone, PartialEq)]
pub struct ImageUpload {
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(content_type: Option<&str>, bytes: Vec<u8>) -> Result<Self, IngredientError> {
        let mime_type = content_type
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| c.starts_with("image/"))
            .ok_or(IngredientError::NotAnImage)?;

        if bytes.is_empty() {
            return Err(IngredientError::UnreadableImage);
        }

        Ok(Self { mime_type, bytes })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Payload size; never zero.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Inline `data:` URL carrying the image as base64.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_upload_when_mime_type_is_image() {
        let image = ImageUpload::new(Some("Image/PNG"), vec![1, 2, 3]).unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.byte_len(), 3);
    }

    #[test]
    fn should_reject_upload_when_mime_type_is_not_image() {
        let pdf = ImageUpload::new(Some("application/pdf"), vec![1]);
        let missing = ImageUpload::new(None, vec![1]);

        assert!(matches!(pdf, Err(IngredientError::NotAnImage)));
        assert!(matches!(missing, Err(IngredientError::NotAnImage)));
    }

    #[test]
    fn should_reject_upload_when_payload_is_empty() {
        let result = ImageUpload::new(Some("image/jpeg"), vec![]);
        assert!(matches!(result, Err(IngredientError::UnreadableImage)));
    }

    #[test]
    fn should_encode_data_url_when_converting() {
        let image = ImageUpload::new(Some("image/jpeg"), b"bar".to_vec()).unwrap();
        assert_eq!(image.to_data_url(), "data:image/jpeg;base64,YmFy");
    }
}
