use cosmwasm_schema::cw_serde;
use thiserror::Error;

use crate::collection_details::{optional_fits, MAX_TEXT_LENGTH, MAX_URI_LENGTH};

const MIN_LENGTH: usize = 3;

#[derive(Error, Debug, PartialEq)]
pub enum TokenDetailsError {
    #[error("Token uri too long")]
    TokenUriTooLong {},
    #[error("Token uri too short")]
    TokenUriTooShort {},
    #[error("Preview uri too long")]
    PreviewUriTooLong {},
    #[error("Preview uri too short")]
    PreviewUriTooShort {},
    #[error("Token description too long")]
    TokenDescriptionTooLong {},
    #[error("Token name too long")]
    TokenNameTooLong {},
    #[error("Token name too short")]
    TokenNameTooShort {},
    #[error("Data too long")]
    DataTooLong {},
}

/// Descriptor shared by every issued unit. All units of the collection point
/// at the same `token_uri`.
#[cw_serde]
pub struct TokenDetails {
    // Each token is named "{token_name} #{token_id}"
    pub token_name: String,
    pub description: Option<String>,
    pub token_uri: String,
    pub preview_uri: Option<String>,
    pub data: Option<String>,
    pub transferable: bool,
    pub extensible: bool,
    pub nsfw: bool,
}

impl TokenDetails {
    pub fn check_integrity(&self) -> Result<(), TokenDetailsError> {
        let uri_len = self.token_uri.chars().count();
        if uri_len > MAX_URI_LENGTH {
            return Err(TokenDetailsError::TokenUriTooLong {});
        }
        if uri_len < MIN_LENGTH {
            return Err(TokenDetailsError::TokenUriTooShort {});
        }
        if let Some(preview_uri) = &self.preview_uri {
            match preview_uri.chars().count() {
                len if len > MAX_URI_LENGTH => return Err(TokenDetailsError::PreviewUriTooLong {}),
                len if len < MIN_LENGTH => return Err(TokenDetailsError::PreviewUriTooShort {}),
                _ => {}
            }
        }
        if !optional_fits(&self.description, MAX_TEXT_LENGTH) {
            return Err(TokenDetailsError::TokenDescriptionTooLong {});
        }
        match self.token_name.chars().count() {
            len if len > MAX_URI_LENGTH => return Err(TokenDetailsError::TokenNameTooLong {}),
            len if len < MIN_LENGTH => return Err(TokenDetailsError::TokenNameTooShort {}),
            _ => {}
        }
        if !optional_fits(&self.data, MAX_TEXT_LENGTH) {
            return Err(TokenDetailsError::DataTooLong {});
        }
        Ok(())
    }
}
