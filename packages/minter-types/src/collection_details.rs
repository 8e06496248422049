use cosmwasm_schema::cw_serde;
use thiserror::Error;

#[cw_serde]
pub struct CollectionDetails {
    // Denom id on the onft module
    pub id: String,
    pub collection_name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub preview_uri: Option<String>,
    pub schema: Option<String>,
    pub uri: Option<String>,
    pub uri_hash: Option<String>,
    pub data: Option<String>,
}

pub(crate) const MAX_URI_LENGTH: usize = 256;
pub(crate) const MAX_TEXT_LENGTH: usize = 4096;

/// True if `value` has at most `max` characters.
pub(crate) fn fits(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Optional fields are valid when absent.
pub(crate) fn optional_fits(value: &Option<String>, max: usize) -> bool {
    value.as_deref().map_or(true, |value| fits(value, max))
}

impl CollectionDetails {
    pub fn check_integrity(&self) -> Result<(), CollectionDetailsError> {
        let id_len = self.id.chars().count();
        if !(3..=64).contains(&id_len) || !self.id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CollectionDetailsError::InvalidCollectionId {});
        }
        if self.collection_name.is_empty() || !fits(&self.collection_name, MAX_URI_LENGTH) {
            return Err(CollectionDetailsError::InvalidCollectionName {});
        }
        if self.symbol.is_empty() || !fits(&self.symbol, MAX_URI_LENGTH) {
            return Err(CollectionDetailsError::InvalidSymbol {});
        }
        let optional_fields = [
            (&self.description, MAX_TEXT_LENGTH, CollectionDetailsError::InvalidDescription {}),
            (&self.preview_uri, MAX_URI_LENGTH, CollectionDetailsError::InvalidPreviewUri {}),
            (&self.schema, MAX_URI_LENGTH, CollectionDetailsError::InvalidSchema {}),
            (&self.uri, MAX_URI_LENGTH, CollectionDetailsError::InvalidUri {}),
            (&self.uri_hash, MAX_URI_LENGTH, CollectionDetailsError::InvalidUriHash {}),
            (&self.data, MAX_TEXT_LENGTH, CollectionDetailsError::InvalidData {}),
        ];
        for (value, max, error) in optional_fields {
            if !optional_fits(value, max) {
                return Err(error);
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CollectionDetailsError {
    #[error("Invalid collection id")]
    InvalidCollectionId {},
    #[error("Invalid collection name")]
    InvalidCollectionName {},
    #[error("Invalid symbol")]
    InvalidSymbol {},
    #[error("Invalid description")]
    InvalidDescription {},
    #[error("Invalid preview uri")]
    InvalidPreviewUri {},
    #[error("Invalid schema")]
    InvalidSchema {},
    #[error("Invalid uri")]
    InvalidUri {},
    #[error("Invalid uri hash")]
    InvalidUriHash {},
    #[error("Invalid data")]
    InvalidData {},
}
