pub mod collection_details;
pub mod config;
pub mod pricing;
pub mod token_details;
pub mod utils;

pub use collection_details::{CollectionDetails, CollectionDetailsError};
pub use config::{Config, ConfigurationError};
pub use pricing::{DiscountWindow, PriceSchedule};
pub use token_details::{TokenDetails, TokenDetailsError};
pub use utils::{check_collection_creation_fee, generate_create_denom_msg, generate_mint_message};
