pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;
pub mod web;

pub use adapters::hubspot::HubSpotClient;
pub use config::AppConfig;
pub use domain::model::{CobjFormInput, CobjProperties, CobjRecord};
pub use domain::ports::CrmClient;
pub use utils::error::{AppError, Result};
pub use web::{router, ServerState};
