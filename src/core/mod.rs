pub mod services;

pub use crate::domain::ports::{ApiClient, ConfigProvider};
pub use crate::utils::error::Result;
pub use services::BlogServices;
