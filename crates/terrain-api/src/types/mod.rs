//! Validated identifier types.

mod app_id;
mod base_url;
mod system_id;

pub use app_id::AppId;
pub use base_url::BaseUrl;
pub use system_id::SystemId;
