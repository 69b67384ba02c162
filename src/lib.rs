pub mod api_client;
pub mod configuration;
pub mod dashboard;
pub mod demo;
pub mod foundation;
pub mod startup;

pub use api_client::{ApiClient, CmsApi};
pub use configuration::{create_config, get_configuration, ConfigFolder, Settings};
pub use dashboard::{run_dashboard, Controller, DashboardState};
pub use foundation::session::Session;
