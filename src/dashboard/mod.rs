mod actions;
mod controller;
mod render;

pub use actions::{parse_action, Action};
pub use controller::{run_dashboard, Controller, DashboardState};
pub use render::{render_filter_legend, render_posts_table};
