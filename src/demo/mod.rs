mod ui;

pub use ui::{run_demo, sample_posts, DemoUi};
