//! A cosmetic demo view: a hardcoded sample post list rendered with the
//! live table layout, plus the sidebar and modal chrome state. No network
//! access and nothing shared with the live dashboard.

use crate::api_client::Post;
use crate::dashboard::render_posts_table;
use std::io::{self, BufRead, Write};

/// Chrome state for the demo view: a collapsible sidebar and an
/// add-post modal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoUi {
    pub sidebar_collapsed: bool,
    pub modal_visible: bool,
}

impl DemoUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn open_modal(&mut self) {
        self.modal_visible = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_visible = false;
    }

    /// A click outside the modal closes it; anywhere else it does nothing.
    pub fn click_outside(&mut self) {
        self.modal_visible = false;
    }

    fn status_line(&self) -> String {
        format!(
            "[sidebar: {}] [modal: {}]",
            if self.sidebar_collapsed {
                "collapsed"
            } else {
                "open"
            },
            if self.modal_visible {
                "visible"
            } else {
                "hidden"
            }
        )
    }
}

/// The hardcoded sample list. Same columns as the live table, no live data
/// binding and no action wiring.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Midnight Drive".to_string(),
            artist: "The Velvet Hours".to_string(),
            slug: "midnight-drive".to_string(),
            category: Some("Singles".to_string()),
            status: "published".to_string(),
            tags: vec!["synthwave".to_string()],
            description: "Late-night single.".to_string(),
            views: 1284,
        },
        Post {
            title: "Paper Lanterns".to_string(),
            artist: "Iris Okafor".to_string(),
            slug: "paper-lanterns".to_string(),
            category: None,
            status: "draft".to_string(),
            tags: vec!["acoustic".to_string(), "folk".to_string()],
            description: "Unreleased session take.".to_string(),
            views: 0,
        },
        Post {
            title: "Static Bloom".to_string(),
            artist: "Grey Harbor".to_string(),
            slug: "static-bloom".to_string(),
            category: Some("Albums".to_string()),
            status: "published".to_string(),
            tags: vec!["shoegaze".to_string()],
            description: "Album announcement.".to_string(),
            views: 342,
        },
    ]
}

/// Runs the demo loop: renders the sample table and takes chrome commands
/// until the user quits.
pub fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut ui = DemoUi::new();
    let posts = sample_posts();

    println!("\x1b[1m\x1b[34mDemo view (sample data, no network)\x1b[0m");
    print!("{}", render_posts_table(&posts));
    println!("{}", ui.status_line());
    println!("Commands: sidebar, add, close, outside, quit");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "sidebar" => ui.toggle_sidebar(),
            "add" => ui.open_modal(),
            "close" => ui.close_modal(),
            "outside" => ui.click_outside(),
            "quit" | "exit" => return Ok(()),
            "" => continue,
            other => {
                println!("\x1b[33mUnknown demo command '{}'\x1b[0m", other);
                continue;
            }
        }
        println!("{}", ui.status_line());
        io::stdout().flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_toggles_back_and_forth() {
        let mut ui = DemoUi::new();
        assert!(!ui.sidebar_collapsed);
        ui.toggle_sidebar();
        assert!(ui.sidebar_collapsed);
        ui.toggle_sidebar();
        assert!(!ui.sidebar_collapsed);
    }

    #[test]
    fn test_modal_opens_and_closes() {
        let mut ui = DemoUi::new();
        ui.open_modal();
        assert!(ui.modal_visible);
        ui.close_modal();
        assert!(!ui.modal_visible);

        ui.open_modal();
        ui.click_outside();
        assert!(!ui.modal_visible);
    }

    #[test]
    fn test_click_outside_without_modal_is_a_noop() {
        let mut ui = DemoUi::new();
        ui.click_outside();
        assert_eq!(ui, DemoUi::new());
    }

    #[test]
    fn test_sample_posts_render_with_the_live_layout() {
        let posts = sample_posts();
        let table = render_posts_table(&posts);
        assert_eq!(table.lines().count(), posts.len() + 1);
        assert!(table.contains("midnight-drive"));
        // The draft sample has no category.
        assert!(table.contains("- "));
    }
}
