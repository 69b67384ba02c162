//! The dashboard controller: an explicit state machine over the CMS API.
//!
//! The browser-era design reloaded the whole page to change state; here the
//! three states are first-class and every transition is a method call. Data
//! re-sync and state transitions are separate concerns: `sync` re-fetches
//! and re-renders, `login`/`logout` move between the auth states.

use crate::api_client::{ApiError, ApiOutcome, CmsApi, Post, PostDraft, PostFilter, SelectItem};
use crate::dashboard::actions::{parse_action, Action, HELP_TEXT};
use crate::dashboard::render::{render_filter_legend, render_posts_table};
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    Unauthenticated,
    Loading,
    Authenticated,
}

pub struct Controller<A: CmsApi> {
    api: A,
    state: DashboardState,
    posts: Vec<Post>,
    tags: Vec<SelectItem>,
    categories: Vec<SelectItem>,
    page_size: u32,
}

impl<A: CmsApi> Controller<A> {
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            state: DashboardState::Unauthenticated,
            posts: Vec::new(),
            tags: Vec::new(),
            categories: Vec::new(),
            page_size,
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    /// The rows currently on screen.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Picks the starting state from the persisted session: a held token
    /// leads straight into a sync, otherwise the login prompt.
    pub async fn initialize(&mut self) -> Result<(), ApiError> {
        if self.api.has_session() {
            self.sync().await
        } else {
            self.state = DashboardState::Unauthenticated;
            Ok(())
        }
    }

    /// Re-fetches posts, tags and categories and re-renders the table.
    /// Posts are fetched exactly once per sync.
    pub async fn sync(&mut self) -> Result<(), ApiError> {
        self.state = DashboardState::Loading;
        let spinner = sync_spinner();

        let filter = PostFilter::new(1, self.page_size);
        let page = self.api.fetch_posts(&filter).await?;
        let tags = self.api.fetch_tags().await?;
        let categories = self.api.fetch_categories().await?;

        spinner.finish_and_clear();

        self.posts = page.posts;
        self.tags = tags;
        self.categories = categories;
        self.state = DashboardState::Authenticated;

        print!("{}", render_posts_table(&self.posts));
        println!("{}", render_filter_legend(&self.tags, &self.categories));
        Ok(())
    }

    /// Attempts a login. Success transitions into the authenticated view via
    /// a full sync; failure leaves the state untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<bool, ApiError> {
        let response = self.api.login(username, password).await?;
        if response.success {
            self.sync().await?;
            Ok(true)
        } else {
            println!(
                "\x1b[31m{}\x1b[0m",
                response.message.as_deref().unwrap_or("Login failed")
            );
            Ok(false)
        }
    }

    pub async fn logout(&mut self) -> Result<(), ApiError> {
        self.api.logout().await?;
        self.posts.clear();
        self.tags.clear();
        self.categories.clear();
        self.state = DashboardState::Unauthenticated;
        Ok(())
    }

    /// Fetches and renders one filtered page of posts.
    pub async fn list(&mut self, filter: &PostFilter) -> Result<(), ApiError> {
        let page = self.api.fetch_posts(filter).await?;
        self.posts = page.posts;
        print!("{}", render_posts_table(&self.posts));
        Ok(())
    }

    pub async fn drafts(&mut self) -> Result<(), ApiError> {
        let page = self.api.fetch_drafts().await?;
        self.posts = page.posts;
        print!("{}", render_posts_table(&self.posts));
        Ok(())
    }

    pub async fn artist_posts(&mut self, slug: &str) -> Result<(), ApiError> {
        let page = self.api.fetch_artist_posts(slug).await?;
        self.posts = page.posts;
        print!("{}", render_posts_table(&self.posts));
        Ok(())
    }

    pub async fn show_views(&self, slug: &str) -> Result<(), ApiError> {
        let views = self.api.fetch_post_views(slug).await?;
        println!("{}: {} views", slug, views.views);
        Ok(())
    }

    pub async fn show_filters(&mut self) -> Result<(), ApiError> {
        self.tags = self.api.fetch_tags().await?;
        self.categories = self.api.fetch_categories().await?;
        println!("{}", render_filter_legend(&self.tags, &self.categories));
        Ok(())
    }

    /// Looks a post up by slug in a freshly fetched list. `None` is the
    /// explicit, recoverable answer when the slug is gone.
    pub async fn find_post(&self, slug: &str) -> Result<Option<Post>, ApiError> {
        let filter = PostFilter::new(1, self.page_size);
        let page = self.api.fetch_posts(&filter).await?;
        Ok(page.posts.into_iter().find(|p| p.slug == slug))
    }

    /// Submits the post form. An edit slug makes it an update, its absence a
    /// create. A successful submission triggers a full re-sync.
    pub async fn submit_post(
        &mut self,
        edit_slug: Option<&str>,
        draft: PostDraft,
    ) -> Result<ApiOutcome, ApiError> {
        let outcome = match edit_slug {
            Some(slug) => self.api.edit_post(slug, draft).await?,
            None => self.api.create_post(draft).await?,
        };

        if outcome.success {
            self.sync().await?;
        }
        Ok(outcome)
    }

    pub async fn delete_post(&mut self, slug: &str) -> Result<ApiOutcome, ApiError> {
        let outcome = self.api.delete_post(slug).await?;
        if outcome.success {
            self.sync().await?;
        }
        Ok(outcome)
    }

    pub async fn bulk_delete(&mut self, ids: &[String]) -> Result<ApiOutcome, ApiError> {
        let outcome = self.api.bulk_delete(ids).await?;
        if outcome.success {
            self.sync().await?;
        }
        Ok(outcome)
    }
}

fn sync_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Syncing dashboard...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Runs the interactive dashboard until the user quits.
pub async fn run_dashboard<A: CmsApi>(
    api: A,
    page_size: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = Controller::new(api, page_size);
    controller.initialize().await?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        if controller.state() == DashboardState::Unauthenticated {
            if !login_prompt(&mut controller, &mut input).await? {
                return Ok(());
            }
            continue;
        }

        let line = match read_line(&mut input, "> ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        if line.trim().is_empty() {
            continue;
        }

        let action = match parse_action(&line, page_size) {
            Ok(action) => action,
            Err(message) => {
                println!("\x1b[33m{}\x1b[0m", message);
                continue;
            }
        };

        if let Action::Quit = action {
            return Ok(());
        }

        if let Err(e) = dispatch(&mut controller, &mut input, action).await {
            eprintln!("\x1b[31m{}\x1b[0m", e);
        }
    }
}

async fn dispatch<A: CmsApi>(
    controller: &mut Controller<A>,
    input: &mut impl BufRead,
    action: Action,
) -> Result<(), ApiError> {
    match action {
        Action::List(filter) => controller.list(&filter).await,
        Action::Drafts => controller.drafts().await,
        Action::Tags | Action::Categories => controller.show_filters().await,
        Action::ArtistPosts(slug) => controller.artist_posts(&slug).await,
        Action::Views(slug) => controller.show_views(&slug).await,
        Action::Create => {
            let draft = prompt_draft(input, None)?;
            let outcome = controller.submit_post(None, draft).await?;
            report_outcome(&outcome, "Saved successfully!", "Failed to save post");
            Ok(())
        }
        Action::Edit(slug) => match controller.find_post(&slug).await? {
            Some(post) => {
                let draft = prompt_draft(input, Some(&post))?;
                let outcome = controller.submit_post(Some(&slug), draft).await?;
                report_outcome(&outcome, "Saved successfully!", "Failed to save post");
                Ok(())
            }
            None => {
                println!("\x1b[33mNo post found with slug '{}'\x1b[0m", slug);
                Ok(())
            }
        },
        Action::Delete(slug) => {
            if !confirm(input, &format!("Delete post '{}'? (y/N)", slug))? {
                println!("\x1b[33mDelete cancelled.\x1b[0m");
                return Ok(());
            }
            let outcome = controller.delete_post(&slug).await?;
            report_outcome(&outcome, "Post deleted.", "Failed to delete post");
            Ok(())
        }
        Action::BulkDelete(ids) => {
            let outcome = controller.bulk_delete(&ids).await?;
            report_outcome(&outcome, "Posts deleted.", "Failed to delete posts");
            Ok(())
        }
        Action::Refresh => controller.sync().await,
        Action::Logout => {
            controller.logout().await?;
            println!("\x1b[32mLogged out.\x1b[0m");
            Ok(())
        }
        Action::Help => {
            println!("{}", HELP_TEXT);
            Ok(())
        }
        // Quit is handled by the caller.
        Action::Quit => Ok(()),
    }
}

async fn login_prompt<A: CmsApi>(
    controller: &mut Controller<A>,
    input: &mut impl BufRead,
) -> Result<bool, ApiError> {
    println!("\x1b[1m\x1b[34mPlease log in.\x1b[0m");

    let username = match read_line(input, "Username: ")? {
        Some(value) => value.trim().to_string(),
        None => return Ok(false),
    };
    let password = match read_line(input, "Password: ")? {
        Some(value) => value.trim().to_string(),
        None => return Ok(false),
    };

    controller.login(&username, &password).await?;
    Ok(true)
}

fn prompt_draft(input: &mut impl BufRead, existing: Option<&Post>) -> Result<PostDraft, ApiError> {
    let mut draft = match existing {
        Some(post) => PostDraft {
            title: post.title.clone(),
            artist: post.artist.clone(),
            slug: post.slug.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
            status: post.status.clone(),
            description: post.description.clone(),
            attachment: None,
        },
        None => PostDraft::default(),
    };

    draft.title = prompt_field(input, "Title", &draft.title)?;
    draft.artist = prompt_field(input, "Artist", &draft.artist)?;
    draft.slug = prompt_field(input, "Slug", &draft.slug)?;

    let category = prompt_field(input, "Category", draft.category.as_deref().unwrap_or(""))?;
    draft.category = if category.is_empty() {
        None
    } else {
        Some(category)
    };

    let tags = prompt_field(input, "Tags (comma-separated)", &draft.tags.join(","))?;
    draft.tags = tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    draft.status = prompt_field(input, "Status", &draft.status)?;
    draft.description = prompt_field(input, "Description", &draft.description)?;

    let attachment = prompt_field(input, "Attachment path", "")?;
    draft.attachment = if attachment.is_empty() {
        None
    } else {
        Some(attachment.into())
    };

    Ok(draft)
}

/// Prompts for one field; an empty answer keeps the current value.
fn prompt_field(input: &mut impl BufRead, label: &str, current: &str) -> io::Result<String> {
    let prompt = if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    };

    let answer = read_line(input, &prompt)?.unwrap_or_default();
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(answer.to_string())
    }
}

fn confirm(input: &mut impl BufRead, question: &str) -> io::Result<bool> {
    println!("\x1b[31m{}\x1b[0m", question);
    let answer = read_line(input, "")?.unwrap_or_default();
    Ok(answer.trim().to_lowercase() == "y")
}

fn report_outcome(outcome: &ApiOutcome, success_message: &str, failure_fallback: &str) {
    if outcome.success {
        println!("\x1b[32m{}\x1b[0m", success_message);
    } else {
        println!(
            "\x1b[31m{}\x1b[0m",
            outcome.message.as_deref().unwrap_or(failure_fallback)
        );
    }
}

/// Reads one line, `None` on end of input.
fn read_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    if !prompt.is_empty() {
        print!("{}", prompt);
        io::stdout().flush()?;
    }

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
