//! Typed dashboard actions and the command-line parser that produces them.
//!
//! Every operation the dashboard can perform is a variant here, so dispatch
//! is exhaustive at compile time instead of a chain of string comparisons.

use crate::api_client::PostFilter;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// List posts with the given filter.
    List(PostFilter),
    Drafts,
    Tags,
    Categories,
    ArtistPosts(String),
    Views(String),
    /// Create a new post; fields are gathered interactively.
    Create,
    /// Edit the post with this slug; current values pre-fill the prompts.
    Edit(String),
    Delete(String),
    BulkDelete(Vec<String>),
    /// Re-fetch and re-render without changing the filter.
    Refresh,
    Logout,
    Help,
    Quit,
}

/// Parses one line of user input into an action.
///
/// The `list` command accepts an optional page number and `artist=`, `tag=`
/// and `status=` filters in any order. Unknown commands and malformed
/// arguments come back as a message for the user, never a panic.
pub fn parse_action(line: &str, page_size: u32) -> Result<Action, String> {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(c) => c,
        None => return Err("Empty command. Type 'help' for the command list.".to_string()),
    };

    match command {
        "list" => parse_list(words, page_size),
        "drafts" => Ok(Action::Drafts),
        "tags" => Ok(Action::Tags),
        "categories" => Ok(Action::Categories),
        "artist" => one_slug(words, "artist").map(Action::ArtistPosts),
        "views" => one_slug(words, "views").map(Action::Views),
        "new" => Ok(Action::Create),
        "edit" => one_slug(words, "edit").map(Action::Edit),
        "delete" => one_slug(words, "delete").map(Action::Delete),
        "bulk-delete" => {
            let slugs: Vec<String> = words.map(str::to_string).collect();
            Ok(Action::BulkDelete(slugs))
        }
        "refresh" => Ok(Action::Refresh),
        "logout" => Ok(Action::Logout),
        "help" => Ok(Action::Help),
        "quit" | "exit" => Ok(Action::Quit),
        other => Err(format!(
            "Unknown command '{}'. Type 'help' for the command list.",
            other
        )),
    }
}

fn parse_list<'a>(
    words: impl Iterator<Item = &'a str>,
    page_size: u32,
) -> Result<Action, String> {
    let mut filter = PostFilter::new(1, page_size);

    for word in words {
        if let Some(artist) = word.strip_prefix("artist=") {
            filter.artist = non_empty(artist).map(str::to_string);
        } else if let Some(tag) = word.strip_prefix("tag=") {
            filter.tag = non_empty(tag).map(str::to_string);
        } else if let Some(status) = word.strip_prefix("status=") {
            filter.status = non_empty(status).map(str::to_string);
        } else {
            filter.page = word
                .parse()
                .map_err(|_| format!("'{}' is not a page number or filter", word))?;
        }
    }

    Ok(Action::List(filter))
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn one_slug<'a>(mut words: impl Iterator<Item = &'a str>, command: &str) -> Result<String, String> {
    words
        .next()
        .map(str::to_string)
        .ok_or_else(|| format!("Usage: {} <slug>", command))
}

pub const HELP_TEXT: &str = "\
Commands:
  list [page] [artist=X] [tag=X] [status=X]   list posts
  drafts                                      list draft posts
  tags | categories                           show filter values
  artist <slug>                               posts by one artist
  views <slug>                                view count for a post
  new                                         create a post
  edit <slug>                                 edit a post
  delete <slug>                               delete a post (asks first)
  bulk-delete <slug> [<slug> ...]             delete several posts
  refresh                                     re-fetch and re-render
  logout                                      end the session
  quit                                        leave the dashboard";
