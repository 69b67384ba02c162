use crate::api_client::{Post, SelectItem};
use crate::foundation::utils::fit_cell;

const TITLE_WIDTH: usize = 24;
const ARTIST_WIDTH: usize = 16;
const CATEGORY_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 10;
const VIEWS_WIDTH: usize = 6;

/// Renders the posts table, rebuilt from scratch on every sync.
///
/// The slug column doubles as the action handle: `edit <slug>` and
/// `delete <slug>` act on the row it identifies.
pub fn render_posts_table(posts: &[Post]) -> String {
    let mut table = String::new();

    table.push_str(&format!(
        "{} {} {} {} {} SLUG\n",
        fit_cell("TITLE", TITLE_WIDTH),
        fit_cell("ARTIST", ARTIST_WIDTH),
        fit_cell("CATEGORY", CATEGORY_WIDTH),
        fit_cell("STATUS", STATUS_WIDTH),
        fit_cell("VIEWS", VIEWS_WIDTH),
    ));

    for post in posts {
        let category = post.category.as_deref().unwrap_or("-");
        table.push_str(&format!(
            "{} {} {} {} {} {}\n",
            fit_cell(&post.title, TITLE_WIDTH),
            fit_cell(&post.artist, ARTIST_WIDTH),
            fit_cell(category, CATEGORY_WIDTH),
            fit_cell(&post.status, STATUS_WIDTH),
            fit_cell(&post.views.to_string(), VIEWS_WIDTH),
            post.slug,
        ));
    }

    if posts.is_empty() {
        table.push_str("(no posts)\n");
    }

    table
}

/// Renders the available tags and categories, the values the `list`
/// command's filters accept.
pub fn render_filter_legend(tags: &[SelectItem], categories: &[SelectItem]) -> String {
    format!(
        "Tags: {}\nCategories: {}",
        join_labels(tags),
        join_labels(categories)
    )
}

fn join_labels(items: &[SelectItem]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(SelectItem::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str) -> Post {
        Post {
            title: format!("Title {}", slug),
            artist: "Artist".to_string(),
            slug: slug.to_string(),
            category: None,
            status: "published".to_string(),
            tags: vec![],
            description: String::new(),
            views: 7,
        }
    }

    #[test]
    fn test_one_row_per_post() {
        let posts = vec![post("a"), post("b"), post("c")];
        let table = render_posts_table(&posts);
        // Header plus three rows.
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains(" a\n"));
        assert!(table.contains(" c\n"));
    }

    #[test]
    fn test_missing_category_renders_as_dash() {
        let table = render_posts_table(&[post("a")]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.contains("- "));
    }

    #[test]
    fn test_empty_list_has_placeholder() {
        let table = render_posts_table(&[]);
        assert!(table.contains("(no posts)"));
    }

    #[test]
    fn test_filter_legend_lists_labels() {
        let tags = vec![
            SelectItem::Plain("rock".to_string()),
            SelectItem::Entry {
                slug: "hip-hop".to_string(),
                name: "Hip Hop".to_string(),
            },
        ];
        let legend = render_filter_legend(&tags, &[]);
        assert!(legend.contains("rock, Hip Hop"));
        assert!(legend.contains("Categories: -"));
    }
}
