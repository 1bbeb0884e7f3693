use serde::{Deserialize, Deserializer, Serialize};

use crate::models::UserRole;
use crate::permissions::{can_perform, Action};

/// Columns requested by the content list, including the joined author name.
pub const CONTENT_LIST_COLUMNS: &str =
    "id,title,slug,excerpt,status,created_at,published_at,profiles!created_by(full_name)";

/// Shown when a record has no joined author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Publication state of a content record. Transitions happen server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }
}

/// Joined author profile (`profiles!created_by`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthorProfile {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Read-only projection of a content row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub excerpt: String,
    pub status: ContentStatus,
    pub created_at: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub profiles: Option<AuthorProfile>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContentItem {
    /// Author display name, or "Unknown" when the join came back empty.
    pub fn author_name(&self) -> &str {
        self.profiles
            .as_ref()
            .and_then(|p| p.full_name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Case-insensitive substring match on title or excerpt.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.excerpt.to_lowercase().contains(&needle)
    }
}

/// Items whose title or excerpt contains `term`, in their original order.
/// An empty term returns every item.
pub fn filter_content(items: &[ContentItem], term: &str) -> Vec<ContentItem> {
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_search(term))
        .cloned()
        .collect()
}

/// `items` minus the record with the given id.
pub fn without_content(items: &[ContentItem], id: &str) -> Vec<ContentItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// What the list shows when the filtered view is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub heading: &'static str,
    pub message: &'static str,
    pub show_create: bool,
}

/// Empty-state copy depends on whether a search is active and who is looking.
pub fn empty_state(search_term: &str, role: UserRole) -> EmptyState {
    let searching = !search_term.is_empty();
    EmptyState {
        heading: "No content found",
        message: if searching {
            "Try adjusting your search terms"
        } else {
            "Get started by creating your first piece of content"
        },
        show_create: !searching && can_perform(Action::Create, role),
    }
}
