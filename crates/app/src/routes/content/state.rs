//! State machine behind the content list screen.
//!
//! Kept free of signals so every transition can be unit tested. The screen
//! holds one `ContentListState` in a signal and turns returned [`Notice`]s
//! into toasts.

use std::collections::HashSet;

use shared_types::{filter_content, without_content, AppError, ContentItem};

use crate::notify::Notice;

pub const FETCH_FAILED: &str = "Failed to fetch content";
pub const DELETE_FAILED: &str = "Failed to delete content";
pub const DELETE_SUCCEEDED: &str = "Content deleted successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentListState {
    load: LoadState,
    items: Vec<ContentItem>,
    confirming: Option<String>,
    pending_deletes: HashSet<String>,
}

impl ContentListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Apply the result of the mount-time fetch. A failure leaves the list
    /// empty and is not retried.
    pub fn finish_fetch(&mut self, result: Result<Vec<ContentItem>, AppError>) -> Option<Notice> {
        self.load = LoadState::Ready;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(e) => {
                tracing::error!(error = %e, kind = %e.kind, "Error fetching content");
                self.items.clear();
                Some(Notice::error(FETCH_FAILED))
            }
        }
    }

    /// Open the delete prompt for `id`.
    pub fn request_delete(&mut self, id: &str) {
        self.confirming = Some(id.to_string());
    }

    /// Record awaiting confirmation, if the prompt is open.
    pub fn confirming(&self) -> Option<&str> {
        self.confirming.as_deref()
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirming = None;
    }

    /// The user accepted the prompt that was opened for `id`. Works whether or
    /// not the prompt has already been dismissed. Same return as
    /// [`begin_delete`](Self::begin_delete).
    pub fn confirm_delete(&mut self, id: &str) -> bool {
        self.confirming = None;
        self.begin_delete(id)
    }

    /// Mark `id` as being deleted. Returns false when a delete for it is
    /// already in flight, in which case the caller must not start another.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        self.pending_deletes.insert(id.to_string())
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.pending_deletes.contains(id)
    }

    /// Apply the outcome of a remote delete. The local list only changes
    /// after the backend confirmed the removal.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), AppError>) -> Notice {
        self.pending_deletes.remove(id);
        match result {
            Ok(()) => {
                self.items = without_content(&self.items, id);
                self.load = LoadState::Ready;
                Notice::success(DELETE_SUCCEEDED)
            }
            Err(e) => {
                tracing::error!(error = %e, kind = %e.kind, content_id = id, "Error deleting content");
                Notice::error(DELETE_FAILED)
            }
        }
    }

    /// Rows to render for the current search term.
    pub fn visible(&self, search_term: &str) -> Vec<ContentItem> {
        filter_content(&self.items, search_term)
    }
}
