//! Screen state for the TUI
//!
//! Each screen owns its controller. Leaving a screen drops it together with
//! everything it loaded; coming back mounts a fresh one.

use crate::controller::{DetailController, SUGGESTED_QUERIES, SearchController, SearchView};
use crate::models::FoodSummary;

/// Which part of the search screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query box
    #[default]
    Input,
    /// The result list, suggestion list or error panel
    Results,
}

/// Single-line text input; the cursor is a byte offset on a char boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

impl QueryInput {
    /// Input holding `text` with the cursor at the end
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor
    pub fn push(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.text.len(), |(i, _)| self.cursor + i);
        }
    }

    pub const fn home(&mut self) {
        self.cursor = 0;
    }

    pub const fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Replace the whole text, cursor at the end
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }
}

/// State of the search screen (`/`)
#[derive(Debug)]
pub struct SearchScreen {
    pub controller: SearchController,
    pub input: QueryInput,
    pub focus: Focus,
    /// Highlighted row in the result or suggestion list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Rows that fit in the list area, updated during render
    pub visible_rows: usize,
}

impl Default for SearchScreen {
    fn default() -> Self {
        Self {
            controller: SearchController::new(),
            input: QueryInput::default(),
            focus: Focus::Input,
            cursor: 0,
            scroll_offset: 0,
            visible_rows: 5,
        }
    }
}

impl SearchScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selectable rows in the current view
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.controller.view() {
            SearchView::Results { foods, .. } => foods.len(),
            SearchView::Welcome => SUGGESTED_QUERIES.len(),
            SearchView::Loading | SearchView::Failed(_) | SearchView::Empty => 0,
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.adjust_scroll();
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Put the list back at its first row
    pub const fn scroll_to_top(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Keep the cursor inside the visible window
    pub fn adjust_scroll(&mut self) {
        let visible = self.visible_rows.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor + 1 - visible;
        }
    }

    /// Food under the cursor, when results are shown
    #[must_use]
    pub fn selected_food(&self) -> Option<&FoodSummary> {
        match self.controller.view() {
            SearchView::Results { foods, .. } => foods.get(self.cursor),
            _ => None,
        }
    }

    /// Suggestion under the cursor, on the welcome view
    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&'static str> {
        match self.controller.view() {
            SearchView::Welcome => SUGGESTED_QUERIES.get(self.cursor).copied(),
            _ => None,
        }
    }
}

/// State of the detail screen (`/food/{id}`)
#[derive(Debug)]
pub struct DetailScreen {
    pub controller: DetailController,
}

/// The mounted screen
#[derive(Debug)]
pub enum Screen {
    Search(SearchScreen),
    Detail(DetailScreen),
}
