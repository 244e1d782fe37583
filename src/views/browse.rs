use crate::library::Library;

/// Rows per page of the full library listing.
pub const PAGE_SIZE: usize = 50;

/// Number of pages needed for `filtered_len` rows (0 when nothing matched).
pub fn total_pages(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// One rendered page of the filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Library positions of the rows on this page.
    pub rows: Vec<usize>,
    /// 1-based page number.
    pub number: usize,
    pub total_pages: usize,
    pub filtered_len: usize,
}

impl Page {
    /// Absolute, 1-based row number across pages.
    pub fn row_number(&self, row: usize) -> usize {
        (self.number - 1) * PAGE_SIZE + row + 1
    }

    /// Page count as displayed: an empty result still reads "Page 1 of 1".
    pub fn display_total(&self) -> usize {
        self.total_pages.max(1)
    }
}

/// Search and pagination state of the full library listing.
#[derive(Debug, Clone)]
pub struct LibraryView {
    search_term: String,
    current_page: usize,
    /// Row under the cursor within the current page.
    pub cursor: usize,
    /// Whether keystrokes currently go to the search box.
    pub searching: bool,
}

impl Default for LibraryView {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            cursor: 0,
            searching: false,
        }
    }
}

impl LibraryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Replace the search term. Any change sends the view back to page 1,
    /// the old page number may not exist in the new result set.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.reset_position();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
        self.reset_position();
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
        self.reset_position();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.searching = false;
        self.reset_position();
    }

    fn reset_position(&mut self) {
        self.current_page = 1;
        self.cursor = 0;
    }

    /// Library positions matching the search term, in library order.
    pub fn filtered(&self, library: &Library) -> Vec<usize> {
        let query = self.search_term.to_lowercase();
        (0..library.len())
            .filter(|&i| library.matches(i, &query))
            .collect()
    }

    /// The current page of the filtered listing.
    pub fn page(&self, library: &Library) -> Page {
        let filtered = self.filtered(library);
        let start = ((self.current_page - 1) * PAGE_SIZE).min(filtered.len());
        let end = (self.current_page * PAGE_SIZE).min(filtered.len());

        Page {
            rows: filtered[start..end].to_vec(),
            number: self.current_page,
            total_pages: total_pages(filtered.len()),
            filtered_len: filtered.len(),
        }
    }

    fn last_page(&self, library: &Library) -> usize {
        total_pages(self.filtered(library).len()).max(1)
    }

    /// Whether "Previous" is enabled.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether "Next" is enabled.
    pub fn has_next(&self, library: &Library) -> bool {
        self.current_page < self.last_page(library)
    }

    /// Go back one page; a no-op on page 1. Returns whether the page moved.
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.current_page -= 1;
        self.cursor = 0;
        true
    }

    /// Advance one page; a no-op on the last page. Returns whether the page
    /// moved.
    pub fn next_page(&mut self, library: &Library) -> bool {
        if !self.has_next(library) {
            return false;
        }
        self.current_page += 1;
        self.cursor = 0;
        true
    }

    pub fn cursor_down(&mut self, library: &Library) {
        let rows = self.page(library).rows.len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_bottom(&mut self, library: &Library) {
        self.cursor = self.page(library).rows.len().saturating_sub(1);
    }

    /// Library position of the row under the cursor, if the page has rows.
    pub fn selected(&self, library: &Library) -> Option<usize> {
        self.page(library).rows.get(self.cursor).copied()
    }
}
