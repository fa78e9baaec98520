/// Fixed-size pagination over already-rendered rows
pub struct Page<T> {
    items: Vec<T>,
    per_page: usize,
    pub current_page: usize,
}

impl<T> Page<T> {
    /// Create a pagination starting at the first page
    pub fn new(items: Vec<T>, per_page: usize) -> Self {
        Page {
            items,
            per_page: per_page.max(1),
            current_page: 0,
        }
    }

    /// Jump to a 1-based page number. Returns false if it does not exist.
    pub fn go_to(&mut self, page_number: usize) -> bool {
        if page_number == 0 || page_number > self.total_pages() {
            return false;
        }
        self.current_page = page_number - 1;
        true
    }

    /// Items on the current page
    pub fn current(&self) -> &[T] {
        let start = self.current_page * self.per_page;
        let end = (start + self.per_page).min(self.items.len());
        if start >= end {
            return &[];
        }
        &self.items[start..end]
    }

    /// Get total number of pages (an empty list still has one page)
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Footer line, e.g. `Page 2/3 (25 total)`
    pub fn footer(&self) -> String {
        format!(
            "Page {}/{} ({} total)",
            self.current_page + 1,
            self.total_pages(),
            self.total_items()
        )
    }
}
