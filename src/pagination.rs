//! Page window arithmetic for paginated search results
//!
//! Pages are 1-indexed. A window only exists when the results span more
//! than one page; a single page (or no results) hides pagination entirely.

/// Position of the current page within the full result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub page_size: u32,
}

impl PageWindow {
    /// Build the window for a page, or `None` if pagination should be hidden
    #[must_use]
    pub fn new(current_page: u32, total: u64, page_size: u32) -> Option<Self> {
        let total_pages = total_pages(total, page_size);
        if total_pages <= 1 {
            return None;
        }

        Some(Self {
            current_page: current_page.max(1),
            total_pages,
            total,
            page_size,
        })
    }

    /// 1-based index of the first result on this page
    #[must_use]
    pub fn first_result(&self) -> u64 {
        u64::from(self.current_page - 1) * u64::from(self.page_size) + 1
    }

    /// 1-based index of the last result on this page
    #[must_use]
    pub fn last_result(&self) -> u64 {
        (u64::from(self.current_page) * u64::from(self.page_size)).min(self.total)
    }

    /// Previous page, if any
    #[must_use]
    pub const fn previous(&self) -> Option<u32> {
        if self.current_page > 1 {
            Some(self.current_page - 1)
        } else {
            None
        }
    }

    /// Next page, if any
    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        if self.current_page < self.total_pages {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    /// "Showing a-b of n results"
    #[must_use]
    pub fn range_label(&self) -> String {
        format!(
            "Showing {}-{} of {} results",
            self.first_result(),
            self.last_result(),
            self.total
        )
    }

    /// "Page x of y"
    #[must_use]
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// Number of pages needed to show `total` results
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX)
}

/// "1 result found" / "N results found"
#[must_use]
pub fn result_count_label(total: u64) -> String {
    let noun = if total == 1 { "result" } else { "results" };
    format!("{total} {noun} found")
}
