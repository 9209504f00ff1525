//! Pagination state for a grid.

/// Page navigation payload handed to the host's `on_page_change` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// The page the user navigated to (0-based).
    pub page_index: usize,
}

/// Pagination state: current page, page size, and element totals.
///
/// The pager never fetches anything. Navigation records the new index and
/// the grid notifies the host, which is expected to refetch and feed back a
/// new row set and totals. A page index beyond [`Pager::page_count`] is
/// passed through as-is; the external fetch simply returns an empty page.
#[derive(Debug, Clone)]
pub struct Pager {
    page_index: usize,
    page_size: usize,
    total_elements: usize,
    /// Page count reported by the server, overriding the derived count.
    server_page_count: Option<usize>,
}

impl Pager {
    /// Create a pager.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero - a grid with no rows per page is a
    /// configuration bug, not runtime input.
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        Self {
            page_index: 0,
            page_size,
            total_elements: 0,
            server_page_count: None,
        }
    }

    /// Current page (0-based).
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total element count across all pages.
    pub fn total_elements(&self) -> usize {
        self.total_elements
    }

    /// Number of pages.
    ///
    /// Uses the server-supplied count when one was set, otherwise
    /// `ceil(total_elements / page_size)`.
    pub fn page_count(&self) -> usize {
        self.server_page_count
            .unwrap_or_else(|| self.total_elements.div_ceil(self.page_size))
    }

    /// Update the total element count (from a fetch response).
    pub fn set_total_elements(&mut self, total: usize) {
        self.total_elements = total;
    }

    /// Set or clear the server-computed page count.
    pub fn set_server_page_count(&mut self, count: Option<usize>) {
        self.server_page_count = count;
    }

    /// Move to a page. Returns `true` if the index actually changed.
    ///
    /// The index is not clamped against [`Pager::page_count`].
    pub fn set_page_index(&mut self, index: usize) -> bool {
        if index == self.page_index {
            return false;
        }
        self.page_index = index;
        true
    }
}
