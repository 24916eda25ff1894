// web_app/model/pager.rs - Pagination arithmetic for the product table
//
// Pages are 1-based, matching the backend's `page` parameter.

/// Number of pages needed for `total` rows
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Current position within a paged result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: u32,
    total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            page: page.max(1),
            total_pages,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Controls are only worth showing with more than one page
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(&self) -> u32 {
        if self.can_go_next() {
            self.page + 1
        } else {
            self.page
        }
    }

    /// 1-based running number of the row at `index` on this page
    pub fn row_number(&self, index: usize, page_size: u32) -> usize {
        (self.page.saturating_sub(1) as usize) * page_size as usize + index + 1
    }

    /// Last existing page when the current one ran past the end
    pub fn clamped(&self) -> u32 {
        self.page.min(self.total_pages).max(1)
    }
}
