//! Offset/limit page math for the standard search mode.

/// Previous/Next controls for a result set spanning more than one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    /// 1-based page currently shown.
    pub current_page: usize,
    pub total_pages: usize,
}

impl PageControls {
    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn prev_page(&self) -> usize {
        self.current_page.saturating_sub(1).max(1)
    }

    pub fn next_page(&self) -> usize {
        (self.current_page + 1).min(self.total_pages)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// ceil(total / page_size)
pub fn total_pages(total: u64, page_size: usize) -> usize {
    let page_size = page_size.max(1) as u64;
    total.div_ceil(page_size) as usize
}

/// floor(offset / page_size) + 1
pub fn current_page(offset: usize, page_size: usize) -> usize {
    offset / page_size.max(1) + 1
}

/// Offset of the first record on `page` (pages below 1 read as page 1).
/// Saturates instead of overflowing for out-of-range pages.
pub fn offset_for_page(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Controls to render, or `None` when everything fits on one page.
pub fn page_controls(total: u64, offset: usize, page_size: usize) -> Option<PageControls> {
    let total_pages = total_pages(total, page_size);
    if total_pages <= 1 {
        return None;
    }
    Some(PageControls {
        current_page: current_page(offset, page_size),
        total_pages,
    })
}

/// Status line such as "Showing 26-50 of 1,234 results". A window with no
/// records in range reads "0-0".
pub fn results_info(offset: usize, count: u64, total: u64) -> String {
    let offset = offset as u64;
    let end = offset.saturating_add(count).min(total);
    let (start, end) = if offset < end { (offset + 1, end) } else { (0, 0) };
    format!(
        "Showing {}-{} of {} results",
        start,
        end,
        group_thousands(total)
    )
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_of_three() {
        assert_eq!(total_pages(57, 25), 3);
        assert_eq!(current_page(50, 25), 3);
        let controls = page_controls(57, 50, 25).unwrap();
        assert_eq!(controls.label(), "Page 3 of 3");
        assert!(controls.prev_enabled());
        assert!(!controls.next_enabled());
        assert_eq!(controls.prev_page(), 2);
    }

    #[test]
    fn test_first_page_disables_previous() {
        let controls = page_controls(57, 0, 25).unwrap();
        assert_eq!(controls.current_page, 1);
        assert!(!controls.prev_enabled());
        assert!(controls.next_enabled());
        assert_eq!(controls.next_page(), 2);
    }

    #[test]
    fn test_single_page_hides_controls() {
        assert_eq!(page_controls(25, 0, 25), None);
        assert_eq!(page_controls(0, 0, 25), None);
        assert_eq!(page_controls(26, 0, 25).map(|c| c.total_pages), Some(2));
    }

    #[test]
    fn test_offset_for_page() {
        assert_eq!(offset_for_page(1, 25), 0);
        assert_eq!(offset_for_page(3, 25), 50);
        assert_eq!(offset_for_page(0, 25), 0);
        assert_eq!(offset_for_page(usize::MAX, 25), usize::MAX);
    }

    #[test]
    fn test_results_info() {
        assert_eq!(results_info(0, 25, 57), "Showing 1-25 of 57 results");
        assert_eq!(results_info(50, 7, 57), "Showing 51-57 of 57 results");
        assert_eq!(results_info(0, 25, 145460), "Showing 1-25 of 145,460 results");
        assert_eq!(results_info(0, 0, 0), "Showing 0-0 of 0 results");
    }

    #[test]
    fn test_results_info_past_the_end() {
        assert_eq!(results_info(200, 0, 57), "Showing 0-0 of 57 results");
        assert_eq!(results_info(57, 0, 57), "Showing 0-0 of 57 results");
        assert_eq!(results_info(usize::MAX, 0, 57), "Showing 0-0 of 57 results");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
