//! Page-slice arithmetic shared by all question listings.
//!
//! Listings fetch the full id-ordered result set (the total count is part of
//! every response) and slice it here.

/// Fixed page size for question listings.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-based page selector.
#[derive(Clone, Copy, Debug)]
pub struct Page {
    pub number: u32,
}

impl Page {
    pub fn new(number: u32) -> Self {
        Self { number }
    }

    /// 0-based start offset; page 0 is treated as page 1.
    fn start(self) -> usize {
        let number = if self.number == 0 { 1 } else { self.number };
        (number as usize - 1).saturating_mul(QUESTIONS_PER_PAGE)
    }

    /// The `[(page-1)*10, page*10)` slice of `items`. A page past the end
    /// yields an empty slice, not an error.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = self.start().min(items.len());
        let end = (start + QUESTIONS_PER_PAGE).min(items.len());
        &items[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, QUESTIONS_PER_PAGE};

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn first_page_is_first_ten() {
        let all = items(25);
        assert_eq!(Page::new(1).slice(&all), &all[0..10]);
    }

    #[test]
    fn middle_page_matches_slice_bounds() {
        let all = items(25);
        assert_eq!(Page::new(2).slice(&all), &all[10..20]);
    }

    #[test]
    fn last_page_is_partial() {
        let all = items(25);
        assert_eq!(Page::new(3).slice(&all), &all[20..25]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let all = items(25);
        assert!(Page::new(4).slice(&all).is_empty());
        assert!(Page::new(1000).slice(&all).is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        let all = items(25);
        assert_eq!(Page::new(0).slice(&all), Page::new(1).slice(&all));
    }

    #[test]
    fn every_page_is_at_most_page_size() {
        let all = items(95);
        for number in 1..=12 {
            assert!(Page::new(number).slice(&all).len() <= QUESTIONS_PER_PAGE);
        }
    }
}
