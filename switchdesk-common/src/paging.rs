//! Client-side pagination over the filtered view

use crate::Error;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::str::FromStr;

/// Rows per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    Rows(usize),
    All,
}

/// Choices offered by the rows-per-page selector
pub const PAGE_SIZE_CHOICES: [PageSize; 5] = [
    PageSize::Rows(10),
    PageSize::Rows(20),
    PageSize::Rows(50),
    PageSize::Rows(100),
    PageSize::All,
];

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(10)
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageSize::Rows(n) => write!(f, "{}", n),
            PageSize::All => write!(f, "All"),
        }
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        match s.parse::<usize>() {
            Ok(n) if PAGE_SIZE_CHOICES.contains(&PageSize::Rows(n)) => Ok(PageSize::Rows(n)),
            _ => Err(Error::InvalidPageSize(s.to_string())),
        }
    }
}

impl PageSize {
    /// Number of pages for `total` rows, `None` when every row is on one unpaged view
    pub fn page_count(self, total: usize) -> Option<usize> {
        match self {
            PageSize::Rows(n) => Some(total.div_ceil(n.max(1))),
            PageSize::All => None,
        }
    }

    /// Index range of 1-based `page` within `total` rows.
    ///
    /// Pages past the end yield an empty range at `total`. Page 0 is read as page 1.
    pub fn bounds(self, total: usize, page: usize) -> Range<usize> {
        match self {
            PageSize::Rows(n) => {
                let start = page.max(1).saturating_sub(1).saturating_mul(n).min(total);
                let end = start.saturating_add(n).min(total);
                start..end
            }
            PageSize::All => 0..total,
        }
    }
}

/// Slice out one page
pub fn paginate<T>(items: &[T], size: PageSize, page: usize) -> &[T] {
    &items[size.bounds(items.len(), page)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_five_rows_by_ten() {
        let rows: Vec<u32> = (1..=25).collect();
        let size = PageSize::Rows(10);

        assert_eq!(paginate(&rows, size, 1), &rows[0..10]);
        assert_eq!(paginate(&rows, size, 3), &[21, 22, 23, 24, 25]);
        assert!(paginate(&rows, size, 4).is_empty());
        assert_eq!(size.page_count(rows.len()), Some(3));
    }

    #[test]
    fn test_all_is_unpaged() {
        let rows: Vec<u32> = (1..=250).collect();
        assert_eq!(paginate(&rows, PageSize::All, 1).len(), 250);
        assert_eq!(paginate(&rows, PageSize::All, 7).len(), 250);
        assert_eq!(PageSize::All.page_count(rows.len()), None);
    }

    #[test]
    fn test_empty_view_has_zero_pages() {
        let rows: Vec<u32> = Vec::new();
        assert_eq!(PageSize::Rows(20).page_count(0), Some(0));
        assert!(paginate(&rows, PageSize::Rows(20), 1).is_empty());
    }

    #[test]
    fn test_page_zero_and_huge_pages() {
        let rows: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&rows, PageSize::Rows(10), 0), &rows[..]);
        assert!(paginate(&rows, PageSize::Rows(100), usize::MAX).is_empty());
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!("10".parse::<PageSize>().unwrap(), PageSize::Rows(10));
        assert_eq!(" 100 ".parse::<PageSize>().unwrap(), PageSize::Rows(100));
        assert_eq!("ALL".parse::<PageSize>().unwrap(), PageSize::All);
        assert_eq!(
            "15".parse::<PageSize>(),
            Err(Error::InvalidPageSize("15".to_string()))
        );
        assert!("ten".parse::<PageSize>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for size in PAGE_SIZE_CHOICES {
            assert_eq!(size.to_string().parse::<PageSize>().unwrap(), size);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn page_size() -> impl Strategy<Value = usize> {
            prop_oneof![Just(10usize), Just(20), Just(50), Just(100)]
        }

        proptest! {
            /// Property: no page holds more than the page size.
            #[test]
            fn page_never_exceeds_size(total in 0usize..500, n in page_size(), page in 0usize..60) {
                let rows: Vec<usize> = (0..total).collect();
                prop_assert!(paginate(&rows, PageSize::Rows(n), page).len() <= n);
            }

            /// Property: pages in order rebuild the view with no gaps or overlaps.
            #[test]
            fn pages_concatenate_to_view(total in 0usize..500, n in page_size()) {
                let rows: Vec<usize> = (0..total).collect();
                let size = PageSize::Rows(n);
                let pages = size.page_count(total).unwrap_or(0);

                let rebuilt: Vec<usize> = (1..=pages)
                    .flat_map(|p| paginate(&rows, size, p).iter().copied())
                    .collect();
                prop_assert_eq!(rebuilt, rows);
            }
        }
    }
}
