//! Pagination
//!
//! Page request parameters and the metadata derived from a total count.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_SIZE_PAGE: u32 = 10;
pub const MAX_SIZE_PAGE: u32 = 1000;

/// Bounds applied when parsing client-supplied pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageLimits {
    pub default_size_page: u32,
    pub max_size_page: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size_page: DEFAULT_SIZE_PAGE,
            max_size_page: MAX_SIZE_PAGE,
        }
    }
}

/// Requested page; both values are always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    page: u32,
    size_page: u32,
}

impl PaginationParams {
    #[must_use]
    pub fn new(page: u32, size_page: u32) -> Self {
        Self {
            page: page.max(1),
            size_page: size_page.max(1),
        }
    }

    /// Parse raw query values. Absent, unparsable or non-positive values
    /// fall back to the defaults; oversized pages are clamped.
    #[must_use]
    pub fn parse(page: Option<&str>, size_page: Option<&str>, limits: PageLimits) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let size_page = parse_positive(size_page)
            .unwrap_or(limits.default_size_page)
            .min(limits.max_size_page.max(1));
        Self::new(page, size_page)
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn size_page(&self) -> u32 {
        self.size_page
    }

    /// Number of rows to skip
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.size_page)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_SIZE_PAGE)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value >= 1)
}

/// Pagination metadata returned with every listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResults {
    pub total: i64,
    pub current_page: u32,
    pub last_page: i64,
    pub from: i64,
    pub to: i64,
}

impl PaginationResults {
    #[must_use]
    pub fn new(params: &PaginationParams, total: i64) -> Self {
        let total = total.max(0);
        let page = i64::from(params.page);
        let size = i64::from(params.size_page);

        let last_page = total / size + i64::from(total % size != 0);
        let (from, to) = if total > 0 {
            ((page - 1) * size + 1, (page * size).min(total))
        } else {
            (0, 0)
        };

        Self {
            total,
            current_page: params.page,
            last_page,
            from,
            to,
        }
    }
}
