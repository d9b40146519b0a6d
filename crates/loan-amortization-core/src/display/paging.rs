use serde::{Deserialize, Serialize};

use crate::amortization::PaymentDetails;

/// One year of payments per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Page numbers shown in the pager at once.
const MAX_VISIBLE_PAGES: usize = 5;

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePageRequest {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Keep only months whose number contains this text ("12" matches 12, 112, 120, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_filter: Option<String>,
}

impl Default for SchedulePageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            month_filter: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePage {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Rows remaining after the month filter
    pub total_rows: usize,
    pub rows: Vec<PaymentDetails>,
    /// Pager window centred on `page`
    pub visible_pages: Vec<usize>,
}

/// Slice a schedule into a table page after applying the month search.
///
/// The requested page is clamped into `1..=total_pages`; an empty result has
/// zero pages and no rows.
pub fn schedule_page(schedule: &[PaymentDetails], request: &SchedulePageRequest) -> SchedulePage {
    let page_size = request.page_size.max(1);
    let needle = request
        .month_filter
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let filtered: Vec<&PaymentDetails> = schedule
        .iter()
        .filter(|p| needle.map_or(true, |n| p.month.to_string().contains(n)))
        .collect();

    let total_rows = filtered.len();
    let total_pages = total_rows.div_ceil(page_size);
    let page = request.page.clamp(1, total_pages.max(1));

    let rows = filtered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    SchedulePage {
        page,
        page_size,
        total_pages,
        total_rows,
        rows,
        visible_pages: visible_page_range(page, total_pages),
    }
}

fn visible_page_range(page: usize, total_pages: usize) -> Vec<usize> {
    let start = page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = total_pages.min(start + MAX_VISIBLE_PAGES - 1);
    (start..=end).collect()
}
