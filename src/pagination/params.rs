//! Host-side helpers: reading the `?page=` query parameter and slicing a
//! static list into pages.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum PageParamError {
    #[error("Page parameter is not a number: {value:?}")]
    #[diagnostic(
        code(githubsrm::pagination::not_a_number),
        help("Pages are numbered from 1, e.g. ?page=2")
    )]
    NotANumber { value: String },

    #[error("Page parameter must be at least 1")]
    #[diagnostic(code(githubsrm::pagination::zero))]
    Zero,
}

/// Parse a 1-based page number. A missing or blank parameter means page 1.
pub fn parse_page_param(raw: Option<&str>) -> Result<usize, PageParamError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(1),
        Some(value) => value,
    };

    match value.parse::<usize>() {
        Ok(0) => Err(PageParamError::Zero),
        Ok(page) => Ok(page),
        Err(_) => Err(PageParamError::NotANumber {
            value: value.to_string(),
        }),
    }
}

/// Number of pages needed for `total` items. Always at least 1 so an empty
/// list still renders as a single page.
pub fn last_page_for(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

/// Page to show for a requested page, kept within `1..=last_page`.
pub fn clamp_page(requested: usize, last_page: usize) -> usize {
    requested.clamp(1, last_page.max(1))
}

/// Items shown on the 1-based `page`. Empty past the end of the list.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    if offset >= items.len() {
        return &[];
    }
    let end = offset.saturating_add(page_size).min(items.len());
    &items[offset..end]
}
