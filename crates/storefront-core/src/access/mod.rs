// ── Access layer ──
//
// Envelope-producing operations over the raw clients. Each operation
// normalizes upstream payloads into the canonical model and wraps the
// result in an [`crate::ApiResponse`] with a human-readable message.
// Transport failures surface as [`crate::CoreError`], never as raw
// reqwest errors.

mod products;
mod users;

pub use products::{ProductCatalog, ProductFilters};
pub use users::{UserDirectory, UserFilters};

use crate::envelope::PageMeta;

/// Slice a filtered collection into one page and describe it.
///
/// Pages are 1-indexed; `total_pages` is never zero even for an empty
/// collection, and an out-of-range page yields an empty slice rather
/// than an error.
pub(crate) fn paginate_vec<T>(items: Vec<T>, page: usize, limit: usize) -> (Vec<T>, PageMeta) {
    let limit = limit.max(1);
    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(limit).max(1);
    let start = (page - 1).saturating_mul(limit);
    let paged: Vec<T> = items.into_iter().skip(start).take(limit).collect();
    (
        paged,
        PageMeta {
            page,
            limit,
            total,
            total_pages,
        },
    )
}
