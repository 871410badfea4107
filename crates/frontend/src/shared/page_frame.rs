//! PageFrame: standard root wrapper for every routed module page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{module}--{kind}"`, e.g. `"driver--list"`
//!   - `data-page-category`: `list`, `detail` or `form`
//!
//! Usage:
//! ```ignore
//! use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
//!
//! #[component]
//! pub fn MyList() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="driver--list".to_string() category=PAGE_CAT_LIST>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use contracts::system::access::RouteKind;
use leptos::prelude::*;

/// List of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Add / edit form.
pub const PAGE_CAT_FORM: &str = "form";

/// Page category for a route kind.
pub fn category_for(kind: RouteKind) -> &'static str {
    match kind {
        RouteKind::List => PAGE_CAT_LIST,
        RouteKind::Details => PAGE_CAT_DETAIL,
        RouteKind::Add | RouteKind::Edit => PAGE_CAT_FORM,
    }
}

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `list`   → `page`
/// - `detail` → `page page--detail`
/// - `form`   → `page page--form`
#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{kind}`, e.g. `"driver--list"`.
    page_id: String,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_for_route_kind() {
        assert_eq!(category_for(RouteKind::List), PAGE_CAT_LIST);
        assert_eq!(category_for(RouteKind::Details), PAGE_CAT_DETAIL);
        assert_eq!(category_for(RouteKind::Add), PAGE_CAT_FORM);
        assert_eq!(category_for(RouteKind::Edit), PAGE_CAT_FORM);
    }
}
