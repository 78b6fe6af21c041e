//! Current page of the paginated art listing.
//!
//! Pages are zero-based. No bounds are enforced here: negative or
//! out-of-range values are stored as given, and pagination controls decide
//! what is valid.

use std::sync::LazyLock;

use crate::state::store::Writable;

/// Store holding the current page index.
pub type PageState = Writable<i64>;

static PAGE: LazyLock<PageState> = LazyLock::new(new_page);

fn new_page() -> PageState {
    Writable::named("page", 0)
}

/// Process-wide page index. Starts at 0.
#[must_use]
pub fn page() -> &'static PageState {
    &PAGE
}

/// Advances `state` by one page.
pub fn next_page(state: &PageState) {
    state.update(|current| current.saturating_add(1));
}

/// Moves `state` back by one page, possibly below zero.
pub fn previous_page(state: &PageState) {
    state.update(|current| current.saturating_sub(1));
}

/// Returns `state` to the first page.
pub fn reset_page(state: &PageState) {
    state.set(0);
}
