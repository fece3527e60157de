// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Page / page-size resolution.
//!
//! Filter records carry pagination as raw values (`page`, `pageSize`
//! annotations). They are kept as text in a write-once [`PageState`] and
//! resolved into a [`Window`] when the tree is replayed.
//!
//! # Rules
//!
//! | Input | Result |
//! |-------|--------|
//! | `pageSize = -1` | [`Window::Unbounded`]: offset 0, no limit |
//! | `page <= 0` | page 1 |
//! | `pageSize <= 0` | [`DEFAULT_PAGE_SIZE`] |
//! | non-numeric | treated as 0 |
//!
//! # Example
//!
//! ```rust
//! use search_core::pagination::{Window, resolve};
//!
//! assert_eq!(resolve("2", "10"), Window::Page { offset: 10, limit: 10 });
//! assert_eq!(resolve("3", "-1"), Window::Unbounded);
//! ```

/// Page size used when the requested size is not positive.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Page-size sentinel disabling pagination.
pub const UNBOUNDED_PAGE_SIZE: i64 = -1;

/// Resolved offset / limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Fetch everything.
    Unbounded,
    /// A single page.
    Page {
        /// Rows to skip.
        offset: u64,
        /// Rows to return.
        limit:  u64
    }
}

impl Window {
    /// Rows to skip.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        match self {
            Self::Unbounded => 0,
            Self::Page {
                offset, ..
            } => *offset
        }
    }

    /// Rows to return, `None` when unbounded.
    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        match self {
            Self::Unbounded => None,
            Self::Page {
                limit, ..
            } => Some(*limit)
        }
    }
}

/// Resolve raw page and page-size text.
#[must_use]
pub fn resolve(page: &str, page_size: &str) -> Window {
    let page_size = coerce(page_size);
    if page_size == UNBOUNDED_PAGE_SIZE {
        return Window::Unbounded;
    }

    let page = coerce(page).max(1);
    let page_size = if page_size <= 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let offset = (page - 1).saturating_mul(page_size).max(0);

    Window::Page {
        offset: offset.unsigned_abs(),
        limit:  page_size.unsigned_abs()
    }
}

fn coerce(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            tracing::debug!(raw, "non-numeric pagination input coerced to 0");
            0
        }
    }
}

/// Write-once pagination input collected during a walk.
///
/// The first non-empty value wins; later writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    page:      Option<String>,
    page_size: Option<String>
}

impl PageState {
    /// Record the page unless already set.
    ///
    /// Returns `true` if the value was taken.
    pub fn set_page(&mut self, value: &str) -> bool {
        set_once(&mut self.page, value)
    }

    /// Record the page size unless already set.
    ///
    /// Returns `true` if the value was taken.
    pub fn set_page_size(&mut self, value: &str) -> bool {
        set_once(&mut self.page_size, value)
    }

    /// Raw page text.
    #[must_use]
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    /// Raw page-size text.
    #[must_use]
    pub fn page_size(&self) -> Option<&str> {
        self.page_size.as_deref()
    }

    /// Resolved window, present only when both inputs were given.
    #[must_use]
    pub fn window(&self) -> Option<Window> {
        match (&self.page, &self.page_size) {
            (Some(page), Some(size)) => Some(resolve(page, size)),
            _ => None
        }
    }
}

fn set_once(slot: &mut Option<String>, value: &str) -> bool {
    if slot.is_some() || value.is_empty() {
        return false;
    }
    *slot = Some(value.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page() {
        assert_eq!(
            resolve("2", "10"),
            Window::Page {
                offset: 10,
                limit:  10
            }
        );
    }

    #[test]
    fn non_positive_page_is_first_page() {
        assert_eq!(resolve("0", "10").offset(), 0);
        assert_eq!(resolve("-4", "10").offset(), 0);
        assert_eq!(resolve("-4", "10").limit(), Some(10));
    }

    #[test]
    fn non_positive_size_uses_default() {
        assert_eq!(resolve("3", "0"), Window::Page {
            offset: 20,
            limit:  10
        });
        assert_eq!(resolve("1", "-5").limit(), Some(10));
    }

    #[test]
    fn sentinel_disables_limit_regardless_of_page() {
        assert_eq!(resolve("7", "-1"), Window::Unbounded);
        assert_eq!(Window::Unbounded.offset(), 0);
        assert_eq!(Window::Unbounded.limit(), None);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        assert_eq!(resolve("two", "many"), Window::Page {
            offset: 0,
            limit:  10
        });
        assert_eq!(resolve(" 2 ", " 5 ").offset(), 5);
    }

    #[test]
    fn page_state_is_write_once() {
        let mut state = PageState::default();
        assert!(!state.set_page(""));
        assert!(state.set_page("2"));
        assert!(!state.set_page("9"));
        assert_eq!(state.page(), Some("2"));
        assert_eq!(state.window(), None);

        assert!(state.set_page_size("10"));
        assert!(!state.set_page_size("50"));
        assert_eq!(state.window(), Some(resolve("2", "10")));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let window = resolve(&i64::MAX.to_string(), "100");
        assert_eq!(window.limit(), Some(100));
        assert_eq!(window.offset(), i64::MAX.unsigned_abs());
    }
}
