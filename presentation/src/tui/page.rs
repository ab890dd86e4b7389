//! Page routing for the TUI

/// Top-level pages, cycled with Tab / Shift-Tab or jumped to by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Query,
    Documents,
    History,
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Query, Page::Documents, Page::History, Page::Dashboard];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Documents => "Documents",
            Self::History => "History",
            Self::Dashboard => "Dashboard",
        }
    }

    pub fn next(&self) -> Page {
        match self {
            Self::Query => Self::Documents,
            Self::Documents => Self::History,
            Self::History => Self::Dashboard,
            Self::Dashboard => Self::Query,
        }
    }

    pub fn prev(&self) -> Page {
        match self {
            Self::Query => Self::Dashboard,
            Self::Documents => Self::Query,
            Self::History => Self::Documents,
            Self::Dashboard => Self::History,
        }
    }

    /// Tab index into [`Page::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_query() {
        assert_eq!(Page::default(), Page::Query);
    }

    #[test]
    fn test_next_cycles_through_all_pages() {
        let mut page = Page::Query;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(page);
            page = page.next();
        }
        assert_eq!(page, Page::Query);
        assert_eq!(seen, Page::ALL.to_vec());
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
        }
    }

    #[test]
    fn test_index() {
        assert_eq!(Page::Query.index(), 0);
        assert_eq!(Page::Dashboard.index(), 3);
    }
}
