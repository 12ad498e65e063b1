/// Snapshot of a paginated list, handed to the control on every render.
///
/// `has_previous_page` and `has_next_page` are supplied by the owner of the
/// list and are never recomputed from the page numbers: an owner may lock
/// navigation for reasons that have nothing to do with page arithmetic
/// (a pending load, for example).
///
/// # Preconditions
/// The owner keeps the flags consistent with the bounds. Nothing here clamps
/// the emitted pages, so `has_previous_page = true` on page 1 will request
/// page `0`, and `has_next_page = true` on `last_page` will request
/// `last_page + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub last_page: usize,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl PaginationState {
    pub fn new(
        current_page: usize,
        last_page: usize,
        has_previous_page: bool,
        has_next_page: bool,
    ) -> Self {
        Self {
            current_page,
            last_page,
            has_previous_page,
            has_next_page,
        }
    }

    /// Build a state whose flags follow the page bounds alone.
    pub fn from_bounds(current_page: usize, last_page: usize) -> Self {
        Self::new(
            current_page,
            last_page,
            current_page > 1,
            current_page < last_page,
        )
    }

    /// Same pages, every affordance disabled.
    pub fn with_navigation_locked(self) -> Self {
        Self {
            has_previous_page: false,
            has_next_page: false,
            ..self
        }
    }

    /// Text shown between the step controls.
    pub fn page_label(&self) -> String {
        self.current_page.to_string()
    }

    /// Page requested by `action`, or `None` when the affordance is disabled.
    ///
    /// Arithmetic saturates at the `usize` bounds; no other clamping happens.
    pub fn target(&self, action: PageAction) -> Option<usize> {
        if !action.is_enabled(self) {
            return None;
        }

        let page = match action {
            PageAction::First => 1,
            PageAction::Previous => self.current_page.saturating_sub(1),
            PageAction::Next => self.current_page.saturating_add(1),
            PageAction::Last => self.last_page,
        };

        Some(page)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::from_bounds(1, 1)
    }
}

/// The four navigation affordances, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageAction {
    First,
    Previous,
    Next,
    Last,
}

impl PageAction {
    pub const ALL: [PageAction; 4] = [
        PageAction::First,
        PageAction::Previous,
        PageAction::Next,
        PageAction::Last,
    ];

    pub fn is_enabled(&self, state: &PaginationState) -> bool {
        match self {
            PageAction::First | PageAction::Previous => state.has_previous_page,
            PageAction::Next | PageAction::Last => state.has_next_page,
        }
    }

    /// Accessible name for the button.
    pub fn label(&self) -> &'static str {
        match self {
            PageAction::First => "First page",
            PageAction::Previous => "Previous page",
            PageAction::Next => "Next page",
            PageAction::Last => "Last page",
        }
    }
}
