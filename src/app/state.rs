/// The currently active filter. Exactly one selection is active at a time;
/// the filter bar derives its highlighted button from this value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterState {
    #[default]
    All,
    Tag(String),
}

/// `current_index` points into the navigable (filtered) set and is only
/// meaningful while `is_open`. Closing keeps it; the next open overwrites it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub current_index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub filter: FilterState,
    pub modal: ModalState,
}
