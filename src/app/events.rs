#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A filter button was clicked; "all" is the sentinel for no filter.
    SelectTag(String),
    /// A thumbnail was clicked; carries the item's original scan index.
    OpenItem(usize),
    NextImage,
    PrevImage,
    CloseModal,
}
