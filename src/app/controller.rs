use crate::app::events::AppEvent;
use crate::app::state::{AppState, FilterState, ModalState};
use crate::gallery::models::{distinct_tags, GalleryItem};

/// Sentinel tag carried by the leading filter button.
pub const ALL_TAG: &str = "all";

/// Owns the immutable item list and all mutable widget state. The UI shell
/// translates clicks and key presses into [`AppEvent`]s; everything the
/// events mean happens here, so the semantics are testable without a window.
///
/// Modal navigation steps through the currently visible set, so changing the
/// filter re-scopes prev/next without closing the viewer.
pub struct GalleryController {
    items: Vec<GalleryItem>,
    tags: Vec<String>,
    state: AppState,
}

impl GalleryController {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        let tags = distinct_tags(&items);
        Self {
            items,
            tags,
            state: AppState::default(),
        }
    }

    /// Distinct tags in first-seen scan order. Empty means no filter bar.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn modal(&self) -> ModalState {
        self.state.modal
    }

    pub fn is_filter_active(&self, tag: &str) -> bool {
        match &self.state.filter {
            FilterState::All => tag == ALL_TAG,
            FilterState::Tag(active) => active == tag,
        }
    }

    /// The visible set, recomputed on demand; original order is preserved.
    /// A filter naming an unknown tag simply yields an empty set.
    pub fn visible_items(&self) -> Vec<&GalleryItem> {
        self.items
            .iter()
            .filter(|item| self.is_visible(item))
            .collect()
    }

    fn is_visible(&self, item: &GalleryItem) -> bool {
        match &self.state.filter {
            FilterState::All => true,
            FilterState::Tag(tag) => item.tag.as_deref() == Some(tag.as_str()),
        }
    }

    /// The item the open modal shows, or `None` when the navigable set is
    /// empty. The stored index is mapped into range here so a filter change
    /// while the modal is open cannot leave it pointing past the end.
    pub fn current_item(&self) -> Option<&GalleryItem> {
        let visible = self.visible_items();
        if visible.is_empty() {
            return None;
        }
        Some(visible[self.state.modal.current_index % visible.len()])
    }

    /// One-based position of the shown item within the navigable set, for
    /// display as "i / n".
    pub fn modal_position(&self) -> Option<(usize, usize)> {
        let total = self.visible_items().len();
        if !self.state.modal.is_open || total == 0 {
            return None;
        }
        Some((self.state.modal.current_index % total + 1, total))
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::SelectTag(tag) => self.select_tag(tag),
            AppEvent::OpenItem(item_index) => self.open_item(item_index),
            AppEvent::NextImage => self.step(1),
            AppEvent::PrevImage => self.step(-1),
            AppEvent::CloseModal => self.state.modal.is_open = false,
        }
    }

    fn select_tag(&mut self, tag: String) {
        self.state.filter = if tag == ALL_TAG {
            FilterState::All
        } else {
            FilterState::Tag(tag)
        };
    }

    /// Opens the modal at a position in the navigable set. Any integer maps
    /// into range via `rem_euclid`, which also handles underflow from prev();
    /// an empty navigable set makes this a no-op instead of a wrap-by-zero.
    fn open_at(&mut self, position: isize) {
        let total = self.visible_items().len();
        if total == 0 {
            return;
        }
        self.state.modal.current_index = position.rem_euclid(total as isize) as usize;
        self.state.modal.is_open = true;
    }

    fn open_item(&mut self, item_index: usize) {
        let position = self
            .visible_items()
            .iter()
            .position(|item| item.index == item_index);
        // Hidden items are not rendered, so a click on one cannot normally
        // happen; treat it as a no-op rather than wrapping somewhere odd.
        if let Some(position) = position {
            self.open_at(position as isize);
        }
    }

    fn step(&mut self, delta: isize) {
        if !self.state.modal.is_open {
            return;
        }
        self.open_at(self.state.modal.current_index as isize + delta);
    }
}
