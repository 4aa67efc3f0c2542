use std::path::Path;

/// One displayable unit of the gallery. `index` is the item's position in
/// the original scan order and never changes after startup; filtering only
/// hides items, it never reorders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub index: usize,
    pub file_path: String,
    pub tag: Option<String>,
}

pub fn is_supported_image(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "png")
}

/// Distinct tags in first-seen order over a single left-to-right pass.
pub fn distinct_tags(items: &[GalleryItem]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for item in items {
        if let Some(tag) = &item.tag {
            if !tags.iter().any(|known| known == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}
