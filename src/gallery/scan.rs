use std::path::Path;

use walkdir::WalkDir;

use crate::gallery::models::{is_supported_image, GalleryItem};

/// Walks `folder` and builds the immutable item list. The tag of an item is
/// the name of the first directory below the gallery root on its path;
/// files directly at the root carry no tag. Entries are visited in sorted
/// order so the scan (and therefore item identity) is deterministic.
pub fn scan_folder(folder: &str) -> Result<Vec<GalleryItem>, String> {
    let folder_path = Path::new(folder);
    if !folder_path.is_dir() {
        return Err(format!(
            "folder does not exist or is not a directory: {folder}"
        ));
    }

    let mut items = Vec::new();
    for entry in WalkDir::new(folder_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let file_path = entry.path();
        if !is_supported_image(file_path) {
            continue;
        }

        let tag = file_path
            .strip_prefix(folder_path)
            .ok()
            .and_then(tag_from_relative_path);

        items.push(GalleryItem {
            index: items.len(),
            file_path: file_path.to_string_lossy().to_string(),
            tag,
        });
    }

    Ok(items)
}

fn tag_from_relative_path(relative: &Path) -> Option<String> {
    let mut components = relative.components();
    let first = components.next()?;
    // A lone component is the file name itself, so the item is untagged.
    components.next()?;
    Some(first.as_os_str().to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, relative: &str) {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("fixture directory should be created");
        }
        fs::write(&path, b"not a real image").expect("fixture file should be written");
    }

    #[test]
    fn scan_rejects_missing_folder() {
        let error = scan_folder("definitely/not/here").expect_err("scan should fail");
        assert!(error.contains("not a directory"));
    }

    #[test]
    fn scan_tags_items_by_subdirectory() {
        let dir = TempDir::new().expect("temp dir should be created");
        touch(&dir, "cover.jpg");
        touch(&dir, "forest/a.jpg");
        touch(&dir, "forest/b.png");
        touch(&dir, "sea/deep/c.jpg");
        touch(&dir, "notes.txt");

        let items = scan_folder(&dir.path().to_string_lossy()).expect("scan should succeed");
        let tags: Vec<Option<&str>> = items.iter().map(|item| item.tag.as_deref()).collect();

        assert_eq!(items.len(), 4);
        assert_eq!(tags, vec![None, Some("forest"), Some("forest"), Some("sea")]);
    }

    #[test]
    fn scan_assigns_indices_in_scan_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        touch(&dir, "b.jpg");
        touch(&dir, "a.jpg");

        let items = scan_folder(&dir.path().to_string_lossy()).expect("scan should succeed");
        let indices: Vec<usize> = items.iter().map(|item| item.index).collect();

        assert_eq!(indices, vec![0, 1]);
        assert!(items[0].file_path.ends_with("a.jpg"));
        assert!(items[1].file_path.ends_with("b.jpg"));
    }

    #[test]
    fn scan_of_empty_folder_yields_no_items() {
        let dir = TempDir::new().expect("temp dir should be created");
        let items = scan_folder(&dir.path().to_string_lossy()).expect("scan should succeed");
        assert!(items.is_empty());
    }
}
