mod app;
mod cache;
mod gallery;
mod infra;
mod ui;

use app::controller::GalleryController;
use gallery::scan::scan_folder;
use infra::config::{AppConfig, CONFIG_FILE};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config = match AppConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load configuration: {error}");
            std::process::exit(1);
        }
    };

    match args.get(1).map(String::as_str) {
        None => launch(config, None),
        Some("list") => list(&config, args.get(2).cloned()),
        Some("--help") | Some("-h") => print_usage(),
        Some(folder) => launch(config, Some(folder.to_string())),
    }
}

fn launch(mut config: AppConfig, folder: Option<String>) {
    if let Some(folder) = folder {
        config.gallery_dir = folder;
    }

    let items = match scan_folder(&config.gallery_dir) {
        Ok(items) => items,
        Err(error) => {
            eprintln!("failed to scan gallery folder: {error}");
            std::process::exit(1);
        }
    };

    println!(
        "galerie initialized (folder: {}, images: {})",
        config.gallery_dir,
        items.len()
    );

    let controller = GalleryController::new(items);
    if let Err(error) = ui::app_shell::launch_window(config, controller) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn list(config: &AppConfig, folder: Option<String>) {
    let folder = folder.unwrap_or_else(|| config.gallery_dir.clone());
    match scan_folder(&folder) {
        Ok(items) => {
            if items.is_empty() {
                println!("no images in {folder}");
                return;
            }
            for item in items {
                println!(
                    "{}\t{}\t{}",
                    item.index,
                    item.tag.as_deref().unwrap_or("-"),
                    item.file_path
                );
            }
        }
        Err(error) => {
            eprintln!("list failed: {error}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  galerie [folder]        open the gallery window");
    println!("  galerie list [folder]   print index, tag and path per image");
}
