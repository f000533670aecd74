// src/store.rs
//
// The one persisted preference: light/dark theme, kept as a single word in
// `.store/theme`. Missing or unreadable files mean "no preference".

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{STORE_DIR, THEME_FILE};
use crate::config::state::Theme;

fn theme_path(dir: &Path) -> PathBuf {
    dir.join(THEME_FILE)
}

pub fn load_theme() -> Option<Theme> {
    load_theme_from(Path::new(STORE_DIR))
}

pub fn save_theme(theme: Theme) -> io::Result<PathBuf> {
    save_theme_in(Path::new(STORE_DIR), theme)
}

pub fn load_theme_from(dir: &Path) -> Option<Theme> {
    let txt = fs::read_to_string(theme_path(dir)).ok()?;
    match txt.parse() {
        Ok(t) => Some(t),
        Err(e) => {
            logw!("Store: ignoring theme file: {}", e);
            None
        }
    }
}

pub fn save_theme_in(dir: &Path, theme: Theme) -> io::Result<PathBuf> {
    // Ensure the store directory exists
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let p = theme_path(dir);
    fs::write(&p, theme.as_str())?;
    Ok(p)
}
