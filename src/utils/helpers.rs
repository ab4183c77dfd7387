//! Helpers for rex.
//!
//! Path utilities shared by the configuration and the binary:
//! - Locating the home directory
//! - Displaying home directories as "~" in header paths
//! - Expanding "~" in user supplied paths
//! - Resolving the directory to list from the command line

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Home directory of the current user, if known.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Util function to shorten home directory to ~.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    shorten_home_path_in(path.as_ref(), get_home().as_deref())
}

fn shorten_home_path_in(path: &Path, home: Option<&Path>) -> String {
    if let Some(home_dir) = home
        && let Ok(stripped) = path.strip_prefix(home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

/// Expands a leading `~` to the home directory.
pub fn expand_home_path(input: &str) -> PathBuf {
    expand_home_path_in(input, get_home().as_deref())
}

fn expand_home_path_in(input: &str, home: Option<&Path>) -> PathBuf {
    match (input, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (s, Some(home)) if s.starts_with("~/") || s.starts_with("~\\") => home.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    }
}

/// Resolves a command line path argument to an absolute directory path.
///
/// Relative paths are taken from the current directory; `~` is expanded.
pub fn resolve_initial_dir(arg: &str) -> PathBuf {
    let path = expand_home_path(arg.trim());
    let absolute = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    };
    absolute.canonicalize().unwrap_or(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_shortened_to_tilde() {
        let home = Path::new("/home/ada");
        assert_eq!(shorten_home_path_in(Path::new("/home/ada"), Some(home)), "~");
        assert_eq!(
            shorten_home_path_in(Path::new("/home/ada/src/rex"), Some(home)),
            format!("~{}src/rex", MAIN_SEPARATOR)
        );
        assert_eq!(
            shorten_home_path_in(Path::new("/etc/hosts"), Some(home)),
            "/etc/hosts"
        );
        assert_eq!(shorten_home_path_in(Path::new("/home/ada"), None), "/home/ada");
    }

    #[test]
    fn tilde_is_expanded() {
        let home = Path::new("/home/ada");
        assert_eq!(expand_home_path_in("~", Some(home)), PathBuf::from("/home/ada"));
        assert_eq!(
            expand_home_path_in("~/music", Some(home)),
            PathBuf::from("/home/ada/music")
        );
        assert_eq!(expand_home_path_in("~ada", Some(home)), PathBuf::from("~ada"));
        assert_eq!(expand_home_path_in("~/music", None), PathBuf::from("~/music"));
    }

    #[test]
    fn relative_dirs_become_absolute() {
        assert!(resolve_initial_dir(".").is_absolute());
    }
}
