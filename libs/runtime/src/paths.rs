use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// Resolve the application home directory into an absolute path.
///
/// - `None` or an empty string resolves to `<user home>/<default_subdir>`.
/// - A leading `~` is expanded against the user home directory.
/// - Relative paths are joined with the current working directory.
///
/// When `create` is set the directory is created if missing.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let resolved = match configured.filter(|s| !s.trim().is_empty()) {
        None => user_home()?.join(default_subdir),
        Some(raw) => {
            let raw = raw.trim().to_string();
            if let Some(rest) = raw.strip_prefix("~") {
                let rest = rest.trim_start_matches(['/', '\\']);
                user_home()?.join(rest)
            } else {
                let p = PathBuf::from(&raw);
                if p.is_absolute() {
                    p
                } else {
                    std::env::current_dir()
                        .context("cannot resolve current directory")?
                        .join(p)
                }
            }
        }
    };

    if create {
        std::fs::create_dir_all(&resolved)
            .with_context(|| format!("cannot create home dir {}", resolved.display()))?;
    }
    Ok(resolved)
}

fn user_home() -> Result<PathBuf> {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";

    std::env::var_os(var)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("{} is not set, cannot resolve home directory", var))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_resolves_under_user_home() {
        let tmp = tempdir().unwrap();
        #[cfg(not(windows))]
        std::env::set_var("HOME", tmp.path());
        #[cfg(windows)]
        std::env::set_var("USERPROFILE", tmp.path());

        let dir = resolve_home_dir(None, ".amistad_test", true).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with(".amistad_test"));
        assert!(dir.exists());
    }

    #[test]
    fn tilde_is_expanded() {
        let tmp = tempdir().unwrap();
        #[cfg(not(windows))]
        std::env::set_var("HOME", tmp.path());
        #[cfg(windows)]
        std::env::set_var("USERPROFILE", tmp.path());

        let dir = resolve_home_dir(Some("~/nested/home".into()), ".amistad", false).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("nested/home"));
    }

    #[test]
    fn absolute_path_is_kept() {
        let tmp = tempdir().unwrap();
        let want = tmp.path().join("explicit");
        let dir = resolve_home_dir(
            Some(want.to_string_lossy().to_string()),
            ".amistad",
            true,
        )
        .unwrap();
        assert_eq!(dir, want);
        assert!(dir.exists());
    }
}
