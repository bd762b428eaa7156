use std::borrow::Cow;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub const HISTORY_FILE: &str = "history.jsonl";
pub const PROJECTS_DIR: &str = "projects";
pub const PLANS_DIR: &str = "plans";

/// Character that replaces path separators in project directory names
const SEPARATOR_SUBSTITUTE: char = '-';

pub fn history_path(claude_dir: &Path) -> PathBuf {
    claude_dir.join(HISTORY_FILE)
}

pub fn projects_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join(PROJECTS_DIR)
}

pub fn plans_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join(PLANS_DIR)
}

/// Encodes a project path into Claude's flat project directory name
///
/// # Examples
///
/// ```
/// use claude_history::encode_project_path;
///
/// assert_eq!(encode_project_path("/Users/foo/bar"), "-Users-foo-bar");
/// ```
pub fn encode_project_path(project: &str) -> String {
    project.replace(['/', '\\'], &SEPARATOR_SUBSTITUTE.to_string())
}

/// Validates that `name` is usable as a single file name inside a known directory
///
/// # Errors
///
/// Returns an error if the name is empty, is `.` or `..`, or contains a path
/// separator or NUL byte.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("File name is empty");
    }
    if name == "." || name == ".." {
        bail!("File name is a directory reference: {}", name);
    }
    if name.contains(['/', '\\', '\0']) {
        bail!("File name contains a path separator: {}", name);
    }
    Ok(())
}

/// Location of a session's conversation log:
/// `<claude_dir>/projects/<encoded project>/<session_id>.jsonl`
///
/// # Errors
///
/// Returns an error if the encoded project or the session id would escape the
/// projects directory.
pub fn session_log_path(claude_dir: &Path, project: &str, session_id: &str) -> Result<PathBuf> {
    let encoded = encode_project_path(project);
    validate_file_name(&encoded)?;
    validate_file_name(session_id)?;
    Ok(projects_dir(claude_dir).join(encoded).join(format!("{}.jsonl", session_id)))
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use claude_history::format_path_with_tilde;
///
/// // Returns "~/Documents" if HOME=/Users/alice
/// let formatted = format_path_with_tilde("/Users/alice/Documents");
/// ```
pub fn format_path_with_tilde(path: impl AsRef<Path>) -> String {
    format_path_with_tilde_internal(path.as_ref(), None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && let Some(rest) = path_str.strip_prefix(home)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return format!("~{}", rest);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
