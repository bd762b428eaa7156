//! Saved plan documents under `<claude_dir>/plans`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};

use crate::models::PlanFile;
use crate::utils::{plans_dir, validate_file_name};

const PLAN_EXTENSION: &str = ".md";

/// First top-level heading (`# Title`) of a markdown document
pub fn extract_first_heading(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let title = rest.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

/// Load every `*.md` file directly inside the plans directory, newest first.
///
/// A missing plans directory yields an empty list; files that cannot be read are skipped.
pub async fn load_plans(claude_dir: &Path) -> Vec<PlanFile> {
    let dir = plans_dir(claude_dir);
    let mut entries = match tokio::fs::read_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = ?dir, error = %e, "plans directory unavailable");
            return Vec::new();
        }
    };

    let mut plans = Vec::new();
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(path = ?dir, error = %e, "failed to read plans directory entry");
                break;
            }
        };

        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(name) = file_name.strip_suffix(PLAN_EXTENSION) else {
            continue;
        };
        if !is_file {
            continue;
        }

        match read_plan(entry.path(), name).await {
            Ok(plan) => plans.push(plan),
            Err(e) => tracing::warn!(file = %file_name, error = %e, "skipping unreadable plan"),
        }
    }

    plans.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    plans
}

async fn read_plan(path: PathBuf, name: &str) -> Result<PlanFile> {
    let metadata = tokio::fs::metadata(&path)
        .await
        .with_context(|| format!("Failed to read plan metadata: {}", path.display()))?;
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read plan: {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    let modified_at = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    Ok(PlanFile {
        name: name.to_string(),
        title: extract_first_heading(&content),
        path,
        content,
        modified_at,
    })
}

/// Find a plan by name (file name without `.md`)
pub async fn find_plan(claude_dir: &Path, name: &str) -> Result<PlanFile> {
    let path = plan_path(claude_dir, name)?;
    read_plan(path, name).await.with_context(|| format!("Plan not found: {}", name))
}

/// Delete a plan file, returning the path that was removed
///
/// # Errors
///
/// Returns an error if the name would resolve outside the plans directory or the
/// file cannot be removed.
pub async fn delete_plan(claude_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = plan_path(claude_dir, name)?;
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        bail!("Plan not found: {}", name);
    }
    tokio::fs::remove_file(&path)
        .await
        .with_context(|| format!("Failed to delete plan: {}", path.display()))?;
    tracing::debug!(path = ?path, "deleted plan");
    Ok(path)
}

fn plan_path(claude_dir: &Path, name: &str) -> Result<PathBuf> {
    let name = name.strip_suffix(PLAN_EXTENSION).unwrap_or(name);
    validate_file_name(name).with_context(|| format!("Invalid plan name: {}", name))?;
    Ok(plans_dir(claude_dir).join(format!("{}{}", name, PLAN_EXTENSION)))
}
