use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::clipboard::copy_labeled;
use crate::filters::fuzzy_filter_sessions;
use crate::indexer::{
    ProjectFilter, build_sessions, filter_by_project, get_project_name, get_unique_projects,
    sort_sessions,
};
use crate::models::{Session, SortOrder};
use crate::parsers::{load_conversation, load_history_entries, load_history_with_stats};
use crate::plans::{delete_plan, find_plan, load_plans};
use crate::preferences::Preferences;
use crate::render::{extract_prompts, format_messages_as_markdown, truncate};
use crate::utils::terminal::{sanitize_for_terminal, single_line};
use crate::utils::time::format_relative_to;
use crate::utils::{format_path_with_tilde, get_claude_dir};

/// Longest session label shown in list rows
const LIST_TITLE_MAX_CHARS: usize = 80;

#[derive(Parser)]
#[command(name = "claude-history")]
#[command(version)]
#[command(about = "Browse Claude Code conversation history and saved plans", long_about = None)]
pub struct Cli {
    /// Claude configuration directory (defaults to $CLAUDE_CONFIG_DIR, then ~/.claude)
    #[arg(long, global = true, value_name = "PATH")]
    pub claude_dir: Option<PathBuf>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List sessions, filtered by project
    Sessions {
        /// Only show sessions of this project path (remembered for next time)
        #[arg(long, conflicts_with = "all")]
        project: Option<String>,
        /// Show sessions of all projects (remembered for next time)
        #[arg(long)]
        all: bool,
        /// Sort by last activity or creation time (remembered for next time)
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
        /// Fuzzy filter on session label and project name
        #[arg(long)]
        search: Option<String>,
        /// Show at most this many sessions
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List projects that appear in the history
    Projects,
    /// Print a session's conversation as markdown
    Show { session_id: String },
    /// Print or copy the first (or last) prompt of a session
    Prompt {
        session_id: String,
        /// Use the last prompt instead of the first
        #[arg(long)]
        last: bool,
        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },
    /// Print or copy the id of the most recent session matching a search
    Id {
        /// Fuzzy filter on session label and project name
        query: Option<String>,
        /// Search all projects instead of the saved project filter
        #[arg(long)]
        all: bool,
        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },
    /// Print or copy the command that resumes a session
    Resume {
        session_id: String,
        /// Add --dangerously-skip-permissions to the command
        #[arg(long)]
        skip_permissions: bool,
        /// Copy to the clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },
    /// Browse saved plans
    Plans {
        #[command(subcommand)]
        action: Option<PlanAction>,
    },
    /// Show statistics about the history
    Stats,
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// List plans, newest first
    List,
    /// Print a plan's markdown
    Show { name: String },
    /// Print a plan's file path
    Path { name: String },
    /// Delete a plan file
    Delete { name: String },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };
    let claude_dir = resolve_claude_dir(cli.claude_dir)?;
    tracing::debug!(claude_dir = ?claude_dir, "resolved Claude directory");

    match command {
        Commands::Sessions { project, all, sort, search, limit } => {
            let filter = match (all, project) {
                (true, _) => Some(ProjectFilter::All),
                (false, Some(p)) => Some(ProjectFilter::Project(p)),
                (false, None) => None,
            };
            list_sessions(&claude_dir, filter, sort, search.as_deref(), limit).await?;
        }
        Commands::Projects => list_projects(&claude_dir).await,
        Commands::Show { session_id } => show_session(&claude_dir, &session_id).await?,
        Commands::Prompt { session_id, last, copy } => {
            show_prompt(&claude_dir, &session_id, last, copy).await?;
        }
        Commands::Id { query, all, copy } => {
            let session = latest_session(&claude_dir, query.as_deref(), all).await?;
            emit(&session.id, "session id", copy)?;
        }
        Commands::Resume { session_id, skip_permissions, copy } => {
            let session = find_session(&claude_dir, &session_id).await?;
            emit(&session.resume_command(skip_permissions), "resume command", copy)?;
        }
        Commands::Plans { action } => plans(&claude_dir, action.unwrap_or(PlanAction::List)).await?,
        Commands::Stats => show_stats(&claude_dir).await,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // try_init: a subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn resolve_claude_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => get_claude_dir(),
    }
}

async fn find_session(claude_dir: &Path, session_id: &str) -> Result<Session> {
    let entries = load_history_entries(claude_dir).await;
    build_sessions(&entries)
        .into_iter()
        .find(|s| s.id == session_id)
        .with_context(|| format!("Session not found: {}", session_id))
}

/// Most recently active session under the saved project filter (or all projects)
/// whose label or project name matches `query`
async fn latest_session(claude_dir: &Path, query: Option<&str>, all: bool) -> Result<Session> {
    let filter = if all {
        ProjectFilter::All
    } else {
        let prefs = Preferences::default_path()
            .map(|path| Preferences::load_from(&path))
            .unwrap_or_default();
        ProjectFilter::from_preference(prefs.last_project.as_deref())
    };

    let entries = load_history_entries(claude_dir).await;
    let mut sessions = filter_by_project(build_sessions(&entries), &filter);
    sort_sessions(&mut sessions, SortOrder::Recent);
    if let Some(query) = query {
        sessions = fuzzy_filter_sessions(sessions, query);
    }

    sessions.into_iter().next().context("No matching session")
}

/// Print `text`, or copy it and print the confirmation
fn emit(text: &str, label: &str, copy: bool) -> Result<()> {
    if copy {
        println!("{}", copy_labeled(text, label)?);
    } else {
        println!("{}", sanitize_for_terminal(text));
    }
    Ok(())
}

async fn list_sessions(
    claude_dir: &Path,
    filter: Option<ProjectFilter>,
    sort: Option<SortOrder>,
    search: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let prefs_path = Preferences::default_path()
        .inspect_err(|e| tracing::debug!(error = %e, "preferences unavailable"))
        .ok();
    let mut prefs = prefs_path.as_deref().map(Preferences::load_from).unwrap_or_default();

    let remember = filter.is_some() || sort.is_some();
    let filter =
        filter.unwrap_or_else(|| ProjectFilter::from_preference(prefs.last_project.as_deref()));
    let order = sort.unwrap_or(prefs.sort_order);

    if remember && let Some(path) = &prefs_path {
        prefs.last_project = filter.to_preference();
        prefs.sort_order = order;
        if let Err(e) = prefs.save_to(path) {
            tracing::warn!(path = ?path, error = %e, "failed to save preferences");
        }
    }

    let entries = load_history_entries(claude_dir).await;
    let mut sessions = filter_by_project(build_sessions(&entries), &filter);
    sort_sessions(&mut sessions, order);
    if let Some(query) = search {
        sessions = fuzzy_filter_sessions(sessions, query);
    }
    if let Some(limit) = limit {
        sessions.truncate(limit);
    }

    if let ProjectFilter::Project(project) = &filter {
        println!("Project: {}", format_path_with_tilde(project));
    }
    if sessions.is_empty() {
        println!("No sessions found");
        return Ok(());
    }

    let now = Utc::now();
    for session in &sessions {
        let at = match order {
            SortOrder::Recent => session.last_active_at,
            SortOrder::Created => session.timestamp,
        };
        println!(
            "{:>4}  {}  {:<20}  {}",
            format_relative_to(&at, &now),
            session.id,
            single_line(&session.project_name),
            truncate(&single_line(&session.title()), LIST_TITLE_MAX_CHARS)
        );
    }

    Ok(())
}

async fn list_projects(claude_dir: &Path) {
    let entries = load_history_entries(claude_dir).await;
    let projects = get_unique_projects(&entries);
    if projects.is_empty() {
        println!("No projects found");
        return;
    }

    for project in projects {
        println!(
            "{:<24}  {}",
            single_line(&get_project_name(&project)),
            sanitize_for_terminal(&format_path_with_tilde(&project))
        );
    }
}

async fn show_session(claude_dir: &Path, session_id: &str) -> Result<()> {
    let session = find_session(claude_dir, session_id).await?;
    let messages = load_conversation(claude_dir, &session).await;
    println!("{}", sanitize_for_terminal(&format_messages_as_markdown(&messages)));
    Ok(())
}

async fn show_prompt(claude_dir: &Path, session_id: &str, last: bool, copy: bool) -> Result<()> {
    let session = find_session(claude_dir, session_id).await?;
    let messages = load_conversation(claude_dir, &session).await;
    let prompts = extract_prompts(&messages);

    let (prompt, which) =
        if last { (prompts.last_prompt, "last") } else { (prompts.first_prompt, "first") };
    let Some(prompt) = prompt else {
        bail!("Session {} has no {} prompt", session_id, which);
    };

    emit(&prompt, "prompt", copy)
}

async fn plans(claude_dir: &Path, action: PlanAction) -> Result<()> {
    match action {
        PlanAction::List => {
            let plans = load_plans(claude_dir).await;
            if plans.is_empty() {
                println!("No plans found");
                return Ok(());
            }
            let now = Utc::now();
            for plan in &plans {
                println!(
                    "{:>4}  {:<32}  {}",
                    format_relative_to(&plan.modified_at, &now),
                    single_line(&plan.name),
                    single_line(plan.display_title())
                );
            }
        }
        PlanAction::Show { name } => {
            let plan = find_plan(claude_dir, &name).await?;
            println!("{}", sanitize_for_terminal(&plan.content));
        }
        PlanAction::Path { name } => {
            let plan = find_plan(claude_dir, &name).await?;
            println!("{}", plan.path.display());
        }
        PlanAction::Delete { name } => {
            let path = delete_plan(claude_dir, &name).await?;
            println!("Deleted {}", path.display());
        }
    }
    Ok(())
}

async fn show_stats(claude_dir: &Path) {
    let history = load_history_with_stats(claude_dir).await;
    let sessions = build_sessions(&history.records);
    let projects = get_unique_projects(&history.records);
    let plans = load_plans(claude_dir).await;

    println!("Claude Code History Statistics");
    println!("================================");
    println!("History entries: {}", history.records.len());
    if history.skipped > 0 {
        println!("  Malformed lines skipped: {}", history.skipped);
    }
    println!("Sessions: {}", sessions.len());
    println!("Projects: {}", projects.len());
    println!("Plans: {}", plans.len());
    println!();
    println!("Claude directory: {}", format_path_with_tilde(claude_dir));

    if let Some(oldest) = sessions.iter().map(|s| s.timestamp).min() {
        println!("Oldest session: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = sessions.iter().map(|s| s.last_active_at).max() {
        println!("Last activity: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }
}
