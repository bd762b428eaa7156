pub mod bounded;
pub mod environment;
pub mod paths;
pub mod terminal;
pub mod time;

pub use bounded::{BOUNDARY_MARGIN, read_bounded};
pub use environment::get_claude_dir;
pub use paths::{
    encode_project_path, format_path_with_tilde, history_path, plans_dir, projects_dir,
    session_log_path, validate_file_name,
};
pub use terminal::{sanitize_for_terminal, single_line};
pub use time::format_relative_time;
