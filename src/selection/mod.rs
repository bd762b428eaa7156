//! Presentation-boundary helpers for interactive front ends
//!
//! - [`SelectionLoader`] - One conversation load at a time, keyed by the selected session
//! - [`Debouncer`] - Delays reacting to input until it has been stable for a while

pub mod debounce;
pub mod loader;

pub use debounce::{Debouncer, debounced};
pub use loader::{ConversationSource, FsConversationSource, SelectionLoader};
