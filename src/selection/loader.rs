use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{ConversationMessage, Session};
use crate::parsers::load_conversation;

/// Where conversations come from (allows substituting a source in tests)
pub trait ConversationSource: Send + Sync {
    fn load(&self, session: &Session) -> impl Future<Output = Vec<ConversationMessage>> + Send;
}

/// Conversation logs under a Claude directory
#[derive(Debug, Clone)]
pub struct FsConversationSource {
    claude_dir: PathBuf,
}

impl FsConversationSource {
    pub fn new(claude_dir: impl Into<PathBuf>) -> Self {
        Self { claude_dir: claude_dir.into() }
    }
}

impl ConversationSource for FsConversationSource {
    async fn load(&self, session: &Session) -> Vec<ConversationMessage> {
        load_conversation(&self.claude_dir, session).await
    }
}

#[derive(Debug, Default)]
struct SelectionState {
    generation: u64,
    cached: Option<(String, Arc<Vec<ConversationMessage>>)>,
}

/// Single-flight loader for the currently selected session.
///
/// Every call to [`select`](Self::select) starts a new generation. A load that
/// finishes after a newer selection was made is discarded: it returns `None` and
/// never touches the cache. Only the most recent completed selection is cached.
#[derive(Debug)]
pub struct SelectionLoader<S> {
    source: S,
    state: Mutex<SelectionState>,
}

impl<S: ConversationSource> SelectionLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source, state: Mutex::new(SelectionState::default()) }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load `session`'s conversation, or return `None` if another selection
    /// superseded this one while it was loading
    pub async fn select(&self, session: &Session) -> Option<Arc<Vec<ConversationMessage>>> {
        let generation = {
            let mut state = self.lock();
            state.generation += 1;
            if let Some((id, messages)) = &state.cached
                && *id == session.id
            {
                return Some(Arc::clone(messages));
            }
            state.generation
        };

        let messages = Arc::new(self.source.load(session).await);

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!(session = %session.id, "discarding superseded conversation load");
            return None;
        }
        state.cached = Some((session.id.clone(), Arc::clone(&messages)));
        Some(messages)
    }

    /// Id of the session whose conversation is currently cached
    pub fn cached_id(&self) -> Option<String> {
        self.lock().cached.as_ref().map(|(id, _)| id.clone())
    }

    /// Drop the cached conversation so the next selection re-reads it
    pub fn invalidate(&self) {
        self.lock().cached = None;
    }

    fn lock(&self) -> MutexGuard<'_, SelectionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
