//! Postcode engine with attach/detach session management.
//!
//! The `PostcodeEngine` owns the shared pattern table and configuration and
//! hands out one `EditSession` per attached text field. A host with several
//! postcode fields attaches each of them and routes edits by handle.

use crate::decision::Decision;
use crate::error::{PostcodeError, Result};
use crate::pattern::PatternTable;
use crate::session::EditSession;
use crate::Config;
use ahash::AHashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use tracing::{debug, warn};

/// Opaque handle to an attached session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionHandle(u64);

impl SessionHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Engine holding the pattern table and every attached session.
pub struct PostcodeEngine {
    table: Arc<PatternTable>,
    config: Config,
    sessions: AHashMap<SessionHandle, EditSession>,
    next_id: u64,
}

impl PostcodeEngine {
    /// Create an engine from a pattern table and configuration.
    pub fn new(table: PatternTable, config: Config) -> Self {
        Self::from_arc(Arc::new(table), config)
    }

    /// Create an engine sharing an existing table.
    pub fn from_arc(table: Arc<PatternTable>, config: Config) -> Self {
        Self {
            table,
            config,
            sessions: AHashMap::new(),
            next_id: 1,
        }
    }

    /// Create an engine whose table is built from `config.shapes`.
    pub fn from_config(config: Config) -> Result<Self> {
        let table = PatternTable::from_formats(config.shapes.as_slice())?;
        Ok(Self::new(table, config))
    }

    pub fn table(&self) -> &Arc<PatternTable> {
        &self.table
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start a session for a newly attached field.
    pub fn attach(&mut self) -> SessionHandle {
        let handle = SessionHandle(self.next_id);
        self.next_id += 1;
        self.sessions
            .insert(handle, EditSession::with_config(self.table.clone(), &self.config));
        debug!(%handle, "attached session");
        handle
    }

    /// End a session. Returns `false` if the handle was not attached.
    pub fn detach(&mut self, handle: SessionHandle) -> bool {
        let removed = self.sessions.remove(&handle).is_some();
        if removed {
            debug!(%handle, "detached session");
        } else {
            warn!(%handle, "detach of unknown session");
        }
        removed
    }

    pub fn session(&self, handle: SessionHandle) -> Option<&EditSession> {
        self.sessions.get(&handle)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Route an edit to the session behind `handle`.
    pub fn propose_edit(
        &mut self,
        handle: SessionHandle,
        current_text: &str,
        selection: Range<usize>,
        replacement: &str,
    ) -> Result<Decision> {
        let session = self.sessions.get_mut(&handle).ok_or_else(|| {
            warn!(%handle, "edit for unknown session");
            PostcodeError::UnknownSession(handle.id())
        })?;
        Ok(session.propose_edit(current_text, selection, replacement))
    }
}
