//! Per-session state.
//!
//! Every browser session owns its own [`Inventory`]; nothing is shared
//! between sessions. The registry is the explicit state object handed to the
//! request handlers, and all access to one session goes through its lock so
//! each interaction sees and mutates a consistent inventory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{InventoryView, Notice, Variant};
use crate::store::Inventory;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),
}

/// One UI session and the inventory it owns.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub inventory: Inventory,
    /// Notices produced since the page was last rendered.
    pub pending: Vec<Notice>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    fn new(variant: Variant) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            inventory: Inventory::seeded(variant),
            pending: Vec::new(),
            created_at: now,
            last_seen: now,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    variant: Variant,
    restock_threshold: usize,
}

impl SessionRegistry {
    pub fn new(variant: Variant, restock_threshold: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            variant,
            restock_threshold,
        }
    }

    /// Start a session seeded with the variant's items.
    pub fn create(&self) -> Uuid {
        let session = Session::new(self.variant);
        let id = session.id;
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .insert(id, session);
        tracing::info!(session = %id, variant = self.variant.as_str(), "Session created");
        id
    }

    /// Run `f` against a session, marking it as seen.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, SessionError> {
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.last_seen = Utc::now();
        Ok(f(session))
    }

    /// Add an item and queue the outcome for the next render.
    pub fn add_item(&self, id: Uuid, name: &str) -> Result<Notice, SessionError> {
        self.with_session(id, |session| Self::record_add(session, name))
    }

    /// Remove an item and queue the outcome for the next render.
    pub fn remove_item(&self, id: Uuid, name: &str) -> Result<Notice, SessionError> {
        self.with_session(id, |session| Self::record_remove(session, name))
    }

    /// Add an item and render the resulting view under one lock, so no other
    /// request can observe or drain the session in between.
    pub fn add_item_and_view(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<(Notice, InventoryView), SessionError> {
        self.with_session(id, |session| {
            let notice = Self::record_add(session, name);
            (notice, self.drain_view(session))
        })
    }

    /// Remove an item and render the resulting view under one lock.
    pub fn remove_item_and_view(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<(Notice, InventoryView), SessionError> {
        self.with_session(id, |session| {
            let notice = Self::record_remove(session, name);
            (notice, self.drain_view(session))
        })
    }

    fn record_add(session: &mut Session, name: &str) -> Notice {
        let notice = session.inventory.add(name);
        tracing::debug!(session = %session.id, level = notice.level.as_str(), "Add: {}", notice.message);
        session.pending.push(notice.clone());
        notice
    }

    fn record_remove(session: &mut Session, name: &str) -> Notice {
        let notice = session.inventory.remove(name);
        tracing::debug!(session = %session.id, level = notice.level.as_str(), "Remove: {}", notice.message);
        session.pending.push(notice.clone());
        notice
    }

    /// Build the view and hand over pending notices, which are shown once.
    pub fn take_view(&self, id: Uuid) -> Result<InventoryView, SessionError> {
        self.with_session(id, |session| self.drain_view(session))
    }

    /// Build the view without consuming pending notices.
    pub fn view(&self, id: Uuid) -> Result<InventoryView, SessionError> {
        self.with_session(id, |session| {
            let notices = session.pending.clone();
            self.build_view(session, notices)
        })
    }

    fn drain_view(&self, session: &mut Session) -> InventoryView {
        let notices = std::mem::take(&mut session.pending);
        self.build_view(session, notices)
    }

    fn build_view(&self, session: &Session, notices: Vec<Notice>) -> InventoryView {
        InventoryView::build(
            session.id,
            self.variant,
            &session.inventory,
            self.restock_threshold,
            notices,
        )
    }

    /// Discard a session. Returns false if it did not exist.
    pub fn end(&self, id: Uuid) -> bool {
        let removed = self
            .sessions
            .lock()
            .expect("session lock poisoned")
            .remove(&id)
            .is_some();
        if removed {
            tracing::info!(session = %id, "Session ended");
        }
        removed
    }

    /// Discard sessions not seen for longer than `max_idle`.
    /// Returns how many were discarded.
    pub fn sweep_idle(&self, max_idle: Duration) -> usize {
        let Some(cutoff) = chrono::Duration::from_std(max_idle)
            .ok()
            .and_then(|idle| Utc::now().checked_sub_signed(idle))
        else {
            return 0;
        };
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen > cutoff);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!("Expired {} idle session(s)", expired);
        }
        expired
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session lock poisoned").len()
    }
}
