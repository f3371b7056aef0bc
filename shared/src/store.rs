//! In-memory record store behind small capability traits.
//!
//! Panels only see the trait they need, so a real backend can replace
//! [`MemoryStore`] without touching any rendering code.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    error::{AdminError, Result},
    models::{ActivityEntry, AuditEntry, Document, User},
};

/// Account approval queue.
pub trait UserDirectory {
    /// All users in insertion order.
    fn list_users(&self) -> &[User];
    /// Mark a user approved and return the updated record.
    fn approve(&mut self, id: u32) -> Result<User>;
    /// Remove a user and return the removed record.
    fn deny(&mut self, id: u32) -> Result<User>;
}

/// Read-only audit trail.
pub trait AuditLog {
    /// Entries in insertion order.
    fn audit_entries(&self) -> &[AuditEntry];
}

/// Read-only activity feed.
pub trait ActivityFeed {
    /// Entries in insertion order.
    fn activity(&self) -> &[ActivityEntry];
}

/// Append-only document library.
pub trait DocumentLibrary {
    /// Documents in insertion order.
    fn documents(&self) -> &[Document];
    /// Add documents at the end of the library.
    fn append_documents(&mut self, documents: Vec<Document>);
}

/// Everything a dashboard page may ask for.
pub trait AdminStore: UserDirectory + AuditLog + ActivityFeed + DocumentLibrary {}

impl<T> AdminStore for T where T: UserDirectory + AuditLog + ActivityFeed + DocumentLibrary {}

/// Page-lifetime store. Nothing is persisted; reloading starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    users: Vec<User>,
    audit: Vec<AuditEntry>,
    activity: Vec<ActivityEntry>,
    documents: Vec<Document>,
}

impl MemoryStore {
    /// Build a store, rejecting duplicate user ids.
    pub fn new(
        users: Vec<User>,
        audit: Vec<AuditEntry>,
        activity: Vec<ActivityEntry>,
        documents: Vec<Document>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        if let Some(dup) = users.iter().find(|user| !seen.insert(user.id)) {
            return Err(AdminError::DuplicateUser {
                id: dup.id,
            });
        }
        Ok(Self {
            users,
            audit,
            activity,
            documents,
        })
    }

    fn position(&self, id: u32) -> Result<usize> {
        self.users
            .iter()
            .position(|user| user.id == id)
            .ok_or(AdminError::UserNotFound {
                id,
            })
    }
}

impl UserDirectory for MemoryStore {
    fn list_users(&self) -> &[User] {
        &self.users
    }

    fn approve(&mut self, id: u32) -> Result<User> {
        let idx = self.position(id)?;
        let user = &mut self.users[idx];
        user.approved = true;
        debug!(id, "user approved");
        Ok(user.clone())
    }

    fn deny(&mut self, id: u32) -> Result<User> {
        let idx = self.position(id)?;
        let removed = self.users.remove(idx);
        debug!(id, remaining = self.users.len(), "user denied");
        Ok(removed)
    }
}

impl AuditLog for MemoryStore {
    fn audit_entries(&self) -> &[AuditEntry] {
        &self.audit
    }
}

impl ActivityFeed for MemoryStore {
    fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }
}

impl DocumentLibrary for MemoryStore {
    fn documents(&self) -> &[Document] {
        &self.documents
    }

    fn append_documents(&mut self, documents: Vec<Document>) {
        debug!(added = documents.len(), "documents appended");
        self.documents.extend(documents);
    }
}
