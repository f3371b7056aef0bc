//! Records the dashboard pages display.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard account awaiting or holding admin approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique within a directory.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// `false` while the account sits in the approval queue.
    pub approved: bool,
}

/// One line of the audit trail. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action happened.
    pub time: DateTime<Utc>,
    /// Who performed it.
    pub user: String,
    /// What was done.
    pub action: String,
}

/// One item of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Who performed the action.
    pub user: String,
    /// Free-form description, e.g. "Uploaded receipt.pdf".
    pub action: String,
    /// When it happened.
    pub time: DateTime<Utc>,
}

/// Document category shown in the file library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    /// Portable document format.
    Pdf,
    /// Word processing and plain text files. Also the fallback category.
    Docs,
    /// Spreadsheets.
    Excel,
    /// Raster and vector images.
    Image,
}

impl DocType {
    /// Lowercase tag used in markup and serialized data.
    pub fn as_str(self) -> &'static str {
        match self {
            DocType::Pdf => "pdf",
            DocType::Docs => "docs",
            DocType::Excel => "excel",
            DocType::Image => "image",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry of the document library. Size and modification time are kept
/// pre-formatted, the way the library table displays them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name including extension.
    pub name: String,
    /// Category derived from the extension or the conversion target.
    #[serde(rename = "type")]
    pub doc_type: DocType,
    /// Human readable size, e.g. "2 KB".
    pub size: String,
    /// `YYYY-MM-DD HH:MM`.
    pub modified: String,
    /// Owner shown in the library.
    pub owner: String,
}

/// A file picked in the dropzone, before it becomes a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name as reported by the browser.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl SelectedFile {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Records that can be placed in a date window.
pub trait Timestamped {
    /// The instant used for window filtering.
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Timestamped for AuditEntry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }
}

impl Timestamped for ActivityEntry {
    fn timestamp(&self) -> DateTime<Utc> {
        self.time
    }
}
