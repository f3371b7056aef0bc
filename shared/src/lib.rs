//! Browser-independent core of the CONFILE admin dashboard.
//!
//! Record model, date-window filtering, the upload state machine, the
//! in-memory store and the row models the frontend paints from. Everything
//! here builds and tests natively.

pub mod config;
pub mod error;
pub mod file_type;
pub mod kpi;
pub mod models;
pub mod sample;
pub mod store;
pub mod upload;
pub mod views;
pub mod window;

pub use config::DashboardConfig;
pub use error::{AdminError, Result};
pub use models::{ActivityEntry, AuditEntry, DocType, Document, SelectedFile, Timestamped, User};
pub use store::{ActivityFeed, AdminStore, AuditLog, DocumentLibrary, MemoryStore, UserDirectory};
pub use upload::{UploadFlow, UploadState};
pub use window::{cutoff, filter_window, DateWindow};
