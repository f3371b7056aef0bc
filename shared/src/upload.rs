//! Simulated upload pipeline.
//!
//! The dialog walks a linear machine:
//!
//! ```text
//! Idle -> ModalOpen -> FilesSelected -> Uploading(p) -> Done
//!            \______________\________________\______-> Cancelled
//! ```
//!
//! Progress is driven by the caller's timer through [`UploadFlow::tick`].
//! Nothing touches the document store until the flow reaches `Done`.

use std::fmt;

use chrono::{DateTime, TimeZone};
use tracing::{debug, warn};

use crate::{
    error::{AdminError, Result},
    file_type::{ext_to_type, extension_of, format_size_kb, stem_of, OutputFormat},
    models::{Document, SelectedFile},
};

/// Where the upload dialog currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    /// Not started.
    Idle,
    /// Dialog shown, nothing chosen yet.
    ModalOpen,
    /// At least one file chosen.
    FilesSelected,
    /// Progress bar running.
    Uploading {
        /// Percent complete, `0..=100`.
        progress: u8,
    },
    /// Documents were produced and the dialog can close.
    Done,
    /// Dismissed without touching the store.
    Cancelled,
}

impl UploadState {
    fn name(self) -> &'static str {
        match self {
            UploadState::Idle => "idle",
            UploadState::ModalOpen => "modal-open",
            UploadState::FilesSelected => "files-selected",
            UploadState::Uploading {
                ..
            } => "uploading",
            UploadState::Done => "done",
            UploadState::Cancelled => "cancelled",
        }
    }

    /// `Done` and `Cancelled` accept no further events.
    pub fn is_terminal(self) -> bool {
        matches!(self, UploadState::Done | UploadState::Cancelled)
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One run of the upload (or convert) dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFlow {
    state: UploadState,
    files: Vec<SelectedFile>,
    target: Option<OutputFormat>,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadFlow {
    /// Plain upload: documents keep their names.
    pub fn new() -> Self {
        Self {
            state: UploadState::Idle,
            files: Vec::new(),
            target: None,
        }
    }

    /// Conversion run: documents are renamed to `format` and typed after it.
    pub fn converting(format: OutputFormat) -> Self {
        Self {
            target: Some(format),
            ..Self::new()
        }
    }

    /// Current state.
    pub fn state(&self) -> UploadState {
        self.state
    }

    /// Files picked so far.
    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// Conversion target, if this is a convert run.
    pub fn target(&self) -> Option<OutputFormat> {
        self.target
    }

    /// Progress in percent. `100` once done, `0` before uploading starts.
    pub fn progress(&self) -> u8 {
        match self.state {
            UploadState::Uploading {
                progress,
            } => progress,
            UploadState::Done => 100,
            _ => 0,
        }
    }

    /// Change the conversion target before the upload starts.
    pub fn set_target(&mut self, format: OutputFormat) -> Result<()> {
        match self.state {
            UploadState::Idle | UploadState::ModalOpen | UploadState::FilesSelected => {
                self.target = Some(format);
                Ok(())
            },
            _ => Err(self.reject("change target")),
        }
    }

    /// Show the dialog.
    pub fn open(&mut self) -> Result<()> {
        if self.state != UploadState::Idle {
            return Err(self.reject("open"));
        }
        self.transition(UploadState::ModalOpen);
        Ok(())
    }

    /// Replace the selection with `files`. An empty selection returns the
    /// dialog to `ModalOpen`.
    pub fn select(&mut self, files: Vec<SelectedFile>) -> Result<()> {
        match self.state {
            UploadState::ModalOpen | UploadState::FilesSelected => {
                let next = if files.is_empty() {
                    UploadState::ModalOpen
                } else {
                    UploadState::FilesSelected
                };
                self.files = files;
                self.transition(next);
                Ok(())
            },
            _ => Err(self.reject("select files")),
        }
    }

    /// Start uploading. Without files this fails with
    /// [`AdminError::NoFilesSelected`] and the dialog stays where it is.
    pub fn confirm(&mut self) -> Result<()> {
        match self.state {
            UploadState::FilesSelected => {
                self.transition(UploadState::Uploading {
                    progress: 0,
                });
                Ok(())
            },
            UploadState::ModalOpen => {
                debug!("upload confirmed without files");
                Err(AdminError::NoFilesSelected)
            },
            _ => Err(self.reject("confirm")),
        }
    }

    /// Advance progress by `step` percent. On reaching 100 the flow is done
    /// and the synthesized documents are returned, one per selected file.
    pub fn tick<Tz>(
        &mut self,
        step: u8,
        now: &DateTime<Tz>,
        owner: &str,
    ) -> Result<Option<Vec<Document>>>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let UploadState::Uploading {
            progress,
        } = self.state
        else {
            return Err(self.reject("tick"));
        };

        let next = progress.saturating_add(step).min(100);
        if next < 100 {
            self.state = UploadState::Uploading {
                progress: next,
            };
            return Ok(None);
        }

        let modified = now.format("%Y-%m-%d %H:%M").to_string();
        let documents = self
            .files
            .iter()
            .map(|file| self.document_for(file, &modified, owner))
            .collect();
        self.transition(UploadState::Done);
        Ok(Some(documents))
    }

    /// Dismiss the dialog. Returns `false` when already finished.
    pub fn cancel(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.transition(UploadState::Cancelled);
        true
    }

    fn document_for(&self, file: &SelectedFile, modified: &str, owner: &str) -> Document {
        let (name, doc_type) = match self.target {
            Some(format) => {
                (format!("{}.{}", stem_of(&file.name), format.extension()), format.doc_type())
            },
            None => (file.name.clone(), ext_to_type(extension_of(&file.name))),
        };
        Document {
            name,
            doc_type,
            size: format_size_kb(file.size),
            modified: modified.to_string(),
            owner: owner.to_string(),
        }
    }

    fn transition(&mut self, next: UploadState) {
        debug!(from = %self.state, to = %next, files = self.files.len(), "upload transition");
        self.state = next;
    }

    fn reject(&self, action: &'static str) -> AdminError {
        warn!(state = %self.state, action, "upload event rejected");
        AdminError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset};

    use super::*;
    use crate::models::DocType;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-06-01T09:05:00+00:00").expect("valid timestamp")
    }

    fn selected_flow(files: Vec<SelectedFile>) -> UploadFlow {
        let mut flow = UploadFlow::new();
        flow.open().expect("open");
        flow.select(files).expect("select");
        flow
    }

    #[test]
    fn confirm_without_files_keeps_dialog_open() {
        let mut flow = UploadFlow::new();
        flow.open().expect("open");
        assert_eq!(flow.confirm(), Err(AdminError::NoFilesSelected));
        assert_eq!(flow.state(), UploadState::ModalOpen);

        flow.select(Vec::new()).expect("empty select");
        assert_eq!(flow.confirm(), Err(AdminError::NoFilesSelected));
        assert_eq!(flow.state(), UploadState::ModalOpen);
    }

    #[test]
    fn progress_advances_by_step_and_clamps() {
        let mut flow = selected_flow(vec![SelectedFile::new("a.pdf", 10)]);
        flow.confirm().expect("confirm");

        let mut ticks = 0;
        let documents = loop {
            ticks += 1;
            if let Some(docs) = flow.tick(14, &now(), "Admin").expect("tick") {
                break docs;
            }
            assert_eq!(flow.progress(), 14 * ticks);
        };

        // 14 * 7 = 98, so the eighth tick clamps to 100.
        assert_eq!(ticks, 8);
        assert_eq!(flow.state(), UploadState::Done);
        assert_eq!(flow.progress(), 100);
        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn finished_upload_synthesizes_documents() {
        let mut flow = selected_flow(vec![
            SelectedFile::new("a.pdf", 2048),
            SelectedFile::new("b.docx", 1024),
        ]);
        flow.confirm().expect("confirm");
        let docs = flow.tick(100, &now(), "Admin").expect("tick").expect("done");

        assert_eq!(docs[0].name, "a.pdf");
        assert_eq!(docs[0].doc_type, DocType::Pdf);
        assert_eq!(docs[0].size, "2 KB");
        assert_eq!(docs[1].name, "b.docx");
        assert_eq!(docs[1].doc_type, DocType::Docs);
        assert_eq!(docs[1].size, "1 KB");
        assert!(docs.iter().all(|doc| doc.modified == "2024-06-01 09:05"));
        assert!(docs.iter().all(|doc| doc.owner == "Admin"));
    }

    #[test]
    fn conversion_renames_and_retypes() {
        let mut flow = UploadFlow::converting(OutputFormat::Pdf);
        flow.open().expect("open");
        flow.set_target(OutputFormat::Xlsx).expect("retarget");
        flow.select(vec![SelectedFile::new("ledger.csv", 3000)])
            .expect("select");
        flow.confirm().expect("confirm");
        let docs = flow.tick(50, &now(), "Ops").expect("tick");
        assert!(docs.is_none());
        let docs = flow.tick(50, &now(), "Ops").expect("tick").expect("done");

        assert_eq!(docs[0].name, "ledger.xlsx");
        assert_eq!(docs[0].doc_type, DocType::Excel);
        assert_eq!(docs[0].size, "3 KB");
        assert_eq!(docs[0].owner, "Ops");
    }

    #[test]
    fn cancel_from_any_live_state() {
        let mut idle = UploadFlow::new();
        assert!(idle.cancel());
        assert_eq!(idle.state(), UploadState::Cancelled);

        let mut uploading = selected_flow(vec![SelectedFile::new("x.png", 1)]);
        uploading.confirm().expect("confirm");
        uploading.tick(14, &now(), "Admin").expect("tick");
        assert!(uploading.cancel());
        assert!(matches!(
            uploading.tick(14, &now(), "Admin"),
            Err(AdminError::InvalidTransition {
                from: "cancelled",
                action: "tick"
            })
        ));
        assert!(!uploading.cancel());
    }

    #[test]
    fn double_confirm_is_rejected() {
        let mut flow = selected_flow(vec![SelectedFile::new("x.png", 1)]);
        flow.confirm().expect("confirm");
        assert!(matches!(flow.confirm(), Err(AdminError::InvalidTransition { .. })));
        assert!(matches!(flow.select(Vec::new()), Err(AdminError::InvalidTransition { .. })));
        assert!(flow.set_target(OutputFormat::Docx).is_err());
    }
}
