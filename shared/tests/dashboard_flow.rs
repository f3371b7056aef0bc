//! End-to-end dashboard flows driven through the public API.

use chrono::{DateTime, FixedOffset, Utc};
use confile_admin_shared::{
    sample::SampleData,
    views::{Listing, UsersView},
    AdminError, DocType, DocumentLibrary, MemoryStore, SelectedFile, UploadFlow, UploadState,
    User, UserDirectory,
};
use rand::{rngs::StdRng, SeedableRng};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("confile_admin_shared=debug")
        .try_init();
}

fn now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-06-01T09:05:00+00:00").expect("valid timestamp")
}

fn user(id: u32, approved: bool) -> User {
    User {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        approved,
    }
}

#[test]
fn upload_appends_documents_once_progress_completes() {
    init_tracing();
    let mut store = MemoryStore::default();
    let mut flow = UploadFlow::new();

    flow.open().expect("open");
    flow.select(vec![SelectedFile::new("a.pdf", 2048), SelectedFile::new("b.docx", 1024)])
        .expect("select");
    flow.confirm().expect("confirm");

    let mut finished = None;
    while finished.is_none() {
        assert!(store.documents().is_empty(), "store touched before completion");
        finished = flow.tick(14, &now(), "Admin").expect("tick");
    }
    store.append_documents(finished.expect("documents"));

    let docs = store.documents();
    assert_eq!(docs.len(), 2);
    assert_eq!((docs[0].doc_type, docs[0].size.as_str()), (DocType::Pdf, "2 KB"));
    assert_eq!((docs[1].doc_type, docs[1].size.as_str()), (DocType::Docs, "1 KB"));
    assert_eq!(flow.state(), UploadState::Done);
}

#[test]
fn empty_confirm_and_cancel_leave_store_unchanged() {
    init_tracing();
    let store = MemoryStore::default();
    let mut flow = UploadFlow::new();
    flow.open().expect("open");

    assert_eq!(flow.confirm(), Err(AdminError::NoFilesSelected));
    assert_eq!(flow.state(), UploadState::ModalOpen);

    flow.select(vec![SelectedFile::new("c.png", 10)]).expect("select");
    flow.confirm().expect("confirm");
    flow.tick(14, &now(), "Admin").expect("tick");
    assert!(flow.cancel());

    assert!(store.documents().is_empty());
    assert!(flow.tick(14, &now(), "Admin").is_err());
}

#[test]
fn approve_moves_user_out_of_pending_queue() {
    let mut store = MemoryStore::new(vec![user(1, true), user(2, false)], vec![], vec![], vec![])
        .expect("unique ids");

    store.approve(2).expect("approve");
    assert_eq!(store.list_users(), &[user(1, true), user(2, true)]);

    let view = UsersView::build(store.list_users());
    assert!(view.pending.is_empty());
    assert_eq!(view.all.len(), 2);
}

#[test]
fn deny_leaves_other_users_untouched() {
    let mut store =
        MemoryStore::new(vec![user(1, true), user(2, false), user(3, true)], vec![], vec![], vec![])
            .expect("unique ids");

    store.deny(2).expect("deny");
    assert_eq!(store.list_users(), &[user(1, true), user(3, true)]);

    let view = UsersView::build(store.list_users());
    let Listing::Rows(all) = view.all else {
        panic!("expected rows");
    };
    assert_eq!(all.iter().map(|row| row.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn generated_samples_seed_a_valid_store() {
    let mut rng = StdRng::seed_from_u64(2024);
    let data = SampleData::build(&Default::default(), now().with_timezone(&Utc), &mut rng);
    assert_eq!(data.users.len(), 10);
    assert_eq!(data.audit.len(), 50);
    assert_eq!(data.activity.len(), 100);

    let store = MemoryStore::new(data.users, data.audit, data.activity, vec![]);
    assert!(store.is_ok());
}
