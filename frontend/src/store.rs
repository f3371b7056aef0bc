use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use confile_admin_shared::{AdminStore, Document, DocumentLibrary, Result, User, UserDirectory};
use yew::Callback;

type Listeners = RefCell<Vec<(u64, Callback<()>)>>;

/// Shared handle to the page's record store.
///
/// Every panel is mounted as its own Yew root, so they cannot share a
/// context provider. Instead each one holds a clone of this handle, mutates
/// through it, and subscribes to repaint when any panel changes the data.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Rc<RefCell<dyn AdminStore>>,
    listeners: Rc<Listeners>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl StoreHandle {
    pub fn new(store: impl AdminStore + 'static) -> Self {
        let inner: Rc<RefCell<dyn AdminStore>> = Rc::new(RefCell::new(store));
        Self {
            inner,
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&dyn AdminStore) -> R) -> R {
        f(&*self.inner.borrow())
    }

    pub fn approve(&self, id: u32) -> Result<User> {
        let result = self.inner.borrow_mut().approve(id);
        self.notify();
        result
    }

    pub fn deny(&self, id: u32) -> Result<User> {
        let result = self.inner.borrow_mut().deny(id);
        self.notify();
        result
    }

    pub fn append_documents(&self, documents: Vec<Document>) {
        self.inner.borrow_mut().append_documents(documents);
        self.notify();
    }

    /// Call `on_change` after every mutation until the returned guard drops.
    pub fn subscribe(&self, on_change: Callback<()>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, on_change));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn notify(&self) {
        // Snapshot first: a listener may subscribe or drop while we iterate.
        let listeners: Vec<Callback<()>> =
            self.listeners.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for listener in listeners {
            listener.emit(());
        }
    }
}

pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
