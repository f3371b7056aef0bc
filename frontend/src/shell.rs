//! Page shell: mounts each feature block into whichever host container the
//! page provides and wires the static chrome (sidebar, nav, action buttons).

use confile_admin_shared::{kpi::KpiSnapshot, views::AnalyticsLayout, DashboardConfig, DateWindow};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{console, Element, Event, ScrollBehavior, ScrollIntoViewOptions};
use yew::BaseComponent;

use crate::{
    components::{
        icons::refresh_icons,
        modal::{open_overlay, OverlayHandle},
    },
    pages::{
        activity::{ActivityPanel, ActivityPanelProps},
        audit::{AuditPanel, AuditPanelProps},
        documents::{DocumentsPanel, DocumentsPanelProps},
        kpi::{KpiBoard, KpiBoardProps, KpiHostFields},
        upload::{DialogMode, UploadDialog, UploadDialogProps},
        users::{UsersPanel, UsersPanelProps},
    },
    store::StoreHandle,
    utils,
};

const USERS_IDS: &[&str] = &["usersContainer", "usersSection", "usersPage"];
const AUDIT_IDS: &[&str] = &["auditContainer", "auditSection", "auditPage"];
const ACTIVITY_IDS: &[&str] = &["activityList"];
const DOCUMENTS_IDS: &[&str] = &["documentsList"];
const KPI_IDS: &[&str] = &["kpiBoard"];

const BUTTON_SELECTORS: &str =
    ".upload-btn, #uploadBtn, #convertBtn, #newFolderBtn, .btn-primary, .btn-secondary";

pub fn init(config: &DashboardConfig, store: &StoreHandle) {
    refresh_icons();

    mount_guarded::<UsersPanel>(
        "users",
        USERS_IDS,
        UsersPanelProps {
            store: store.clone(),
        },
    );
    mount_guarded::<AuditPanel>(
        "audit",
        AUDIT_IDS,
        AuditPanelProps {
            store: store.clone(),
        },
    );
    let (presets, initial) = adopt_activity_toolbar();
    mount_guarded::<ActivityPanel>(
        "activity",
        ACTIVITY_IDS,
        ActivityPanelProps {
            store: store.clone(),
            initial,
            presets,
        },
    );
    mount_guarded::<DocumentsPanel>(
        "documents",
        DOCUMENTS_IDS,
        DocumentsPanelProps {
            store: store.clone(),
        },
    );
    let kpi = KpiBoardProps {
        refresh_ms: config.kpi_refresh_ms,
    };
    if !mount_guarded::<KpiBoard>("kpi", KPI_IDS, kpi) {
        sync_host_kpis(config.kpi_refresh_ms);
    }

    guard_analytics();
    bind_sidebar();
    bind_nav_links();
    normalise_buttons();
    bind_upload_triggers(config, store);

    refresh_icons();
}

/// Render `C` into the first of `ids` present on the page. Pages without the
/// container simply skip the block. Returns whether the block was mounted.
fn mount_guarded<C: BaseComponent>(name: &str, ids: &[&str], props: C::Properties) -> bool {
    let Some(root) = utils::first_by_id(ids) else {
        console::debug_1(&format!("Skipping {name}: no container among {ids:?}").into());
        return false;
    };
    root.set_inner_html("");
    yew::Renderer::<C>::with_root_and_props(root, props).render();
    true
}

/// Take over a host-rendered `.activity-filter` toolbar: its `data-days`
/// buttons become the panel's presets and its `aria-selected` button the
/// starting window. The host copy is removed so only the panel's toolbar
/// stays clickable.
fn adopt_activity_toolbar() -> (Vec<DateWindow>, DateWindow) {
    let Some(toolbar) = utils::document()
        .and_then(|doc| doc.query_selector(".activity-filter").ok().flatten())
    else {
        return (DateWindow::PRESETS.to_vec(), DateWindow::default());
    };

    let days: Vec<String> = toolbar
        .query_selector_all("button[data-days]")
        .map(|list| {
            (0..list.length())
                .filter_map(|idx| list.item(idx))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .filter_map(|button| button.get_attribute("data-days"))
                .collect()
        })
        .unwrap_or_default();
    let presets = DateWindow::toolbar(days.iter().map(String::as_str));

    let initial = toolbar
        .query_selector("button[aria-selected=\"true\"]")
        .ok()
        .flatten()
        .map(|button| DateWindow::parse(&button.get_attribute("data-days").unwrap_or_default()))
        .unwrap_or_default();

    toolbar.remove();
    (presets, initial)
}

/// Pages that carry their own `#kpiUploads`/`#kpiUploadsNote` style fields
/// instead of a `#kpiBoard` container get those fields kept current.
fn sync_host_kpis(refresh_ms: u32) {
    if !KpiSnapshot::VALUE_IDS.iter().any(|id| utils::by_id(id).is_some()) {
        return;
    }
    let Some(host) = utils::document().and_then(|doc| doc.create_element("div").ok()) else {
        return;
    };
    // Detached host: the component only owns the refresh timer and writes
    // into the page's existing elements.
    yew::Renderer::<KpiHostFields>::with_root_and_props(
        host,
        KpiBoardProps {
            refresh_ms,
        },
    )
    .render();
}

fn guard_analytics() {
    let charts = utils::by_id("aiChartsContainer");
    let empty = utils::by_id("aiEmpty");
    if charts.is_none() && empty.is_none() {
        return;
    }
    let cards = charts.as_ref().map(|charts| {
        charts
            .query_selector_all(".analytics-card")
            .map(|list| list.length())
            .unwrap_or(0)
    });
    let layout = AnalyticsLayout::for_container(cards);
    if let Some(empty) = empty.as_ref() {
        utils::set_display(empty, layout.empty_display());
    }
    if let Some(charts) = charts.as_ref() {
        utils::set_display(charts, layout.charts_display());
    }
}

/// Attach `handler` to `target` for the lifetime of the page.
fn on_event(target: &web_sys::EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        console::warn_1(&format!("Failed to bind {kind}: {err:?}").into());
        return;
    }
    closure.forget();
}

fn toggle_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

fn bind_sidebar() {
    let Some(sidebar) = utils::by_id("sidebar") else {
        return;
    };
    let toggle = utils::by_id("sidebarToggle");

    if let Some(toggle) = toggle.as_ref() {
        let sidebar = sidebar.clone();
        on_event(toggle, "click", move |event| {
            if utils::is_desktop() {
                return;
            }
            event.stop_propagation();
            toggle_class(&sidebar, "show");
        });
    }

    if let Some(close) = utils::by_id("sidebarClose") {
        let sidebar = sidebar.clone();
        on_event(&close, "click", move |_| {
            if !utils::is_desktop() {
                let _ = sidebar.class_list().remove_1("show");
            }
        });
    }

    let Some(document) = utils::document() else {
        return;
    };
    on_event(&document, "click", move |event| {
        if utils::is_desktop() || !sidebar.class_list().contains("show") {
            return;
        }
        let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = |el: Option<&Element>| match (el, target.as_ref()) {
            (Some(el), Some(node)) => el.contains(Some(node)),
            _ => false,
        };
        if !inside(Some(&sidebar)) && !inside(toggle.as_ref()) {
            let _ = sidebar.class_list().remove_1("show");
        }
    });
}

fn bind_nav_links() {
    for link in utils::query_all(".nav-link, .nav-link-active") {
        let clicked = link.clone();
        on_event(&link, "click", move |event| {
            for other in utils::query_all(".nav-link-active") {
                let _ = other.class_list().replace("nav-link-active", "nav-link");
            }
            let _ = clicked.class_list().remove_1("nav-link");
            let _ = clicked.class_list().add_1("nav-link-active");

            let Some(section) = clicked
                .get_attribute("href")
                .and_then(|href| href.strip_prefix('#').map(str::to_owned))
                .filter(|id| !id.is_empty())
                .and_then(|id| utils::by_id(&id))
            else {
                return;
            };
            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

fn normalise_buttons() {
    for button in utils::query_all(BUTTON_SELECTORS) {
        let _ = button.class_list().add_1("btn");
    }
}

fn bind_upload_triggers(config: &DashboardConfig, store: &StoreHandle) {
    let mut triggers = utils::query_all("#uploadBtn, .upload-btn")
        .into_iter()
        .map(|el| (el, DialogMode::Upload))
        .collect::<Vec<_>>();
    if let Some(convert) = utils::by_id("convertBtn") {
        triggers.push((convert, DialogMode::Convert));
    }

    for (button, mode) in triggers {
        let store = store.clone();
        let upload = config.upload.clone();
        on_event(&button, "click", move |event| {
            event.prevent_default();
            let opened: Option<OverlayHandle<UploadDialog>> = open_overlay(|on_close| {
                UploadDialogProps {
                    store: store.clone(),
                    config: upload.clone(),
                    mode,
                    on_close,
                }
            });
            if opened.is_none() {
                console::warn_1(&"Could not open the upload dialog".into());
            }
        });
    }
}
