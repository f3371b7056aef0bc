use std::{cell::RefCell, rc::Rc};

use web_sys::Element;
use yew::{prelude::*, AppHandle};

use crate::{
    components::icons::{Icon, IconName},
    utils,
};

/// Passed to action callbacks so they decide when the dialog goes away.
#[derive(Clone, PartialEq)]
pub struct ModalCloser(Callback<()>);

impl ModalCloser {
    pub fn close(&self) {
        self.0.emit(());
    }
}

/// Footer button. Without `on_click` the button simply dismisses the modal.
#[derive(Clone, PartialEq)]
pub struct ModalAction {
    pub label: AttrValue,
    pub primary: bool,
    pub on_click: Option<Callback<ModalCloser>>,
}

impl ModalAction {
    pub fn dismiss(label: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            primary: false,
            on_click: None,
        }
    }

    pub fn primary(label: impl Into<AttrValue>, on_click: Callback<ModalCloser>) -> Self {
        Self {
            label: label.into(),
            primary: true,
            on_click: Some(on_click),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub actions: Vec<ModalAction>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let closer = ModalCloser(props.on_close.clone());

    let on_close_button = {
        let closer = closer.clone();
        Callback::from(move |_: MouseEvent| closer.close())
    };

    // Only a click on the backdrop itself dismisses; clicks inside the
    // content bubble up with a different target.
    let on_backdrop = {
        let closer = closer.clone();
        Callback::from(move |event: MouseEvent| {
            if event.target() == event.current_target() {
                closer.close();
            }
        })
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" onclick={on_backdrop}>
            <div class="modal-content">
                <div class="modal-header">
                    <h2 class="modal-title">{ props.title.clone() }</h2>
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close_button}>
                        <Icon name={IconName::X} size={20} class={classes!("icon-medium")} />
                    </button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
                <div class="modal-actions">
                    { for props.actions.iter().map(|action| {
                        let onclick = {
                            let closer = closer.clone();
                            let handler = action.on_click.clone();
                            Callback::from(move |_: MouseEvent| match handler.as_ref() {
                                Some(handler) => handler.emit(closer.clone()),
                                None => closer.close(),
                            })
                        };
                        let class = if action.primary { "btn btn-primary" } else { "btn btn-secondary" };
                        html! {
                            <button type="button" {class} {onclick}>{ action.label.clone() }</button>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

struct Overlay<C: BaseComponent> {
    host: Element,
    app: AppHandle<C>,
}

/// Handle to a component mounted in a detached overlay host under `<body>`.
pub struct OverlayHandle<C: BaseComponent> {
    slot: Rc<RefCell<Option<Overlay<C>>>>,
}

impl<C: BaseComponent> Clone for OverlayHandle<C> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<C: BaseComponent> OverlayHandle<C> {
    /// Unmount the component and remove its host. Safe to call twice.
    pub fn close(&self) {
        let overlay = self.slot.borrow_mut().take();
        if let Some(Overlay {
            host,
            app,
        }) = overlay
        {
            app.destroy();
            host.remove();
        }
    }
}

/// Mount `C` in a fresh overlay. `build_props` receives the callback that
/// closes this very overlay, to be wired into the component's dismiss paths.
pub fn open_overlay<C, F>(build_props: F) -> Option<OverlayHandle<C>>
where
    C: BaseComponent,
    F: FnOnce(Callback<()>) -> C::Properties,
{
    let document = utils::document()?;
    let body = document.body()?;
    let host = document.create_element("div").ok()?;
    host.set_class_name("modal-host");
    body.append_child(&host).ok()?;

    let handle = OverlayHandle {
        slot: Rc::new(RefCell::new(None)),
    };
    let close = {
        let handle = handle.clone();
        Callback::from(move |_| handle.close())
    };
    let app = yew::Renderer::<C>::with_root_and_props(host.clone(), build_props(close)).render();
    *handle.slot.borrow_mut() = Some(Overlay {
        host,
        app,
    });
    Some(handle)
}
