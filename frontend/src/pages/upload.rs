use std::{cell::RefCell, rc::Rc};

use chrono::Local;
use confile_admin_shared::{
    config::UploadConfig,
    file_type::{format_size_kb, OutputFormat},
    AdminError, SelectedFile, UploadFlow, UploadState,
};
use gloo_timers::callback::Interval;
use web_sys::{console, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::{
        dropzone::Dropzone,
        modal::{Modal, ModalAction, ModalCloser},
    },
    hooks::use_icon_refresh,
    store::StoreHandle,
    utils,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogMode {
    Upload,
    Convert,
}

impl DialogMode {
    fn title(self) -> &'static str {
        match self {
            DialogMode::Upload => "Upload Files",
            DialogMode::Convert => "Convert Files",
        }
    }

    fn confirm_label(self) -> &'static str {
        match self {
            DialogMode::Upload => "Upload",
            DialogMode::Convert => "Convert",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct UploadDialogProps {
    pub store: StoreHandle,
    pub config: UploadConfig,
    #[prop_or(DialogMode::Upload)]
    pub mode: DialogMode,
    pub on_close: Callback<()>,
}

/// Pick files, then run the simulated upload. Finished runs append one
/// document per file to the library; dismissing at any point appends
/// nothing.
#[function_component(UploadDialog)]
pub fn upload_dialog(props: &UploadDialogProps) -> Html {
    use_icon_refresh();

    let mode = props.mode;
    let flow = use_mut_ref(move || {
        let mut flow = match mode {
            DialogMode::Upload => UploadFlow::new(),
            DialogMode::Convert => UploadFlow::converting(OutputFormat::Pdf),
        };
        if let Err(err) = flow.open() {
            console::warn_1(&format!("Upload dialog: {err}").into());
        }
        flow
    });
    let timer = use_mut_ref(|| None::<Interval>);
    let update = use_force_update();

    // Unmounting from any path stops the timer before the flow is cancelled,
    // so no tick can land on a closed dialog.
    {
        let flow = flow.clone();
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                drop(timer.borrow_mut().take());
                if flow.borrow_mut().cancel() {
                    console::log_1(&"Upload dialog dismissed".into());
                }
            }
        });
    }

    let on_select = {
        let flow = flow.clone();
        let update = update.clone();
        Callback::from(move |files: Vec<SelectedFile>| {
            if let Err(err) = flow.borrow_mut().select(files) {
                console::warn_1(&format!("Selection ignored: {err}").into());
            }
            update.force_update();
        })
    };

    let on_target = {
        let flow = flow.clone();
        let update = update.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Err(err) = flow.borrow_mut().set_target(OutputFormat::parse(&select.value())) {
                console::warn_1(&format!("Target ignored: {err}").into());
            }
            update.force_update();
        })
    };

    let on_confirm = {
        let flow = flow.clone();
        let timer = timer.clone();
        let update = update.clone();
        let store = props.store.clone();
        let tick_ms = props.config.tick_ms;
        let step = props.config.step_percent;
        let owner = props.config.owner.clone();
        Callback::from(move |closer: ModalCloser| {
            let started = flow.borrow_mut().confirm();
            match started {
                Ok(()) => {},
                Err(AdminError::NoFilesSelected) => {
                    utils::alert(&AdminError::NoFilesSelected.to_string());
                    return;
                },
                Err(err) => {
                    console::warn_1(&format!("Upload not started: {err}").into());
                    return;
                },
            }

            let interval = {
                let flow = flow.clone();
                let timer = timer.clone();
                let update = update.clone();
                let store = store.clone();
                let owner = owner.clone();
                Interval::new(tick_ms, move || {
                    let outcome = flow.borrow_mut().tick(step, &Local::now(), &owner);
                    match outcome {
                        Ok(None) => update.force_update(),
                        Ok(Some(documents)) => {
                            stop_from_tick(&timer);
                            console::log_1(
                                &format!("Uploaded {} document(s)", documents.len()).into(),
                            );
                            store.append_documents(documents);
                            closer.close();
                        },
                        Err(err) => {
                            stop_from_tick(&timer);
                            console::warn_1(&format!("Upload stopped: {err}").into());
                        },
                    }
                })
            };
            *timer.borrow_mut() = Some(interval);
            update.force_update();
        })
    };

    let (state, files, target, progress) = {
        let flow = flow.borrow();
        (flow.state(), flow.files().to_vec(), flow.target(), flow.progress())
    };
    let uploading = matches!(state, UploadState::Uploading { .. } | UploadState::Done);

    let actions = vec![
        ModalAction::dismiss("Cancel"),
        ModalAction::primary(mode.confirm_label(), on_confirm),
    ];

    html! {
        <Modal title={mode.title()} {actions} on_close={props.on_close.clone()}>
            if mode == DialogMode::Convert {
                <label class="form-field">
                    <span>{ "Target format" }</span>
                    <select class="convert-format" onchange={on_target} disabled={uploading}>
                        { for OutputFormat::ALL.into_iter().map(|format| html! {
                            <option value={format.extension()} selected={target == Some(format)}>
                                { format.extension().to_uppercase() }
                            </option>
                        }) }
                    </select>
                </label>
            }
            <Dropzone accept={props.config.accept.clone()} on_change={on_select} />
            <ul class="file-list">
                if files.is_empty() {
                    <li class="file-list-empty">{ "No files selected" }</li>
                } else {
                    { for files.iter().map(|file| html! {
                        <li>{ format!("{} • {}", file.name, format_size_kb(file.size)) }</li>
                    }) }
                }
            </ul>
            <div class="progress" hidden={!uploading}>
                <div class="progress-fill" style={format!("width: {progress}%")}></div>
            </div>
        </Modal>
    }
}

/// Take the interval out of its slot without dropping it inside its own
/// callback; the drop runs once the current tick has returned.
fn stop_from_tick(timer: &Rc<RefCell<Option<Interval>>>) {
    if let Some(interval) = timer.borrow_mut().take() {
        yew::platform::spawn_local(async move { drop(interval) });
    }
}
