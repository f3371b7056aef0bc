use confile_admin_shared::SelectedFile;
use web_sys::{FileList, HtmlInputElement};
use yew::prelude::*;

use crate::components::icons::{Icon, IconName};

fn selected_files(list: Option<FileList>) -> Vec<SelectedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .map(|file| SelectedFile::new(file.name(), file.size().max(0.0) as u64))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct DropzoneProps {
    #[prop_or_else(|| AttrValue::from("*"))]
    pub accept: AttrValue,
    #[prop_or(true)]
    pub multiple: bool,
    /// Fired once per picker change or drop, with the full new selection.
    pub on_change: Callback<Vec<SelectedFile>>,
}

/// Drop target wrapping a hidden file input. Clicking the zone or the
/// "Choose files" button opens the same picker.
#[function_component(Dropzone)]
pub fn dropzone(props: &DropzoneProps) -> Html {
    let input_ref = use_node_ref();
    let dragging = use_state(|| false);

    let open_picker = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_input_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(selected_files(input.files()));
            }
        })
    };

    // The programmatic input.click() bubbles back to the zone otherwise.
    let swallow_click = Callback::from(|event: MouseEvent| event.stop_propagation());

    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            if !*dragging {
                dragging.set(true);
            }
        })
    };

    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |_: DragEvent| dragging.set(false))
    };

    let on_drop = {
        let dragging = dragging.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            dragging.set(false);
            let files = event.data_transfer().and_then(|transfer| transfer.files());
            on_change.emit(selected_files(files));
        })
    };

    html! {
        <>
            <div
                class={classes!("dropzone", (*dragging).then_some("dragover"))}
                onclick={open_picker.clone()}
                ondragover={on_drag_over}
                ondragleave={on_drag_leave}
                ondrop={on_drop}
            >
                <Icon name={IconName::UploadCloud} class={classes!("icon-medium", "icon-brand")} />
                <p>{ "Drag & drop files here or click to select" }</p>
                <input
                    ref={input_ref}
                    type="file"
                    multiple={props.multiple}
                    accept={props.accept.clone()}
                    hidden={true}
                    onclick={swallow_click}
                    onchange={on_input_change}
                />
            </div>
            <button type="button" class="btn" onclick={open_picker}>
                <Icon name={IconName::Folder} class={classes!("icon-medium")} />
                <span>{ "Choose files" }</span>
            </button>
        </>
    }
}
