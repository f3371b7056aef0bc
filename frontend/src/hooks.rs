use yew::prelude::*;

use crate::{components::icons::refresh_icons, store::StoreHandle};

/// Re-render the calling component whenever any panel mutates `store`.
///
/// The subscription lives exactly as long as the component:
///
/// ```ignore
/// #[function_component(UsersPanel)]
/// fn users_panel(props: &UsersPanelProps) -> Html {
///     use_store_updates(&props.store);
///     let users = props.store.read(|s| s.list_users().len());
///     html! { <p>{ users }</p> }
/// }
/// ```
#[hook]
pub fn use_store_updates(store: &StoreHandle) {
    let update = use_force_update();

    use_effect_with(store.clone(), move |store| {
        let subscription = store.subscribe(Callback::from(move |_| update.force_update()));
        move || drop(subscription)
    });
}

/// Let a host-loaded icon library process placeholders after every paint.
#[hook]
pub fn use_icon_refresh() {
    use_effect(|| {
        refresh_icons();
    });
}
