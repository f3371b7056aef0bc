use chrono::Local;
use confile_admin_shared::{
    filter_window,
    views::{activity_listing, Listing},
    ActivityFeed, DateWindow,
};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::{use_icon_refresh, use_store_updates},
    store::StoreHandle,
};

#[derive(Properties, PartialEq)]
pub struct ActivityPanelProps {
    pub store: StoreHandle,
    #[prop_or_default]
    pub initial: DateWindow,
    /// Toolbar buttons, in display order.
    #[prop_or_else(|| DateWindow::PRESETS.to_vec())]
    pub presets: Vec<DateWindow>,
}

/// Activity feed with a date-window toolbar (Today / 1d / 7d / 30d unless the
/// host page names its own). Switching the window recomputes the cutoff
/// against the current clock and repaints the list.
#[function_component(ActivityPanel)]
pub fn activity_panel(props: &ActivityPanelProps) -> Html {
    use_store_updates(&props.store);
    use_icon_refresh();

    let window = use_state(|| props.initial);

    let listing = props.store.read(|store| {
        let now = Local::now();
        activity_listing(filter_window(store.activity(), *window, &now), &Local)
    });

    html! {
        <>
            <div class="activity-filter" role="tablist">
                <Icon name={IconName::Activity} size={16} class={classes!("activity-filter-icon")} />
                { for props.presets.iter().copied().map(|preset| {
                    let selected = preset == *window;
                    let onclick = {
                        let window = window.clone();
                        Callback::from(move |_: MouseEvent| window.set(preset))
                    };
                    html! {
                        <button
                            type="button"
                            role="tab"
                            class={if selected { "activity-filter-active" } else { "activity-filter-button" }}
                            data-days={preset.days().to_string()}
                            aria-selected={selected.to_string()}
                            {onclick}
                        >
                            { preset.label() }
                        </button>
                    }
                }) }
            </div>
            <ul class="activity-list">
                { match listing {
                    Listing::Empty(message) => html! { <li class="activity-empty">{ message }</li> },
                    Listing::Rows(rows) => html! {
                        <>{ for rows.into_iter().map(|row| html! {
                            <li class="activity-item">
                                <div class="activity-avatar">{ row.initial.to_string() }</div>
                                <div class="activity-body">
                                    <p class="activity-text"><strong>{ row.user }</strong>{ " " }{ row.action }</p>
                                    <span class="activity-meta">{ row.when }</span>
                                </div>
                            </li>
                        }) }</>
                    },
                } }
            </ul>
        </>
    }
}
