use confile_admin_shared::{
    views::{Listing, UserRow, UsersView},
    UserDirectory,
};
use web_sys::console;
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::{use_icon_refresh, use_store_updates},
    store::StoreHandle,
};

#[derive(Properties, PartialEq)]
pub struct UsersPanelProps {
    pub store: StoreHandle,
}

#[derive(Clone, Copy)]
enum Decision {
    Approve,
    Deny,
}

/// Approval queue plus the full user table. Any decision repaints both.
#[function_component(UsersPanel)]
pub fn users_panel(props: &UsersPanelProps) -> Html {
    use_store_updates(&props.store);
    use_icon_refresh();

    let view = props.store.read(|store| UsersView::build(store.list_users()));

    let decide = {
        let store = props.store.clone();
        Callback::from(move |(id, decision): (u32, Decision)| {
            let outcome = match decision {
                Decision::Approve => store.approve(id),
                Decision::Deny => store.deny(id),
            };
            if let Err(err) = outcome {
                console::warn_1(&format!("User action ignored: {err}").into());
            }
        })
    };

    html! {
        <>
            <div class="section-header">
                <h2 class="section-title">
                    <Icon name={IconName::Users} size={20} />
                    { "Users" }
                </h2>
            </div>

            <div class="section-block">
                <h3 class="section-subtitle">{ "Needs approval" }</h3>
                { match view.pending {
                    Listing::Empty(message) => html! { <div class="panel panel-empty">{ message }</div> },
                    Listing::Rows(rows) => html! {
                        <div class="panel">
                            { for rows.into_iter().map(|row| pending_row(row, &decide)) }
                        </div>
                    },
                } }
            </div>

            <div class="section-block">
                <h3 class="section-subtitle">{ "All Users" }</h3>
                { match view.all {
                    Listing::Empty(message) => html! { <div class="panel panel-empty">{ message }</div> },
                    Listing::Rows(rows) => html! {
                        <div class="panel">
                            <table class="data-table">
                                <thead>
                                    <tr><th>{ "Name" }</th><th>{ "Email" }</th><th>{ "Status" }</th></tr>
                                </thead>
                                <tbody>
                                    { for rows.into_iter().map(|row| html! {
                                        <tr key={row.id}>
                                            <td>{ row.name }</td>
                                            <td>{ row.email }</td>
                                            <td>{ row.status.label() }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    },
                } }
            </div>
        </>
    }
}

fn pending_row(row: UserRow, decide: &Callback<(u32, Decision)>) -> Html {
    let id = row.id;
    let on_approve = decide.reform(move |_: MouseEvent| (id, Decision::Approve));
    let on_deny = decide.reform(move |_: MouseEvent| (id, Decision::Deny));

    html! {
        <div class="user-row" key={id}>
            <div>
                <strong>{ row.name }</strong>
                <div class="user-email">{ row.email }</div>
            </div>
            <div class="user-actions">
                <button type="button" class="btn btn-primary" data-approve={id.to_string()} onclick={on_approve}>
                    <Icon name={IconName::Check} size={14} />
                    { "Approve" }
                </button>
                <button type="button" class="btn" data-deny={id.to_string()} onclick={on_deny}>
                    { "Deny" }
                </button>
            </div>
        </div>
    }
}
