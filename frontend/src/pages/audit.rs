use chrono::Local;
use confile_admin_shared::{
    views::{audit_listing, Listing},
    AuditLog,
};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::use_icon_refresh,
    store::StoreHandle,
};

#[derive(Properties, PartialEq)]
pub struct AuditPanelProps {
    pub store: StoreHandle,
}

#[function_component(AuditPanel)]
pub fn audit_panel(props: &AuditPanelProps) -> Html {
    use_icon_refresh();

    let listing = props.store.read(|store| audit_listing(store.audit_entries(), &Local));

    html! {
        <>
            <div class="section-header">
                <h2 class="section-title">
                    <Icon name={IconName::Clock} size={20} />
                    { "Audit Logs" }
                </h2>
            </div>
            { match listing {
                Listing::Empty(message) => html! { <div class="panel panel-empty">{ message }</div> },
                Listing::Rows(rows) => html! {
                    <div class="panel">
                        <table class="data-table">
                            <thead>
                                <tr><th>{ "Time" }</th><th>{ "User" }</th><th>{ "Action" }</th></tr>
                            </thead>
                            <tbody>
                                { for rows.into_iter().map(|row| html! {
                                    <tr>
                                        <td>{ row.when }</td>
                                        <td>{ row.user }</td>
                                        <td>{ row.action }</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                },
            } }
        </>
    }
}
