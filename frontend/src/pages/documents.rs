use confile_admin_shared::{
    views::{document_listing, Listing},
    DocType, DocumentLibrary,
};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::{use_icon_refresh, use_store_updates},
    store::StoreHandle,
};

fn type_icon(doc_type: DocType) -> IconName {
    match doc_type {
        DocType::Pdf | DocType::Docs => IconName::FileText,
        DocType::Excel => IconName::FileSpreadsheet,
        DocType::Image => IconName::Image,
    }
}

#[derive(Properties, PartialEq)]
pub struct DocumentsPanelProps {
    pub store: StoreHandle,
}

/// Document library; repaints when an upload or conversion completes.
#[function_component(DocumentsPanel)]
pub fn documents_panel(props: &DocumentsPanelProps) -> Html {
    use_store_updates(&props.store);
    use_icon_refresh();

    let listing = props.store.read(|store| document_listing(store.documents()));

    match listing {
        Listing::Empty(message) => html! { <div class="panel panel-empty">{ message }</div> },
        Listing::Rows(docs) => html! {
            <table class="data-table documents-table">
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Type" }</th>
                        <th>{ "Size" }</th>
                        <th>{ "Modified" }</th>
                        <th>{ "Owner" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for docs.into_iter().map(|doc| html! {
                        <tr class={classes!("doc-row", format!("doc-{}", doc.doc_type))}>
                            <td>
                                <Icon name={type_icon(doc.doc_type)} size={16} class={classes!("doc-icon")} />
                                <span class="doc-name">{ doc.name }</span>
                            </td>
                            <td>{ doc.doc_type.as_str() }</td>
                            <td>{ doc.size }</td>
                            <td>{ doc.modified }</td>
                            <td>{ doc.owner }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    }
}
