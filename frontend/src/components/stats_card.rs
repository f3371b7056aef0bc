use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub title: AttrValue,
    pub value: String,
    /// Element id of the value, kept for host stylesheets and tests.
    #[prop_or_default]
    pub value_id: Option<AttrValue>,
    #[prop_or_default]
    pub note: Option<AttrValue>,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div class="stats-card kpi-card" role="status">
            <span class="stats-card-title">{ props.title.clone() }</span>
            <strong class="stats-card-value" id={props.value_id.clone()}>{ props.value.clone() }</strong>
            if let Some(note) = props.note.clone() {
                <span class="stats-card-note">{ note }</span>
            }
        </div>
    }
}
