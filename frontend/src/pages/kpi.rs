use confile_admin_shared::kpi::KpiSnapshot;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::{components::stats_card::StatsCard, utils};

#[derive(Properties, PartialEq)]
pub struct KpiBoardProps {
    pub refresh_ms: u32,
}

/// Current reading, redrawn every `refresh_ms` while the caller is mounted.
#[hook]
fn use_kpi_snapshot(refresh_ms: u32) -> UseStateHandle<KpiSnapshot> {
    let snapshot = use_state(|| KpiSnapshot::sample(&mut rand::thread_rng()));

    {
        let snapshot = snapshot.clone();
        use_effect_with(refresh_ms, move |refresh_ms| {
            let interval = Interval::new(*refresh_ms, move || {
                snapshot.set(KpiSnapshot::sample(&mut rand::thread_rng()));
            });
            // Dropping the interval clears it.
            move || drop(interval)
        });
    }

    snapshot
}

/// Header KPI cards, redrawn on a fixed interval while mounted.
#[function_component(KpiBoard)]
pub fn kpi_board(props: &KpiBoardProps) -> Html {
    let snapshot = use_kpi_snapshot(props.refresh_ms);

    html! {
        <div class="kpi-grid">
            { for snapshot.cards().into_iter().map(|card| html! {
                <StatsCard
                    key={card.id}
                    title={card.title}
                    value={card.value}
                    value_id={Some(AttrValue::from(card.id))}
                    note={Some(AttrValue::from(card.note))}
                />
            }) }
        </div>
    }
}

/// Keeps the text of a host page's own KPI value and note elements current.
/// Renders nothing itself.
#[function_component(KpiHostFields)]
pub fn kpi_host_fields(props: &KpiBoardProps) -> Html {
    let snapshot = use_kpi_snapshot(props.refresh_ms);

    use_effect_with((*snapshot).clone(), |snapshot| {
        for card in snapshot.cards() {
            if let Some(value) = utils::by_id(card.id) {
                value.set_text_content(Some(&card.value));
            }
            if let Some(note) = utils::by_id(&card.note_id()) {
                note.set_text_content(Some(card.note));
            }
        }
    });

    html! {}
}
