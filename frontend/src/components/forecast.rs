use std::time::Duration;

use common::ForecastDay;
use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

const CARD_PULSE: Duration = Duration::from_secs(1);

#[derive(Clone, Properties, PartialEq)]
pub struct ForecastListProps {
    pub days: Vec<ForecastDay>,
}

/// The multi-day outlook, rebuilt from scratch in payload order on
/// every new report.
#[function_component(ForecastList)]
pub fn forecast_list(props: &ForecastListProps) -> Html {
    html! {
        <div class="forecast-days">
            { for props.days.iter().map(|entry| html! {
                <DayCard entry={entry.clone()} />
            }) }
        </div>
    }
}

#[derive(Clone, Properties, PartialEq)]
struct DayCardProps {
    entry: ForecastDay,
}

#[function_component(DayCard)]
fn day_card(props: &DayCardProps) -> Html {
    let pulsing = use_state(|| false);
    let on_tap = {
        let pulsing = pulsing.clone();
        Callback::from(move |_| {
            if *pulsing {
                return;
            }
            pulsing.set(true);
            let pulsing = pulsing.clone();
            spawn_local(async move {
                sleep(CARD_PULSE).await;
                pulsing.set(false);
            });
        })
    };

    html! {
        <div class={classes!("day-card", (*pulsing).then_some("pulse"))} onclick={on_tap}>
            <div class="day-name">{ &props.entry.day }</div>
            <div class="day-icon">{ &props.entry.icon }</div>
            <div class="day-temp">{ format!("{}°", props.entry.temp) }</div>
            <div class="day-desc">{ &props.entry.desc }</div>
        </div>
    }
}
