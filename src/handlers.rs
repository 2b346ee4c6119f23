use crate::fetch;
use crate::models::{ActivityDisplay, JokeDisplay, WidgetSnapshot, JOKE_FALLBACK};
use crate::state::AppState;
use crate::tally::ChartSeries;
use crate::ui::INDEX_HTML;
use axum::{extract::State, response::Html, Json};
use tracing::error;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn get_widget(State(state): State<AppState>) -> Json<WidgetSnapshot> {
    let widget = state.widget.lock().await;
    Json(widget.snapshot())
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartSeries> {
    let widget = state.widget.lock().await;
    Json(widget.tally.chart_series())
}

pub async fn fetch_solo(State(state): State<AppState>) -> Json<ActivityDisplay> {
    Json(apply_activity_fetch(&state, ActivityUnit::Solo).await)
}

pub async fn fetch_group(State(state): State<AppState>) -> Json<ActivityDisplay> {
    Json(apply_activity_fetch(&state, ActivityUnit::Group).await)
}

pub async fn tell_joke(State(state): State<AppState>) -> Json<JokeDisplay> {
    let outcome = fetch::fetch_joke(&state.client, &state.config.joke_api_url).await;
    let value = match outcome {
        Ok(joke) => joke.value,
        Err(err) => {
            error!("failed to fetch joke: {err}");
            JOKE_FALLBACK.to_string()
        }
    };

    let mut widget = state.widget.lock().await;
    widget.joke = value.clone();
    Json(JokeDisplay { value })
}

#[derive(Clone, Copy)]
enum ActivityUnit {
    Solo,
    Group,
}

impl ActivityUnit {
    fn participants(self) -> u32 {
        match self {
            Self::Solo => 1,
            Self::Group => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Group => "group",
        }
    }
}

async fn apply_activity_fetch(state: &AppState, unit: ActivityUnit) -> ActivityDisplay {
    let outcome = fetch::fetch_activity(
        &state.client,
        &state.config.activity_api_url,
        unit.participants(),
    )
    .await;

    // The lock is taken only after the upstream call resolves, so overlapping
    // requests for the same unit settle last-to-complete-wins.
    let mut widget = state.widget.lock().await;
    let display = match outcome {
        Ok(result) => {
            widget.tally.record(&result.kind);
            ActivityDisplay::from_result(result)
        }
        Err(err) => {
            error!("failed to fetch {} activity: {err}", unit.name());
            ActivityDisplay::fallback()
        }
    };

    match unit {
        ActivityUnit::Solo => widget.solo = Some(display.clone()),
        ActivityUnit::Group => widget.group = Some(display.clone()),
    }

    display
}
