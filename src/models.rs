use crate::tally::TypeTally;
use serde::{Deserialize, Serialize};

pub const ACTIVITY_FALLBACK: &str = "Failed to fetch new activity. Please try again!";
pub const JOKE_FALLBACK: &str = "Failed to fetch a joke. Please try again!";
pub const JOKE_PROMPT: &str = "Click the button to hear a joke!";

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityResult {
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub participants: u32,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JokeResult {
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityDisplay {
    pub activity: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ActivityDisplay {
    pub fn from_result(result: ActivityResult) -> Self {
        Self {
            activity: result.activity,
            kind: Some(result.kind),
            participants: Some(result.participants),
            // The activity API sends an empty string when there is no link.
            link: result.link.filter(|link| !link.is_empty()),
        }
    }

    pub fn fallback() -> Self {
        Self {
            activity: ACTIVITY_FALLBACK.to_string(),
            kind: None,
            participants: None,
            link: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JokeDisplay {
    pub value: String,
}

#[derive(Debug)]
pub struct WidgetState {
    pub solo: Option<ActivityDisplay>,
    pub group: Option<ActivityDisplay>,
    pub joke: String,
    pub tally: TypeTally,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            solo: None,
            group: None,
            joke: JOKE_PROMPT.to_string(),
            tally: TypeTally::default(),
        }
    }
}

impl WidgetState {
    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            solo: self.solo.clone(),
            group: self.group.clone(),
            joke: self.joke.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WidgetSnapshot {
    pub solo: Option<ActivityDisplay>,
    pub group: Option<ActivityDisplay>,
    pub joke: String,
}
