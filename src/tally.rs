use serde::Serialize;

/// Cumulative count of activity types seen across all successful fetches in
/// this session. Entries keep first-seen order so chart labels stay stable as
/// counts grow.
#[derive(Debug, Clone, Default)]
pub struct TypeTally {
    entries: Vec<(String, u64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

impl TypeTally {
    pub fn record(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(seen, _)| seen == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.entries.iter().map(|(label, _)| label.clone()).collect(),
            counts: self.entries.iter().map(|(_, count)| *count).collect(),
        }
    }

    pub fn count(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(seen, _)| seen == label)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
