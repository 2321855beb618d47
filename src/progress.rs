// Scripted progress updates shown while a blog is being generated

use std::time::Duration;

use crate::models::ProgressState;

/// `(stage label, percent, delay before the next stage in units)`
pub const STAGES: [(&str, u8, u32); 7] = [
    ("Preparing resources", 5, 10),
    ("Researching topic", 15, 20),
    ("Planning content structure", 35, 15),
    ("Generating content", 50, 30),
    ("Optimizing SEO", 80, 15),
    ("Finalizing blog", 90, 10),
    ("Blog completed!", 100, 0),
];

pub const DEFAULT_UNIT: Duration = Duration::from_millis(100);

/// Receives progress updates from a running generation.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, state: ProgressState);
}

impl<F> ProgressSink for F
where
    F: Fn(ProgressState) + Send + Sync,
{
    fn emit(&self, state: ProgressState) {
        self(state);
    }
}

/// Time the full script takes with the given unit.
pub fn total_duration(unit: Duration) -> Duration {
    let units: u32 = STAGES.iter().map(|(_, _, delay)| delay).sum();
    unit * units
}

/// Emit every stage in order, sleeping `delay * unit` after each one.
///
/// Runs to completion once started; there is no cancellation.
pub async fn simulate(sink: &dyn ProgressSink, unit: Duration) {
    for (stage, percent, delay) in STAGES {
        sink.emit(ProgressState::new(stage, percent));
        if delay > 0 {
            tokio::time::sleep(unit * delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    fn recording_sink() -> (Arc<Mutex<Vec<(ProgressState, Instant)>>>, impl ProgressSink) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&events);
        let sink = move |state: ProgressState| {
            captured.lock().unwrap().push((state, Instant::now()));
        };
        (events, sink)
    }

    #[test]
    fn test_script_is_monotonic_and_ends_at_100() {
        let percents: Vec<u8> = STAGES.iter().map(|(_, p, _)| *p).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(percents.last(), Some(&100));
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(total_duration(DEFAULT_UNIT), Duration::from_millis(10_000));
        assert_eq!(total_duration(Duration::from_millis(1)), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_emits_full_script_in_order() {
        let (events, sink) = recording_sink();
        simulate(&sink, DEFAULT_UNIT).await;

        let events = events.lock().unwrap();
        let stages: Vec<&str> = events.iter().map(|(s, _)| s.stage.as_str()).collect();
        let expected: Vec<&str> = STAGES.iter().map(|(s, _, _)| *s).collect();
        assert_eq!(stages, expected);

        let percents: Vec<u8> = events.iter().map(|(s, _)| s.percent).collect();
        assert!(percents.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(percents.last(), Some(&100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulate_waits_between_stages() {
        let (events, sink) = recording_sink();
        let start = Instant::now();
        simulate(&sink, DEFAULT_UNIT).await;

        let events = events.lock().unwrap();
        let offsets: Vec<Duration> = events.iter().map(|(_, at)| *at - start).collect();
        let expected: Vec<Duration> = [0, 10, 30, 45, 75, 90, 100]
            .iter()
            .map(|units| DEFAULT_UNIT * *units)
            .collect();
        assert_eq!(offsets, expected);
        assert_eq!(start.elapsed(), total_duration(DEFAULT_UNIT));
    }
}
