use serde::Serialize;
use std::sync::Mutex;

/// Point-in-time view of the fusion counters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MetricsSnapshot {
    pub cycles: usize,
    pub matched: usize,
    pub clutter: usize,
    pub errors: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_cycle(&self, matched: usize, clutter: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.cycles += 1;
            metrics.matched += matched;
            metrics.clutter += clutter;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.errors += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().map(|metrics| *metrics).unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_across_cycles() {
        let recorder = MetricsRecorder::new();
        recorder.record_cycle(2, 1);
        recorder.record_cycle(3, 0);
        recorder.record_error();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.cycles, 2);
        assert_eq!(snapshot.matched, 5);
        assert_eq!(snapshot.clutter, 1);
        assert_eq!(snapshot.errors, 1);
    }
}
