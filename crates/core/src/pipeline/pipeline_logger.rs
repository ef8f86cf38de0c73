use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for pipeline events.
///
/// Keeps the use case independent of where timings and counters end up.
pub trait PipelineLogger {
    /// Record how long a named pipeline stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. candidate or face count).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards messages to the `log` crate and prints a per-stage summary at
/// the end of the run.
pub struct LogPipelineLogger {
    timings: HashMap<String, Vec<f64>>,
    metrics: HashMap<String, Vec<f64>>,
    start_time: Instant,
}

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Pipeline summary ({:.1}ms total):", elapsed_ms)];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let calls = durations.len();
            lines.push(format!("  {stage:12}: {total_ms:8.1}ms over {calls} call(s)"));
        }

        let mut metric_names: Vec<_> = self.metrics.keys().collect();
        metric_names.sort();
        for name in metric_names {
            let total: f64 = self.metrics[name].iter().sum();
            lines.push(format!("  {name}: {total}"));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    pub fn metrics_for(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(|v| v.as_slice())
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.timing("detect", 5.0);
        logger.metric("faces", 3.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values() {
        let mut logger = LogPipelineLogger::new();
        logger.timing("classify", 20.0);
        logger.timing("classify", 30.0);
        logger.timing("detect", 5.0);

        let classify = logger.timings_for("classify").unwrap();
        assert_eq!(classify, &[20.0, 30.0]);
        assert_eq!(logger.timings_for("detect").unwrap().len(), 1);
        assert!(logger.timings_for("render").is_none());
    }

    #[test]
    fn test_metric_records_values() {
        let mut logger = LogPipelineLogger::new();
        logger.metric("faces", 2.0);
        assert_eq!(logger.metrics_for("faces").unwrap(), &[2.0]);
    }

    #[test]
    fn test_summary_lists_stages_and_metrics() {
        let mut logger = LogPipelineLogger::new();
        logger.timing("detect", 20.0);
        logger.timing("classify", 5.0);
        logger.metric("faces", 2.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Pipeline summary"));
        assert!(summary.contains("detect"));
        assert!(summary.contains("classify"));
        assert!(summary.contains("faces: 2"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        assert!(LogPipelineLogger::new().summary_string().is_none());
    }
}
