use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Wall-clock durations of the loader steps, in execution order.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, timer: Timer) {
        self.steps.push(StepTiming {
            name: timer.name,
            duration: timer.start.elapsed(),
        });
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Duration of the named step, `None` if it did not run.
    pub fn step(&self, name: &str) -> Option<Duration> {
        self.steps.iter().find(|s| s.name == name).map(|s| s.duration)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration().as_secs_f64();
        for step in &self.steps {
            let millis = step.duration.as_secs_f64() * 1000.0;
            let share = if total > 0.0 { step.duration.as_secs_f64() / total * 100.0 } else { 0.0 };
            debug!(step = step.name, millis, share, "Load step finished");
        }
        debug!(millis = total * 1000.0, "Load finished");
    }
}

pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self { start: Instant::now(), name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_in_execution_order() {
        let mut timings = PipelineTimings::new();
        timings.record(Timer::start("locate_raster"));
        timings.record(Timer::start("read_raster"));

        let names: Vec<_> = timings.steps().iter().map(|s| s.name).collect();
        assert_eq!(names, ["locate_raster", "read_raster"]);
        assert!(timings.step("read_raster").is_some());
        assert_eq!(timings.step("rotate"), None);
        assert!(timings.total_duration() >= timings.step("read_raster").unwrap());
    }
}
