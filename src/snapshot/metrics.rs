//! Task manager snapshotter: host statistics that degrade field by field.
//!
//! Every metric is sampled independently into its own [`MetricResult`]. A
//! failed metric renders as [`UNAVAILABLE`] while the others still render, so
//! one bad source never blanks the whole view.

use super::clock::TIMESTAMP_FORMAT;
use super::format::{format_bytes, format_duration};
use super::{Snapshot, Snapshotter};
use chrono::Local;
use std::fmt::Write;
use std::thread;
use std::time::Instant;
use sysinfo::{System, MINIMUM_CPU_UPDATE_INTERVAL};
use tracing::debug;

/// Placeholder shown for a metric that could not be sampled.
pub const UNAVAILABLE: &str = "N/A";

/// Why a single metric could not be sampled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    /// The host platform does not expose this metric.
    #[error("not supported on this platform")]
    Unsupported,
    /// The metric exists but produced no usable value this time.
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

/// Result of sampling one metric.
pub type MetricResult<T> = Result<T, MetricError>;

/// Physical memory usage in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Bytes in use.
    pub used: u64,
    /// Total installed bytes.
    pub total: u64,
}

impl MemoryUsage {
    /// Used share of total memory, 0–100.
    #[allow(clippy::cast_precision_loss)]
    pub fn used_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.used as f64 / self.total as f64 * 100.0
    }
}

/// 1, 5 and 15 minute load averages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    /// One minute.
    pub one: f64,
    /// Five minutes.
    pub five: f64,
    /// Fifteen minutes.
    pub fifteen: f64,
}

/// Source of host statistics.
///
/// Each method may fail on its own; callers must not short-circuit on the
/// first failure.
pub trait HostMetrics {
    /// Instantaneous CPU busy percentage, 0–100.
    fn cpu_percent(&mut self) -> MetricResult<f32>;
    /// Number of live processes.
    fn process_count(&mut self) -> MetricResult<usize>;
    /// Physical memory usage.
    fn memory(&mut self) -> MetricResult<MemoryUsage>;
    /// System load averages.
    fn load_average(&mut self) -> MetricResult<LoadAverage>;
}

impl<M: HostMetrics + ?Sized> HostMetrics for Box<M> {
    fn cpu_percent(&mut self) -> MetricResult<f32> {
        (**self).cpu_percent()
    }

    fn process_count(&mut self) -> MetricResult<usize> {
        (**self).process_count()
    }

    fn memory(&mut self) -> MetricResult<MemoryUsage> {
        (**self).memory()
    }

    fn load_average(&mut self) -> MetricResult<LoadAverage> {
        (**self).load_average()
    }
}

/// [`HostMetrics`] backed by the `sysinfo` crate.
///
/// CPU usage is computed between consecutive refreshes, so one instance is
/// kept for the whole task-manager session.
pub struct SysinfoMetrics {
    system: System,
    /// When the baseline CPU refresh was taken.
    baseline: Instant,
}

impl SysinfoMetrics {
    /// Create a sampler, take the baseline CPU reading and wait out
    /// [`MINIMUM_CPU_UPDATE_INTERVAL`] so the first sample is meaningful.
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu();
        let baseline = Instant::now();
        thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        Self { system, baseline }
    }
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl HostMetrics for SysinfoMetrics {
    fn cpu_percent(&mut self) -> MetricResult<f32> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MetricError::Unsupported);
        }
        // Two refreshes closer than this give a meaningless difference
        if self.baseline.elapsed() < MINIMUM_CPU_UPDATE_INTERVAL {
            return Err(MetricError::Unavailable("cpu warming up"));
        }
        self.system.refresh_cpu();
        if self.system.cpus().is_empty() {
            return Err(MetricError::Unavailable("cpu"));
        }
        let usage = self.system.global_cpu_info().cpu_usage();
        if usage.is_finite() {
            Ok(usage.clamp(0.0, 100.0))
        } else {
            Err(MetricError::Unavailable("cpu"))
        }
    }

    fn process_count(&mut self) -> MetricResult<usize> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MetricError::Unsupported);
        }
        self.system.refresh_processes();
        match self.system.processes().len() {
            0 => Err(MetricError::Unavailable("process list")),
            count => Ok(count),
        }
    }

    fn memory(&mut self) -> MetricResult<MemoryUsage> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MetricError::Unsupported);
        }
        self.system.refresh_memory();
        let total = self.system.total_memory();
        if total == 0 {
            return Err(MetricError::Unavailable("memory"));
        }
        Ok(MemoryUsage {
            used: self.system.used_memory(),
            total,
        })
    }

    fn load_average(&mut self) -> MetricResult<LoadAverage> {
        if cfg!(windows) || !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MetricError::Unsupported);
        }
        let load = System::load_average();
        Ok(LoadAverage {
            one: load.one,
            five: load.five,
            fifteen: load.fifteen,
        })
    }
}

/// One sampling pass over every metric.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSample {
    /// CPU busy percentage.
    pub cpu: MetricResult<f32>,
    /// Live process count.
    pub processes: MetricResult<usize>,
    /// Memory usage.
    pub memory: MetricResult<MemoryUsage>,
    /// Load averages.
    pub load: MetricResult<LoadAverage>,
}

impl HostSample {
    /// Query every metric, keeping each outcome.
    pub fn collect(metrics: &mut dyn HostMetrics) -> Self {
        let sample = Self {
            cpu: metrics.cpu_percent(),
            processes: metrics.process_count(),
            memory: metrics.memory(),
            load: metrics.load_average(),
        };
        sample.log_failures();
        sample
    }

    fn log_failures(&self) {
        let failures = [
            ("cpu", self.cpu.as_ref().err()),
            ("processes", self.processes.as_ref().err()),
            ("memory", self.memory.as_ref().err()),
            ("load", self.load.as_ref().err()),
        ];
        for (metric, error) in failures {
            if let Some(error) = error {
                debug!(metric, %error, "metric sample failed");
            }
        }
    }

    /// CPU field text.
    pub fn cpu_text(&self) -> String {
        self.cpu
            .as_ref()
            .map_or_else(|_| UNAVAILABLE.to_string(), |pct| format!("{pct:.1}%"))
    }

    /// Process count field text.
    pub fn processes_text(&self) -> String {
        self.processes
            .as_ref()
            .map_or_else(|_| UNAVAILABLE.to_string(), ToString::to_string)
    }

    /// Memory field text.
    pub fn memory_text(&self) -> String {
        self.memory.as_ref().map_or_else(
            |_| UNAVAILABLE.to_string(),
            |mem| {
                format!(
                    "{} / {} ({:.1}%)",
                    format_bytes(mem.used),
                    format_bytes(mem.total),
                    mem.used_percent()
                )
            },
        )
    }

    /// Load average field text.
    pub fn load_text(&self) -> String {
        self.load.as_ref().map_or_else(
            |_| UNAVAILABLE.to_string(),
            |load| {
                format!(
                    "1m {:.2} / 5m {:.2} / 15m {:.2}",
                    load.one, load.five, load.fifteen
                )
            },
        )
    }
}

/// The task manager view.
pub struct TaskManagerSnapshotter<M> {
    metrics: M,
    started: Instant,
}

impl<M: HostMetrics> TaskManagerSnapshotter<M> {
    /// Create the view. `started` is when the shell booted, for the uptime line.
    pub const fn new(metrics: M, started: Instant) -> Self {
        Self { metrics, started }
    }
}

impl<M: HostMetrics> Snapshotter for TaskManagerSnapshotter<M> {
    fn snapshot(&mut self) -> Snapshot {
        let sample = HostSample::collect(&mut self.metrics);

        let mut text = String::new();
        let _ = writeln!(text, "Time: {}", Local::now().format(TIMESTAMP_FORMAT));
        let _ = writeln!(text, "CPU: {}", sample.cpu_text());
        let _ = writeln!(text, "Processes: {}", sample.processes_text());
        let _ = writeln!(text, "Memory: {}", sample.memory_text());
        let _ = writeln!(text, "Load average: {}", sample.load_text());
        let _ = write!(text, "Uptime: {}", format_duration(self.started.elapsed()));

        Snapshot::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted metrics; `None` fields fail.
    #[derive(Default)]
    struct FakeMetrics {
        cpu: Option<f32>,
        processes: Option<usize>,
        memory: Option<MemoryUsage>,
        load: Option<LoadAverage>,
    }

    impl HostMetrics for FakeMetrics {
        fn cpu_percent(&mut self) -> MetricResult<f32> {
            self.cpu.ok_or(MetricError::Unavailable("cpu"))
        }

        fn process_count(&mut self) -> MetricResult<usize> {
            self.processes.ok_or(MetricError::Unavailable("process list"))
        }

        fn memory(&mut self) -> MetricResult<MemoryUsage> {
            self.memory.ok_or(MetricError::Unavailable("memory"))
        }

        fn load_average(&mut self) -> MetricResult<LoadAverage> {
            self.load.ok_or(MetricError::Unsupported)
        }
    }

    fn healthy() -> FakeMetrics {
        FakeMetrics {
            cpu: Some(12.34),
            processes: Some(321),
            memory: Some(MemoryUsage {
                used: 2 * 1024 * 1024 * 1024,
                total: 8 * 1024 * 1024 * 1024,
            }),
            load: Some(LoadAverage {
                one: 0.5,
                five: 0.25,
                fifteen: 1.0,
            }),
        }
    }

    #[test]
    fn test_all_metrics_present() {
        let mut view = TaskManagerSnapshotter::new(healthy(), Instant::now());
        let snapshot = view.snapshot();
        let text = snapshot.text();

        assert!(text.contains("CPU: 12.3%"));
        assert!(text.contains("Processes: 321"));
        assert!(text.contains("Memory: 2.0 GB / 8.0 GB (25.0%)"));
        assert!(text.contains("Load average: 1m 0.50 / 5m 0.25 / 15m 1.00"));
        assert!(text.contains("Uptime: 00h00m00s"));
        assert!(!text.contains(UNAVAILABLE));
    }

    #[test]
    fn test_cpu_failure_keeps_memory() {
        let metrics = FakeMetrics {
            cpu: None,
            ..healthy()
        };
        let mut view = TaskManagerSnapshotter::new(metrics, Instant::now());
        let snapshot = view.snapshot();
        let text = snapshot.text();

        assert!(text.contains("CPU: N/A"));
        assert!(text.contains("Memory: 2.0 GB / 8.0 GB (25.0%)"));
        assert!(text.contains("Processes: 321"));
    }

    #[test]
    fn test_every_metric_failing_still_renders() {
        let mut view = TaskManagerSnapshotter::new(FakeMetrics::default(), Instant::now());
        let snapshot = view.snapshot();
        let text = snapshot.text();

        assert!(text.contains("CPU: N/A"));
        assert!(text.contains("Processes: N/A"));
        assert!(text.contains("Memory: N/A"));
        assert!(text.contains("Load average: N/A"));
        assert!(text.starts_with("Time: "));
    }

    #[test]
    fn test_collect_queries_every_metric() {
        let mut metrics = FakeMetrics {
            memory: None,
            ..healthy()
        };
        let sample = HostSample::collect(&mut metrics);

        assert_eq!(sample.cpu, Ok(12.34));
        assert_eq!(sample.processes, Ok(321));
        assert!(sample.memory.is_err());
        assert!(sample.load.is_ok());
    }

    #[test]
    fn test_memory_percent_zero_total() {
        let mem = MemoryUsage { used: 5, total: 0 };
        assert!(mem.used_percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_sysinfo_first_sample_after_full_interval() {
        let start = Instant::now();
        let mut metrics = SysinfoMetrics::new();
        assert!(start.elapsed() >= MINIMUM_CPU_UPDATE_INTERVAL);
        assert_ne!(
            metrics.cpu_percent(),
            Err(MetricError::Unavailable("cpu warming up"))
        );
    }

    #[test]
    fn test_sysinfo_cpu_unavailable_right_after_baseline() {
        let mut metrics = SysinfoMetrics {
            system: System::new(),
            baseline: Instant::now(),
        };
        let expected = if sysinfo::IS_SUPPORTED_SYSTEM {
            MetricError::Unavailable("cpu warming up")
        } else {
            MetricError::Unsupported
        };
        assert_eq!(metrics.cpu_percent(), Err(expected));
    }

    #[test]
    fn test_sysinfo_sample_never_panics() {
        let mut metrics = SysinfoMetrics::new();
        let sample = HostSample::collect(&mut metrics);

        if let Ok(pct) = sample.cpu {
            assert!((0.0..=100.0).contains(&pct));
        }
        if let Ok(mem) = sample.memory {
            assert!(mem.used <= mem.total);
        }
    }
}
