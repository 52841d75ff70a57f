use plotmon_core::{MemoryUsage, MonitorError, Result};
use sysinfo::System;

/// Access to host-level utilization metrics.
///
/// The provider call may block briefly (it is syscall-bound), which is why
/// the sampler runs it off the UI loop. Tests substitute scripted
/// implementations.
pub trait MetricsProvider: Send + 'static {
    /// Average CPU utilization across all cores, percent in `[0, 100]`.
    fn cpu_percent(&mut self) -> Result<f64>;

    /// Current virtual memory usage.
    fn virtual_memory(&mut self) -> Result<MemoryUsage>;
}

/// Production [`MetricsProvider`] backed by [`sysinfo`].
pub struct SysinfoProvider {
    sys: System,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let mut sys = System::new();
        // CPU usage is computed as a delta between refreshes; prime the
        // baseline so the first real sample isn't zero.
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        Self { sys }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_percent(&mut self) -> Result<f64> {
        self.sys.refresh_cpu_usage();
        let cpus = self.sys.cpus();
        if cpus.is_empty() {
            return Err(MonitorError::Provider("no CPUs reported".into()));
        }
        let total: f64 = cpus.iter().map(|c| f64::from(c.cpu_usage())).sum();
        Ok(total / cpus.len() as f64)
    }

    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        self.sys.refresh_memory();
        Ok(MemoryUsage {
            used: self.sys.used_memory(),
            available: self.sys.available_memory(),
        })
    }
}
