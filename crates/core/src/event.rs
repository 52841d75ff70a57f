/// All messages that flow from the background sampler into the UI loop.
///
/// The UI loop is the sole consumer and the sole mutator of panel state;
/// delivery order on the channel is the order samples were produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Fresh CPU utilization sample, percent in `[0, 100]`.
    CpuSample(f64),
    /// Fresh memory sample.
    MemorySample(MemoryUsage),
}

/// A point-in-time snapshot of virtual memory, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used: u64,
    pub available: u64,
}
