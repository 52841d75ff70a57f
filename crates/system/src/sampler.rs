use crate::provider::MetricsProvider;
use plotmon_core::Message;
use tokio::sync::mpsc;
use tracing::warn;

/// Runs sampling cycles against a [`MetricsProvider`] and forwards results
/// through the channel the UI loop consumes.
///
/// The sampler holds no history; it only knows how to run the next cycle.
pub struct Sampler<P> {
    provider: P,
    tx: mpsc::Sender<Message>,
}

impl<P: MetricsProvider> Sampler<P> {
    pub fn new(provider: P, tx: mpsc::Sender<Message>) -> Self {
        Self { provider, tx }
    }

    /// One fetch-and-deliver pass across both metrics.
    ///
    /// A failed provider call is logged and that metric's update is skipped
    /// for this tick; nothing partial is ever delivered. Returns `false`
    /// once all receivers are gone.
    pub async fn run_cycle(&mut self) -> bool {
        match self.provider.cpu_percent() {
            Ok(percent) => {
                if self.tx.send(Message::CpuSample(percent)).await.is_err() {
                    return false;
                }
            }
            Err(e) => warn!("CPU sample failed, chart stays stale this tick: {e}"),
        }

        match self.provider.virtual_memory() {
            Ok(usage) => {
                if self.tx.send(Message::MemorySample(usage)).await.is_err() {
                    return false;
                }
            }
            Err(e) => warn!("memory sample failed, chart stays stale this tick: {e}"),
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotmon_core::{MemoryUsage, MonitorError, Result};
    use std::collections::VecDeque;

    struct ScriptedProvider {
        cpu: VecDeque<Result<f64>>,
        memory: VecDeque<Result<MemoryUsage>>,
    }

    impl MetricsProvider for ScriptedProvider {
        fn cpu_percent(&mut self) -> Result<f64> {
            self.cpu
                .pop_front()
                .unwrap_or(Err(MonitorError::Provider("script exhausted".into())))
        }

        fn virtual_memory(&mut self) -> Result<MemoryUsage> {
            self.memory
                .pop_front()
                .unwrap_or(Err(MonitorError::Provider("script exhausted".into())))
        }
    }

    #[tokio::test]
    async fn delivers_cpu_then_memory_per_cycle() {
        let (tx, mut rx) = mpsc::channel(4);
        let provider = ScriptedProvider {
            cpu: VecDeque::from([Ok(42.0)]),
            memory: VecDeque::from([Ok(MemoryUsage {
                used: 1024,
                available: 4096,
            })]),
        };

        let mut sampler = Sampler::new(provider, tx);
        assert!(sampler.run_cycle().await);

        assert_eq!(rx.recv().await, Some(Message::CpuSample(42.0)));
        assert_eq!(
            rx.recv().await,
            Some(Message::MemorySample(MemoryUsage {
                used: 1024,
                available: 4096,
            }))
        );
    }

    #[tokio::test]
    async fn failed_cpu_call_skips_only_the_cpu_update() {
        let (tx, mut rx) = mpsc::channel(4);
        let provider = ScriptedProvider {
            cpu: VecDeque::from([Err(MonitorError::Provider("unavailable".into()))]),
            memory: VecDeque::from([Ok(MemoryUsage {
                used: 7,
                available: 9,
            })]),
        };

        let mut sampler = Sampler::new(provider, tx);
        assert!(sampler.run_cycle().await);

        // The cycle still completes and the memory panel still gets its
        // sample; no garbage CPU sample is delivered.
        assert_eq!(
            rx.recv().await,
            Some(Message::MemorySample(MemoryUsage { used: 7, available: 9 }))
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn cycle_with_both_calls_failing_delivers_nothing() {
        let (tx, mut rx) = mpsc::channel(4);
        let provider = ScriptedProvider {
            cpu: VecDeque::new(),
            memory: VecDeque::new(),
        };

        let mut sampler = Sampler::new(provider, tx);
        assert!(sampler.run_cycle().await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn reports_receiver_gone() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        let provider = ScriptedProvider {
            cpu: VecDeque::from([Ok(1.0)]),
            memory: VecDeque::new(),
        };

        let mut sampler = Sampler::new(provider, tx);
        assert!(!sampler.run_cycle().await);
    }
}
