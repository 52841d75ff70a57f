pub mod provider;
pub mod sampler;

pub use provider::{MetricsProvider, SysinfoProvider};
pub use sampler::Sampler;

use plotmon_core::Message;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

/// Spawn the background sampling task and return the channel the UI loop
/// consumes.
///
/// The task owns the repeating timer. Exactly one sampling cycle runs per
/// tick and cycles never overlap: the loop awaits each cycle before asking
/// the timer again, and ticks that fire while a cycle is still in flight
/// are skipped rather than queued ([`MissedTickBehavior::Skip`]). The task
/// stops automatically when the receiver is dropped; an in-flight cycle
/// finishes but no new one starts.
pub fn spawn_monitor<P: MetricsProvider>(
    provider: P,
    interval: Duration,
) -> mpsc::Receiver<Message> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        let mut sampler = Sampler::new(provider, tx);
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if !sampler.run_cycle().await {
                break; // all receivers dropped
            }
        }
    });

    rx
}
