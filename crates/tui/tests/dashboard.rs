//! End-to-end: scripted providers flow through the background sampling
//! task, across the channel handoff, into the panels and onto a terminal.

use plotmon_config::MonitorConfig;
use plotmon_core::{MemoryUsage, Message, MonitorError, Result};
use plotmon_system::{spawn_monitor, MetricsProvider};
use plotmon_tui::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::time::Duration;

/// CPU values served one per cycle; memory always unavailable.
struct ScriptedCpu {
    values: VecDeque<f64>,
}

impl MetricsProvider for ScriptedCpu {
    fn cpu_percent(&mut self) -> Result<f64> {
        self.values
            .pop_front()
            .ok_or_else(|| MonitorError::Provider("script exhausted".into()))
    }

    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        Err(MonitorError::Provider("memory unavailable".into()))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn two_cpu_ticks_land_in_order_with_one_redraw_each() {
    let provider = ScriptedCpu {
        values: VecDeque::from([42.0, 17.5]),
    };
    let mut samples = spawn_monitor(provider, Duration::from_millis(5));

    let mut app = App::new(&MonitorConfig::default());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

    let mut redraws = 0;
    while redraws < 2 {
        let message = samples.recv().await.expect("sampler exited early");
        assert!(matches!(message, Message::CpuSample(_)));
        if app.handle_message(message) {
            terminal.draw(|frame| app.draw(frame)).unwrap();
            redraws += 1;
        }
    }
    drop(samples);

    let cpu = app.cpu().samples();
    assert_eq!(&cpu[cpu.len() - 2..], &[42.0, 17.5]);
    assert_eq!(redraws, 2);

    // Memory never produced a sample, so its history is still the zeroed
    // baseline.
    assert!(app.memory().samples().iter().all(|&b| b == 0));
}

/// Memory values served one per cycle; CPU always unavailable.
struct ScriptedMemory {
    values: VecDeque<MemoryUsage>,
}

impl MetricsProvider for ScriptedMemory {
    fn cpu_percent(&mut self) -> Result<f64> {
        Err(MonitorError::Provider("cpu unavailable".into()))
    }

    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        self.values
            .pop_front()
            .ok_or_else(|| MonitorError::Provider("script exhausted".into()))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_cpu_leaves_cpu_history_untouched_while_memory_advances() {
    let provider = ScriptedMemory {
        values: VecDeque::from([
            MemoryUsage {
                used: 1 << 30,
                available: 4 << 30,
            },
            MemoryUsage {
                used: 2 << 30,
                available: 4 << 30,
            },
        ]),
    };
    let mut samples = spawn_monitor(provider, Duration::from_millis(5));

    let mut app = App::new(&MonitorConfig::default());
    let cpu_before = app.cpu().samples();

    for _ in 0..2 {
        let message = samples.recv().await.expect("sampler exited early");
        app.handle_message(message);
    }
    drop(samples);

    assert_eq!(app.cpu().samples(), cpu_before);
    let memory = app.memory().samples();
    assert_eq!(&memory[memory.len() - 2..], &[1 << 30, 2 << 30]);
    assert_eq!(app.memory().tick_labels()[1], "4.0 GB");
}
