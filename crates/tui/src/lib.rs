//! Terminal front end for plotmon.
//!
//! Owns the terminal lifecycle and the single-threaded event loop that is
//! the sole mutator of panel state. The background sampler communicates
//! with the loop exclusively through the sample channel.

pub mod app;

pub use app::App;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use plotmon_config::MonitorConfig;
use plotmon_core::Result;
use plotmon_system::SysinfoProvider;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::info;

/// Start the dashboard.  Returns when the user quits.
pub async fn run(config: MonitorConfig) -> Result<()> {
    let provider = SysinfoProvider::new();
    let mut samples = plotmon_system::spawn_monitor(
        provider,
        Duration::from_millis(config.sample_interval_ms),
    );

    let mut terminal = setup_terminal()?;
    let result = App::new(&config).run(&mut terminal, &mut samples).await;
    restore_terminal(&mut terminal)?;
    info!("dashboard stopped");
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
