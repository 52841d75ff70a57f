use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use plotmon_config::MonitorConfig;
use plotmon_core::{Message, Result};
use plotmon_panels::{CpuPanel, MemoryPanel};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

/// Dashboard state — exactly two panels, CPU above memory.
///
/// All mutation happens on the loop in [`App::run`]; panels are never
/// touched from another task.
pub struct App {
    cpu: CpuPanel,
    memory: MemoryPanel,
    running: bool,
}

impl App {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            cpu: CpuPanel::new(config.history_len),
            memory: MemoryPanel::new(config.history_len),
            running: true,
        }
    }

    /// Apply one sampler message to its panel.  Returns `true` when the
    /// update warrants a redraw.
    pub fn handle_message(&mut self, message: Message) -> bool {
        match message {
            Message::CpuSample(percent) => self.cpu.update(percent),
            Message::MemorySample(usage) => self.memory.update(usage),
        }
        true
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(frame.area());
        self.cpu.render(frame, rows[0]);
        self.memory.render(frame, rows[1]);
    }

    pub fn cpu(&self) -> &CpuPanel {
        &self.cpu
    }

    pub fn memory(&self) -> &MemoryPanel {
        &self.memory
    }

    /// Event loop: one redraw per delivered sample; `q`, `Esc` or `Ctrl-C`
    /// quits.  Exits on its own if the sampler goes away.
    pub async fn run<B: Backend>(
        mut self,
        terminal: &mut Terminal<B>,
        samples: &mut mpsc::Receiver<Message>,
    ) -> Result<()> {
        let mut input = EventStream::new();
        let mut input_open = true;

        // Initial draw from the pre-filled histories so both charts show a
        // full-width baseline before the first sample lands.
        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            tokio::select! {
                maybe_message = samples.recv() => match maybe_message {
                    Some(message) => {
                        if self.handle_message(message) {
                            terminal.draw(|frame| self.draw(frame))?;
                        }
                    }
                    None => break, // sampler exited
                },
                maybe_event = input.next(), if input_open => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    Some(_) => {}
                    None => input_open = false, // no interactive terminal
                },
            }
        }

        Ok(())
    }
}
