use crate::AxisRange;
use plotmon_core::History;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

const RANGE: AxisRange = AxisRange {
    lower: 0.0,
    upper: 100.0,
};

/// Scrolling chart of average CPU utilization.
///
/// The value axis is pinned to 0–100%, so an update only appends to the
/// history; nothing is recomputed.
#[derive(Debug)]
pub struct CpuPanel {
    history: History<f64>,
}

impl CpuPanel {
    pub fn new(history_len: usize) -> Self {
        Self {
            history: History::filled(history_len, 0.0),
        }
    }

    /// Append a fresh sample, evicting the oldest once the window is full.
    pub fn update(&mut self, percent: f64) {
        self.history.push(percent);
    }

    pub fn axis_range(&self) -> AxisRange {
        RANGE
    }

    pub fn tick_labels(&self) -> [&'static str; 2] {
        ["0", "100%"]
    }

    pub fn samples(&self) -> Vec<f64> {
        self.history.snapshot()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let points: Vec<(f64, f64)> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, v))
            .collect();

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .title(" CPU Usage History ")
                    .borders(Borders::ALL),
            )
            // The x-axis carries no labels; samples scroll right to left.
            .x_axis(Axis::default().bounds([0.0, (self.history.capacity() - 1) as f64]))
            .y_axis(
                Axis::default()
                    .bounds(RANGE.bounds())
                    .labels(self.tick_labels()),
            );

        frame.render_widget(chart, area);
    }
}
