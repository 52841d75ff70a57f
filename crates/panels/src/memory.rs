use crate::AxisRange;
use plotmon_core::units::format_bytes;
use plotmon_core::{History, MemoryUsage};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

/// Scrolling chart of used memory, scaled against the host's available
/// memory.
///
/// The ceiling is refreshed on every sample, so the axis tracks changes in
/// available memory over the process lifetime instead of freezing at the
/// startup value.
#[derive(Debug)]
pub struct MemoryPanel {
    history: History<u64>,
    range: AxisRange,
    tick_labels: [String; 2],
}

impl MemoryPanel {
    pub fn new(history_len: usize) -> Self {
        let mut panel = Self {
            history: History::filled(history_len, 0),
            range: AxisRange {
                lower: 0.0,
                upper: 0.0,
            },
            tick_labels: ["0".to_string(), String::new()],
        };
        panel.set_ceiling(0);
        panel
    }

    /// Append the used-bytes sample and rescale the axis to the current
    /// available-memory ceiling.
    pub fn update(&mut self, usage: MemoryUsage) {
        self.history.push(usage.used);
        self.set_ceiling(usage.available);
    }

    fn set_ceiling(&mut self, available: u64) {
        self.range = AxisRange {
            lower: 0.0,
            upper: available as f64,
        };
        self.tick_labels[1] = format_bytes(available);
    }

    pub fn axis_range(&self) -> AxisRange {
        self.range
    }

    pub fn tick_labels(&self) -> [&str; 2] {
        [&self.tick_labels[0], &self.tick_labels[1]]
    }

    pub fn samples(&self) -> Vec<u64> {
        self.history.snapshot()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let points: Vec<(f64, f64)> = self
            .history
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, v as f64))
            .collect();

        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&points);

        // Equal bounds would collapse the scale before the first sample
        // arrives; draw against at least one byte.
        let upper = self.range.upper.max(1.0);
        let labels: Vec<Line> = self
            .tick_labels
            .iter()
            .map(|l| Line::from(l.clone()))
            .collect();

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .title(" Memory Usage History ")
                    .borders(Borders::ALL),
            )
            .x_axis(Axis::default().bounds([0.0, (self.history.capacity() - 1) as f64]))
            .y_axis(
                Axis::default()
                    .bounds([self.range.lower, upper])
                    .labels(labels),
            );

        frame.render_widget(chart, area);
    }
}
