pub mod cpu;
pub mod memory;

pub use cpu::CpuPanel;
pub use memory::MemoryPanel;

/// Value-axis scale for a chart panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    pub fn bounds(self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}
