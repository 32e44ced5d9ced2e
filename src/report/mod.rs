pub mod render;
pub mod splitter;

pub use render::{RenderedReport, ShiftBlock, render_report};
pub use splitter::split_messages;
