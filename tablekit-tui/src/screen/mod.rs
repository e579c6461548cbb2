//! Cell buffer, styling and terminal output.

mod buffer;
mod style;
mod terminal;
pub mod text;

pub use buffer::{Buffer, Rect};
pub use style::{Paint, Theme};
pub use terminal::Terminal;
