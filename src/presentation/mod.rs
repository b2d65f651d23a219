//! Turns scoring results into table cells and HTML pages.

pub mod html;
mod level_table;
mod messages;

pub use html::{IndexPage, escape_html, render_index, render_level_table};
pub use level_table::{CellContent, CellStyle, CellView, LevelTableView, PlayerRowView};
pub use messages::Messages;
