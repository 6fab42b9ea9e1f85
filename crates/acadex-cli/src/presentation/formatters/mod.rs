pub mod number;
pub mod text;
pub mod time;

pub use number::humanize_bytes;
pub use text::{single_line, terminal_width, truncate};
pub use time::{format_date, format_relative};
