pub mod line_sink;

pub use line_sink::{LineFindingSink, StdoutFindingSink};
