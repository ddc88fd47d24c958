//! CSV reading utilities.

mod reader;

pub use reader::{read_csv_frame, read_header_line, validate_encoding};
