//! Result export.

mod csv;

pub use csv::{export_csv, read_csv, write_csv};
