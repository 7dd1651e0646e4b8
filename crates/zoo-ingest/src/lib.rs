pub mod error;
pub mod lines;
pub mod names;
pub mod parser;

pub use error::{IngestError, ParseError, Result};
pub use lines::{SourceLine, read_lines};
pub use names::load_names;
pub use parser::parse_arrival;
