pub mod csv;
pub mod record;
pub mod toy;

pub use csv::{load_csv, parse_csv, LabelMode};
pub use record::{Dataset, Record};
