//! Loading, writing and normalizing the assignment flat file.

pub mod dates;
pub mod error;
pub mod reader;
pub mod writer;

pub use dates::parse_date;
pub use error::{IngestError, Result};
pub use reader::{
    END_COLUMN, PROJECT_COLUMN, RESOURCES_COLUMN, START_COLUMN, load_resource_table,
    read_assignments, read_assignments_from,
};
pub use writer::{write_assignments, write_assignments_to};
