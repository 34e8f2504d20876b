// Text serialization and file I/O

pub mod file;
pub mod text;

pub use file::{read_matrix_file, write_matrix_file};
pub use text::parse_matrix;
