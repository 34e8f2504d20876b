// Matrix data structures and operations

pub mod arithmetic;
pub mod config;
pub mod csr;
pub mod element;
pub mod reference;
pub mod sparse;

pub use arithmetic::Operation;
pub use config::{BoundsPolicy, ParseOptions};
pub use csr::SparseMatrixCSR;
pub use element::Element;
pub use reference::reference_spgemm;
pub use sparse::{Shape, SparseMatrix};
