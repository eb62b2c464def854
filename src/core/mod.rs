//! Core types shared by every backend: shapes, cell policies and the storage traits.

pub mod policy;
pub mod shape;
pub mod traits;
pub mod wrappers;

pub use policy::{CellPolicy, Generic, Numeric};
pub use shape::Shape;
pub use traits::{MatrixStore, RealStore, structurally_equal};
pub use wrappers::{from_faer, to_faer};
