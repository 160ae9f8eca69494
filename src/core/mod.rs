pub mod catalog;

pub use crate::domain::model::{Element, Isotope};
pub use crate::domain::ports::ElementRepository;
pub use catalog::ElementCatalog;
