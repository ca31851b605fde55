use crate::core::domain::Identifiable;

pub mod isbn;
pub mod model;

pub trait Book: Identifiable {
    fn isbn(&self) -> &str;
    fn author_name(&self) -> &str;
}
