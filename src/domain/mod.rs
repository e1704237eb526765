pub mod form;
pub mod logic;
pub mod property;

pub use form::PropertyForm;
pub use property::{NewProperty, Property, PropertyPage, PropertyType, PAGE_SIZE};
