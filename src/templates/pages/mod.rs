pub mod add_property;
pub mod properties;
pub mod property_detail;

pub use add_property::{add_property_page, AddPropertyVm};
pub use properties::{load_error_page, loading_page, properties_page, PropertiesVm};
pub use property_detail::property_detail_page;
