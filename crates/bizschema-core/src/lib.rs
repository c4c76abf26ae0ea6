pub mod build;
pub mod document;
pub mod error;
pub mod form;
mod lines;

pub use build::build;
pub use document::{
    Offer, OfferCatalog, OpeningHoursSpecification, PostalAddress, SchemaDocument, Service,
};
pub use error::BuildError;
pub use form::{DayHours, SchemaForm, ServiceEntry, WeekSchedule, Weekday};
