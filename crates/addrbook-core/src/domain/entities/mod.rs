pub mod address_book;
pub mod record;

pub use crate::domain::DomainError;
pub use address_book::{AddressBook, UpcomingBirthday};
pub use record::Record;
