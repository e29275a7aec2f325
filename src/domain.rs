pub mod book;
pub mod contact;

pub use crate::errors::AppError;
pub use book::PhoneBook;
pub use contact::Contact;
