pub use crate::cli::{command, run_app};
pub use crate::domain::{Contact, PhoneBook, book, contact};
pub use crate::errors::AppError;
pub use crate::store::{FileStore, HEADER};
