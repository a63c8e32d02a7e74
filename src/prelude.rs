pub use crate::domain::{contact::Contact, manager::ContactManager};
pub use crate::errors::AppError;
pub use crate::store::{ContactStore, json::JsonStore};
