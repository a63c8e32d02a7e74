use std::cell::RefCell;
use std::collections::HashMap;

use super::ContactStore;
use crate::prelude::{AppError, Contact};

/// Volatile store, used by unit tests that do not need a file on disk.
#[derive(Default)]
pub struct MemStore {
    data: RefCell<HashMap<String, Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<HashMap<String, Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &HashMap<String, Contact>) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }
}
