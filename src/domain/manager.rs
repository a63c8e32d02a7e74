use std::collections::HashMap;

use log::debug;

use crate::prelude::{AppError, Contact, ContactStore};

/// Record-level operations over the contact map. Every mutation is persisted
/// through the storage backend before it is considered complete.
pub struct ContactManager {
    contacts: HashMap<String, Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Loads the last snapshot from `storage`, or starts empty if the
    /// backing file does not exist yet.
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let contacts = storage.load()?;
        Ok(Self { contacts, storage })
    }

    pub fn add_contact(
        &mut self,
        name: String,
        phone: String,
        email: String,
        address: String,
    ) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::Validation(
                "Contact name must not be empty".to_string(),
            ));
        }
        if self.contacts.contains_key(&name) {
            return Err(AppError::Conflict(name));
        }

        debug!("adding contact '{}'", name);
        let contact = Contact::new(name.clone(), phone, email, address);
        self.commit(|contacts| {
            contacts.insert(name, contact);
        })
    }

    /// Name and phone of every contact, in arbitrary order.
    pub fn view_contacts(&self) -> Vec<(String, String)> {
        self.contacts
            .values()
            .map(|c| (c.name.clone(), c.phone.clone()))
            .collect()
    }

    pub fn search_contacts(&self, query: &str) -> Vec<&Contact> {
        self.contacts.values().filter(|c| c.matches(query)).collect()
    }

    pub fn get_contact(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Partial update: a `None` or empty new value keeps the existing field.
    pub fn update_contact(
        &mut self,
        name: &str,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Result<(), AppError> {
        if !self.contacts.contains_key(name) {
            return Err(AppError::NotFound(name.to_string()));
        }

        debug!("updating contact '{}'", name);
        self.commit(|contacts| {
            if let Some(contact) = contacts.get_mut(name) {
                if let Some(phone) = phone.filter(|v| !v.is_empty()) {
                    contact.phone = phone;
                }
                if let Some(email) = email.filter(|v| !v.is_empty()) {
                    contact.email = email;
                }
                if let Some(address) = address.filter(|v| !v.is_empty()) {
                    contact.address = address;
                }
            }
        })
    }

    /// Removal itself; asking the user for confirmation is the caller's job.
    pub fn delete_contact(&mut self, name: &str) -> Result<(), AppError> {
        if !self.contacts.contains_key(name) {
            return Err(AppError::NotFound(name.to_string()));
        }

        debug!("deleting contact '{}'", name);
        self.commit(|contacts| {
            contacts.remove(name);
        })
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    // Mutations run against a working copy, and the live map only takes the
    // change after the snapshot hit disk. A failed save therefore leaves the
    // in-memory map and the backing file both at the previous snapshot.
    fn commit<F>(&mut self, mutate: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut HashMap<String, Contact>),
    {
        let mut working = self.contacts.clone();
        mutate(&mut working);
        self.storage.save(&working)?;
        self.contacts = working;
        Ok(())
    }
}
