use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use super::{ContactStore, create_file_parent};
use crate::prelude::{AppError, Contact};

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.json";

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// On-disk shape of one contact. The map key carries the name; the value
/// holds exactly these three string fields, anything else is a hard error.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContactEntry {
    phone: String,
    email: String,
    address: String,
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<HashMap<String, Contact>, AppError> {
        if !fs::exists(&self.path)? {
            debug!("no contact file at {:?}, starting empty", self.path);
            return Ok(HashMap::new());
        }

        let data = fs::read_to_string(&self.path)?;

        let entries: HashMap<String, ContactEntry> =
            serde_json::from_str(&data).map_err(|e| AppError::CorruptData(e.to_string()))?;

        let mut contacts = HashMap::with_capacity(entries.len());
        for (name, entry) in entries {
            if name.is_empty() {
                return Err(AppError::CorruptData(
                    "contact with empty name".to_string(),
                ));
            }
            contacts.insert(
                name.clone(),
                Contact::new(name, entry.phone, entry.email, entry.address),
            );
        }

        debug!("loaded {} contacts from {:?}", contacts.len(), self.path);
        Ok(contacts)
    }

    fn save(&self, contacts: &HashMap<String, Contact>) -> Result<(), AppError> {
        create_file_parent(&self.path).map_err(AppError::Persistence)?;

        let entries: HashMap<&String, ContactEntry> = contacts
            .iter()
            .map(|(name, c)| {
                (
                    name,
                    ContactEntry {
                        phone: c.phone.clone(),
                        email: c.email.clone(),
                        address: c.address.clone(),
                    },
                )
            })
            .collect();

        let data = serde_json::to_string_pretty(&entries)
            .map_err(|e| AppError::Persistence(std::io::Error::other(e)))?;

        // Write-then-rename, so a crash mid-write leaves the previous
        // snapshot intact instead of a truncated file.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data.as_bytes()).map_err(AppError::Persistence)?;
        fs::rename(&tmp_path, &self.path).map_err(AppError::Persistence)?;

        debug!("saved {} contacts to {:?}", contacts.len(), self.path);
        Ok(())
    }
}
