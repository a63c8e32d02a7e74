pub mod json;
pub mod memory;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// Durable snapshot of the whole contact map. Implementations must guarantee
/// that a successful `save` fully reflects the given map and that a failed
/// one leaves the previous snapshot readable.
pub trait ContactStore {
    fn load(&self) -> Result<HashMap<String, Contact>, AppError>;

    fn save(&self, contacts: &HashMap<String, Contact>) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
