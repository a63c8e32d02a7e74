/// One entry of the contact book. The name doubles as the identity: the
/// in-memory map and the backing file are both keyed by it, so it must be
/// non-empty and unique (exact, case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String, address: String) -> Self {
        Contact {
            name,
            phone,
            email,
            address,
        }
    }

    /// True when `query` occurs in the name (case-insensitive) or in the
    /// phone number (case-sensitive, digits carry no case).
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone.contains(query)
    }
}
