use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::json::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path to the JSON file holding the contacts
    #[arg(long, env = "CONTACTS_PATH", default_value = DEFAULT_STORAGE_PATH)]
    pub store_path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// List every contact's name and phone number
    List,
    /// Search contacts by name (any case) or phone substring
    Search {
        /// Text to look for
        query: String,
    },
    /// Update fields of an existing contact.
    /// Omitted or empty fields keep their current value
    Update {
        /// Name of the contact to update
        #[arg(long)]
        name: String,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of the contact to delete
        #[arg(long)]
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
