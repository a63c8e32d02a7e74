use std::io::{self, Write};

use clap::Parser;
use dotenv::dotenv;

use crate::cli::command::{Cli, Commands};
use crate::prelude::{AppError, Contact, ContactManager, JsonStore};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    let storage = JsonStore::new(&cli.store_path);
    let mut manager = ContactManager::new(Box::new(storage))?;

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            manager.add_contact(
                trim(name),
                trim(phone.unwrap_or_default()),
                trim(email.unwrap_or_default()),
                trim(address.unwrap_or_default()),
            )?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::List => {
            if manager.is_empty() {
                println!("No contacts yet");
                return Ok(());
            }

            // Sorted purely for stable terminal output; the store itself
            // keeps no order.
            let mut contacts = manager.view_contacts();
            contacts.sort();

            for (name, phone) in contacts {
                println!("{}: {}", name, phone);
            }
            Ok(())
        }

        Commands::Search { query } => {
            let query = trim(query);
            let mut found = manager.search_contacts(&query);

            if found.is_empty() {
                println!("No contacts found");
                return Ok(());
            }

            found.sort_by(|a, b| a.name.cmp(&b.name));
            for contact in found {
                println!();
                println!("{}", display_contact(contact));
            }
            Ok(())
        }

        Commands::Update {
            name,
            phone,
            email,
            address,
        } => {
            manager.update_contact(
                &trim(name),
                phone.map(trim),
                email.map(trim),
                address.map(trim),
            )?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { name, yes } => {
            let name = trim(name);

            let Some(contact) = manager.get_contact(&name) else {
                return Err(AppError::NotFound(name));
            };

            if !yes {
                confirm_action(&format!(
                    "delete this contact\n{}",
                    display_contact(contact)
                ))?;

                let consent = get_input_to_lower()?;
                if consent != "y" {
                    println!("Aborted");
                    return Ok(());
                }
            }

            manager.delete_contact(&name)?;

            println!("Contact deleted successfully");
            Ok(())
        }
    }
}

// All user-supplied strings are trimmed here, at the boundary; the manager
// never re-trims.
fn trim(value: String) -> String {
    value.trim().to_string()
}

fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        contact.name, contact.phone, contact.email, contact.address
    )
}

fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}? (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn trim_strips_surrounding_whitespace() {
        assert_eq!(trim("  Alice \n".to_string()), "Alice");
        assert_eq!(trim("\t".to_string()), "");
    }

    #[test]
    fn display_contact_shows_all_fields() {
        let contact = Contact::new(
            "Alice".to_string(),
            "555-1234".to_string(),
            "a@x.com".to_string(),
            "1 Main St".to_string(),
        );

        let output = display_contact(&contact);

        assert!(output.contains("Name: Alice"));
        assert!(output.contains("Phone: 555-1234"));
        assert!(output.contains("Email: a@x.com"));
        assert!(output.contains("Address: 1 Main St"));
    }
}
