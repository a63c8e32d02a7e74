pub mod contact;
pub mod manager;
