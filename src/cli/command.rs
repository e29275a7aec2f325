use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Phone book with birthday reminders")]
pub struct Cli {
    /// Path to the phone book database file
    #[arg(long, env = "PHONEBOOK_DB_PATH", default_value_t = String::from("PhoneBook_db.txt"))]
    pub db_path: String,
}

/// Menu actions
pub enum Command {
    AddContact,
    RemoveContact,
    ShowContact,
    ListContacts,
    Exit,
}
