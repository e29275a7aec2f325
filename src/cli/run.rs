use crate::{
    cli::{self, command::{Cli, Command}},
    domain::{Contact, PhoneBook},
    errors::AppError,
    store::FileStore,
};
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let args = Cli::parse();

    let store = FileStore::new(&args.db_path);
    if store.ensure_exists()? {
        println!("Phone book not found, new file has been created.");
    }

    let mut book = PhoneBook::new(store);
    book.load()?;

    for reminder in book.birthday_reminders(Local::now().date_naive()) {
        println!("{reminder}");
    }

    loop {
        match cli::parse_command_from_menu() {
            Ok(Command::AddContact) => {
                let name = cli::title_case(&cli::prompt("Enter contact name: ")?);
                let phone = cli::prompt("Enter phone number: ")?;
                let birthday = cli::prompt_birthday()?;

                book.add_contact(Contact::new(name.clone(), phone, birthday))?;
                println!("New contact {name} added to the phone book");
            }
            Ok(Command::RemoveContact) => {
                let name = cli::title_case(&cli::prompt("Enter contact name to remove: ")?);

                match book.remove_by_name(&name) {
                    Ok(_) => println!("Contact {name} deleted from phone book"),
                    Err(AppError::NotFound(_)) => {
                        println!("Contact with name {name} not found")
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(Command::ShowContact) => {
                let name =
                    cli::title_case(&cli::prompt("Enter contact name that you want to search for: ")?);

                let matches = book.find_by_name(&name);
                if matches.is_empty() {
                    println!("Contact with name {name} not found");
                } else {
                    for contact in matches {
                        println!("{}", contact.details());
                    }
                }
            }
            Ok(Command::ListContacts) => {
                println!("{}", book.render_all());
            }
            Ok(Command::Exit) => break,
            Err(AppError::ParseCommand(_)) => {
                println!("Choice is not correct, select number from 1 to 5.")
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
