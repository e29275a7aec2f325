pub mod command;
pub mod run;

pub use run::run_app;

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::cli::command::Command;
use crate::errors::AppError;

// OUTPUT FUNCTIONS
pub fn parse_command_from_menu() -> Result<Command, AppError> {
    println!("\nSelect action:");
    println!("1. Add new contact to the phone book");
    println!("2. Remove a contact from the phone book");
    println!("3. Show contact's information");
    println!("4. Show all contacts");
    println!("5. Exit program");
    print!("> ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::RemoveContact),
        "3" => Ok(Command::ShowContact),
        "4" => Ok(Command::ListContacts),
        "5" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

pub fn prompt(label: &str) -> Result<String, AppError> {
    println!("{label}");
    get_input()
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    // Exhausted stdin would otherwise re-prompt forever
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "unexpected end of input",
        )));
    }

    Ok(input.trim().to_string())
}

/// Re-prompts until the input parses as a `dd/mm/yyyy` date.
pub fn prompt_birthday() -> Result<NaiveDate, AppError> {
    loop {
        let raw = prompt("Enter birthday in format dd/mm/yyyy: ")?;

        match NaiveDate::parse_from_str(&raw, "%d/%m/%Y") {
            Ok(date) => break Ok(date),
            Err(_) => println!("Please, enter correct date using format dd/mm/yyyy"),
        }
    }
}

/// Uppercases the first letter of every word and lowercases the rest, where
/// a word starts after any non-alphabetic character.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                output.extend(c.to_uppercase());
            } else {
                output.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(c);
            at_word_start = true;
        }
    }

    output
}
