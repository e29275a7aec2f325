use rusty_phonebook::errors::AppError;
use rusty_phonebook::prelude::run_app;

fn main() -> Result<(), AppError> {
    run_app()
}
