use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::domain::Contact;
use crate::errors::AppError;

/// Fixed first line of the backing file, never treated as data.
pub const HEADER: &str = "Name,Phone Number,Birthday";

/// Backing file for the phone book. The path is injected so tests can point
/// it at a temporary file.
pub struct FileStore {
    pub path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Creates the backing file with a header-only body when it is missing.
    /// Returns whether a new file had to be created.
    pub fn ensure_exists(&self) -> Result<bool, AppError> {
        if fs::exists(&self.path)? {
            return Ok(false);
        }

        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        writeln!(file, "{HEADER}")?;

        Ok(true)
    }

    /// Reads every record line after the header, in file order.
    pub fn load(&self) -> Result<Vec<Contact>, AppError> {
        let file = OpenOptions::new().read(true).open(&self.path)?;
        let reader = BufReader::new(file);

        let mut contacts = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;

            // Line 0 is the header
            if index == 0 || line.trim().is_empty() {
                continue;
            }

            contacts.push(Contact::from_record_line(&line)?);
        }

        Ok(contacts)
    }

    /// Writes exactly one record line at the end of the file. Existing lines
    /// are never touched.
    pub fn append(&self, contact: &Contact) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        writeln!(file, "{}", contact.to_record_line())?;
        Ok(())
    }

    /// Replaces the whole file with the header plus one line per record.
    pub fn rewrite(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        writeln!(file, "{HEADER}")?;
        for contact in contacts {
            writeln!(file, "{}", contact.to_record_line())?;
        }

        Ok(())
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
