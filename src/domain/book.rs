use super::*;

use chrono::NaiveDate;

use crate::store::FileStore;

/// In-memory phone book mirrored to a backing file. Insertion order is
/// preserved; after every successful mutating operation the file holds the
/// same records in the same order.
pub struct PhoneBook {
    pub mem: Vec<Contact>,
    pub store: FileStore,
}

impl PhoneBook {
    pub fn new(store: FileStore) -> Self {
        PhoneBook {
            mem: Vec::new(),
            store,
        }
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.store.load()?;
        Ok(())
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    /// Appends to memory first, then appends exactly one line to the file.
    /// Earlier lines are never rewritten here, so a failed write can only
    /// lose the newest record.
    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        self.mem.push(contact);
        self.store.append(&self.mem[self.mem.len() - 1])?;
        Ok(())
    }

    /// Removes every record whose name matches exactly, then rewrites the
    /// whole file from the remaining records. Filter-and-reassign, never
    /// remove-during-iteration, so later duplicates are not skipped.
    pub fn remove_by_name(&mut self, name: &str) -> Result<usize, AppError> {
        let before = self.mem.len();
        self.mem.retain(|contact| contact.name != name);
        let removed = before - self.mem.len();

        if removed == 0 {
            return Err(AppError::NotFound("Contact".to_string()));
        }

        self.store.rewrite(&self.mem)?;
        Ok(removed)
    }

    pub fn find_by_name(&self, name: &str) -> Vec<&Contact> {
        self.mem
            .iter()
            .filter(|contact| contact.name == name)
            .collect()
    }

    /// Header row plus one row per record, name and phone columns padded to
    /// the widest value in each.
    pub fn render_all(&self) -> String {
        if self.mem.is_empty() {
            return "No records in phone book".to_string();
        }

        let name_width = self
            .mem
            .iter()
            .map(|contact| contact.name.chars().count())
            .max()
            .unwrap_or(0)
            + 1;
        let phone_width = self
            .mem
            .iter()
            .map(|contact| contact.phone.chars().count())
            .max()
            .unwrap_or(0)
            + 1;

        let mut rows = Vec::with_capacity(self.mem.len() + 1);
        rows.push(format!(
            "{:<name_width$} {:<phone_width$} Birthday",
            "Name", "Phone Number"
        ));

        for contact in &self.mem {
            rows.push(format!(
                "{:<name_width$} {:<phone_width$} {}",
                contact.name, contact.phone, contact.birthday
            ));
        }

        rows.join("\n")
    }

    /// One congratulation line per contact whose birthday (day and month)
    /// falls on `today`. Read-only.
    pub fn birthday_reminders(&self, today: NaiveDate) -> Vec<String> {
        self.mem
            .iter()
            .filter(|contact| contact.is_birthday(today))
            .map(|contact| {
                format!(
                    "{} has a birthday today! {} years old! \
                    Don't forget to congratulate him. Here's the phone number: {}",
                    contact.name,
                    contact.age_on(today),
                    contact.phone
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use tempfile::tempdir;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn temp_book(dir: &tempfile::TempDir) -> Result<PhoneBook, AppError> {
        let store = FileStore::new(dir.path().join("PhoneBook_db.txt"));
        store.ensure_exists()?;

        let mut book = PhoneBook::new(store);
        book.load()?;
        Ok(book)
    }

    fn alice() -> Contact {
        Contact::new(
            "Alice Smith".to_string(),
            "555-1234".to_string(),
            date(1990, 5, 2),
        )
    }

    fn bob() -> Contact {
        Contact::new(
            "Bob Jones".to_string(),
            "555-9999".to_string(),
            date(1985, 7, 19),
        )
    }

    #[test]
    fn added_contacts_round_trip_through_a_fresh_load() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let mut book = temp_book(&dir)?;

        book.add_contact(alice())?;
        book.add_contact(bob())?;

        let mut reloaded = PhoneBook::new(FileStore::new(dir.path().join("PhoneBook_db.txt")));
        reloaded.load()?;

        assert_eq!(reloaded.contact_list(), book.contact_list());
        assert_eq!(reloaded.contact_list(), &[alice(), bob()]);
        Ok(())
    }

    #[test]
    fn add_only_appends_to_the_file() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PhoneBook_db.txt");
        let mut book = temp_book(&dir)?;

        book.add_contact(alice())?;
        let after_first = std::fs::read_to_string(&path)?;

        book.add_contact(bob())?;
        let after_second = std::fs::read_to_string(&path)?;

        assert!(after_second.starts_with(&after_first));
        assert_eq!(
            after_second.len() - after_first.len(),
            bob().to_record_line().len() + 1
        );
        Ok(())
    }

    #[test]
    fn remove_drops_every_record_with_the_name() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let mut book = temp_book(&dir)?;

        // Two contacts sharing a name, another in between
        book.add_contact(Contact::new(
            "Sam Lee".to_string(),
            "555-0001".to_string(),
            date(1991, 1, 1),
        ))?;
        book.add_contact(bob())?;
        book.add_contact(Contact::new(
            "Sam Lee".to_string(),
            "555-0002".to_string(),
            date(1992, 2, 2),
        ))?;

        let removed = book.remove_by_name("Sam Lee")?;
        assert_eq!(removed, 2);
        assert!(book.find_by_name("Sam Lee").is_empty());

        let mut reloaded = PhoneBook::new(FileStore::new(dir.path().join("PhoneBook_db.txt")));
        reloaded.load()?;
        assert_eq!(reloaded.contact_list(), &[bob()]);
        Ok(())
    }

    #[test]
    fn remove_of_missing_name_reports_not_found_and_leaves_file_alone() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PhoneBook_db.txt");
        let mut book = temp_book(&dir)?;

        book.add_contact(alice())?;
        let before = std::fs::read_to_string(&path)?;

        let result = book.remove_by_name("Bob Jones");
        assert!(matches!(result, Err(AppError::NotFound(_))));

        assert_eq!(std::fs::read_to_string(&path)?, before);
        assert_eq!(book.contact_list(), &[alice()]);
        Ok(())
    }

    #[test]
    fn removal_is_case_sensitive() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let mut book = temp_book(&dir)?;

        book.add_contact(alice())?;

        let result = book.remove_by_name("alice smith");
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(book.contact_list().len(), 1);
        Ok(())
    }

    #[test]
    fn find_returns_all_exact_matches_in_order() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let mut book = temp_book(&dir)?;

        let first = Contact::new(
            "Sam Lee".to_string(),
            "555-0001".to_string(),
            date(1991, 1, 1),
        );
        let second = Contact::new(
            "Sam Lee".to_string(),
            "555-0002".to_string(),
            date(1992, 2, 2),
        );

        book.add_contact(first.clone())?;
        book.add_contact(bob())?;
        book.add_contact(second.clone())?;

        assert_eq!(book.find_by_name("Sam Lee"), vec![&first, &second]);
        assert!(book.find_by_name("Sam").is_empty());
        Ok(())
    }

    #[test]
    fn listing_is_aligned_and_idempotent() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let mut book = temp_book(&dir)?;

        assert_eq!(book.render_all(), "No records in phone book");

        book.add_contact(alice())?;
        book.add_contact(Contact::new(
            "Jo".to_string(),
            "1".to_string(),
            date(2000, 12, 31),
        ))?;

        let rendered = book.render_all();
        assert_eq!(rendered, book.render_all());

        // Widths come from "Alice Smith" (11) and "555-1234" (8), plus one
        assert_eq!(
            rendered,
            "Name         Phone Number Birthday\n\
             Alice Smith  555-1234  1990-05-02\n\
             Jo           1         2000-12-31"
        );
        Ok(())
    }

    #[test]
    fn reminders_fire_only_on_matching_day_and_month() -> Result<(), AppError> {
        let dir = tempdir().unwrap();
        let mut book = temp_book(&dir)?;

        book.add_contact(alice())?; // 1990-05-02
        book.add_contact(bob())?; // 1985-07-19

        let reminders = book.birthday_reminders(date(2026, 5, 2));
        assert_eq!(
            reminders,
            vec![
                "Alice Smith has a birthday today! 36 years old! \
                Don't forget to congratulate him. Here's the phone number: 555-1234"
                    .to_string()
            ]
        );

        assert!(book.birthday_reminders(date(2026, 5, 3)).is_empty());
        Ok(())
    }
}
