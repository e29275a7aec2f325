use super::*;

pub use chrono::{Datelike, NaiveDate};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub birthday: NaiveDate,
}

impl Contact {
    pub fn new(name: String, phone: String, birthday: NaiveDate) -> Self {
        Contact {
            name,
            phone,
            birthday,
        }
    }

    /// Renders the contact as one backing-file line: `name,phone,YYYY-MM-DD`.
    /// Fields are not quoted or escaped, so a comma inside a field produces a
    /// line the next load will reject.
    pub fn to_record_line(&self) -> String {
        format!("{},{},{}", self.name, self.phone, self.birthday)
    }

    /// Parses one backing-file line. The line must split into exactly three
    /// comma-separated fields.
    pub fn from_record_line(raw: &str) -> Result<Self, AppError> {
        let fields: Vec<&str> = raw.split(',').collect();

        match fields.as_slice() {
            [name, phone, birthday] => {
                let birthday = NaiveDate::parse_from_str(birthday, "%Y-%m-%d")?;

                Ok(Contact {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday,
                })
            }
            _ => Err(AppError::MalformedRecord(raw.to_string())),
        }
    }

    /// Day and month match, year ignored.
    pub fn is_birthday(&self, today: NaiveDate) -> bool {
        self.birthday.day() == today.day() && self.birthday.month() == today.month()
    }

    // No occurred-yet-this-year adjustment: only called when day and month
    // already match today.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        today.year() - self.birthday.year()
    }

    pub fn details(&self) -> String {
        format!(
            "Name: {}\n\
            Phone number: {}\n\
            Birthday: {}",
            self.name, self.phone, self.birthday
        )
    }
}
