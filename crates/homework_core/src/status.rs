use serde_json::Value;

use crate::{HomeworkError, HomeworkStatus, ShapeError};

const NAME_FIELD: &str = "homework_name";
const STATUS_FIELD: &str = "status";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Extracts name and status from one element of the `homeworks` list.
    ///
    /// The name is checked before the status, so a record missing both
    /// reports the name.
    pub fn from_value(record: &Value) -> Result<Self, HomeworkError> {
        let name = string_field(record, NAME_FIELD)?;
        let status = string_field(record, STATUS_FIELD)?.parse::<HomeworkStatus>()?;
        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Renders the notification text for a raw homework record.
pub fn format_status(record: &Value) -> Result<String, HomeworkError> {
    HomeworkRecord::from_value(record).map(|record| record.message())
}

fn string_field<'a>(record: &'a Value, field: &'static str) -> Result<&'a str, ShapeError> {
    match record.get(field) {
        None | Some(Value::Null) => Err(ShapeError::MissingField(field)),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(ShapeError::InvalidField(field)),
    }
}
