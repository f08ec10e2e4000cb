use serde_json::Value;

use crate::ShapeError;

/// What to do when the API answers with an empty `homeworks` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    /// Empty list means "nothing new"; the cycle ends quietly.
    #[default]
    Allow,
    /// Empty list is a shape error and gets reported like any other failure.
    Reject,
}

/// Validated API answer.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkPage {
    /// Homework records, most recent first, still unparsed.
    pub homeworks: Vec<Value>,
    /// Server-side timestamp of the answer, when it is an integer.
    pub current_date: Option<i64>,
}

impl HomeworkPage {
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }

    pub fn is_empty(&self) -> bool {
        self.homeworks.is_empty()
    }
}

/// Checks the payload against the documented `{"homeworks": [...], "current_date": <int>}` shape.
pub fn validate_response(payload: &Value, policy: EmptyListPolicy) -> Result<HomeworkPage, ShapeError> {
    let map = payload.as_object().ok_or(ShapeError::NotAMapping)?;
    let homeworks = map
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworks)?
        .as_array()
        .ok_or(ShapeError::HomeworksNotASequence)?;

    if homeworks.is_empty() && policy == EmptyListPolicy::Reject {
        return Err(ShapeError::EmptyList);
    }

    Ok(HomeworkPage {
        homeworks: homeworks.clone(),
        current_date: map.get("current_date").and_then(Value::as_i64),
    })
}
