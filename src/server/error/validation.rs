use thiserror::Error;

/// Collected schema violations for a single request.
///
/// Every offending field contributes one message; the messages are joined with
/// `, ` when rendered so the client sees all problems at once.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("{}", .details.join(", "))]
pub struct ValidationError {
    pub details: Vec<String>,
}

impl ValidationError {
    /// Error carrying exactly one message.
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            details: vec![message.into()],
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.details.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Returns `value` when no violation has been recorded, otherwise `self`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}
