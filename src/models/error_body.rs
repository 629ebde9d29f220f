use serde::Deserialize;

/// Failure body returned with a non-2xx status.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// `detail` is a plain message for handled errors and a list of issues when
/// request validation fails.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub msg: String,
}

impl ApiErrorBody {
    /// The message to show the user, if the body carried a usable one.
    pub fn message(&self) -> Option<String> {
        let message = match self.detail.as_ref()? {
            ErrorDetail::Message(msg) => msg.clone(),
            ErrorDetail::Issues(issues) => issues.first()?.msg.clone(),
        };
        let message = message.trim();
        if message.is_empty() {
            None
        } else {
            Some(message.to_string())
        }
    }
}
