use serde::{Deserialize, Serialize};

/// On-device alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAlert {
    /// Stable identifier; re-emitting with the same identifier replaces the
    /// previous alert on platforms that support it.
    pub identifier: String,
    pub title: String,
    pub body: String,
}

impl LocalAlert {
    pub const POTENTIAL_DIAGNOSIS_ID: &'static str = "diagnosis.potential";

    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    /// Alert raised when a potential exposure is reported.
    pub fn potential_diagnosis(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Self::POTENTIAL_DIAGNOSIS_ID, title, body)
    }
}
