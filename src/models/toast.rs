use serde::{Deserialize, Serialize};

/// User-facing message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// How long a toast of this kind stays up by default, in milliseconds.
    pub fn default_duration_ms(self) -> i64 {
        match self {
            ToastKind::Success => 3000,
            ToastKind::Error => 4000,
            ToastKind::Warning => 3500,
            ToastKind::Info => 3000,
        }
    }
}

/// An ephemeral notification. Lives entirely client-side; a non-positive
/// duration means it stays until removed explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: i64,
}

/// Unique toast id: wall-clock millis plus a random tiebreak for toasts
/// created within the same millisecond.
pub fn generate_toast_id() -> String {
    format!(
        "{}-{}",
        chrono::Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_within_a_millisecond() {
        let a = generate_toast_id();
        let b = generate_toast_id();
        assert_ne!(a, b);
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ToastKind::Error).unwrap(), "\"error\"");
        let kind: ToastKind = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(kind, ToastKind::Warning);
    }

    #[test]
    fn default_durations_per_kind() {
        assert_eq!(ToastKind::Success.default_duration_ms(), 3000);
        assert_eq!(ToastKind::Error.default_duration_ms(), 4000);
        assert_eq!(ToastKind::Warning.default_duration_ms(), 3500);
        assert_eq!(ToastKind::Info.default_duration_ms(), 3000);
    }
}
