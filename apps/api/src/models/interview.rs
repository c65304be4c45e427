use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub role_id: i64,
    pub question: String,
    pub focus: String,
    pub difficulty: String,
    pub answer: String,
    pub follow_up: String,
    pub created_at: DateTime<Utc>,
}

/// Difficulty levels accepted by the questions table CHECK constraint.
pub const DIFFICULTIES: &[&str] = &["Beginner", "Intermediate", "Advanced"];

pub fn is_valid_difficulty(value: &str) -> bool {
    DIFFICULTIES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_difficulties_accepted() {
        for d in DIFFICULTIES {
            assert!(is_valid_difficulty(d));
        }
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(!is_valid_difficulty("Expert"));
        assert!(!is_valid_difficulty("intermediate")); // case-sensitive
        assert!(!is_valid_difficulty(""));
    }
}
