//! User feedback, independent of fare allocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub user: String,
    pub rating: i64,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub user: String,
    pub rating: u8,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

impl NewFeedback {
    /// Check required fields and the rating range, producing a storable record.
    pub fn into_record(self) -> StoreResult<FeedbackRecord> {
        if self.user.trim().is_empty() || self.comments.trim().is_empty() {
            return Err(StoreError::validation("Missing required fields"));
        }
        let rating = u8::try_from(self.rating)
            .ok()
            .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
            .ok_or_else(|| {
                StoreError::validation(format!(
                    "Rating must be between {MIN_RATING} and {MAX_RATING}"
                ))
            })?;

        Ok(FeedbackRecord {
            id: Uuid::new_v4().to_string(),
            user: self.user,
            rating,
            comments: self.comments,
            created_at: Utc::now(),
        })
    }
}

pub trait FeedbackStore: Send + Sync {
    fn submit_feedback(&self, feedback: NewFeedback) -> StoreResult<FeedbackRecord>;

    fn list_feedback(&self) -> StoreResult<Vec<FeedbackRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(rating: i64) -> NewFeedback {
        NewFeedback {
            user: "asha".into(),
            rating,
            comments: "Fair split".into(),
        }
    }

    #[test]
    fn rating_must_be_between_one_and_five() {
        for rating in [1, 3, 5] {
            assert_eq!(feedback(rating).into_record().expect("valid").rating as i64, rating);
        }
        for rating in [0, 6, -1, 300] {
            let err = feedback(rating).into_record().unwrap_err();
            assert_eq!(err.to_string(), "Rating must be between 1 and 5");
        }
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut blank = feedback(4);
        blank.comments = "  ".into();
        assert!(matches!(blank.into_record(), Err(StoreError::Validation(_))));
    }
}
