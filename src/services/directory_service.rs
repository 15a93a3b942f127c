use http::StatusCode;
use thiserror::Error;

use crate::catalog::{Catalog, SharedCatalog};

/// Why a signup or unregister command was rejected. The `Display` string is
/// the `detail` message the route layer returns to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Student not found in this activity")]
    StudentNotFound,
}

impl DirectoryError {
    pub fn status(self) -> StatusCode {
        match self {
            DirectoryError::ActivityNotFound | DirectoryError::StudentNotFound => {
                StatusCode::NOT_FOUND
            }
            DirectoryError::AlreadySignedUp | DirectoryError::ActivityFull => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

/// Snapshot of the full catalog, taken under the read lock.
pub fn list_activities(catalog: &SharedCatalog) -> Catalog {
    catalog.read().clone()
}

/// Add `email` to an activity's participant list. Duplicate enrollment is
/// reported before capacity, so a student already on a full activity gets
/// the duplicate message rather than "full".
pub fn signup(
    catalog: &SharedCatalog,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let mut catalog = catalog.write();
    let activity = catalog
        .get_mut(activity_name)
        .ok_or(DirectoryError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(DirectoryError::AlreadySignedUp);
    }
    if activity.participants.len() >= activity.max_participants {
        return Err(DirectoryError::ActivityFull);
    }

    activity.participants.push(email.to_string());
    Ok(format!("Signed up {email} for {activity_name}"))
}

/// Remove `email` from an activity's participant list. Emails are compared
/// as exact strings, untrimmed, same as on signup.
pub fn unregister(
    catalog: &SharedCatalog,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let mut catalog = catalog.write();
    let activity = catalog
        .get_mut(activity_name)
        .ok_or(DirectoryError::ActivityNotFound)?;

    let Some(position) = activity.participants.iter().position(|p| p == email) else {
        return Err(DirectoryError::StudentNotFound);
    };

    activity.participants.remove(position);
    Ok(format!("Removed {email} from {activity_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_shared;
    use crate::models::Activity;
    use parking_lot::RwLock;
    use std::sync::Arc;

    fn single_activity(name: &str, max_participants: usize, participants: &[&str]) -> SharedCatalog {
        let activity = Activity {
            description: "test".to_string(),
            schedule: "test".to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        };
        Arc::new(RwLock::new(Catalog::from([(name.to_string(), activity)])))
    }

    #[test]
    fn signup_appends_in_order() {
        let catalog = single_activity("Chess Club", 4, &["a@mergington.edu"]);

        let message = signup(&catalog, "Chess Club", "b@mergington.edu").unwrap();
        assert_eq!(message, "Signed up b@mergington.edu for Chess Club");
        signup(&catalog, "Chess Club", "c@mergington.edu").unwrap();

        assert_eq!(
            catalog.read()["Chess Club"].participants,
            vec!["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn signup_rejects_unknown_activity() {
        let catalog = seed_shared();
        let err = signup(&catalog, "Robotics Club", "a@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::ActivityNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_is_reported_before_capacity() {
        // Both rules are violated at once; the duplicate message wins.
        let catalog = single_activity("Math Club", 2, &["a@mergington.edu", "b@mergington.edu"]);
        let err = signup(&catalog, "Math Club", "a@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::AlreadySignedUp);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn full_activity_rejects_new_signup_and_stays_unchanged() {
        let catalog = single_activity("Math Club", 2, &["a@mergington.edu", "b@mergington.edu"]);
        let err = signup(&catalog, "Math Club", "c@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::ActivityFull);
        assert_eq!(catalog.read()["Math Club"].participants.len(), 2);
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let catalog = single_activity("Closed Club", 0, &[]);
        let err = signup(&catalog, "Closed Club", "a@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::ActivityFull);
    }

    #[test]
    fn email_match_is_exact() {
        let catalog = single_activity("Chess Club", 4, &["a@mergington.edu"]);

        // Different casing counts as a different student.
        signup(&catalog, "Chess Club", "A@mergington.edu").unwrap();
        let err = unregister(&catalog, "Chess Club", " a@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::StudentNotFound);
    }

    #[test]
    fn unregister_removes_exactly_that_email() {
        let catalog = single_activity(
            "Art Club",
            5,
            &["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"],
        );

        let message = unregister(&catalog, "Art Club", "b@mergington.edu").unwrap();
        assert_eq!(message, "Removed b@mergington.edu from Art Club");
        assert_eq!(
            catalog.read()["Art Club"].participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[test]
    fn unregister_rejects_missing_student_and_activity() {
        let catalog = seed_shared();

        let err = unregister(&catalog, "Chess Club", "missing@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::StudentNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = unregister(&catalog, "Robotics Club", "michael@mergington.edu").unwrap_err();
        assert_eq!(err, DirectoryError::ActivityNotFound);
    }

    #[test]
    fn list_reflects_latest_mutation() {
        let catalog = seed_shared();
        let before = list_activities(&catalog);
        assert_eq!(before.len(), catalog.read().len());

        signup(&catalog, "Chess Club", "new@mergington.edu").unwrap();
        let after = list_activities(&catalog);
        assert!(after["Chess Club"]
            .participants
            .contains(&"new@mergington.edu".to_string()));
    }
}
