//! Input validation helpers
//!
//! Rules that span several fields and cannot be expressed as `validator`
//! attributes on a single field.

use shared::util::now_millis;

use crate::utils::{AppError, ErrorCode};

/// Validate a menu validity window.
///
/// Only checked when both ends are given: `start` must lie in the future and
/// `end` must come after `start`.
pub fn validate_menu_window(start: Option<i64>, end: Option<i64>) -> Result<(), AppError> {
    validate_menu_window_at(start, end, now_millis())
}

fn validate_menu_window_at(start: Option<i64>, end: Option<i64>, now: i64) -> Result<(), AppError> {
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(());
    };
    if start <= now {
        return Err(AppError::with_message(
            ErrorCode::MenuWindowInvalid,
            "start_date must be in the future",
        )
        .with_detail("start_date", start));
    }
    if end <= start {
        return Err(AppError::with_message(
            ErrorCode::MenuWindowInvalid,
            "end_date must be after start_date",
        )
        .with_detail("end_date", end));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_window_needs_both_ends() {
        assert!(validate_menu_window_at(None, None, NOW).is_ok());
        assert!(validate_menu_window_at(Some(NOW - 1), None, NOW).is_ok());
        assert!(validate_menu_window_at(None, Some(NOW - 1), NOW).is_ok());
    }

    #[test]
    fn test_window_rules() {
        assert!(validate_menu_window_at(Some(NOW + 10), Some(NOW + 20), NOW).is_ok());

        let err = validate_menu_window_at(Some(NOW - 10), Some(NOW + 20), NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuWindowInvalid);

        let err = validate_menu_window_at(Some(NOW + 20), Some(NOW + 20), NOW).unwrap_err();
        assert_eq!(err.message, "end_date must be after start_date");
    }
}
