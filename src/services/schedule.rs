use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};

use crate::errors::{AppError, AppResult};

const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// The platform's fixed timezone (UTC+05:30). All derived timestamps are
/// expressed in this offset.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECONDS).expect("IST offset is within bounds")
}

pub fn now_ist() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&ist())
}

/// Resolves a quiz window from at most one supplied endpoint and a duration.
///
/// With a start time, the end is derived as start + duration. With only an
/// end time, the start is derived as end - duration. Either way the resolved
/// start must be strictly in the future. With neither, the quiz is always
/// open and `None` is returned.
pub fn resolve_window(
    start_time: Option<&str>,
    end_time: Option<&str>,
    duration_minutes: i64,
    now: DateTime<FixedOffset>,
) -> AppResult<Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>> {
    if let Some(raw) = start_time {
        let start = parse_ist(raw).map_err(|_| {
            AppError::InvalidSchedule("Invalid start_time format. Use ISO format.".to_string())
        })?;

        if start <= now {
            return Err(AppError::InvalidSchedule(
                "Start time must be in the future for scheduled quizzes".to_string(),
            ));
        }

        // Checked arithmetic: an absurd duration must not take down the worker.
        let end = Duration::try_minutes(duration_minutes)
            .and_then(|d| start.checked_add_signed(d))
            .ok_or_else(|| {
                AppError::InvalidSchedule("Quiz duration is too large".to_string())
            })?;
        return Ok(Some((start, end)));
    }

    if let Some(raw) = end_time {
        let end = parse_ist(raw).map_err(|_| {
            AppError::InvalidSchedule("Invalid end_time format. Use ISO format.".to_string())
        })?;
        let start = Duration::try_minutes(duration_minutes)
            .and_then(|d| end.checked_sub_signed(d))
            .ok_or_else(|| {
                AppError::InvalidSchedule("Quiz duration is too large".to_string())
            })?;

        if start <= now {
            return Err(AppError::InvalidSchedule(
                "Quiz duration too long for the specified end time".to_string(),
            ));
        }

        return Ok(Some((start, end)));
    }

    Ok(None)
}

/// Parses an ISO-8601 timestamp into IST. A trailing "Z" or explicit offset
/// is converted; a naive timestamp is taken as already being IST.
fn parse_ist(raw: &str) -> Result<DateTime<FixedOffset>, ()> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&ist()));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map_err(|_| ())?;
    naive.and_local_timezone(ist()).single().ok_or(())
}
