use crate::core::solver::MAX_DISKS;
use crate::utils::error::{HanoiError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a disk count as typed by a user: surrounding whitespace is ignored,
/// negative numbers and non-integers are rejected.
pub fn parse_disk_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let invalid = |reason: &str| HanoiError::InvalidInput {
        input: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("no disk count given"));
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("not a whole number"));
    }
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(invalid("disk count must not be negative"));
    }

    // 位數合法但超出 u64 時仍屬於資源上限錯誤
    let value: u64 = digits.parse().unwrap_or(u64::MAX);
    u32::try_from(value).map_err(|_| HanoiError::ResourceExhausted {
        disks: value,
        limit: MAX_DISKS,
    })
}

/// Rejects disk counts above `limit` (itself capped at the hard maximum).
pub fn validate_disk_limit(disks: u32, limit: u32) -> Result<()> {
    let limit = limit.min(MAX_DISKS);
    if disks > limit {
        return Err(HanoiError::ResourceExhausted {
            disks: u64::from(disks),
            limit,
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HanoiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
