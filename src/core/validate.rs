//! Field limits checked before anything is sent to the server.
//!
//! They mirror the column widths and CHECK domains of the schema so that a
//! bad value is reported in plain words instead of a constraint violation.

use super::error::ShopError;

pub const NAME_MAX: usize = 32;
pub const PHONE_MAX: usize = 13;
pub const ADDRESS_MAX: usize = 256;
pub const EXPERIENCE_MAX_DIGITS: usize = 2;
pub const VIN_LEN: usize = 16;
pub const MAKE_MAX: usize = 32;
pub const MODEL_MAX: usize = 32;
pub const MIN_CAR_YEAR: i32 = 1970;

pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ShopError> {
    if value.chars().count() > max {
        return Err(ShopError::validation(format!(
            "{field} must be {max} characters or less!"
        )));
    }
    Ok(())
}

pub fn parse_int(raw: &str) -> Result<i32, ShopError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ShopError::InvalidNumber(trimmed.to_string()))
}

pub fn experience(raw: &str) -> Result<i32, ShopError> {
    let trimmed = raw.trim();
    if trimmed.len() > EXPERIENCE_MAX_DIGITS {
        return Err(ShopError::validation("max years of experience is 99!"));
    }
    let years = parse_int(trimmed)?;
    if years < 0 {
        return Err(ShopError::validation("years of experience cannot be negative!"));
    }
    Ok(years)
}

pub fn vin(value: &str) -> Result<(), ShopError> {
    if value.chars().count() != VIN_LEN {
        return Err(ShopError::validation(format!(
            "VIN must be exactly {VIN_LEN} characters!"
        )));
    }
    Ok(())
}

pub fn car_year(raw: &str) -> Result<i32, ShopError> {
    let year = parse_int(raw)?;
    if year < MIN_CAR_YEAR {
        return Err(ShopError::validation(format!(
            "Invalid year! Cars must be from {MIN_CAR_YEAR} or later."
        )));
    }
    Ok(year)
}

/// Odometer readings and bills are positive integers
pub fn positive(field: &str, raw: &str) -> Result<i32, ShopError> {
    let value = parse_int(raw)?;
    if value <= 0 {
        return Err(ShopError::validation(format!("{field} must be greater than 0!")));
    }
    Ok(value)
}

/// `y`/`Y` confirms
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[must_use]
pub fn is_no(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("n")
}

/// `x`/`X` means "not in the list"
#[must_use]
pub fn is_skip(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("x")
}
