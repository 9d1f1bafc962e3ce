//! Appointment Date
//!
//! Dates are calendar days written exactly as `YYYY-MM-DD`. Anything that
//! would not format back to the same text (timestamps, unpadded fields,
//! surrounding whitespace) is rejected, so stored dates always echo the
//! request.

use chrono::NaiveDate;

use crate::error::{SchoolError, SchoolResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(raw: &str) -> SchoolResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| SchoolError::InvalidDate)?;

    if date.format(DATE_FORMAT).to_string() != raw {
        return Err(SchoolError::InvalidDate);
    }

    Ok(date)
}
