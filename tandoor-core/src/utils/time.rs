//! Time helpers - business-timezone date handling
//!
//! "Today" is always decided in the configured business timezone, never
//! by string-prefix matching on raw timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Calendar date of an instant in the business timezone.
pub fn business_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's calendar date in the business timezone.
pub fn today(tz: Tz) -> NaiveDate {
    business_date(Utc::now(), tz)
}
