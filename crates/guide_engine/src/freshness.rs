//! Je guide z dneška? Porovnává kalendářní den `generated_at` v pevném
//! offsetu vysílání (default Mexico City, UTC−6) s dnešním dnem.

use crate::model::Guide;
use anyhow::{anyhow, Result};
use chrono::{FixedOffset, NaiveDate, Utc};

pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -6;

pub fn offset_from_hours(hours: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(hours * 3600).ok_or_else(|| anyhow!("invalid UTC offset: {hours}h"))
}

pub fn local_today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

pub fn generated_on(guide: &Guide, offset: FixedOffset) -> NaiveDate {
    guide.generated_at.with_timezone(&offset).date_naive()
}

pub fn is_current(guide: &Guide, today: NaiveDate, offset: FixedOffset) -> bool {
    generated_on(guide, offset) == today
}
