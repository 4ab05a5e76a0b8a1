//! 时间工具函数 — 预订时段与营业日期
//!
//! A slot is a date plus a wall-clock label. Labels are stored as
//! zero-padded `HH:MM` so that `"9:00"` and `"09:00"` name the same slot.

use chrono::{NaiveDate, NaiveTime};
use shared::error::ErrorCode;

use crate::services::error::{ServiceError, ServiceResult};

const SLOT_FORMAT: &str = "%H:%M";

/// 解析并规范化时段 (H:MM / HH:MM → HH:MM)
pub fn normalize_slot(time: &str) -> ServiceResult<String> {
    NaiveTime::parse_from_str(time.trim(), SLOT_FORMAT)
        .map(|t| t.format(SLOT_FORMAT).to_string())
        .map_err(|_| {
            ServiceError::validation(
                ErrorCode::InvalidTimeSlot,
                format!("Invalid time slot '{time}', expected HH:MM"),
            )
        })
}

/// 服务器本地日期，作为 "today" 传入核心操作
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// 拒绝早于 today 的预订日期
pub fn validate_not_past(date: NaiveDate, today: NaiveDate) -> ServiceResult<()> {
    if date < today {
        return Err(ServiceError::validation(
            ErrorCode::ReservationInPast,
            format!("Date {date} is in the past (today is {today})"),
        ));
    }
    Ok(())
}

/// 校验日期范围 (闭区间)
pub fn validate_date_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> ServiceResult<()> {
    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        return Err(ServiceError::validation(
            ErrorCode::InvalidDateRange,
            format!("date_from {from} is after date_to {to}"),
        ));
    }
    Ok(())
}
