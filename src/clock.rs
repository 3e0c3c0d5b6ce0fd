use chrono::{DateTime, FixedOffset, Utc};

// UTC+08:00
const POST_OFFSET_SECONDS: i32 = 8 * 3600;

pub(crate) fn post_offset() -> FixedOffset {
    FixedOffset::east_opt(POST_OFFSET_SECONDS).expect("UTC+8 is a valid offset")
}

pub(crate) fn now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&post_offset())
}

#[cfg(test)]
pub(crate) fn fixed(rfc3339: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&post_offset())
}
