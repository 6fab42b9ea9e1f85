use chrono::{DateTime, Utc};

/// Format a timestamp as relative time ("2 min ago", "yesterday")
pub fn format_relative(ts: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Calendar date, for list columns where relative time reads poorly.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_relative_buckets() {
        let now = Utc::now();
        assert_eq!(format_relative(&(now - Duration::seconds(30))), "just now");
        assert_eq!(format_relative(&(now - Duration::minutes(5))), "5 min ago");
        assert_eq!(format_relative(&(now - Duration::hours(3))), "3 hours ago");
        assert_eq!(format_relative(&(now - Duration::days(1))), "yesterday");
        assert_eq!(format_relative(&(now - Duration::days(3))), "3 days ago");
    }

    #[test]
    fn test_format_date() {
        let ts = DateTime::parse_from_rfc3339("2024-09-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&ts), "2024-09-15");
    }
}
