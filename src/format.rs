use chrono::DateTime;

/// Unix seconds as `yyyy-MM-dd HH:mm:ss` (UTC); zero means unknown.
pub fn timestamp(secs: i64) -> String {
    if secs == 0 {
        return "unknown".to_string();
    }
    DateTime::from_timestamp(secs, 0)
        .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn date(secs: i64) -> String {
    if secs == 0 {
        return "unknown".to_string();
    }
    DateTime::from_timestamp(secs, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Percentage of wins over all decided and drawn games.
pub fn win_rate(wins: u32, losses: u32, draws: u32) -> f64 {
    let total = wins + losses + draws;
    if total == 0 {
        return 0.0;
    }
    f64::from(wins) * 100.0 / f64::from(total)
}

/// Cut `s` to at most `width` characters, ending in `...` when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

pub fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Last path segment of an API URL, e.g. the country code of `.../country/US`
/// or the url id of `.../club/chess-com-developer-community`.
pub fn last_segment(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}
