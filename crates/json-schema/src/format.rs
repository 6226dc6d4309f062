//! Semantic checks behind the `format` keyword.
//!
//! Each check takes the already-extracted string; non-string instances
//! never reach this module. Checks are intentionally pragmatic: a regex
//! over the canonical shape plus code for the parts regexes state badly
//! (calendar arithmetic, host length limits, IPv6 compression).

use std::sync::OnceLock;

use regex::Regex;

use crate::keyword::Format;

/// Returns true when `s` is a valid instance of `format`.
pub fn check(format: Format, s: &str) -> bool {
    match format {
        Format::DateTime => is_date_time(s),
        Format::Email => email_regex().is_match(s),
        Format::Hostname => is_hostname(s),
        Format::Ipv4 => ipv4_regex().is_match(s),
        Format::Ipv6 => s.parse::<std::net::Ipv6Addr>().is_ok(),
        Format::Uri => is_uri(s),
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$"
        ).unwrap()
    })
}

fn hostname_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.?$",
        )
        .unwrap()
    })
}

fn ipv4_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)$",
        )
        .unwrap()
    })
}

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap())
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(\d{2}):(\d{2}):(\d{2})(?:\.\d+)?(z|[+-]\d{2}:\d{2})$").unwrap()
    })
}

fn uri_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:\S+$").unwrap())
}

/// Overall name length capped at 253 octets, checked in code since the
/// label regex cannot express it.
fn is_hostname(s: &str) -> bool {
    let bare = s.strip_suffix('.').unwrap_or(s);
    bare.len() <= 253 && !bare.is_empty() && hostname_regex().is_match(s)
}

const MONTH_DAYS: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn is_date(s: &str) -> bool {
    let caps = match date_regex().captures(s) {
        Some(c) => c,
        None => return false,
    };
    let year: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let day: u32 = caps[3].parse().unwrap_or(0);
    if !(1..=12).contains(&month) {
        return false;
    }
    let max_day = if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[month as usize]
    };
    (1..=max_day).contains(&day)
}

fn is_time(s: &str) -> bool {
    let caps = match time_regex().captures(s) {
        Some(c) => c,
        None => return false,
    };
    let hour: u32 = caps[1].parse().unwrap_or(99);
    let minute: u32 = caps[2].parse().unwrap_or(99);
    let second: u32 = caps[3].parse().unwrap_or(99);
    // 60 admits a leap second.
    hour <= 23 && minute <= 59 && second <= 60
}

fn is_date_time(s: &str) -> bool {
    let mut parts = s.splitn(2, |c: char| c == 't' || c == 'T');
    match (parts.next(), parts.next()) {
        (Some(date), Some(time)) => is_date(date) && is_time(time),
        _ => false,
    }
}

fn is_uri(s: &str) -> bool {
    uri_regex().is_match(s)
}
