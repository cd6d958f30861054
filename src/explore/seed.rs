//! Daily seed derivation.
//!
//! The seed only depends on the calendar date, so every device computes
//! the same explore order for a given day without talking to a server.

use std::fmt::Write;

use chrono::{Datelike, Local, NaiveDate, NaiveTime};

pub const DEFAULT_LOCALE: &str = "pt_PT";
pub const DEFAULT_LABEL_FORMAT: &str = "%A, %-d de %B";

const FALLBACK_WEEKDAYS: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

const FALLBACK_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySeed {
    /// Always >= 1
    pub seed: u32,
    /// Human readable date, e.g. "segunda, 19 de outubro"
    pub label: String,
    /// `YYYY-MM-DD`
    pub key: String,
}

/// Derive the seed for `date`, labelled with the default Portuguese locale.
pub fn derive_daily_seed(date: NaiveDate) -> DailySeed {
    derive_daily_seed_with(date, DEFAULT_LOCALE, DEFAULT_LABEL_FORMAT)
}

pub fn derive_daily_seed_with(date: NaiveDate, locale: &str, label_format: &str) -> DailySeed {
    let key = date.format("%Y-%m-%d").to_string();
    DailySeed {
        seed: seed_from_key(&key),
        label: format_date_label(date, locale, label_format),
        key,
    }
}

/// Seed for the host's local "today".
pub fn today_seed() -> DailySeed {
    derive_daily_seed(Local::now().date_naive())
}

/// Rolling `h * 31 + c` hash with signed 32-bit wraparound.
pub fn seed_from_key(key: &str) -> u32 {
    let hash = key.chars().fold(0i32, |hash, c| {
        (hash << 5).wrapping_sub(hash).wrapping_add(c as i32)
    });

    match hash.unsigned_abs() {
        0 => 1,
        seed => seed,
    }
}

/// Render `date` with the locale's names, or the built-in Portuguese table
/// when the locale is not known or the format does not parse.
pub fn format_date_label(date: NaiveDate, locale: &str, label_format: &str) -> String {
    let Ok(chrono_locale) = chrono::Locale::try_from(locale) else {
        tracing::warn!(
            "Locale {} unavailable, falling back to manual date label",
            locale
        );
        return fallback_label(date);
    };

    let mut label = String::new();
    let formatted = date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(label_format, chrono_locale);

    match write!(label, "{}", formatted) {
        Ok(()) => label,
        Err(_) => {
            tracing::warn!(
                "Invalid date label format {:?}, falling back to manual date label",
                label_format
            );
            fallback_label(date)
        }
    }
}

fn fallback_label(date: NaiveDate) -> String {
    let weekday = FALLBACK_WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    let month = FALLBACK_MONTHS[date.month0() as usize];
    format!("{} · {} {}", weekday, date.day(), month)
}
