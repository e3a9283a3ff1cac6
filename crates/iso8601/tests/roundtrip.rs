//! Randomised parse/format round trips.

use isocal_calendar::{
    CalendarDate, ClockTime, Duration, Microsecond, NaiveDateTime, days_in_month,
};
use isocal_iso8601::{
    Format, date_to_string, duration_to_string, naive_datetime_to_string, parse_date,
    parse_duration, parse_naive_datetime, parse_time, parse_utc_datetime, time_to_string,
    utc_datetime_to_string,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_date(rng: &mut StdRng) -> CalendarDate {
    let year = rng.random_range(-9999..=9999);
    let month = rng.random_range(1..=12u8);
    let day = rng.random_range(1..=days_in_month(year, month));
    CalendarDate::new(year, month, day).unwrap()
}

fn random_time(rng: &mut StdRng) -> ClockTime {
    let precision = rng.random_range(0..=6u8);
    // Keep only the digits the precision can show so the text is lossless.
    let scale = 10u32.pow(6 - u32::from(precision));
    let value = rng.random_range(0..=999_999u32) / scale * scale;
    let value = if precision == 0 { 0 } else { value };
    ClockTime::new(
        rng.random_range(0..=23),
        rng.random_range(0..=59),
        rng.random_range(0..=59),
        Microsecond::new(value, precision).unwrap(),
    )
    .unwrap()
}

#[test]
fn dates_roundtrip_in_both_styles() {
    let mut rng = StdRng::seed_from_u64(2015);
    for _ in 0..2_000 {
        let date = random_date(&mut rng);
        for format in [Format::Basic, Format::Extended] {
            let text = date_to_string(date, format);
            assert_eq!(parse_date(&text, format).unwrap(), date, "{text}");
        }
    }
}

#[test]
fn times_roundtrip_with_precision() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..2_000 {
        let time = random_time(&mut rng);
        for format in [Format::Basic, Format::Extended] {
            let text = time_to_string(time, format);
            assert_eq!(parse_time(&text, format).unwrap(), time, "{text}");
        }
    }
}

#[test]
fn datetimes_roundtrip() {
    let mut rng = StdRng::seed_from_u64(50);
    for _ in 0..2_000 {
        let datetime = NaiveDateTime::new(random_date(&mut rng), random_time(&mut rng));
        for format in [Format::Basic, Format::Extended] {
            let text = naive_datetime_to_string(datetime, format);
            assert_eq!(parse_naive_datetime(&text, format).unwrap(), datetime, "{text}");
            let utc_text = utc_datetime_to_string(datetime, format);
            let (utc, offset) = parse_utc_datetime(&utc_text, format).unwrap();
            assert_eq!((utc, offset), (datetime, 0));
        }
    }
}

#[test]
fn durations_roundtrip() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2_000 {
        let mut duration = Duration::new();
        if rng.random_bool(0.5) {
            duration = duration.with_year(rng.random_range(-50..=50));
        }
        if rng.random_bool(0.5) {
            duration = duration.with_day(rng.random_range(-400..=400));
        }
        if rng.random_bool(0.5) {
            duration = duration.with_minute(rng.random_range(-5_000..=5_000));
        }
        if rng.random_bool(0.5) {
            let micro = rng.random_range(1..=999_999);
            duration = duration
                .with_second(rng.random_range(0..=100))
                .with_microsecond(micro, 6);
        }
        let text = duration_to_string(&duration);
        let parsed = parse_duration(&text).unwrap();
        if duration.is_zero() {
            assert_eq!(text, "PT0S");
        } else {
            assert_eq!(parsed, duration, "{text}");
        }
    }
}
