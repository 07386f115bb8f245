//! Fixed-width label formatting

use chrono::{Datelike, NaiveDate};

/// Format the battery readout into `buf` and return it as a string slice.
///
/// The layout is five fixed character slots: `'+'` or `' '` for the charging
/// flag, `'1'` or `' '` for a charge of 100%, two digits of `percent % 100`,
/// and a literal `'%'`. Charge is expected pre-clamped to 0–100 by the power
/// service and is not re-validated.
pub fn battery_text(buf: &mut [u8; 6], percent: u8, charging: bool) -> &str {
    format_no_std::show(
        buf,
        format_args!(
            "{}{}{:02}%",
            if charging { '+' } else { ' ' },
            if percent >= 100 { '1' } else { ' ' },
            percent % 100,
        ),
    )
    .unwrap()
}

/// 3-letter weekday abbreviation, e.g. "Wed"
pub fn day_text(buf: &mut [u8; 6], date: NaiveDate) -> &str {
    format_no_std::show(buf, format_args!("{}", date.weekday())).unwrap()
}

/// Zero-padded day of month, e.g. "05"
pub fn day_number_text(buf: &mut [u8; 4], date: NaiveDate) -> &str {
    format_no_std::show(buf, format_args!("{:02}", date.day())).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_text_keeps_five_fixed_slots() {
        let mut buf = [0u8; 6];
        assert_eq!(battery_text(&mut buf, 100, false), " 100%");
        assert_eq!(battery_text(&mut buf, 7, true), "+ 07%");
        assert_eq!(battery_text(&mut buf, 100, true), "+100%");
        assert_eq!(battery_text(&mut buf, 64, false), "  64%");
        assert_eq!(battery_text(&mut buf, 0, false), "  00%");
    }

    #[test]
    fn date_labels_for_a_known_wednesday() {
        // 2025-02-05 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
        let mut day = [0u8; 6];
        let mut num = [0u8; 4];
        assert_eq!(day_text(&mut day, date), "Wed");
        assert_eq!(day_number_text(&mut num, date), "05");
    }

    #[test]
    fn day_number_pads_and_passes_two_digit_days() {
        let mut num = [0u8; 4];
        let first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(day_number_text(&mut num, first), "01");
        let last = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(day_number_text(&mut num, last), "31");
    }
}
