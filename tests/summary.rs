#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use dashtrack::libs::config::TrackerConfig;
    use dashtrack::libs::shift::{derive_shift, RawShift, Shift};
    use dashtrack::libs::summary::summarize;
    use dashtrack::libs::week::WeekAnchor;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // An 8-hour shift with no driving, so net equals gross exactly.
    fn shift_on(date: NaiveDate, gross: &str) -> Shift {
        let raw = RawShift {
            date,
            start: "9:00 AM".to_string(),
            end: "5:00 PM".to_string(),
            gross: gross.to_string(),
            miles_start: "0".to_string(),
            miles_end: "0".to_string(),
            price_per_gal: None,
            breaks: Vec::new(),
        };
        derive_shift(&raw, &TrackerConfig::default())
    }

    #[test]
    fn test_week_and_all_time_totals() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let shifts = vec![
            shift_on(monday, "100"),
            shift_on(monday + Duration::days(2), "50"),
            // Previous week: counts all-time but not weekly
            shift_on(monday - Duration::days(7), "200"),
        ];

        let summary = summarize(&shifts, monday, WeekAnchor::Iso);
        assert_eq!(summary.week.net, dec!(150));
        assert_eq!(summary.week.gross, dec!(150));
        assert_eq!(summary.all_time.net, dec!(350));
        assert_eq!(summary.all_time.gross, dec!(350));
    }

    #[test]
    fn test_average_hourly_over_all_working_time() {
        // Two 8-hour shifts totalling 350: 350 * 60 / 960 = 21.875
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let shifts = vec![shift_on(date, "150"), shift_on(date + Duration::days(1), "200")];

        let summary = summarize(&shifts, date, WeekAnchor::Iso);
        let average = summary.average_hourly.unwrap();
        assert_eq!(average.net, dec!(21.875));
        assert_eq!(average.gross, dec!(21.875));
    }

    #[test]
    fn test_average_hourly_absent_without_working_time() {
        // Earnings recorded against unreadable clock text still total up,
        // but no average can be formed over zero working minutes
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let raw = RawShift {
            date,
            start: String::new(),
            end: String::new(),
            gross: "75".to_string(),
            miles_start: "0".to_string(),
            miles_end: "0".to_string(),
            price_per_gal: None,
            breaks: Vec::new(),
        };
        let shifts = vec![derive_shift(&raw, &TrackerConfig::default())];

        let summary = summarize(&shifts, date, WeekAnchor::Iso);
        assert_eq!(summary.all_time.gross, dec!(75));
        assert!(summary.average_hourly.is_none());
    }

    #[test]
    fn test_totals_saturate_at_decimal_range() {
        // Two grosses whose sum cannot be represented: the totals clamp at
        // the Decimal boundary and no average rate is formed
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let huge = "70000000000000000000000000000";
        let shifts = vec![shift_on(date, huge), shift_on(date + Duration::days(1), huge)];

        let summary = summarize(&shifts, date, WeekAnchor::Iso);
        assert_eq!(summary.all_time.gross, Decimal::MAX);
        assert_eq!(summary.all_time.net, Decimal::MAX);
        assert!(summary.average_hourly.is_none());
    }

    #[test]
    fn test_empty_collection() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let summary = summarize(&[], date, WeekAnchor::Iso);
        assert_eq!(summary.week.net, Decimal::ZERO);
        assert_eq!(summary.all_time.gross, Decimal::ZERO);
        assert!(summary.average_hourly.is_none());
    }

    #[test]
    fn test_anchor_changes_week_membership() {
        // Reference date is a Sunday. Under Sunday-start the following Monday
        // shares its week; under ISO the Sunday stands at the end of the
        // previous one
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let monday = sunday + Duration::days(1);
        let shifts = vec![shift_on(sunday, "10"), shift_on(monday, "20")];

        let iso = summarize(&shifts, sunday, WeekAnchor::Iso);
        assert_eq!(iso.week.gross, dec!(10));

        let sunday_start = summarize(&shifts, sunday, WeekAnchor::SundayStart);
        assert_eq!(sunday_start.week.gross, dec!(30));
    }

    #[test]
    fn test_week_buckets_do_not_leak_across_years() {
        // Same week number in different years must not pool together
        let a = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        let shifts = vec![shift_on(a, "100"), shift_on(b, "40")];

        let summary = summarize(&shifts, b, WeekAnchor::Iso);
        assert_eq!(summary.week.gross, dec!(40));
        assert_eq!(summary.all_time.gross, dec!(140));
    }
}
