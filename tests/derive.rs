#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dashtrack::libs::clock::{BreakEntry, TimeFormat};
    use dashtrack::libs::config::TrackerConfig;
    use dashtrack::libs::shift::{derive_shift, parse_decimal, RawShift};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn base_raw() -> RawShift {
        RawShift {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            start: "9:00 AM".to_string(),
            end: "5:00 PM".to_string(),
            gross: "120.50".to_string(),
            miles_start: "1,000".to_string(),
            miles_end: "1,130".to_string(),
            price_per_gal: None,
            breaks: vec![BreakEntry::new("12:00 PM", "12:30 PM")],
        }
    }

    #[test]
    fn test_derive_standard_shift() {
        let shift = derive_shift(&base_raw(), &TrackerConfig::default());

        assert_eq!(shift.id, None);
        assert_eq!(shift.shift_minutes, 480);
        assert_eq!(shift.break_minutes, 30);
        assert_eq!(shift.working_minutes, 450);
        assert_eq!(shift.gross, dec!(120.50));
        assert_eq!(shift.miles_driven, dec!(130));
        // 130 miles at 26 mpg burns exactly 5 gallons
        assert_eq!(shift.gallons, dec!(5));
        assert_eq!(shift.price_per_gal, dec!(3.272));
        assert_eq!(shift.gas_cost, dec!(16.36));
        assert_eq!(shift.net, dec!(104.14));
        assert_eq!(shift.hourly.unwrap().round_dp(2), dec!(13.89));
    }

    #[test]
    fn test_explicit_price_overrides_default() {
        let mut raw = base_raw();
        raw.price_per_gal = Some("4.00".to_string());
        let shift = derive_shift(&raw, &TrackerConfig::default());

        assert_eq!(shift.price_per_gal, dec!(4.00));
        assert_eq!(shift.gas_cost, dec!(20.00));
        assert_eq!(shift.net, dec!(100.50));
    }

    #[test]
    fn test_configured_mpg_changes_gallons() {
        let config = TrackerConfig {
            mpg: dec!(30.9),
            ..TrackerConfig::default()
        };
        let shift = derive_shift(&base_raw(), &config);

        assert_eq!(shift.gallons.round_dp(4), dec!(4.2071));
        // Downstream figures hold their defining relations at full precision
        assert_eq!(shift.gas_cost, shift.gallons * shift.price_per_gal);
        assert_eq!(shift.net, shift.gross - shift.gas_cost);
    }

    #[test]
    fn test_gallons_keep_full_quotient_precision() {
        let mut raw = base_raw();
        raw.miles_start = "1,000".to_string();
        raw.miles_end = "1,100".to_string();
        let shift = derive_shift(&raw, &TrackerConfig::default());

        // 100/26 does not terminate; the stored quotient is the exact
        // division result, not a rounded figure
        assert_eq!(shift.gallons, Decimal::from(100) / Decimal::from(26));
        assert_eq!(shift.gas_cost, shift.gallons * shift.price_per_gal);
    }

    #[test]
    fn test_zero_mpg_yields_zero_gallons() {
        let config = TrackerConfig {
            mpg: dec!(0),
            ..TrackerConfig::default()
        };
        let shift = derive_shift(&base_raw(), &config);

        assert_eq!(shift.gallons, Decimal::ZERO);
        assert_eq!(shift.gas_cost, Decimal::ZERO);
        assert_eq!(shift.net, shift.gross);
    }

    #[test]
    fn test_zero_working_minutes_has_no_hourly() {
        let mut raw = base_raw();
        raw.start = "9:00 AM".to_string();
        raw.end = "9:00 AM".to_string();
        raw.breaks = Vec::new();

        let shift = derive_shift(&raw, &TrackerConfig::default());
        assert_eq!(shift.working_minutes, 0);
        assert_eq!(shift.hourly, None);
    }

    #[test]
    fn test_breaks_exceeding_shift_clamp_working_time() {
        let mut raw = base_raw();
        raw.start = "9:00 AM".to_string();
        raw.end = "10:00 AM".to_string();
        raw.breaks = vec![BreakEntry::new("12:00 PM", "2:00 PM")];

        let shift = derive_shift(&raw, &TrackerConfig::default());
        assert_eq!(shift.shift_minutes, 60);
        assert_eq!(shift.break_minutes, 120);
        // Working time floors at zero rather than going negative
        assert_eq!(shift.working_minutes, 0);
        assert_eq!(shift.hourly, None);
    }

    #[test]
    fn test_unparsable_inputs_read_as_zero() {
        let raw = RawShift {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            start: "whenever".to_string(),
            end: "5:00 PM".to_string(),
            gross: "abc".to_string(),
            miles_start: String::new(),
            miles_end: String::new(),
            price_per_gal: None,
            breaks: Vec::new(),
        };
        let shift = derive_shift(&raw, &TrackerConfig::default());

        assert_eq!(shift.shift_minutes, 0);
        assert_eq!(shift.gross, Decimal::ZERO);
        assert_eq!(shift.miles_driven, Decimal::ZERO);
        assert_eq!(shift.net, Decimal::ZERO);
        assert_eq!(shift.hourly, None);
    }

    #[test]
    fn test_unparsable_price_falls_back_to_default() {
        let mut raw = base_raw();
        raw.price_per_gal = Some("cheap".to_string());
        let shift = derive_shift(&raw, &TrackerConfig::default());
        assert_eq!(shift.price_per_gal, dec!(3.272));
    }

    #[test]
    fn test_negative_mileage_flows_through() {
        let mut raw = base_raw();
        raw.miles_start = "500".to_string();
        raw.miles_end = "450".to_string();
        let shift = derive_shift(&raw, &TrackerConfig::default());

        // A backwards odometer entry is kept, not clamped: gas cost goes
        // negative and net rises above gross
        assert_eq!(shift.miles_driven, dec!(-50));
        assert!(shift.gas_cost < Decimal::ZERO);
        assert!(shift.net > shift.gross);
    }

    #[test]
    fn test_extreme_inputs_never_panic() {
        // An odometer reading near the top of Decimal range: derivation still
        // returns a record, with the unrepresentable hourly rate absent
        let mut raw = base_raw();
        raw.miles_end = "70000000000000000000000000000".to_string();
        let shift = derive_shift(&raw, &TrackerConfig::default());

        assert_eq!(shift.working_minutes, 450);
        assert!(shift.net < Decimal::ZERO);
        assert_eq!(shift.hourly, None);

        // An out-of-range gas cost reads as zero, like unreadable input
        let mut raw = base_raw();
        raw.price_per_gal = Some("70000000000000000000000000000".to_string());
        let shift = derive_shift(&raw, &TrackerConfig::default());

        assert_eq!(shift.gas_cost, Decimal::ZERO);
        assert_eq!(shift.net, shift.gross);
    }

    #[test]
    fn test_overnight_shift() {
        let mut raw = base_raw();
        raw.start = "11:00 PM".to_string();
        raw.end = "1:00 AM".to_string();
        raw.breaks = Vec::new();
        let shift = derive_shift(&raw, &TrackerConfig::default());
        assert_eq!(shift.shift_minutes, 120);
        assert_eq!(shift.working_minutes, 120);
    }

    #[test]
    fn test_twenty_four_hour_mode() {
        let config = TrackerConfig {
            time_format: TimeFormat::TwentyFourHour,
            ..TrackerConfig::default()
        };
        let mut raw = base_raw();
        raw.start = "09:00".to_string();
        raw.end = "17:00".to_string();
        raw.breaks = Vec::new();

        let shift = derive_shift(&raw, &config);
        assert_eq!(shift.shift_minutes, 480);

        // 12-hour text is not readable in this mode and degrades to zero
        raw.start = "9:00 AM".to_string();
        raw.end = "5:00 PM".to_string();
        let shift = derive_shift(&raw, &config);
        assert_eq!(shift.shift_minutes, 0);
    }

    #[test]
    fn test_start_and_end_are_stored_trimmed() {
        let mut raw = base_raw();
        raw.start = "  9:00 AM ".to_string();
        raw.end = " 5:00 PM".to_string();
        let shift = derive_shift(&raw, &TrackerConfig::default());
        assert_eq!(shift.start, "9:00 AM");
        assert_eq!(shift.end, "5:00 PM");
    }

    #[test]
    fn test_to_raw_re_derives_identically() {
        let config = TrackerConfig::default();
        let shift = derive_shift(&base_raw(), &config);
        let again = derive_shift(&shift.to_raw(), &config);
        assert_eq!(again, shift);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1,234.56"), dec!(1234.56));
        assert_eq!(parse_decimal(" 12 "), dec!(12));
        assert_eq!(parse_decimal(""), Decimal::ZERO);
        assert_eq!(parse_decimal("junk"), Decimal::ZERO);
    }
}
