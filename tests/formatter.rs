#[cfg(test)]
mod tests {
    use dashtrack::libs::clock::BreakEntry;
    use dashtrack::libs::formatter::{format_breaks, format_hourly, format_minutes, format_money, HOURLY_PLACEHOLDER};
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(75), "01:15");
        assert_eq!(format_minutes(480), "08:00");
        assert_eq!(format_minutes(1439), "23:59");
        // Negative spans clamp instead of rendering nonsense
        assert_eq!(format_minutes(-30), "00:00");
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(dec!(104.14)), "104.14");
        assert_eq!(format_money(dec!(104.1)), "104.10");
        assert_eq!(format_money(dec!(104)), "104.00");
        assert_eq!(format_money(dec!(0)), "0.00");
        assert_eq!(format_money(dec!(-16.368)), "-16.37");
        // Full-precision figures round only here, at the boundary
        assert_eq!(format_money(dec!(13.885333)), "13.89");
    }

    #[test]
    fn test_format_hourly() {
        assert_eq!(format_hourly(Some(dec!(13.89))), "13.89");
        assert_eq!(format_hourly(None), HOURLY_PLACEHOLDER);
        assert_eq!(format_hourly(None), "--");
        // A true zero rate still renders as a number
        assert_eq!(format_hourly(Some(dec!(0))), "0.00");
    }

    #[test]
    fn test_format_breaks() {
        assert_eq!(format_breaks(&[]), "");

        let breaks = vec![BreakEntry::new("12:15 PM", "12:45 PM"), BreakEntry::new("3:00 PM", "3:10 PM")];
        assert_eq!(format_breaks(&breaks), "12:15 PM-12:45 PM|3:00 PM-3:10 PM");
    }
}
