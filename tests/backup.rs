#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use dashtrack::db::shifts::Shifts;
    use dashtrack::libs::backup::{read_snapshot, restore, write_snapshot, Snapshot, BACKUP_VERSION};
    use dashtrack::libs::config::TrackerConfig;
    use dashtrack::libs::shift::{derive_shift, RawShift, Shift};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BackupTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for BackupTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            BackupTestContext { temp_dir }
        }
    }

    fn sample_shift(date: NaiveDate, gross: &str) -> Shift {
        let raw = RawShift {
            date,
            start: "9:00 AM".to_string(),
            end: "5:00 PM".to_string(),
            gross: gross.to_string(),
            miles_start: "1,000".to_string(),
            miles_end: "1,130".to_string(),
            price_per_gal: None,
            breaks: Vec::new(),
        };
        derive_shift(&raw, &TrackerConfig::default())
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_snapshot_round_trip(ctx: &mut BackupTestContext) {
        let entries = vec![
            sample_shift(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), "100"),
            sample_shift(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(), "80"),
        ];
        let snapshot = Snapshot::capture(entries.clone());
        assert_eq!(snapshot.version, BACKUP_VERSION);

        let path = ctx.temp_dir.path().join("backup.json");
        write_snapshot(&snapshot, &path).unwrap();
        let loaded = read_snapshot(&path).unwrap();

        assert_eq!(loaded.version, snapshot.version);
        assert_eq!(loaded.export_date, snapshot.export_date);
        assert_eq!(loaded.entries, entries);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_restore_skips_existing_dates(_ctx: &mut BackupTestContext) {
        let mut shifts = Shifts::new().unwrap();
        let config = TrackerConfig::default();

        let existing_date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        shifts.create(&sample_shift(existing_date, "100")).unwrap();

        let new_date = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let snapshot = Snapshot::capture(vec![
            // Same date as the local record: must be skipped, not merged
            sample_shift(existing_date, "999"),
            sample_shift(new_date, "80"),
        ]);

        let (imported, skipped) = restore(&snapshot, &mut shifts, &config).unwrap();
        assert_eq!((imported, skipped), (1, 1));

        let all = shifts.fetch_all().unwrap();
        assert_eq!(all.len(), 2);
        // The local record kept its own figures
        assert_eq!(all[0].gross, dec!(100));
        assert_eq!(all[1].gross, dec!(80));
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_restore_twice_is_a_no_op(_ctx: &mut BackupTestContext) {
        let mut shifts = Shifts::new().unwrap();
        let config = TrackerConfig::default();

        let snapshot = Snapshot::capture(vec![
            sample_shift(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), "100"),
            sample_shift(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(), "80"),
        ]);

        let (imported, skipped) = restore(&snapshot, &mut shifts, &config).unwrap();
        assert_eq!((imported, skipped), (2, 0));

        let (imported, skipped) = restore(&snapshot, &mut shifts, &config).unwrap();
        assert_eq!((imported, skipped), (0, 2));
        assert_eq!(shifts.fetch_all().unwrap().len(), 2);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_unknown_version_rejected(ctx: &mut BackupTestContext) {
        let mut snapshot = Snapshot::capture(Vec::new());
        snapshot.version = 99;

        let path = ctx.temp_dir.path().join("future.json");
        write_snapshot(&snapshot, &path).unwrap();
        assert!(read_snapshot(&path).is_err());
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_restored_entries_re_derive_under_local_config(_ctx: &mut BackupTestContext) {
        // An entry captured under some other vehicle's economy figure gets
        // its fuel numbers recomputed for this one on import
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let origin_config = TrackerConfig {
            mpg: dec!(20),
            ..TrackerConfig::default()
        };
        let raw = RawShift {
            date,
            start: "9:00 AM".to_string(),
            end: "5:00 PM".to_string(),
            gross: "100".to_string(),
            miles_start: "1,000".to_string(),
            miles_end: "1,130".to_string(),
            price_per_gal: Some("3.272".to_string()),
            breaks: Vec::new(),
        };
        let entry = derive_shift(&raw, &origin_config);
        assert_eq!(entry.gallons, dec!(6.5));

        let mut shifts = Shifts::new().unwrap();
        let local_config = TrackerConfig::default();
        restore(&Snapshot::capture(vec![entry]), &mut shifts, &local_config).unwrap();

        // 130 miles at the local 26 mpg burns 5 gallons, not 6.5
        let restored = &shifts.fetch_all().unwrap()[0];
        assert_eq!(restored.gallons, dec!(5));
    }
}
