#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleTracker,
    ConfigModuleServer,
    PromptSelectModules,
    PromptMpg,
    PromptDefaultPrice,
    PromptWeekAnchor,
    PromptTimeFormat,
    PromptServerApiUrl,

    // === SHIFT MESSAGES ===
    ShiftRecorded(i64),
    ShiftUpdated(i64),
    ShiftNotFound(i64),
    ShiftsDeleted(usize),
    NoShiftIdsProvided,
    ConfirmDeleteShifts(usize),
    ConfirmShiftUpdate,
    OperationCancelled,
    NoShiftsRecorded,
    NoShiftsForDate(String),
    EditingShift(i64),
    InvalidBreakPair(String),
    InvalidDateFormat(String),

    // === SHIFT ENTRY PROMPTS ===
    PromptShiftDate,
    PromptShiftStart,
    PromptShiftEnd,
    PromptGrossPay,
    PromptMilesStart,
    PromptMilesEnd,
    PromptPricePerGal,
    PromptBreaks,

    // === SUMMARY MESSAGES ===
    SummaryHeader(String), // reference date

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NoDataToExport,

    // === BACKUP MESSAGES ===
    BackupCompleted(String),       // path
    BackupFileNotFound(String),    // path
    RestoreCompleted(usize, usize), // imported, skipped
    BackupVersionUnsupported(u32),

    // === SYNC MESSAGES ===
    ServerNotConfigured,
    SyncCompleted(usize), // record count
    SyncFailed(String),   // status or transport error
}
