use crate::libs::formatter::{format_breaks, format_hourly, format_minutes, format_money};
use crate::libs::shift::Shift;
use crate::libs::summary::{MoneyPair, SummaryView};
use anyhow::Result;
use clap::ValueEnum;
use prettytable::{row, Table};
use rust_decimal::Decimal;

/// Which money figure the tables highlight. Pure display state, never stored
/// on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DisplayMode {
    #[default]
    Net,
    Gross,
}

impl DisplayMode {
    pub fn header(self) -> &'static str {
        match self {
            DisplayMode::Net => "NET",
            DisplayMode::Gross => "GROSS",
        }
    }

    pub fn pick(self, pair: &MoneyPair) -> Decimal {
        match self {
            DisplayMode::Net => pair.net,
            DisplayMode::Gross => pair.gross,
        }
    }

    pub fn pick_shift(self, shift: &Shift) -> Decimal {
        match self {
            DisplayMode::Net => shift.net,
            DisplayMode::Gross => shift.gross,
        }
    }
}

pub struct View {}

impl View {
    pub fn shifts(shifts: &[Shift], mode: DisplayMode) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "ID",
            "DATE",
            "START",
            "END",
            "WORK",
            "MILES",
            "GAS COST",
            mode.header(),
            "HOURLY"
        ]);
        for shift in shifts {
            table.add_row(row![
                shift.id.unwrap_or(0),
                shift.date,
                shift.start,
                shift.end,
                format_minutes(shift.working_minutes),
                format_money(shift.miles_driven),
                format_money(shift.gas_cost),
                format_money(mode.pick_shift(shift)),
                format_hourly(shift.hourly)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn breaks(shift: &Shift) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "BREAKS", "TOTAL"]);
        table.add_row(row![
            shift.date,
            format_breaks(&shift.breaks),
            format_minutes(shift.break_minutes)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &SummaryView, mode: DisplayMode) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", mode.header()]);
        table.add_row(row!["This week", format_money(mode.pick(&summary.week))]);
        table.add_row(row!["All time", format_money(mode.pick(&summary.all_time))]);
        table.add_row(row![
            "Average hourly",
            format_hourly(summary.average_hourly.as_ref().map(|pair| mode.pick(pair)))
        ]);
        table.printstd();

        Ok(())
    }
}
