//! Shift record storage.
//!
//! One row per shift plus a child table holding its break intervals in entry
//! order. Decimal columns are stored as TEXT written by `Decimal::to_string`,
//! so values round-trip without precision loss; `hourly` is nullable and NULL
//! means "no rate" (zero working minutes), which is distinct from a stored
//! zero. Writes that touch both tables run inside one transaction, so the
//! break rows can never disagree with the scalars next to them.

use crate::db::db::Db;
use crate::libs::clock::BreakEntry;
use crate::libs::shift::Shift;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;
use std::str::FromStr;

const SCHEMA_SHIFTS: &str = "CREATE TABLE IF NOT EXISTS shifts (
    id INTEGER PRIMARY KEY,
    date DATE NOT NULL,
    start TEXT NOT NULL,
    end TEXT NOT NULL,
    shift_minutes INTEGER NOT NULL,
    break_minutes INTEGER NOT NULL,
    working_minutes INTEGER NOT NULL,
    gross TEXT NOT NULL,
    gas_cost TEXT NOT NULL,
    net TEXT NOT NULL,
    miles_start TEXT NOT NULL,
    miles_end TEXT NOT NULL,
    miles_driven TEXT NOT NULL,
    gallons TEXT NOT NULL,
    price_per_gal TEXT NOT NULL,
    hourly TEXT
);";
const SCHEMA_SHIFT_BREAKS: &str = "CREATE TABLE IF NOT EXISTS shift_breaks (
    id INTEGER PRIMARY KEY,
    shift_id INTEGER NOT NULL,
    position INTEGER NOT NULL,
    start TEXT NOT NULL,
    end TEXT NOT NULL
);";
const INSERT_SHIFT: &str = "INSERT INTO shifts (date, start, end, shift_minutes, break_minutes, working_minutes,
    gross, gas_cost, net, miles_start, miles_end, miles_driven, gallons, price_per_gal, hourly)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)";
const UPDATE_SHIFT: &str = "UPDATE shifts SET date = ?2, start = ?3, end = ?4, shift_minutes = ?5, break_minutes = ?6,
    working_minutes = ?7, gross = ?8, gas_cost = ?9, net = ?10, miles_start = ?11, miles_end = ?12,
    miles_driven = ?13, gallons = ?14, price_per_gal = ?15, hourly = ?16 WHERE id = ?1";
const DELETE_SHIFT: &str = "DELETE FROM shifts WHERE id = ?1";
const SELECT_FIELDS: &str = "SELECT id, date, start, end, shift_minutes, break_minutes, working_minutes,
    gross, gas_cost, net, miles_start, miles_end, miles_driven, gallons, price_per_gal, hourly FROM shifts";
const INSERT_BREAK: &str = "INSERT INTO shift_breaks (shift_id, position, start, end) VALUES (?1, ?2, ?3, ?4)";
const DELETE_BREAKS: &str = "DELETE FROM shift_breaks WHERE shift_id = ?1";
const SELECT_BREAKS: &str = "SELECT start, end FROM shift_breaks WHERE shift_id = ?1 ORDER BY position";
const EXISTS_DATE: &str = "SELECT 1 FROM shifts WHERE date = ?1 LIMIT 1";

pub struct Shifts {
    db: Db,
}

impl Shifts {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SHIFTS, [])?;
        db.conn.execute(SCHEMA_SHIFT_BREAKS, [])?;
        Ok(Shifts { db })
    }

    /// Inserts a new record and returns it with `id` populated.
    pub fn create(&mut self, shift: &Shift) -> Result<Shift> {
        let transaction = self.db.conn.transaction()?;
        transaction.execute(
            INSERT_SHIFT,
            params![
                shift.date,
                shift.start,
                shift.end,
                shift.shift_minutes,
                shift.break_minutes,
                shift.working_minutes,
                shift.gross.to_string(),
                shift.gas_cost.to_string(),
                shift.net.to_string(),
                shift.miles_start.to_string(),
                shift.miles_end.to_string(),
                shift.miles_driven.to_string(),
                shift.gallons.to_string(),
                shift.price_per_gal.to_string(),
                shift.hourly.map(|rate| rate.to_string()),
            ],
        )?;
        let id = transaction.last_insert_rowid();
        Self::insert_breaks(&transaction, id, &shift.breaks)?;
        transaction.commit()?;

        let mut created = shift.clone();
        created.id = Some(id);
        Ok(created)
    }

    /// Replaces the whole record stored under `shift.id`, breaks included.
    pub fn update(&mut self, shift: &Shift) -> Result<()> {
        let id = match shift.id {
            Some(id) => id,
            None => anyhow::bail!("cannot update a shift that has never been saved"),
        };
        let transaction = self.db.conn.transaction()?;
        transaction.execute(
            UPDATE_SHIFT,
            params![
                id,
                shift.date,
                shift.start,
                shift.end,
                shift.shift_minutes,
                shift.break_minutes,
                shift.working_minutes,
                shift.gross.to_string(),
                shift.gas_cost.to_string(),
                shift.net.to_string(),
                shift.miles_start.to_string(),
                shift.miles_end.to_string(),
                shift.miles_driven.to_string(),
                shift.gallons.to_string(),
                shift.price_per_gal.to_string(),
                shift.hourly.map(|rate| rate.to_string()),
            ],
        )?;
        transaction.execute(DELETE_BREAKS, params![id])?;
        Self::insert_breaks(&transaction, id, &shift.breaks)?;
        transaction.commit()?;
        Ok(())
    }

    /// Deletes by id; returns whether a record existed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let transaction = self.db.conn.transaction()?;
        transaction.execute(DELETE_BREAKS, params![id])?;
        let affected = transaction.execute(DELETE_SHIFT, params![id])?;
        transaction.commit()?;
        Ok(affected > 0)
    }

    pub fn fetch(&mut self, id: i64) -> Result<Option<Shift>> {
        let query = format!("{} WHERE id = ?1", SELECT_FIELDS);
        let shift = self
            .db
            .conn
            .query_row(&query, params![id], Self::map_row)
            .optional()?;
        match shift {
            Some(shift) => Ok(Some(self.attach_breaks(shift)?)),
            None => Ok(None),
        }
    }

    /// All records ordered by date, oldest first, each with its breaks in
    /// entry order.
    pub fn fetch_all(&mut self) -> Result<Vec<Shift>> {
        let query = format!("{} ORDER BY date, id", SELECT_FIELDS);
        let mut stmt = self.db.conn.prepare(&query)?;
        let shift_iter = stmt.query_map([], Self::map_row)?;
        let mut shifts = Vec::new();
        for shift in shift_iter {
            shifts.push(shift?);
        }
        drop(stmt);

        let mut complete = Vec::with_capacity(shifts.len());
        for shift in shifts {
            complete.push(self.attach_breaks(shift)?);
        }
        Ok(complete)
    }

    pub fn fetch_by_date(&mut self, date: NaiveDate) -> Result<Vec<Shift>> {
        let query = format!("{} WHERE date = ?1 ORDER BY id", SELECT_FIELDS);
        let mut stmt = self.db.conn.prepare(&query)?;
        let shift_iter = stmt.query_map(params![date], Self::map_row)?;
        let mut shifts = Vec::new();
        for shift in shift_iter {
            shifts.push(shift?);
        }
        drop(stmt);

        let mut complete = Vec::with_capacity(shifts.len());
        for shift in shifts {
            complete.push(self.attach_breaks(shift)?);
        }
        Ok(complete)
    }

    /// Whether any record carries this date. Restore uses this as its
    /// de-duplication check.
    pub fn has_date(&mut self, date: NaiveDate) -> Result<bool> {
        let hit = self
            .db
            .conn
            .query_row(EXISTS_DATE, params![date], |_| Ok(()))
            .optional()?;
        Ok(hit.is_some())
    }

    fn insert_breaks(conn: &Connection, shift_id: i64, breaks: &[BreakEntry]) -> Result<()> {
        for (position, entry) in breaks.iter().enumerate() {
            conn.execute(INSERT_BREAK, params![shift_id, position as i64, entry.start, entry.end])?;
        }
        Ok(())
    }

    fn attach_breaks(&mut self, mut shift: Shift) -> Result<Shift> {
        let id = match shift.id {
            Some(id) => id,
            None => return Ok(shift),
        };
        let mut stmt = self.db.conn.prepare(SELECT_BREAKS)?;
        let break_iter = stmt.query_map(params![id], |row| {
            Ok(BreakEntry {
                start: row.get(0)?,
                end: row.get(1)?,
            })
        })?;
        let mut breaks = Vec::new();
        for entry in break_iter {
            breaks.push(entry?);
        }
        shift.breaks = breaks;
        Ok(shift)
    }

    fn map_row(row: &rusqlite::Row) -> rusqlite::Result<Shift> {
        // Decimal columns are written by this module via to_string, so
        // parsing them back cannot fail on an intact database.
        Ok(Shift {
            id: Some(row.get(0)?),
            date: row.get(1)?,
            start: row.get(2)?,
            end: row.get(3)?,
            shift_minutes: row.get(4)?,
            break_minutes: row.get(5)?,
            working_minutes: row.get(6)?,
            gross: Decimal::from_str(&row.get::<_, String>(7)?).unwrap(),
            gas_cost: Decimal::from_str(&row.get::<_, String>(8)?).unwrap(),
            net: Decimal::from_str(&row.get::<_, String>(9)?).unwrap(),
            miles_start: Decimal::from_str(&row.get::<_, String>(10)?).unwrap(),
            miles_end: Decimal::from_str(&row.get::<_, String>(11)?).unwrap(),
            miles_driven: Decimal::from_str(&row.get::<_, String>(12)?).unwrap(),
            gallons: Decimal::from_str(&row.get::<_, String>(13)?).unwrap(),
            price_per_gal: Decimal::from_str(&row.get::<_, String>(14)?).unwrap(),
            hourly: row
                .get::<_, Option<String>>(15)?
                .map(|text| Decimal::from_str(&text).unwrap()),
            breaks: Vec::new(),
        })
    }
}
