//! Workbook fixtures shared by the integration tests

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::Path;

/// A cell to place in a fixture sheet
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Date,
}

pub type SheetCells = &'static [(u32, u16, Cell)];

/// Write a workbook with the given sheets, in order
pub fn write_workbook(path: &Path, sheets: &[(&str, SheetCells)]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let date = ExcelDateTime::from_ymd(2024, 3, 4).unwrap();

    for (name, cells) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (row, col, cell) in cells.iter() {
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(*row, *col, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(*row, *col, *n).unwrap();
                }
                Cell::Date => {
                    worksheet
                        .write_datetime_with_format(*row, *col, &date, &date_format)
                        .unwrap();
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

pub const ORKS: SheetCells = &[
    (0, 1, Cell::Text("3-4")),
    (1, 1, Cell::Date),
    (2, 1, Cell::Text("Boyz")),
    (4, 1, Cell::Text("Nobz")),
    (2, 3, Cell::Text("Trukk")),
    (2, 9, Cell::Text("REMINDERS")),
];

pub const SPACE_MARINES: SheetCells = &[
    (0, 1, Cell::Text("3-4")),
    (2, 1, Cell::Text("  Scout Squad  ")),
    (3, 1, Cell::Text("Unmodified roll of 3: reroll")),
    (2, 5, Cell::Text("Terminator Squad")),
    (3, 5, Cell::Text("Terminator Squad")),
    (2, 7, Cell::Text("Redemptor Dreadnought")),
];

pub const MASTER_BLANK: SheetCells = &[
    (0, 1, Cell::Text("3-4")),
    (2, 1, Cell::Text("Unit name here")),
];

pub const AELDARI: SheetCells = &[
    (2, 1, Cell::Text("Guardian Defenders")),
    (3, 1, Cell::Date),
    (3, 3, Cell::Text("Wraithguard")),
    (4, 3, Cell::Text("Spawn tier 2 units instead")),
    (5, 3, Cell::Text("nan")),
    (6, 3, Cell::Number(5.0)),
    (2, 7, Cell::Text("Battle Rounds 1-2")),
    (3, 7, Cell::Text("If there are units left, roll again")),
    (4, 7, Cell::Text("Wraithknight")),
];
