//! Block generators: each one writes a visually distinct region at an
//! anchor (1-based row, column), marks the cells it touched, and returns
//! the anchor. Formula text comes from [`crate::formula`]; coordinates
//! from [`crate::layout`]. This is the only module besides the assembler
//! that talks to the spreadsheet sink.

use std::collections::HashSet;

use chrono::Local;
use rust_xlsxwriter::{Format, Formula, Url, Worksheet, XlsxError};

use crate::formula;
use crate::layout::{BANNER_ROW, DATE_ROW, SCHEMA_WIDTH, SlotRegion, VolumeField};
use crate::style;

const REPO_URL: &str = "https://github.com/jonschipp/timetotrain";

/// Cells written on one sheet. The sink is write-only, so the clear pass
/// works from these marks instead of re-reading the document. Doubles as
/// the collision check: a block landing on an already-written cell is a
/// layout bug and trips the assertion during generation.
#[derive(Default)]
pub struct Marks {
    cells: HashSet<(u32, u16)>,
    max_row: u32,
    max_col: u16,
}

impl Marks {
    pub fn mark(&mut self, row: u32, col: u16) {
        let fresh = self.cells.insert((row, col));
        debug_assert!(fresh, "cell {} written twice", formula::cell(row, col));
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
    }

    pub fn mark_span(&mut self, row: u32, first_col: u16, last_col: u16) {
        for col in first_col..=last_col {
            self.mark(row, col);
        }
    }

    #[must_use]
    pub fn contains(&self, row: u32, col: u16) -> bool {
        self.cells.contains(&(row, col))
    }

    #[must_use]
    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    #[must_use]
    pub fn max_col(&self) -> u16 {
        self.max_col
    }
}

/// Merged header spanning the schema width: "Day 1", "Exercise 2".
pub fn header(
    ws: &mut Worksheet,
    marks: &mut Marks,
    row: u32,
    col: u16,
    heading: &str,
    value: u32,
    format: &Format,
) -> Result<(u32, u16), XlsxError> {
    ws.merge_range(
        row - 1,
        col - 1,
        row - 1,
        col + SCHEMA_WIDTH - 2,
        &format!("{heading} {value}"),
        format,
    )?;
    marks.mark_span(row, col, col + SCHEMA_WIDTH - 1);
    Ok((row, col))
}

/// Merged full-width input row for the exercise name.
pub fn name_header(
    ws: &mut Worksheet,
    marks: &mut Marks,
    row: u32,
    col: u16,
) -> Result<(u32, u16), XlsxError> {
    ws.merge_range(
        row - 1,
        col - 1,
        row - 1,
        col + SCHEMA_WIDTH - 2,
        "",
        &style::name_header(),
    )?;
    marks.mark_span(row, col, col + SCHEMA_WIDTH - 1);
    Ok((row, col))
}

pub enum Divider<'a> {
    /// User-fillable merged cell, neutral style.
    Manual,
    /// Computed merged cell holding the given formula, highlighted.
    Formula(&'a str),
}

/// Label cell plus the rest of the row merged into one input/formula
/// cell. Returns the anchor of the merged cell.
pub fn divider(
    ws: &mut Worksheet,
    marks: &mut Marks,
    row: u32,
    col: u16,
    label: &str,
    kind: Divider,
) -> Result<(u32, u16), XlsxError> {
    let r = row - 1;
    match kind {
        Divider::Manual => {
            ws.write_string_with_format(r, col - 1, label, &style::divider_label())?;
            ws.merge_range(
                r,
                col,
                r,
                col + SCHEMA_WIDTH - 2,
                "",
                &style::manual_input(),
            )?;
        }
        Divider::Formula(text) => {
            let fmt = style::formula_cell();
            ws.write_string_with_format(r, col - 1, label, &style::divider_label_highlight())?;
            ws.merge_range(r, col, r, col + SCHEMA_WIDTH - 2, "", &fmt)?;
            ws.write_formula_with_format(r, col, Formula::new(text), &fmt)?;
        }
    }
    marks.mark_span(row, col, col + SCHEMA_WIDTH - 1);
    Ok((row, col + 1))
}

/// The 8 schema field names left-to-right.
pub fn volume_header(
    ws: &mut Worksheet,
    marks: &mut Marks,
    row: u32,
    col: u16,
) -> Result<(), XlsxError> {
    let fmt = style::volume_header();
    for field in VolumeField::ALL {
        ws.write_string_with_format(row - 1, col + field.offset() - 1, field.label(), &fmt)?;
    }
    marks.mark_span(row, col, col + SCHEMA_WIDTH - 1);
    Ok(())
}

/// One row per set: "Set N" label, manual inputs for Load/Reps/RIR/Avg
/// Vel, and the three synthesized cells (RPE from RIR, Int% against the
/// E1RM cell, LWL looking back one sheet). Week 1 has no lookback, so
/// its LWL cells stay plain inputs.
pub fn volume_inputs(
    ws: &mut Worksheet,
    marks: &mut Marks,
    region: &SlotRegion,
    week: u32,
) -> Result<(), XlsxError> {
    let input = style::manual_input();
    let computed = style::formula_cell();
    let percent = style::percent_cell();
    let label = style::set_label();

    for set in 1..=region.sets {
        let row = region.set_row(set);
        let r = row - 1;

        ws.write_string_with_format(
            r,
            region.field_col(VolumeField::Sets) - 1,
            &format!("Set {set}"),
            &label,
        )?;

        for field in [
            VolumeField::Load,
            VolumeField::Reps,
            VolumeField::Rir,
            VolumeField::AvgVel,
        ] {
            ws.write_blank(r, region.field_col(field) - 1, &input)?;
        }

        let rpe = formula::rir_to_rpe(row, region.field_col(VolumeField::Rir));
        ws.write_formula_with_format(
            r,
            region.field_col(VolumeField::Rpe) - 1,
            Formula::new(&rpe),
            &computed,
        )?;

        let int_pct = formula::intensity(row, region.field_col(VolumeField::Load), region.e1rm_row());
        ws.write_formula_with_format(
            r,
            region.field_col(VolumeField::Intensity) - 1,
            Formula::new(&int_pct),
            &percent,
        )?;

        let lwl_col = region.field_col(VolumeField::LastWeekLoad) - 1;
        match formula::last_week_load(week, row, region.field_col(VolumeField::Load)) {
            Some(text) => {
                ws.write_formula_with_format(r, lwl_col, Formula::new(&text), &computed)?;
            }
            None => {
                ws.write_blank(r, lwl_col, &input)?;
            }
        }

        marks.mark_span(row, region.col, region.last_col());
    }
    Ok(())
}

/// Column maxima over the set rows.
pub fn maxes(ws: &mut Worksheet, marks: &mut Marks, region: &SlotRegion) -> Result<(), XlsxError> {
    aggregate_row(ws, marks, region, region.maxes_row(), "Maxes", |_, first, last, col| {
        formula::max(first, last, col)
    })
}

/// Non-zero means over the set rows; Avg Vel stays unrounded and Int%
/// rounds to 3 decimals, everything else to whole numbers.
pub fn averages(
    ws: &mut Worksheet,
    marks: &mut Marks,
    region: &SlotRegion,
) -> Result<(), XlsxError> {
    aggregate_row(
        ws,
        marks,
        region,
        region.averages_row(),
        "Averages",
        |field, first, last, col| {
            let decimals = match field {
                VolumeField::AvgVel => None,
                VolumeField::Intensity => Some(3),
                _ => Some(0),
            };
            formula::average(first, last, col, decimals)
        },
    )
}

/// Column sums over the set rows, zero-sum suppressed.
pub fn sums(ws: &mut Worksheet, marks: &mut Marks, region: &SlotRegion) -> Result<(), XlsxError> {
    aggregate_row(ws, marks, region, region.sums_row(), "Sums", |_, first, last, col| {
        formula::sum(first, last, col)
    })
}

fn aggregate_row(
    ws: &mut Worksheet,
    marks: &mut Marks,
    region: &SlotRegion,
    row: u32,
    label: &str,
    build: impl Fn(VolumeField, u32, u32, u16) -> String,
) -> Result<(), XlsxError> {
    let computed = style::formula_cell();
    ws.write_string_with_format(row - 1, region.col - 1, label, &style::divider_label_highlight())?;
    for field in VolumeField::NUMERIC {
        let col = region.field_col(field);
        let text = build(field, region.first_set_row(), region.last_set_row(), col);
        ws.write_formula_with_format(row - 1, col - 1, Formula::new(&text), &computed)?;
    }
    marks.mark_span(row, region.col, region.last_col());
    Ok(())
}

/// Label plus a single formula cell anchored in the Load column.
fn single_metric_row(
    ws: &mut Worksheet,
    marks: &mut Marks,
    region: &SlotRegion,
    row: u32,
    label: &str,
    text: &str,
) -> Result<(), XlsxError> {
    ws.write_string_with_format(row - 1, region.col - 1, label, &style::divider_label_highlight())?;
    ws.write_formula_with_format(
        row - 1,
        region.field_col(VolumeField::Load) - 1,
        Formula::new(text),
        &style::formula_cell(),
    )?;
    marks.mark_span(row, region.col, region.field_col(VolumeField::Load));
    Ok(())
}

pub fn volume(ws: &mut Worksheet, marks: &mut Marks, region: &SlotRegion) -> Result<(), XlsxError> {
    let text = formula::volume(region.sums_row(), region.field_col(VolumeField::Reps));
    single_metric_row(ws, marks, region, region.volume_row(), "Volume", &text)
}

pub fn tonnage(ws: &mut Worksheet, marks: &mut Marks, region: &SlotRegion) -> Result<(), XlsxError> {
    let text = formula::tonnage(
        region.first_set_row(),
        region.last_set_row(),
        region.field_col(VolumeField::Load),
        region.field_col(VolumeField::Reps),
    );
    single_metric_row(ws, marks, region, region.tonnage_row(), "Tonnage", &text)
}

pub fn e1rm(ws: &mut Worksheet, marks: &mut Marks, region: &SlotRegion) -> Result<(), XlsxError> {
    let text = formula::e1rm(
        region.first_set_row(),
        region.last_set_row(),
        region.field_col(VolumeField::Load),
        region.field_col(VolumeField::Reps),
    );
    single_metric_row(ws, marks, region, region.e1rm_row(), "E1RM", &text)
}

/// Sheet title across the full allocated width, with the generation-date
/// sub-banner and repository link underneath.
pub fn banner(
    ws: &mut Worksheet,
    marks: &mut Marks,
    first_col: u16,
    last_col: u16,
) -> Result<(), XlsxError> {
    ws.merge_range(
        BANNER_ROW - 1,
        first_col - 1,
        BANNER_ROW - 1,
        last_col - 1,
        "Workout Program",
        &style::banner(),
    )?;
    marks.mark_span(BANNER_ROW, first_col, last_col);

    let date_fmt = style::date_banner();
    ws.merge_range(
        DATE_ROW - 1,
        first_col - 1,
        DATE_ROW - 1,
        last_col - 1,
        "",
        &date_fmt,
    )?;
    let link = Url::new(REPO_URL).set_text(format!(
        "Generated {}",
        Local::now().format("%Y-%m-%d")
    ));
    ws.write_url_with_format(DATE_ROW - 1, first_col - 1, link, &date_fmt)?;
    marks.mark_span(DATE_ROW, first_col, last_col);

    Ok(())
}
