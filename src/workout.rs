//! The sheet assembler: drives weeks -> days -> slots over the layout
//! and block generators, then the cosmetic clear pass and the single
//! save. Phases are strictly sequential and single-pass; the only
//! run-scoped mutable state is the [`VolumeSchema`], owned here and
//! reset at the start of every week.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::blocks::{self, Divider, Marks};
use crate::formula;
use crate::layout::{
    self, DAY_HEADER_ROW, SCHEMA_WIDTH, SlotRegion, VolumeField, VolumeSchema,
};
use crate::program::Program;
use crate::style;

pub struct Workout {
    workbook: Workbook,
    program: Program,
    // One mark set per sheet, in week order.
    marks: Vec<Marks>,
}

impl Workout {
    #[must_use]
    pub fn new(program: Program) -> Self {
        Self {
            workbook: Workbook::new(),
            program,
            marks: Vec::with_capacity(program.weeks as usize),
        }
    }

    /// Last column allocated to any day block, inclusive.
    fn last_column(&self) -> u16 {
        layout::day_column(self.program.frequency) + SCHEMA_WIDTH - 1
    }

    /// Create one sheet per week with its banner rows. The sink starts
    /// with no sheets, so there is no placeholder to remove afterwards.
    pub fn generate_weeks(&mut self) -> Result<Vec<String>> {
        let last_col = self.last_column();
        let mut names = Vec::with_capacity(self.program.weeks as usize);

        for week in 1..=self.program.weeks {
            let name = layout::sheet_name(week);
            println!("Writing sheet {name}");

            let ws = self.workbook.add_worksheet();
            ws.set_name(&name)?;

            let mut marks = Marks::default();
            blocks::banner(ws, &mut marks, layout::BEGIN_COLUMN, last_col)?;
            self.marks.push(marks);
            names.push(name);
        }

        Ok(names)
    }

    /// Lay the day headers left-to-right on every sheet and size the
    /// day-block columns.
    pub fn generate_frequency(&mut self) -> Result<()> {
        for week in 1..=self.program.weeks {
            let ws = self.workbook.worksheet_from_index((week - 1) as usize)?;
            let marks = &mut self.marks[(week - 1) as usize];

            for day in 1..=self.program.frequency {
                let col = layout::day_column(day);
                blocks::header(ws, marks, DAY_HEADER_ROW, col, "Day", day, &style::day_header())?;

                for offset in 0..SCHEMA_WIDTH {
                    let width = if offset == 0 { 12 } else { 10 };
                    ws.set_column_width(col + offset - 1, width)?;
                }
            }
        }
        Ok(())
    }

    /// Lay every slot region with all sub-blocks and formulas, then the
    /// day-level aggregate rows. The schema offsets advance per day and
    /// are reset at the start of each week, so re-entering a week can
    /// never double-offset the columns.
    pub fn generate_slots(&mut self) -> Result<()> {
        let Program {
            weeks,
            frequency,
            slots,
            sets,
        } = self.program;

        let mut schema = VolumeSchema::new();

        for week in 1..=weeks {
            schema.reset();
            let name = layout::sheet_name(week);
            let ws = self.workbook.worksheet_from_index((week - 1) as usize)?;
            let marks = &mut self.marks[(week - 1) as usize];

            for _day in 1..=frequency {
                let day_col = schema.day_base();
                let mut regions = Vec::with_capacity(slots as usize);

                for slot in 1..=slots {
                    let region = SlotRegion::new(slot, sets, day_col);
                    println!("Writing {name} row: {}, col: {}", region.row, region.col);
                    lay_slot(ws, marks, &region, week)?;
                    regions.push(region);
                }

                day_summary(ws, marks, &regions)?;
                schema.advance_day();
            }
        }
        Ok(())
    }

    /// Cosmetic pass: fill every cell inside the used bounding box that
    /// no block generator wrote.
    pub fn clear(&mut self) -> Result<()> {
        let fill = style::background();
        for (index, marks) in self.marks.iter().enumerate() {
            let ws = self.workbook.worksheet_from_index(index)?;
            for row in 1..=marks.max_row() {
                for col in 1..=marks.max_col() {
                    if !marks.contains(row, col) {
                        ws.write_blank(row - 1, col - 1, &fill)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Persist the artifact. The one place a failure is fatal.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.workbook
            .save(path)
            .with_context(|| format!("Unable to write spreadsheet: {}", path.display()))?;
        println!("Writing program to {}", path.display());
        Ok(())
    }
}

/// Run all generation phases and save to `path`.
pub fn generate<P: AsRef<Path>>(program: Program, path: P) -> Result<()> {
    let mut workout = Workout::new(program);
    workout.generate_weeks()?;
    workout.generate_frequency()?;
    workout.generate_slots()?;
    workout.clear()?;
    workout.save(path)
}

fn lay_slot(ws: &mut Worksheet, marks: &mut Marks, region: &SlotRegion, week: u32) -> Result<()> {
    blocks::header(
        ws,
        marks,
        region.header_row(),
        region.col,
        "Exercise",
        region.slot,
        &style::slot_header(),
    )?;
    blocks::name_header(ws, marks, region.name_row(), region.col)?;
    blocks::divider(ws, marks, region.program_row(), region.col, "Program", Divider::Manual)?;
    blocks::divider(ws, marks, region.target_row(), region.col, "Target", Divider::Manual)?;
    blocks::divider(ws, marks, region.notes_row(), region.col, "Notes", Divider::Manual)?;
    blocks::volume_header(ws, marks, region.volume_header_row(), region.col)?;
    blocks::volume_inputs(ws, marks, region, week)?;
    blocks::maxes(ws, marks, region)?;
    blocks::averages(ws, marks, region)?;
    blocks::sums(ws, marks, region)?;
    blocks::volume(ws, marks, region)?;
    blocks::tonnage(ws, marks, region)?;
    blocks::e1rm(ws, marks, region)?;
    Ok(())
}

/// Day-level aggregates under the last slot region: computed daily RPE,
/// the manual session-RPE input, and the internal-load product.
fn day_summary(ws: &mut Worksheet, marks: &mut Marks, regions: &[SlotRegion]) -> Result<()> {
    let Some(last) = regions.last() else {
        return Ok(());
    };
    let base = last.end_row() + 2;
    let col = last.col;

    let rpe_cells: Vec<String> = regions
        .iter()
        .map(|r| formula::cell(r.averages_row(), r.field_col(VolumeField::Rpe)))
        .collect();
    let daily = formula::daily_rpe(&rpe_cells);
    blocks::divider(ws, marks, base, col, "Daily RPE", Divider::Formula(&daily))?;

    let (srpe_row, srpe_col) =
        blocks::divider(ws, marks, base + 1, col, "Session RPE", Divider::Manual)?;

    let load_ranges: Vec<String> = regions
        .iter()
        .map(|r| {
            formula::range(
                r.first_set_row(),
                r.last_set_row(),
                r.field_col(VolumeField::Load),
            )
        })
        .collect();
    let internal = formula::internal_load(&formula::cell(srpe_row, srpe_col), &load_ranges);
    blocks::divider(ws, marks, base + 2, col, "Internal Load", Divider::Formula(&internal))?;

    Ok(())
}
