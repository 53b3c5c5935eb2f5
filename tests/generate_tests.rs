use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};

use timetotrain::program::Program;
use timetotrain::workout;

fn generate_to(dir: &Path, name: &str, program: Program) -> anyhow::Result<Xlsx<BufReader<File>>> {
    let path = dir.join(name);
    workout::generate(program, &path)?;
    Ok(open_workbook(&path)?)
}

// Readback helpers take the 1-based coordinates the generator works in.
fn value(range: &Range<Data>, row: u32, col: u32) -> String {
    range
        .get_value((row - 1, col - 1))
        .map(|v| v.to_string())
        .unwrap_or_default()
}

fn formula(range: &Range<String>, row: u32, col: u32) -> String {
    range
        .get_value((row - 1, col - 1))
        .cloned()
        .unwrap_or_default()
}

#[test]
fn one_sheet_per_week_with_week_names() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let program = Program {
        weeks: 4,
        frequency: 1,
        slots: 1,
        sets: 1,
    };
    let workbook = generate_to(dir.path(), "weeks.xlsx", program)?;

    let names = workbook.sheet_names().to_vec();
    assert_eq!(names, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
    assert!(!names.iter().any(|n| n == "Sheet1" || n == "Sheet"));

    Ok(())
}

#[test]
fn minimal_program_layout_and_formulas() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let program = Program {
        weeks: 1,
        frequency: 1,
        slots: 1,
        sets: 2,
    };
    let mut workbook = generate_to(dir.path(), "minimal.xlsx", program)?;

    let cells = workbook.worksheet_range("Week 1")?;
    assert_eq!(value(&cells, 1, 4), "Workout Program");
    assert_eq!(value(&cells, 4, 4), "Day 1");
    assert_eq!(value(&cells, 6, 4), "Exercise 1");

    // Volume header fields left-to-right.
    assert_eq!(value(&cells, 11, 4), "Sets");
    assert_eq!(value(&cells, 11, 5), "Load");
    assert_eq!(value(&cells, 11, 6), "Reps");
    assert_eq!(value(&cells, 11, 11), "LWL");

    assert_eq!(value(&cells, 12, 4), "Set 1");
    assert_eq!(value(&cells, 13, 4), "Set 2");

    assert_eq!(value(&cells, 14, 4), "Maxes");
    assert_eq!(value(&cells, 15, 4), "Averages");
    assert_eq!(value(&cells, 16, 4), "Sums");
    assert_eq!(value(&cells, 17, 4), "Volume");
    assert_eq!(value(&cells, 18, 4), "Tonnage");
    assert_eq!(value(&cells, 19, 4), "E1RM");

    let formulas = workbook.worksheet_formula("Week 1")?;

    // Aggregates span exactly the two set rows of this slot.
    assert_eq!(formula(&formulas, 14, 5), "IF(COUNT(E12:E13)=0,\"...\",MAX(E12:E13))");
    assert_eq!(
        formula(&formulas, 15, 5),
        "IFERROR(ROUND(AVERAGEIF(E12:E13,\"<>0\"),0),\"...\")"
    );
    assert_eq!(
        formula(&formulas, 16, 5),
        "IFERROR(IF(SUM(E12:E13)=0,\"...\",SUM(E12:E13)),\"N/A\")"
    );

    // Avg Vel unrounded, Int% rounded to 3 decimals.
    assert_eq!(
        formula(&formulas, 15, 9),
        "IFERROR(AVERAGEIF(I12:I13,\"<>0\"),\"...\")"
    );
    assert_eq!(
        formula(&formulas, 15, 10),
        "IFERROR(ROUND(AVERAGEIF(J12:J13,\"<>0\"),3),\"...\")"
    );

    // Volume points at the Reps cell of the Sums row.
    assert_eq!(formula(&formulas, 17, 5), "F16");

    // Per-set synthesized cells.
    assert!(formula(&formulas, 12, 8).contains("ABS(G12-10)"));
    assert!(formula(&formulas, 12, 10).contains("E12/E19"));

    // Week 1 has no lookback: the LWL cell holds no formula.
    assert!(formula(&formulas, 12, 11).is_empty());

    Ok(())
}

#[test]
fn second_week_lwl_references_week_one_load_cell() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let program = Program {
        weeks: 2,
        frequency: 1,
        slots: 1,
        sets: 1,
    };
    let mut workbook = generate_to(dir.path(), "lwl.xlsx", program)?;

    let week1 = workbook.worksheet_formula("Week 1")?;
    assert!(formula(&week1, 12, 11).is_empty());

    // Week 2's LWL cell points back at the same address as its own Load
    // input cell (E12), one sheet earlier.
    let week2 = workbook.worksheet_formula("Week 2")?;
    assert_eq!(formula(&week2, 12, 11), "'Week 1'!E12");

    Ok(())
}

#[test]
fn tonnage_pairs_each_set_row() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let program = Program {
        weeks: 1,
        frequency: 1,
        slots: 1,
        sets: 3,
    };
    let mut workbook = generate_to(dir.path(), "tonnage.xlsx", program)?;

    let formulas = workbook.worksheet_formula("Week 1")?;
    assert_eq!(
        formula(&formulas, 19, 5),
        "IF(COUNT(E12:E14)=0,\"...\",E12*F12+E13*F13+E14*F14)"
    );

    // Epley estimate over the same three rows.
    assert_eq!(
        formula(&formulas, 20, 5),
        "IFERROR(MAX(E12:E14)*(1+INDEX(F12:F14,MATCH(MAX(E12:E14),E12:E14,0))/30),\"...\")"
    );

    Ok(())
}

#[test]
fn second_day_block_does_not_collide_with_first() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let program = Program {
        weeks: 1,
        frequency: 2,
        slots: 1,
        sets: 1,
    };
    let mut workbook = generate_to(dir.path(), "days.xlsx", program)?;

    let cells = workbook.worksheet_range("Week 1")?;
    assert_eq!(value(&cells, 4, 4), "Day 1");
    // Day 2 starts one stride (8 fields + 2 gap columns) to the right.
    assert_eq!(value(&cells, 4, 14), "Day 2");
    assert_eq!(value(&cells, 6, 14), "Exercise 1");
    assert_eq!(value(&cells, 12, 14), "Set 1");

    Ok(())
}

#[test]
fn day_summary_aggregates_every_slot() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let program = Program {
        weeks: 1,
        frequency: 1,
        slots: 2,
        sets: 2,
    };
    let mut workbook = generate_to(dir.path(), "summary.xlsx", program)?;

    let cells = workbook.worksheet_range("Week 1")?;
    // Slot 2 stacks directly under slot 1 (rows 20..=33), summary below.
    assert_eq!(value(&cells, 20, 4), "Exercise 2");
    assert_eq!(value(&cells, 35, 4), "Daily RPE");
    assert_eq!(value(&cells, 36, 4), "Session RPE");
    assert_eq!(value(&cells, 37, 4), "Internal Load");

    let formulas = workbook.worksheet_formula("Week 1")?;
    assert_eq!(
        formula(&formulas, 35, 5),
        "IFERROR(ROUND(AVERAGE(H15,H29),0),\"...\")"
    );
    assert_eq!(
        formula(&formulas, 37, 5),
        "IF(ISBLANK(E36),\"...\",E36*(COUNT(E12:E13)+COUNT(E26:E27)))"
    );

    Ok(())
}
