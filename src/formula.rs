//! Textual spreadsheet formulas over the addresses computed by [`crate::layout`].
//!
//! Nothing here is evaluated; each builder returns the formula string that
//! the external spreadsheet engine computes later. Cells that can be
//! undefined at fill-in time degrade to the in-sheet placeholders `"..."`
//! (no data yet) or `"N/A"` (arithmetic error), never to a Rust error.

use crate::layout;

/// 1-based column index to its letter name (1 -> A, 27 -> AA).
#[must_use]
pub fn column_letter(col: u16) -> String {
    let mut name = String::new();
    let mut n = u32::from(col);

    while n > 0 {
        let remainder = ((n - 1) % 26) as u8;
        name.insert(0, (b'A' + remainder) as char);
        n = (n - 1) / 26;
    }

    if name.is_empty() {
        name.push('A');
    }

    name
}

/// A1-style address for a 1-based (row, column) pair.
#[must_use]
pub fn cell(row: u32, col: u16) -> String {
    format!("{}{}", column_letter(col), row)
}

/// Single-column range between two 1-based rows, inclusive.
#[must_use]
pub fn range(first_row: u32, last_row: u32, col: u16) -> String {
    format!("{}:{}", cell(first_row, col), cell(last_row, col))
}

/// Effort proxy derived from the RIR input: `abs(RIR - 10)`.
#[must_use]
pub fn rir_to_rpe(row: u32, rir_col: u16) -> String {
    let rir = cell(row, rir_col);
    format!("=IFERROR(IF(ISBLANK({rir}),\"...\",ABS({rir}-10)),\"N/A\")")
}

/// Mean of the non-zero set rows, so incomplete programs are not skewed
/// by unfilled sets. `decimals` is `None` for the unrounded Avg Vel
/// column and `Some(3)` for Int%; every other field rounds to an integer.
#[must_use]
pub fn average(first_row: u32, last_row: u32, col: u16, decimals: Option<u32>) -> String {
    let r = range(first_row, last_row, col);
    match decimals {
        Some(d) => format!("=IFERROR(ROUND(AVERAGEIF({r},\"<>0\"),{d}),\"...\")"),
        None => format!("=IFERROR(AVERAGEIF({r},\"<>0\"),\"...\")"),
    }
}

/// Column sum; an all-zero range reads as `"..."` instead of a misleading 0.
#[must_use]
pub fn sum(first_row: u32, last_row: u32, col: u16) -> String {
    let r = range(first_row, last_row, col);
    format!("=IFERROR(IF(SUM({r})=0,\"...\",SUM({r})),\"N/A\")")
}

/// Column maximum, `"..."` while the column has no numbers.
#[must_use]
pub fn max(first_row: u32, last_row: u32, col: u16) -> String {
    let r = range(first_row, last_row, col);
    format!("=IF(COUNT({r})=0,\"...\",MAX({r}))")
}

/// Slot volume: each input row is one set, so the Reps sum already is
/// sets x reps. Plain reference to the Reps cell of the Sums row.
#[must_use]
pub fn volume(sums_row: u32, reps_col: u16) -> String {
    format!("={}", cell(sums_row, reps_col))
}

/// Total load-volume: one Load x Reps product per set row, summed.
#[must_use]
pub fn tonnage(first_row: u32, last_row: u32, load_col: u16, reps_col: u16) -> String {
    let loads = range(first_row, last_row, load_col);
    let products = (first_row..=last_row)
        .map(|row| format!("{}*{}", cell(row, load_col), cell(row, reps_col)))
        .collect::<Vec<_>>()
        .join("+");
    format!("=IF(COUNT({loads})=0,\"...\",{products})")
}

/// Per-set intensity: this row's Load over the estimated 1RM cell,
/// displayed as a percentage by the cell's number format.
#[must_use]
pub fn intensity(row: u32, load_col: u16, e1rm_row: u32) -> String {
    let load = cell(row, load_col);
    let e1rm = cell(e1rm_row, load_col);
    format!("=IFERROR(IF(ISBLANK({load}),\"...\",{load}/{e1rm}),\"...\")")
}

/// Cross-sheet lookback at the same Load cell one week earlier.
/// The first program week has nothing to look back to, so no formula.
#[must_use]
pub fn last_week_load(week: u32, row: u32, load_col: u16) -> Option<String> {
    (week > 1).then(|| {
        format!(
            "='{}'!{}",
            layout::sheet_name(week - 1),
            cell(row, load_col)
        )
    })
}

/// Epley estimate: `max(Load) * (1 + reps_at_that_load / 30)`, with the
/// rep count looked up from the row whose Load equals the maximum.
#[must_use]
pub fn e1rm(first_row: u32, last_row: u32, load_col: u16, reps_col: u16) -> String {
    let loads = range(first_row, last_row, load_col);
    let reps = range(first_row, last_row, reps_col);
    format!(
        "=IFERROR(MAX({loads})*(1+INDEX({reps},MATCH(MAX({loads}),{loads},0))/30),\"...\")"
    )
}

/// Day-level RPE: average of the per-slot RPE Average cells. Slots with
/// no data hold the text placeholder, which AVERAGE skips.
#[must_use]
pub fn daily_rpe(slot_rpe_cells: &[String]) -> String {
    format!(
        "=IFERROR(ROUND(AVERAGE({}),0),\"...\")",
        slot_rpe_cells.join(",")
    )
}

/// Internal training load: session RPE times the number of completed
/// sets (filled Load cells) across every slot of the day.
#[must_use]
pub fn internal_load(session_rpe_cell: &str, slot_load_ranges: &[String]) -> String {
    let counts = slot_load_ranges
        .iter()
        .map(|r| format!("COUNT({r})"))
        .collect::<Vec<_>>()
        .join("+");
    format!("=IF(ISBLANK({session_rpe_cell}),\"...\",{session_rpe_cell}*({counts}))")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(4), "D");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(52), "AZ");
    }

    #[test]
    fn cell_and_range_addresses() {
        assert_eq!(cell(12, 5), "E12");
        assert_eq!(range(12, 21, 5), "E12:E21");
    }

    #[test]
    fn rir_conversion_guards_blank_and_error() {
        assert_eq!(
            rir_to_rpe(12, 7),
            "=IFERROR(IF(ISBLANK(G12),\"...\",ABS(G12-10)),\"N/A\")"
        );
    }

    #[test]
    fn average_rounding_variants() {
        assert_eq!(
            average(12, 13, 5, Some(0)),
            "=IFERROR(ROUND(AVERAGEIF(E12:E13,\"<>0\"),0),\"...\")"
        );
        assert_eq!(
            average(12, 13, 9, None),
            "=IFERROR(AVERAGEIF(I12:I13,\"<>0\"),\"...\")"
        );
        assert_eq!(
            average(12, 13, 10, Some(3)),
            "=IFERROR(ROUND(AVERAGEIF(J12:J13,\"<>0\"),3),\"...\")"
        );
    }

    #[test]
    fn sum_spans_exactly_the_set_rows() {
        // sets=10 starting at row 12 must cover rows 12..=21, nothing more.
        assert_eq!(
            sum(12, 21, 5),
            "=IFERROR(IF(SUM(E12:E21)=0,\"...\",SUM(E12:E21)),\"N/A\")"
        );
    }

    #[test]
    fn tonnage_pairs_load_and_reps_per_row() {
        assert_eq!(
            tonnage(12, 14, 5, 6),
            "=IF(COUNT(E12:E14)=0,\"...\",E12*F12+E13*F13+E14*F14)"
        );
    }

    #[test]
    fn intensity_divides_by_the_e1rm_cell() {
        assert_eq!(
            intensity(12, 5, 19),
            "=IFERROR(IF(ISBLANK(E12),\"...\",E12/E19),\"...\")"
        );
    }

    #[test]
    fn last_week_load_only_exists_after_week_one() {
        assert_eq!(last_week_load(1, 12, 5), None);
        assert_eq!(
            last_week_load(2, 12, 5),
            Some("='Week 1'!E12".to_string())
        );
    }

    #[test]
    fn e1rm_uses_the_epley_estimate() {
        assert_eq!(
            e1rm(12, 13, 5, 6),
            "=IFERROR(MAX(E12:E13)*(1+INDEX(F12:F13,MATCH(MAX(E12:E13),E12:E13,0))/30),\"...\")"
        );
    }

    #[test]
    fn day_aggregates() {
        let cells = vec!["H15".to_string(), "H29".to_string()];
        assert_eq!(
            daily_rpe(&cells),
            "=IFERROR(ROUND(AVERAGE(H15,H29),0),\"...\")"
        );

        let ranges = vec!["E12:E13".to_string(), "E26:E27".to_string()];
        assert_eq!(
            internal_load("E36", &ranges),
            "=IF(ISBLANK(E36),\"...\",E36*(COUNT(E12:E13)+COUNT(E26:E27)))"
        );
    }
}
