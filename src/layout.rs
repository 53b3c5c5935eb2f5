//! Coordinate math for the workout grid.
//!
//! Everything here is pure: given the program indices (day, slot, set,
//! field) these functions return absolute 1-based (row, column) positions.
//! The writing code converts to the sink's 0-based coordinates at the last
//! moment, so all layout arithmetic matches what a user sees in the
//! spreadsheet ("Day 1" lives at D4).

/// Sheet title banner row.
pub const BANNER_ROW: u32 = 1;
/// Generation-date sub-banner row.
pub const DATE_ROW: u32 = 2;
/// Row holding the "Day N" headers.
pub const DAY_HEADER_ROW: u32 = 4;
/// First row of the first slot region in every day block.
pub const FIRST_SLOT_ROW: u32 = 6;
/// First column of the first day block (column D).
pub const BEGIN_COLUMN: u16 = 4;
/// Width of one day block in columns: the 8 volume fields.
pub const SCHEMA_WIDTH: u16 = 8;
/// Empty columns between adjacent day blocks.
pub const GAP_COLUMNS: u16 = 2;
/// Column distance between the anchors of adjacent day blocks.
pub const DAY_STRIDE: u16 = SCHEMA_WIDTH + GAP_COLUMNS;

/// Rows above the set inputs in a slot region (slot header, name
/// sub-header, Program/Target/Notes dividers, volume header).
pub const FIXED_HEADER_ROWS: u32 = 6;
/// Rows below the set inputs (Maxes, Averages, Sums, Volume, Tonnage, E1RM).
pub const DERIVED_ROWS: u32 = 6;

/// Worksheet name for a 1-based week index.
#[must_use]
pub fn sheet_name(week: u32) -> String {
    format!("Week {week}")
}

/// Anchor column of a 1-based day index.
#[must_use]
pub fn day_column(day: u32) -> u16 {
    BEGIN_COLUMN + (day - 1) as u16 * DAY_STRIDE
}

/// Total rows occupied by one slot region.
#[must_use]
pub fn slot_region_height(sets: u32) -> u32 {
    FIXED_HEADER_ROWS + sets + DERIVED_ROWS
}

/// Anchor row of a 1-based slot index. Slot regions stack contiguously.
#[must_use]
pub fn slot_row(slot: u32, sets: u32) -> u32 {
    FIRST_SLOT_ROW + (slot - 1) * slot_region_height(sets)
}

/// The ordered volume-field schema. The declaration order is the column
/// order within a day block; `Sets` is the label column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeField {
    Sets,
    Load,
    Reps,
    Rir,
    Rpe,
    AvgVel,
    Intensity,
    LastWeekLoad,
}

impl VolumeField {
    pub const ALL: [VolumeField; 8] = [
        VolumeField::Sets,
        VolumeField::Load,
        VolumeField::Reps,
        VolumeField::Rir,
        VolumeField::Rpe,
        VolumeField::AvgVel,
        VolumeField::Intensity,
        VolumeField::LastWeekLoad,
    ];

    /// The fields that hold numbers and take part in the derived rows.
    pub const NUMERIC: [VolumeField; 7] = [
        VolumeField::Load,
        VolumeField::Reps,
        VolumeField::Rir,
        VolumeField::Rpe,
        VolumeField::AvgVel,
        VolumeField::Intensity,
        VolumeField::LastWeekLoad,
    ];

    /// Column offset from the day block's anchor column.
    #[must_use]
    pub fn offset(self) -> u16 {
        self as u16
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VolumeField::Sets => "Sets",
            VolumeField::Load => "Load",
            VolumeField::Reps => "Reps",
            VolumeField::Rir => "RIR",
            VolumeField::Rpe => "RPE",
            VolumeField::AvgVel => "Avg Vel",
            VolumeField::Intensity => "Int%",
            VolumeField::LastWeekLoad => "LWL",
        }
    }
}

/// Column-offset state for the volume-field schema, scoped to one week.
///
/// The base column shifts by [`DAY_STRIDE`] for every processed day and
/// must be brought back to [`BEGIN_COLUMN`] before the next week starts.
/// The assembler owns exactly one of these per run; nothing else mutates
/// or observes it mid-week.
#[derive(Debug)]
pub struct VolumeSchema {
    current: u16,
}

impl VolumeSchema {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: BEGIN_COLUMN,
        }
    }

    /// Anchor column of the day currently being laid out.
    #[must_use]
    pub fn day_base(&self) -> u16 {
        self.current
    }

    /// Absolute column of a field in the current day block.
    #[must_use]
    pub fn column(&self, field: VolumeField) -> u16 {
        self.current + field.offset()
    }

    pub fn advance_day(&mut self) {
        self.current += DAY_STRIDE;
    }

    pub fn reset(&mut self) {
        self.current = BEGIN_COLUMN;
    }

    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.current == BEGIN_COLUMN
    }
}

impl Default for VolumeSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// The rows and columns owned by one exercise slot within a day block.
///
/// Derived rows take their ranges from these tracked boundaries rather
/// than from offsets recomputed at the point of use.
#[derive(Debug, Clone, Copy)]
pub struct SlotRegion {
    pub slot: u32,
    pub sets: u32,
    pub row: u32,
    pub col: u16,
}

impl SlotRegion {
    #[must_use]
    pub fn new(slot: u32, sets: u32, day_col: u16) -> Self {
        Self {
            slot,
            sets,
            row: slot_row(slot, sets),
            col: day_col,
        }
    }

    #[must_use]
    pub fn header_row(&self) -> u32 {
        self.row
    }

    #[must_use]
    pub fn name_row(&self) -> u32 {
        self.row + 1
    }

    #[must_use]
    pub fn program_row(&self) -> u32 {
        self.row + 2
    }

    #[must_use]
    pub fn target_row(&self) -> u32 {
        self.row + 3
    }

    #[must_use]
    pub fn notes_row(&self) -> u32 {
        self.row + 4
    }

    #[must_use]
    pub fn volume_header_row(&self) -> u32 {
        self.row + 5
    }

    /// Row of a 1-based set index.
    #[must_use]
    pub fn set_row(&self, set: u32) -> u32 {
        self.volume_header_row() + set
    }

    #[must_use]
    pub fn first_set_row(&self) -> u32 {
        self.set_row(1)
    }

    #[must_use]
    pub fn last_set_row(&self) -> u32 {
        self.set_row(self.sets)
    }

    #[must_use]
    pub fn maxes_row(&self) -> u32 {
        self.last_set_row() + 1
    }

    #[must_use]
    pub fn averages_row(&self) -> u32 {
        self.last_set_row() + 2
    }

    #[must_use]
    pub fn sums_row(&self) -> u32 {
        self.last_set_row() + 3
    }

    #[must_use]
    pub fn volume_row(&self) -> u32 {
        self.last_set_row() + 4
    }

    #[must_use]
    pub fn tonnage_row(&self) -> u32 {
        self.last_set_row() + 5
    }

    #[must_use]
    pub fn e1rm_row(&self) -> u32 {
        self.last_set_row() + 6
    }

    /// Last row of the region, inclusive.
    #[must_use]
    pub fn end_row(&self) -> u32 {
        self.e1rm_row()
    }

    /// Absolute column of a schema field within this region.
    #[must_use]
    pub fn field_col(&self, field: VolumeField) -> u16 {
        self.col + field.offset()
    }

    /// Last column of the region, inclusive.
    #[must_use]
    pub fn last_col(&self) -> u16 {
        self.col + SCHEMA_WIDTH - 1
    }
}
