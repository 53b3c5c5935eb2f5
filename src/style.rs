//! Cell formats keyed to block role.
//!
//! The palette follows the original template: black day headers and red
//! slot headers in white Helvetica, a light highlight behind computed
//! cells, and the dark "lightblack" fill the clear pass paints over
//! everything the generator did not touch. Every generated cell is
//! center-aligned; that alignment doubles as the generated-block marker.

use rust_xlsxwriter::{Color, Format, FormatAlign};

const FONT: &str = "Helvetica";

const WHITE: Color = Color::RGB(0xFFFFFF);
const BLACK: Color = Color::RGB(0x000000);
const RED: Color = Color::RGB(0xC00000);
const STEEL: Color = Color::RGB(0x1F4E78);
const SMOKE: Color = Color::RGB(0xD9D9D9);
const HIGHLIGHT: Color = Color::RGB(0xFFF2CC);
const LIGHTBLACK: Color = Color::RGB(0x333333);

fn centered() -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

pub fn day_header() -> Format {
    centered()
        .set_font_name(FONT)
        .set_font_size(42)
        .set_bold()
        .set_font_color(WHITE)
        .set_background_color(BLACK)
}

pub fn slot_header() -> Format {
    centered()
        .set_font_name(FONT)
        .set_font_size(32)
        .set_bold()
        .set_font_color(WHITE)
        .set_background_color(RED)
}

/// Merged sub-header under the slot header where the exercise name goes.
pub fn name_header() -> Format {
    centered()
        .set_font_name(FONT)
        .set_font_size(16)
        .set_bold()
        .set_font_color(WHITE)
        .set_background_color(STEEL)
}

pub fn divider_label() -> Format {
    centered().set_font_name(FONT).set_bold()
}

/// Bold highlighted label used on computed dividers and derived rows.
pub fn divider_label_highlight() -> Format {
    centered()
        .set_font_name(FONT)
        .set_bold()
        .set_background_color(HIGHLIGHT)
}

/// User-fillable cell.
pub fn manual_input() -> Format {
    centered().set_text_wrap()
}

/// Computed cell.
pub fn formula_cell() -> Format {
    centered().set_text_wrap().set_background_color(HIGHLIGHT)
}

/// Computed cell carrying the percentage display hint (Int% column).
pub fn percent_cell() -> Format {
    formula_cell().set_num_format("0.0%")
}

pub fn volume_header() -> Format {
    centered().set_bold().set_background_color(SMOKE)
}

/// "Set N" row label.
pub fn set_label() -> Format {
    centered().set_bold()
}

pub fn banner() -> Format {
    centered()
        .set_font_name(FONT)
        .set_font_size(24)
        .set_bold()
        .set_font_color(WHITE)
        .set_background_color(BLACK)
}

pub fn date_banner() -> Format {
    centered().set_font_name(FONT).set_italic()
}

/// Uniform fill for cells no block generator wrote.
pub fn background() -> Format {
    Format::new().set_background_color(LIGHTBLACK)
}
