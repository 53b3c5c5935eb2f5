pub mod blocks;
pub mod formula;
pub mod layout;
pub mod program;
pub mod style;
pub mod workout;
