use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use timetotrain::program::Program;
use timetotrain::workout;

#[derive(Parser)]
#[command(author, version, about = "A generator for customizable workout templates using spreadsheets.", long_about = None)]
struct Cli {
    /// Number of weeks in the program, def: 8
    #[arg(long, short = 'W')]
    weeks: Option<i64>,

    /// Training frequency in number of days per week, def: 3
    #[arg(long, short = 'F')]
    frequency: Option<i64>,

    /// Number of exercise slots per workout, def: 3
    #[arg(long, short = 'S')]
    slots: Option<i64>,

    /// Number of sets per exercise slot, def: 10
    #[arg(long, short = 's')]
    sets: Option<i64>,

    /// Spreadsheet output filename
    #[arg(long, short = 'f', default_value = "workout.xlsx")]
    filename: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let program = Program::from_args(cli.weeks, cli.frequency, cli.slots, cli.sets);
    workout::generate(program, &cli.filename)?;

    Ok(())
}
