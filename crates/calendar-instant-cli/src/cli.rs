use clap::{Parser, Subcommand, ValueEnum};

/// Calendar arithmetic on UTC instants.
#[derive(Parser)]
#[command(
    name = "calinst",
    version,
    about = "Calendar arithmetic, boundaries, and formatting for UTC instants"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Instant arguments accept `now`, epoch milliseconds, or a date/time string.
#[derive(Subcommand)]
pub enum Command {
    /// Print the current instant.
    Now,
    /// Add an amount of a unit to an instant.
    Add(ShiftArgs),
    /// Subtract an amount of a unit from an instant.
    Sub(ShiftArgs),
    /// Snap an instant to the start or end of its day, week, month, or year.
    Boundary(BoundaryArgs),
    /// Print the field-wise difference between two instants as JSON.
    Diff(PairArgs),
    /// Print -1, 0, or 1 as the first instant is before, equal to, or after the second.
    Compare(PairArgs),
    /// Render an instant in one of the fixed layouts.
    Format(FormatArgs),
    /// Print the number of days in a month.
    DaysInMonth(DaysInMonthArgs),
}

#[derive(clap::Args)]
pub struct ShiftArgs {
    pub instant: String,

    #[arg(allow_negative_numbers = true)]
    pub amount: i64,

    /// years, months, weeks, days, hours, minutes, seconds, or milliseconds.
    pub unit: String,
}

#[derive(clap::Args)]
pub struct BoundaryArgs {
    pub instant: String,

    /// start or end.
    pub kind: String,

    /// day, week, month, or year.
    pub unit: String,

    /// First day of the week for week boundaries.
    #[arg(long, default_value = "sunday")]
    pub week_start: String,
}

#[derive(clap::Args)]
pub struct PairArgs {
    pub first: String,
    pub second: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// YYYY-MM-DD, with --time and --seconds as for the generic layout.
    Iso,
    /// DD/MM/YYYY [HH:mm].
    Br,
    /// MM/DD/YYYY [HH:mm].
    Us,
    /// YYYY-MM-DDTHH:mm:ss.sssZ.
    Db,
    /// YYYY-MM-DD.
    DbDate,
    /// YYYY-MM-DD HH:mm:ss.
    DbDatetime,
}

#[derive(clap::Args)]
pub struct FormatArgs {
    pub instant: String,

    #[arg(long, value_enum, default_value_t = Style::Db)]
    pub style: Style,

    /// Include hours and minutes (iso, br, us).
    #[arg(long)]
    pub time: bool,

    /// Include seconds as well (iso only, requires --time).
    #[arg(long)]
    pub seconds: bool,
}

#[derive(clap::Args)]
pub struct DaysInMonthArgs {
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month of the year, 1 through 12.
    pub month: u32,
}
