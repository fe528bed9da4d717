use anyhow::{bail, Context, Result};
use calendar_instant::{
    days_in_month, BoundaryKind, BoundaryUnit, CalendarInstant, FormatOptions, TimeUnit,
    WeekStart,
};
use tracing::{debug, info};

use crate::cli::{BoundaryArgs, DaysInMonthArgs, FormatArgs, PairArgs, ShiftArgs, Style};

/// Resolve an instant argument: `now`, epoch milliseconds, or parseable text.
pub fn resolve_instant(arg: &str) -> Result<CalendarInstant> {
    let arg = arg.trim();
    if arg.eq_ignore_ascii_case("now") {
        return Ok(CalendarInstant::now());
    }
    if let Ok(ms) = arg.parse::<i64>() {
        debug!(ms, "reading instant as epoch milliseconds");
        return CalendarInstant::from_millis(ms).with_context(|| format!("bad instant '{arg}'"));
    }
    CalendarInstant::parse(arg).with_context(|| format!("bad instant '{arg}'"))
}

pub fn now() -> Result<String> {
    Ok(CalendarInstant::now().to_db())
}

pub fn shift(args: &ShiftArgs, negate: bool) -> Result<String> {
    let instant = resolve_instant(&args.instant)?;
    let unit: TimeUnit = args.unit.parse()?;
    info!(%instant, amount = args.amount, %unit, negate, "shifting instant");
    let shifted = if negate {
        instant.checked_sub(args.amount, unit)
    } else {
        instant.checked_add(args.amount, unit)
    };
    Ok(shifted.context("arithmetic failed")?.to_db())
}

pub fn boundary(args: &BoundaryArgs) -> Result<String> {
    let instant = resolve_instant(&args.instant)?;
    let kind: BoundaryKind = args.kind.parse()?;
    let unit: BoundaryUnit = args.unit.parse()?;
    let week_start: WeekStart = args.week_start.parse()?;
    Ok(instant.boundary_with(kind, unit, week_start).to_db())
}

pub fn diff(args: &PairArgs) -> Result<String> {
    let first = resolve_instant(&args.first)?;
    let second = resolve_instant(&args.second)?;
    let difference = first.diff(&second);
    serde_json::to_string_pretty(&difference).context("failed to serialize difference")
}

pub fn compare(args: &PairArgs) -> Result<String> {
    let first = resolve_instant(&args.first)?;
    let second = resolve_instant(&args.second)?;
    Ok(first.compare_to(&second).to_string())
}

pub fn format(args: &FormatArgs) -> Result<String> {
    let instant = resolve_instant(&args.instant)?;
    let rendered = match args.style {
        Style::Iso => instant.format(&FormatOptions {
            include_time: args.time,
            include_seconds: args.seconds,
        }),
        Style::Br => instant.to_br(args.time),
        Style::Us => instant.to_us(args.time),
        Style::Db => instant.to_db(),
        Style::DbDate => instant.to_db_date(),
        Style::DbDatetime => instant.to_db_datetime(),
    };
    Ok(rendered)
}

pub fn days_in_month_cmd(args: &DaysInMonthArgs) -> Result<String> {
    if !(1..=12).contains(&args.month) {
        bail!("month must be 1..=12, got {}", args.month);
    }
    Ok(days_in_month(args.year, args.month - 1).to_string())
}
