use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use flores_solis::{
    Clock, FloresDate, NavigationState, Snapshot, SystemClock, UtcOffset, displayed_instant,
    month_table,
};

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn snapshot(self, snapshot: &Snapshot) -> Result<()> {
        if self.json {
            return self.json_line(snapshot);
        }
        println!("{snapshot}");
        Ok(())
    }

    fn json_line<T: Serialize>(self, value: &T) -> Result<()> {
        let line = serde_json::to_string(value).context("failed to serialize output")?;
        println!("{line}");
        Ok(())
    }
}

pub fn today(offset: &UtcOffset, output: Output) -> Result<()> {
    let displayed = displayed_instant(SystemClock.now(), offset);
    debug!(instant = displayed.unix_seconds(), "displayed instant");
    output.snapshot(&NavigationState::new(displayed).snapshot())
}

pub fn from_gregorian(input: &str, output: Output) -> Result<()> {
    let date = input
        .parse()
        .with_context(|| format!("invalid Gregorian date: {input:?}"))?;
    output.snapshot(&NavigationState::at(FloresDate::from_gregorian(date)).snapshot())
}

pub fn to_gregorian(year: i64, month: u8, day: u8, output: Output) -> Result<()> {
    let date = FloresDate::new(year, month, day)
        .with_context(|| format!("invalid Flores Solis date: {year}-{month}-{day}"))?;
    let gregorian = date.to_gregorian();
    if output.json {
        return output.json_line(&gregorian);
    }
    println!("{date} = {gregorian} ({})", gregorian.to_long_string());
    Ok(())
}

pub fn months(year: i64, output: Output) -> Result<()> {
    let table = month_table(year);
    if output.json {
        return output.json_line(&table);
    }
    for info in &table {
        println!("{:>2}  {:<12} {}", info.month.get(), info.name, info.length);
    }
    println!("    {:<12} {}", "total", table.days_in_year());
    Ok(())
}

/// Follows the clock, printing a snapshot at start and whenever the date
/// changes. Runs until `ticks` ticks have elapsed, or forever.
pub fn watch(
    offset: &UtcOffset,
    tick_millis: u64,
    ticks: Option<u64>,
    output: Output,
) -> Result<()> {
    let clock = SystemClock;
    let mut state = NavigationState::new(displayed_instant(clock.now(), offset));
    output.snapshot(&state.snapshot())?;
    info!(tick_millis, "watching the clock");

    let interval = Duration::from_millis(tick_millis.max(1));
    let mut elapsed = 0_u64;
    while ticks.is_none_or(|limit| elapsed < limit) {
        thread::sleep(interval);
        elapsed += 1;
        if state.tick(displayed_instant(clock.now(), offset)) {
            output.snapshot(&state.snapshot())?;
        }
    }
    Ok(())
}
