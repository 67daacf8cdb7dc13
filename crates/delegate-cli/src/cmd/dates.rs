use super::date_or_today;
use crate::output::print_json;
use anyhow::Context;
use delegate_core::calendar::{add_business_days_str, business_days_elapsed, format_date, parse_date};

pub fn checkin(days: u32, from: Option<&str>, json: bool) -> anyhow::Result<()> {
    let start = date_or_today(from)?;
    let date = add_business_days_str(start, days);

    if json {
        print_json(&serde_json::json!({
            "from": format_date(start),
            "business_days": days,
            "checkin_date": date,
        }))?;
    } else {
        println!("{date}");
    }
    Ok(())
}

pub fn elapsed(start: &str, end: Option<&str>, json: bool) -> anyhow::Result<()> {
    let start = parse_date(start).context("invalid start date")?;
    let end = date_or_today(end).context("invalid end date")?;
    let days = business_days_elapsed(start, end);

    if json {
        print_json(&serde_json::json!({
            "start": format_date(start),
            "end": format_date(end),
            "business_days": days,
        }))?;
    } else {
        println!("{days}");
    }
    Ok(())
}
