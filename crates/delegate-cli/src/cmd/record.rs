use super::{date_or_today, load_graph};
use crate::output::print_document;
use anyhow::Context;
use delegate_core::calendar::{add_business_days, parse_date};
use delegate_core::record::{follow_up_record, DelegatedTask};
use delegate_core::stakeholder::resolve_alias;
use std::path::Path;

pub struct DelegatedArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub delegate: &'a str,
    pub days: u32,
    pub today: Option<&'a str>,
    pub graph: Option<&'a Path>,
}

pub fn delegated(root: &Path, args: DelegatedArgs<'_>, json: bool) -> anyhow::Result<()> {
    // Only ever write the display alias; a graph lets lookup terms resolve.
    let alias = match load_graph(root, args.graph)? {
        Some(stakeholders) => resolve_alias(args.delegate, &stakeholders)
            .map(str::to_string)
            .with_context(|| format!("no stakeholder matches '{}'", args.delegate.trim()))?,
        None => {
            tracing::debug!("no stakeholder graph; using delegate as given");
            args.delegate.trim().to_string()
        }
    };

    let scheduled = date_or_today(args.today)?;
    let checkin = add_business_days(scheduled, args.days);
    let task = DelegatedTask::new(args.title, args.description, alias, checkin, scheduled);
    print_document(&task.to_record(), json)
}

pub fn follow_up(
    title: &str,
    alias: &str,
    checkin: &str,
    today: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let checkin = parse_date(checkin).context("invalid check-in date")?;
    let today = date_or_today(today)?;
    print_document(&follow_up_record(title, alias.trim(), today, checkin), json)
}
