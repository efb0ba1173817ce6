//! Dashboard and wealth pages

use super::{emit_view, parse_period, CliContext, ViewArgs};
use crate::display::{format_dashboard, format_wealth};
use crate::error::PersonanceResult;
use crate::services::SummaryService;

pub fn handle_dashboard(ctx: &CliContext, args: ViewArgs) -> PersonanceResult<()> {
    let period = parse_period(args.period.as_deref(), &ctx.settings)?;
    let view = SummaryService::new(ctx.store.as_ref(), &ctx.settings).dashboard(&ctx.user, &period)?;

    emit_view("dashboard", &view, &args, |v| format_dashboard(v, &ctx.settings))
}

pub fn handle_wealth(ctx: &CliContext, args: ViewArgs) -> PersonanceResult<()> {
    let period = parse_period(args.period.as_deref(), &ctx.settings)?;
    let view = SummaryService::new(ctx.store.as_ref(), &ctx.settings).wealth(&ctx.user, &period)?;

    emit_view("wealth", &view, &args, |v| format_wealth(v, &ctx.settings))
}
