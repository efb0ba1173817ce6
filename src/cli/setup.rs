//! `init` and `config` commands

use super::CliContext;
use crate::error::PersonanceResult;
use crate::models::DateRange;
use crate::storage::{demo_period, seed_demo};

/// Create directories and settings, optionally loading the demo dataset
pub fn handle_init(ctx: &CliContext, demo: bool) -> PersonanceResult<()> {
    let fresh = !ctx.paths.is_initialized();
    ctx.paths.ensure_directories()?;
    if fresh {
        ctx.settings.save(&ctx.paths)?;
    }

    println!("Initialized Personance at: {}", ctx.paths.base_dir().display());
    println!("Store backend: {}", ctx.store.backend());

    if demo {
        let through_demo = DateRange::through(demo_period().end_date());
        if ctx.store.fetch_records(&ctx.user, &through_demo)?.is_empty() {
            let count = seed_demo(ctx.store.as_ref(), &ctx.user)?;
            println!(
                "Loaded {} demo records and the {} plan for '{}'.",
                count,
                demo_period(),
                ctx.user
            );
            println!();
            println!("Try: personance dashboard --period {}", demo_period());
        } else {
            println!("'{}' already has records; demo data not loaded.", ctx.user);
        }
    }

    Ok(())
}

/// Show paths and effective settings
pub fn handle_config(ctx: &CliContext) -> PersonanceResult<()> {
    let settings = &ctx.settings;
    let symbol = settings.currency_symbol.as_str();

    println!("Personance Configuration");
    println!("========================");
    println!("Base directory:   {}", ctx.paths.base_dir().display());
    println!("Data directory:   {}", ctx.paths.data_dir().display());
    println!("Settings file:    {}", ctx.paths.settings_file().display());
    println!("Initialized:      {}", if ctx.paths.is_initialized() { "yes" } else { "no" });
    println!();
    println!("Store backend:    {}", ctx.store.backend());
    println!("User:             {}", ctx.user);
    println!("Period type:      {:?}", settings.budget_period_type);
    println!("Current period:   {}", settings.current_period());
    println!();
    println!("Goals:");
    println!(
        "  Passive income:  {} per period",
        settings.goals.passive_income_target.format_with_symbol(symbol)
    );
    match settings.goals.net_worth_target {
        Some(target) => println!("  Net worth:       {}", target.format_with_symbol(symbol)),
        None => println!("  Net worth:       not set"),
    }
    println!(
        "  Passive sources: {}",
        settings.passive_income_categories.join(", ")
    );

    Ok(())
}
