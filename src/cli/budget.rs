//! Budget CLI commands
//!
//! The budgeting page and edits to a period's plan.

use clap::Subcommand;

use super::{emit_view, parse_period, CliContext, ViewArgs};
use crate::display::{format_budgeting, format_plan};
use crate::error::{Activity, PersonanceError, PersonanceResult};
use crate::models::Money;
use crate::services::{PlanService, SummaryService};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show spending against the plan
    Show(ViewArgs),

    /// Set a category's allocation
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "600" or "1,200.00")
        amount: String,
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Remove a category from the plan, or the whole plan when no category is given
    Clear {
        /// Category name
        category: Option<String>,
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
    },
}

impl BudgetCommands {
    pub fn activity(&self) -> Activity {
        match self {
            Self::Show(_) => Activity::Summary,
            Self::Set { .. } | Self::Clear { .. } => Activity::Update,
        }
    }
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &CliContext, cmd: BudgetCommands) -> PersonanceResult<()> {
    match cmd {
        BudgetCommands::Show(args) => {
            let period = parse_period(args.period.as_deref(), &ctx.settings)?;
            let view = SummaryService::new(ctx.store.as_ref(), &ctx.settings)
                .budgeting(&ctx.user, &period)?;

            emit_view("budgeting", &view, &args, |v| format_budgeting(v, &ctx.settings))
        }

        BudgetCommands::Set {
            category,
            amount,
            period,
        } => {
            let period = parse_period(period.as_deref(), &ctx.settings)?;
            let amount = Money::parse(&amount)
                .map_err(|e| PersonanceError::Validation(format!("Invalid amount: {}", e)))?;

            let plan = PlanService::new(ctx.store.as_ref()).set_allocation(
                &ctx.user,
                &period,
                &category,
                amount,
            )?;

            println!(
                "Set {} to {} for {}",
                category.trim(),
                amount.format_with_symbol(&ctx.settings.currency_symbol),
                period
            );
            println!();
            print!("{}", format_plan(&plan, &period.to_string(), &ctx.settings));
            Ok(())
        }

        BudgetCommands::Clear { category, period } => {
            let period = parse_period(period.as_deref(), &ctx.settings)?;
            let service = PlanService::new(ctx.store.as_ref());

            match category {
                Some(category) => match service.remove_allocation(&ctx.user, &period, &category)? {
                    Some(amount) => println!(
                        "Removed {} ({}) from {}",
                        category.trim(),
                        amount.format_with_symbol(&ctx.settings.currency_symbol),
                        period
                    ),
                    None => println!("No allocation for '{}' in {}", category.trim(), period),
                },
                None => {
                    service.clear(&ctx.user, &period)?;
                    println!("Cleared the plan for {}", period);
                }
            }
            Ok(())
        }
    }
}
