//! Record CLI commands

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use super::{parse_period, CliContext};
use crate::display::format_record_list;
use crate::error::{Activity, PersonanceResult};
use crate::models::RecordKind;
use crate::services::{NewRecord, RecordService};

/// Record subcommands
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// Add an income, expense, asset or liability record
    Add {
        /// income, expense, asset or liability
        kind: RecordKind,
        /// Category, or the group for assets and liabilities
        category: String,
        /// Amount as a positive number; expenses are stored negative
        amount: f64,
        /// Source, payee or holding name
        #[arg(short, long)]
        description: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List records in a period
    List {
        /// Budget period
        #[arg(short, long)]
        period: Option<String>,
        /// Only records of this kind
        #[arg(short, long)]
        kind: Option<RecordKind>,
    },
}

impl RecordCommands {
    pub fn activity(&self) -> Activity {
        match self {
            Self::Add { .. } => Activity::Update,
            Self::List { .. } => Activity::Listing,
        }
    }
}

/// Handle a record command
pub fn handle_record_command(ctx: &CliContext, cmd: RecordCommands) -> PersonanceResult<()> {
    let service = RecordService::new(ctx.store.as_ref());

    match cmd {
        RecordCommands::Add {
            kind,
            category,
            amount,
            description,
            date,
        } => {
            let record = service.add(
                &ctx.user,
                NewRecord {
                    kind,
                    category,
                    amount,
                    date: date.unwrap_or_else(|| Utc::now().date_naive()),
                    description: description.unwrap_or_default(),
                },
            )?;

            println!(
                "Added {} {} {:.2} on {} ({})",
                record.kind,
                record.label(),
                record.amount,
                record.date(),
                record.id
            );
            Ok(())
        }

        RecordCommands::List { period, kind } => {
            let period = parse_period(period.as_deref(), &ctx.settings)?;
            let records = service.list(&ctx.user, &period.range(), kind)?;

            println!("Records for {} ({})", period, ctx.user);
            print!("{}", format_record_list(&records, &ctx.settings));
            Ok(())
        }
    }
}
