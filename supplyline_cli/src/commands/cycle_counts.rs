use crate::args::PageArgs;
use crate::error::MainError;
use crate::output::{ColumnDef, opt, print_page, print_rows};
use crate::state::AppState;
use clap::Subcommand;
use shared::supplyline::cycle_count::{BatchStatus, CycleCountBatch, CycleCountSchedule};
use views::list::cycle_counts::{BatchSortKey, batch_list_state};

#[derive(Subcommand, Debug)]
pub enum CycleCountCommands {
    /// Recurring count schedules
    Schedules,

    /// Count batches with progress
    Batches(BatchArgs),
}

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long, short = 's')]
    pub status: Option<BatchStatus>,

    #[arg(long)]
    pub sort: Option<BatchSortKey>,
}

const SCHEDULE_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("NAME", 24),
    ColumnDef::new("FREQUENCY", 10),
    ColumnDef::new("METHOD", 10),
    ColumnDef::new("ACTIVE", 6),
];

const BATCH_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("NAME", 24),
    ColumnDef::new("STATUS", 12),
    ColumnDef::new("START", 10),
    ColumnDef::new("END", 10),
    ColumnDef::new("PROGRESS", 14),
];

fn batch_row(batch: &CycleCountBatch) -> Vec<String> {
    vec![
        batch.id.to_string(),
        batch.name.clone(),
        batch.status.to_string(),
        opt(batch.start_date),
        opt(batch.end_date),
        format!(
            "{}/{} ({:.0}%)",
            batch.completed_count,
            batch.item_count,
            batch.progress() * 100.0
        ),
    ]
}

pub async fn run(cmd: CycleCountCommands, state: &AppState) -> Result<(), MainError> {
    match cmd {
        CycleCountCommands::Schedules => {
            let schedules = state.client().cycle_count_schedules().await?;
            let items: Vec<&CycleCountSchedule> = schedules.iter().collect();
            print_rows(state.format, SCHEDULE_COLUMNS, &items, |s| {
                vec![
                    s.id.to_string(),
                    s.name.clone(),
                    s.frequency.to_string(),
                    s.method.to_string(),
                    if s.is_active { "yes" } else { "no" }.to_string(),
                ]
            })
        }
        CycleCountCommands::Batches(args) => {
            let batches = state.store.refresh_batches(&state.shutdown).await?;
            let mut list = batch_list_state(state.page_size(args.page.page_size));
            list.update_filter(|filter| filter.status = args.status);
            args.page.configure(&mut list, args.sort);
            let page = list.apply(&batches, &());
            print_page(state.format, BATCH_COLUMNS, &page, batch_row)
        }
    }
}
