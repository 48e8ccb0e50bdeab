use crate::args::PageArgs;
use crate::error::MainError;
use crate::output::{ColumnDef, opt, print_page, print_rows};
use crate::state::AppState;
use clap::Subcommand;
use shared::supplyline::calibration::{CalibrationOutcome, CalibrationRecord};
use shared::supplyline::tool::Tool;
use views::list::calibrations::{CalibrationSortKey, calibration_list_state};

#[derive(Subcommand, Debug)]
pub enum CalibrationCommands {
    /// Calibration history, newest first by default
    List(ListArgs),

    /// Tools due for calibration within a window
    Due {
        #[arg(long, short = 'd', default_value_t = 30)]
        days: u32,
    },

    /// Tools past their calibration date
    Overdue,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// pass, fail or limited
    #[arg(long)]
    pub outcome: Option<CalibrationOutcome>,

    #[arg(long)]
    pub tool_id: Option<i64>,

    #[arg(long)]
    pub sort: Option<CalibrationSortKey>,
}

const RECORD_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("TOOL", 14),
    ColumnDef::new("DATE", 10),
    ColumnDef::new("NEXT", 10),
    ColumnDef::new("OUTCOME", 8),
    ColumnDef::new("PERFORMED BY", 18),
];

const TOOL_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("TOOL NUMBER", 14),
    ColumnDef::new("SERIAL", 14),
    ColumnDef::new("DESCRIPTION", 24),
    ColumnDef::new("NEXT CAL", 10),
];

fn record_row(record: &CalibrationRecord) -> Vec<String> {
    vec![
        record.id.to_string(),
        record
            .tool_number
            .clone()
            .unwrap_or_else(|| record.tool_id.to_string()),
        record.calibration_date.to_string(),
        opt(record.next_calibration_date),
        record.outcome.to_string(),
        opt(record.performed_by.as_deref()),
    ]
}

fn tool_row(tool: &Tool) -> Vec<String> {
    vec![
        tool.id.to_string(),
        tool.tool_number.clone(),
        tool.serial_number.clone(),
        opt(tool.description.as_deref()),
        opt(tool.next_calibration_date),
    ]
}

pub async fn run(cmd: CalibrationCommands, state: &AppState) -> Result<(), MainError> {
    match cmd {
        CalibrationCommands::List(args) => {
            let records = state.store.refresh_calibrations(&state.shutdown).await?;
            let mut list = calibration_list_state(state.page_size(args.page.page_size));
            list.update_filter(|filter| {
                filter.outcome = args.outcome;
                filter.tool_id = args.tool_id;
            });
            args.page.configure(&mut list, args.sort);
            let page = list.apply(&records, &());
            print_page(state.format, RECORD_COLUMNS, &page, record_row)
        }
        CalibrationCommands::Due { days } => {
            let tools = state.client().calibrations_due(days).await?;
            let items: Vec<&Tool> = tools.iter().collect();
            print_rows(state.format, TOOL_COLUMNS, &items, tool_row)
        }
        CalibrationCommands::Overdue => {
            let tools = state.client().calibrations_overdue().await?;
            let items: Vec<&Tool> = tools.iter().collect();
            print_rows(state.format, TOOL_COLUMNS, &items, tool_row)
        }
    }
}
