use crate::args::PageArgs;
use crate::commands::run_modal;
use crate::error::MainError;
use crate::output::{ColumnDef, opt, print_page};
use crate::state::AppState;
use clap::Subcommand;
use shared::supplyline::tool::{ReturnRequest, Tool, ToolStatus};
use views::forms::CheckoutForm;
use views::list::tools::{ToolSortKey, tool_list_state};

#[derive(Subcommand, Debug)]
pub enum ToolCommands {
    /// List tools with search, filters, sorting and paging
    List(ListArgs),

    /// Check a tool out to a user
    Checkout {
        id: i64,
        #[arg(long)]
        user_id: String,
        /// Optional YYYY-MM-DD, today or later
        #[arg(long)]
        expected_return_date: Option<String>,
    },

    /// Return a checked-out tool
    Return {
        id: i64,
        #[arg(long)]
        condition: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long, short = 'c')]
    pub category: Option<String>,

    #[arg(long, short = 's')]
    pub status: Option<ToolStatus>,

    #[arg(long)]
    pub condition: Option<String>,

    #[arg(long)]
    pub sort: Option<ToolSortKey>,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("TOOL NUMBER", 14),
    ColumnDef::new("SERIAL", 14),
    ColumnDef::new("DESCRIPTION", 24),
    ColumnDef::new("STATUS", 12),
    ColumnDef::new("LOCATION", 16),
    ColumnDef::new("NEXT CAL", 10),
];

fn row(tool: &Tool) -> Vec<String> {
    vec![
        tool.id.to_string(),
        tool.tool_number.clone(),
        tool.serial_number.clone(),
        opt(tool.description.as_deref()),
        tool.status.to_string(),
        opt(tool.location.as_deref()),
        opt(tool.next_calibration_date),
    ]
}

pub async fn run(cmd: ToolCommands, state: &AppState) -> Result<(), MainError> {
    match cmd {
        ToolCommands::List(args) => {
            let tools = state.store.refresh_tools(&state.shutdown).await?;
            let mut list = tool_list_state(state.page_size(args.page.page_size));
            list.update_filter(|filter| {
                filter.category = args.category;
                filter.status = args.status;
                filter.condition = args.condition;
            });
            args.page.configure(&mut list, args.sort);
            let page = list.apply(&tools, &());
            print_page(state.format, COLUMNS, &page, row)
        }
        ToolCommands::Checkout {
            id,
            user_id,
            expected_return_date,
        } => {
            run_modal(
                state,
                CheckoutForm::new(id),
                |form| {
                    form.user_id = user_id;
                    form.expected_return_date = expected_return_date.unwrap_or_default();
                },
                |request| async move { state.client().checkout_tool(id, &request).await },
            )
            .await?;
            state.store.refresh_tools(&state.shutdown).await?;
            Ok(())
        }
        ToolCommands::Return { id, condition } => {
            let ack = state
                .client()
                .return_tool(id, &ReturnRequest { condition })
                .await?;
            println!("{}", ack.message.unwrap_or_else(|| "Tool returned".to_string()));
            state.store.refresh_tools(&state.shutdown).await?;
            Ok(())
        }
    }
}
