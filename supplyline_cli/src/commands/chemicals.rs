use crate::args::PageArgs;
use crate::commands::run_modal;
use crate::error::MainError;
use crate::output::{ColumnDef, opt, print_page, print_rows, print_value, quantity};
use crate::state::AppState;
use clap::Subcommand;
use shared::supplyline::chemical::{Chemical, ChemicalStatus, MarkDeliveredRequest};
use shared::supplyline::warehouse::Warehouse;
use tracing::info;
use views::forms::{IssueForm, MarkOrderedForm, ReorderRequestForm};
use views::list::AllowList;
use views::list::chemicals::{ChemicalSortKey, WarehouseDirectory, WarehouseFilter, chemical_list_state};

#[derive(Subcommand, Debug)]
pub enum ChemicalCommands {
    /// List chemicals with search, filters, sorting and paging
    List(ListArgs),

    /// Show one chemical
    Show { id: i64 },

    /// Chemicals flagged for reorder
    ReorderNeeded,

    /// Chemicals with an open order
    OnOrder,

    /// Request replenishment of a chemical
    Reorder {
        id: i64,
        #[arg(long, short = 'n')]
        quantity: String,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Record that a reorder was placed with the supplier
    MarkOrdered {
        id: i64,
        /// YYYY-MM-DD, tomorrow or later
        #[arg(long)]
        expected_delivery_date: String,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Record receipt of an ordered chemical
    MarkDelivered {
        id: i64,
        #[arg(long)]
        received_quantity: Option<f64>,
    },

    /// Withdraw a quantity for use in a hangar
    Issue {
        id: i64,
        #[arg(long, short = 'n')]
        quantity: String,
        #[arg(long)]
        hangar: String,
        #[arg(long)]
        purpose: Option<String>,
    },

    /// Delete a chemical record
    Delete {
        id: i64,
        /// Required; deletion cannot be undone
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Comma-separated statuses, or `all`. Defaults to views.default_chemical_statuses
    #[arg(long, short = 's')]
    pub status: Option<AllowList<ChemicalStatus>>,

    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Warehouse id, `in_kit`, or `all`
    #[arg(long, short = 'w')]
    pub warehouse: Option<WarehouseFilter>,

    /// part_number, lot_number, description, manufacturer, category,
    /// quantity, status, location, warehouse_name or expiration_date
    #[arg(long)]
    pub sort: Option<ChemicalSortKey>,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("PART NUMBER", 14),
    ColumnDef::new("LOT", 10),
    ColumnDef::new("DESCRIPTION", 24),
    ColumnDef::new("QTY", 8),
    ColumnDef::new("STATUS", 12),
    ColumnDef::new("LOCATION", 18),
    ColumnDef::new("EXPIRES", 10),
];

fn row(chemical: &Chemical, directory: &WarehouseDirectory) -> Vec<String> {
    vec![
        chemical.id.to_string(),
        chemical.part_number.clone(),
        chemical.lot_number.clone(),
        opt(chemical.description.as_deref()),
        format!("{} {}", quantity(chemical.quantity), chemical.unit),
        chemical.status.to_string(),
        opt(directory.location_name(chemical)),
        opt(chemical.expiration_date),
    ]
}

pub async fn run(cmd: ChemicalCommands, state: &AppState) -> Result<(), MainError> {
    match cmd {
        ChemicalCommands::List(args) => list(args, state).await,
        ChemicalCommands::Show { id } => show(id, state).await,
        ChemicalCommands::ReorderNeeded => {
            let (chemicals, warehouses) = tokio::try_join!(
                state.client().chemicals_needing_reorder(),
                state.client().list_warehouses(),
            )?;
            print_flat(&chemicals, &warehouses, state)
        }
        ChemicalCommands::OnOrder => {
            let (chemicals, warehouses) = tokio::try_join!(
                state.client().chemicals_on_order(),
                state.client().list_warehouses(),
            )?;
            print_flat(&chemicals, &warehouses, state)
        }
        ChemicalCommands::Reorder {
            id,
            quantity,
            notes,
        } => {
            let chemical = state.client().get_chemical(id).await?;
            run_modal(
                state,
                ReorderRequestForm::new(id, chemical.quantity, chemical.unit),
                |form| {
                    form.requested_quantity = quantity;
                    form.notes = notes.unwrap_or_default();
                },
                |request| async move { state.client().request_reorder(id, &request).await },
            )
            .await?;
            refetch(state).await
        }
        ChemicalCommands::MarkOrdered {
            id,
            expected_delivery_date,
            notes,
        } => {
            run_modal(
                state,
                MarkOrderedForm::new(id),
                |form| {
                    form.expected_delivery_date = expected_delivery_date;
                    form.notes = notes.unwrap_or_default();
                },
                |request| async move { state.client().mark_chemical_ordered(id, &request).await },
            )
            .await?;
            refetch(state).await
        }
        ChemicalCommands::MarkDelivered {
            id,
            received_quantity,
        } => {
            let ack = state
                .client()
                .mark_chemical_delivered(id, &MarkDeliveredRequest { received_quantity })
                .await?;
            println!(
                "{}",
                ack.message
                    .unwrap_or_else(|| "Chemical marked as delivered".to_string())
            );
            refetch(state).await
        }
        ChemicalCommands::Issue {
            id,
            quantity,
            hangar,
            purpose,
        } => {
            let chemical = state.client().get_chemical(id).await?;
            run_modal(
                state,
                IssueForm::new(id, chemical.quantity),
                |form| {
                    form.quantity = quantity;
                    form.hangar = hangar;
                    form.purpose = purpose.unwrap_or_default();
                },
                |request| async move { state.client().issue_chemical(id, &request).await },
            )
            .await?;
            refetch(state).await
        }
        ChemicalCommands::Delete { id, yes } => {
            if !yes {
                return Err(MainError::Usage(format!(
                    "refusing to delete chemical {id} without --yes"
                )));
            }
            let ack = state.client().delete_chemical(id).await?;
            info!(chemical_id = id, "deleted chemical");
            println!("{}", ack.message.unwrap_or_else(|| "Chemical deleted".to_string()));
            refetch(state).await
        }
    }
}

async fn list(args: ListArgs, state: &AppState) -> Result<(), MainError> {
    let (chemicals, warehouses) = tokio::try_join!(
        state.store.refresh_chemicals(&state.shutdown),
        state.store.refresh_warehouses(&state.shutdown),
    )?;
    let directory = WarehouseDirectory::new(&warehouses);

    let mut list = chemical_list_state(state.page_size(args.page.page_size));
    let statuses = match args.status {
        Some(statuses) => statuses,
        None => state
            .config
            .views
            .default_chemical_statuses
            .parse()
            .map_err(MainError::Usage)?,
    };
    list.update_filter(|filter| {
        filter.statuses = statuses;
        filter.category = args.category;
        filter.warehouse = args.warehouse.unwrap_or_default();
    });
    args.page.configure(&mut list, args.sort);

    let page = list.apply(&chemicals, &directory);
    print_page(state.format, COLUMNS, &page, |c| row(c, &directory))
}

async fn show(id: i64, state: &AppState) -> Result<(), MainError> {
    let (chemical, warehouses) = tokio::try_join!(
        state.client().get_chemical(id),
        state.client().list_warehouses(),
    )?;
    let directory = WarehouseDirectory::new(&warehouses);
    print_value(state.format, &chemical, |c| {
        vec![
            ("id", c.id.to_string()),
            ("part number", c.part_number.clone()),
            ("lot number", c.lot_number.clone()),
            ("description", opt(c.description.as_deref())),
            ("manufacturer", opt(c.manufacturer.as_deref())),
            ("category", opt(c.category.as_deref())),
            ("quantity", format!("{} {}", quantity(c.quantity), c.unit)),
            ("status", c.status.to_string()),
            ("location", opt(directory.location_name(c))),
            ("box", opt(c.box_number.as_deref())),
            ("expires", opt(c.expiration_date)),
            ("reorder status", c.reorder_status.to_string()),
            ("expected delivery", opt(c.expected_delivery_date)),
        ]
    })
}

fn print_flat(
    chemicals: &[Chemical],
    warehouses: &[Warehouse],
    state: &AppState,
) -> Result<(), MainError> {
    let directory = WarehouseDirectory::new(warehouses);
    let items: Vec<&Chemical> = chemicals.iter().collect();
    print_rows(state.format, COLUMNS, &items, |c| row(c, &directory))
}

// No optimistic updates; reload what the list view shows.
async fn refetch(state: &AppState) -> Result<(), MainError> {
    let chemicals = state.store.refresh_chemicals(&state.shutdown).await?;
    info!(count = chemicals.len(), "refreshed chemicals after update");
    Ok(())
}
