use crate::args::PageArgs;
use crate::commands::run_modal;
use crate::error::MainError;
use crate::output::{ColumnDef, opt, print_page, print_rows, quantity};
use crate::state::AppState;
use clap::Subcommand;
use shared::supplyline::kit::{ItemType, Kit, KitBox, KitItem, KitStatus, Location, LocationType};
use views::forms::TransferForm;
use views::list::kits::{KitSortKey, kit_list_state};

#[derive(Subcommand, Debug)]
pub enum KitCommands {
    /// List kits with search, filters, sorting and paging
    List(ListArgs),

    /// Boxes in a kit
    Boxes { kit_id: i64 },

    /// Items in a kit
    Items { kit_id: i64 },

    /// Move an item between kits and warehouses
    Transfer(TransferArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[arg(long)]
    pub aircraft_type_id: Option<i64>,

    #[arg(long, short = 's')]
    pub status: Option<KitStatus>,

    #[arg(long)]
    pub sort: Option<KitSortKey>,
}

#[derive(clap::Args, Debug)]
pub struct TransferArgs {
    /// tool, chemical or expendable
    #[arg(long)]
    pub item_type: ItemType,

    #[arg(long)]
    pub item_id: i64,

    /// Source, e.g. `kit:12` or `warehouse:3`
    #[arg(long)]
    pub from: Location,

    /// Destination, e.g. `kit:12` or `warehouse:3`
    #[arg(long)]
    pub to: Location,

    #[arg(long, short = 'n')]
    pub quantity: String,

    #[arg(long)]
    pub notes: Option<String>,
}

const KIT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("NAME", 20),
    ColumnDef::new("AIRCRAFT", 14),
    ColumnDef::new("STATUS", 12),
    ColumnDef::new("BOXES", 5),
    ColumnDef::new("ITEMS", 5),
];

const BOX_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("BOX", 8),
    ColumnDef::new("TYPE", 12),
    ColumnDef::new("DESCRIPTION", 30),
];

const ITEM_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("TYPE", 10),
    ColumnDef::new("PART NUMBER", 14),
    ColumnDef::new("SERIAL/LOT", 14),
    ColumnDef::new("DESCRIPTION", 24),
    ColumnDef::new("QTY", 8),
    ColumnDef::new("STATUS", 12),
];

pub async fn run(cmd: KitCommands, state: &AppState) -> Result<(), MainError> {
    match cmd {
        KitCommands::List(args) => {
            let kits = state.store.refresh_kits(&state.shutdown).await?;
            let mut list = kit_list_state(state.page_size(args.page.page_size));
            list.update_filter(|filter| {
                filter.aircraft_type_id = args.aircraft_type_id;
                filter.status = args.status;
            });
            args.page.configure(&mut list, args.sort);
            let page = list.apply(&kits, &());
            print_page(state.format, KIT_COLUMNS, &page, |kit: &Kit| {
                vec![
                    kit.id.to_string(),
                    kit.name.clone(),
                    kit.aircraft_type_name
                        .clone()
                        .unwrap_or_else(|| kit.aircraft_type_id.to_string()),
                    kit.status.to_string(),
                    kit.box_count.to_string(),
                    kit.item_count.to_string(),
                ]
            })
        }
        KitCommands::Boxes { kit_id } => {
            let boxes = state.client().kit_boxes(kit_id).await?;
            let items: Vec<&KitBox> = boxes.iter().collect();
            print_rows(state.format, BOX_COLUMNS, &items, |b| {
                vec![
                    b.id.to_string(),
                    b.box_number.clone(),
                    b.box_type.to_string(),
                    opt(b.description.as_deref()),
                ]
            })
        }
        KitCommands::Items { kit_id } => {
            let items = state.client().kit_items(kit_id).await?;
            let rows: Vec<&KitItem> = items.iter().collect();
            print_rows(state.format, ITEM_COLUMNS, &rows, |item| {
                vec![
                    item.id.to_string(),
                    item.item_type.to_string(),
                    item.part_number.clone(),
                    opt(item.serial_number.as_deref().or(item.lot_number.as_deref())),
                    opt(item.description.as_deref()),
                    quantity(item.quantity),
                    item.status.to_string(),
                ]
            })
        }
        KitCommands::Transfer(args) => transfer(args, state).await,
    }
}

/// Quantity on hand at the source, used to bound the transfer.
async fn available_quantity(args: &TransferArgs, state: &AppState) -> Result<f64, MainError> {
    if args.item_type == ItemType::Chemical {
        return Ok(state.client().get_chemical(args.item_id).await?.quantity);
    }
    match args.from.kind {
        LocationType::Kit => {
            let items = state.client().kit_items(args.from.id).await?;
            items
                .iter()
                .find(|item| item.id == args.item_id)
                .map(|item| item.quantity)
                .ok_or_else(|| {
                    MainError::Usage(format!("item {} is not in {}", args.item_id, args.from))
                })
        }
        // Tools and expendables in a warehouse move one record at a time.
        LocationType::Warehouse => Ok(1.0),
    }
}

async fn transfer(args: TransferArgs, state: &AppState) -> Result<(), MainError> {
    let available = available_quantity(&args, state).await?;
    let TransferArgs {
        item_type,
        item_id,
        from,
        to,
        quantity,
        notes,
    } = args;

    run_modal(
        state,
        TransferForm::new(item_type, item_id, from, available),
        |form| {
            form.destination = Some(to);
            form.quantity = quantity;
            form.notes = notes.unwrap_or_default();
        },
        |request| async move { state.client().transfer(&request).await },
    )
    .await?;
    state.store.refresh_kits(&state.shutdown).await?;
    Ok(())
}
