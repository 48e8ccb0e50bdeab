use crate::error::MainError;
use crate::output::{ColumnDef, opt, print_rows};
use crate::state::AppState;
use clap::Subcommand;
use shared::supplyline::warehouse::Warehouse;

#[derive(Subcommand, Debug)]
pub enum WarehouseCommands {
    /// List warehouses
    List {
        /// Include inactive warehouses
        #[arg(long)]
        all: bool,
    },
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("ID", 6),
    ColumnDef::new("NAME", 24),
    ColumnDef::new("TYPE", 14),
    ColumnDef::new("ACTIVE", 6),
];

pub async fn run(cmd: WarehouseCommands, state: &AppState) -> Result<(), MainError> {
    match cmd {
        WarehouseCommands::List { all } => {
            let warehouses = state.store.refresh_warehouses(&state.shutdown).await?;
            let visible: Vec<&Warehouse> = warehouses.iter().filter(|w| all || w.is_active).collect();
            print_rows(state.format, COLUMNS, &visible, |w| {
                vec![
                    w.id.to_string(),
                    w.name.clone(),
                    opt(w.warehouse_type.as_deref()),
                    if w.is_active { "yes" } else { "no" }.to_string(),
                ]
            })
        }
    }
}
