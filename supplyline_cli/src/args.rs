use crate::commands::auth::AuthCommands;
use crate::commands::calibrations::CalibrationCommands;
use crate::commands::chemicals::ChemicalCommands;
use crate::commands::cycle_counts::CycleCountCommands;
use crate::commands::export::ExportArgs;
use crate::commands::kits::KitCommands;
use crate::commands::tools::ToolCommands;
use crate::commands::warehouses::WarehouseCommands;
use clap::{Parser, Subcommand, ValueEnum};
use shared::SETTINGS_FILE;
use std::path::PathBuf;
use views::list::{ListState, SortConfig, SortDirection};

#[derive(Parser, Debug)]
#[command(name = "supplyline", version, about = "Inventory and MRO operations for SupplyLine")]
pub struct Cli {
    /// Settings file layered under SUPPLYLINE__* environment variables
    #[arg(long, global = true, env = "SUPPLYLINE_CONFIG", default_value = SETTINGS_FILE)]
    pub config: PathBuf,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, log out, or check the current session
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Chemical inventory, reorders and issuance
    #[command(subcommand)]
    Chemicals(ChemicalCommands),

    /// Tool inventory and checkouts
    #[command(subcommand)]
    Tools(ToolCommands),

    #[command(subcommand)]
    Warehouses(WarehouseCommands),

    /// Mobile kits, their boxes and transfers
    #[command(subcommand)]
    Kits(KitCommands),

    #[command(subcommand)]
    Calibrations(CalibrationCommands),

    /// Cycle count schedules and batches
    #[command(subcommand)]
    CycleCounts(CycleCountCommands),

    /// Headline counts from the admin dashboard
    Dashboard,

    /// Download a report file
    Export(ExportArgs),
}

/// Search, sort order and page shared by every list command.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Case-insensitive substring search
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Sort direction (asc or desc)
    #[arg(long)]
    pub order: Option<SortDirection>,

    /// 1-based page number
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Rows per page, defaults to views.page_size
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl PageArgs {
    /// Applies these arguments to `state`. The page is set last so earlier
    /// changes don't reset it.
    pub fn configure<F, K: Copy + PartialEq>(&self, state: &mut ListState<F, K>, sort: Option<K>) {
        if let Some(search) = self.search.as_deref() {
            state.set_search(search);
        }
        let mut config = sort.map_or_else(|| state.sort(), SortConfig::ascending);
        if let Some(order) = self.order {
            config.direction = order;
        }
        if config != state.sort() {
            state.set_sort(config);
        }
        state.set_page(self.page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::chemicals::ChemicalCommands;
    use shared::supplyline::chemical::ChemicalStatus;
    use views::list::chemicals::{ChemicalSortKey, WarehouseFilter, chemical_list_state};

    #[test]
    fn parses_chemical_list_filters() {
        let cli = Cli::try_parse_from([
            "supplyline",
            "chemicals",
            "list",
            "--status",
            "expired,out_of_stock",
            "--warehouse",
            "in_kit",
            "--sort",
            "expiration_date",
            "--order",
            "desc",
            "-p",
            "2",
        ])
        .unwrap();

        let Commands::Chemicals(ChemicalCommands::List(args)) = cli.command else {
            panic!("expected chemicals list");
        };
        let statuses = args.status.unwrap();
        assert!(statuses.allows(&ChemicalStatus::Expired));
        assert!(!statuses.allows(&ChemicalStatus::Available));
        assert_eq!(args.warehouse, Some(WarehouseFilter::InKit));
        assert_eq!(args.sort, Some(ChemicalSortKey::ExpirationDate));
        assert_eq!(args.page.page, 2);
        assert_eq!(cli.output, OutputFormat::Table);
    }

    #[test]
    fn rejects_unknown_sort_key() {
        let err = Cli::try_parse_from(["supplyline", "chemicals", "list", "--sort", "colour"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown sort key"));
    }

    #[test]
    fn page_args_keep_requested_page() {
        let args = PageArgs {
            search: Some("sealant".to_string()),
            order: Some(SortDirection::Descending),
            page: 3,
            page_size: None,
        };
        let mut state = chemical_list_state(10);
        args.configure(&mut state, Some(ChemicalSortKey::Quantity));

        assert_eq!(state.page(), 3);
        assert_eq!(state.search().as_str(), "sealant");
        assert_eq!(state.sort().key, ChemicalSortKey::Quantity);
        assert_eq!(state.sort().direction, SortDirection::Descending);
    }

    #[test]
    fn kit_transfer_locations_parse() {
        let cli = Cli::try_parse_from([
            "supplyline",
            "kits",
            "transfer",
            "--item-type",
            "expendable",
            "--item-id",
            "88",
            "--from",
            "kit:12",
            "--to",
            "warehouse:3",
            "-n",
            "4",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Kits(_)));
    }
}
