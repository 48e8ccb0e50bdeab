use chrono::NaiveDate;
use shared::supplyline::calibration::{CalibrationOutcome, CalibrationRecord};
use shared::supplyline::chemical::{Chemical, ChemicalStatus, ReorderStatus};
use shared::supplyline::cycle_count::{BatchStatus, CycleCountBatch};
use shared::supplyline::kit::{Kit, KitStatus};
use shared::supplyline::tool::{Tool, ToolStatus};
use shared::supplyline::warehouse::Warehouse;
use views::list::calibrations::calibration_list_state;
use views::list::chemicals::{
    ChemicalFilter, ChemicalSortKey, WarehouseDirectory, WarehouseFilter, chemical_list_state,
};
use views::list::cycle_counts::batch_list_state;
use views::list::kits::kit_list_state;
use views::list::tools::{ToolSortKey, tool_list_state};
use views::list::{
    AllowList, ListFilter, SearchTerm, SortConfig, SortDirection, filter_and_sort, paginate,
};

fn chemical(id: i64, part_number: &str, status: ChemicalStatus, quantity: f64) -> Chemical {
    Chemical {
        id,
        part_number: part_number.to_string(),
        lot_number: format!("LOT-{id}"),
        description: None,
        manufacturer: None,
        category: None,
        quantity,
        unit: "ml".to_string(),
        status,
        location: None,
        warehouse_id: None,
        kit_id: None,
        kit_name: None,
        box_number: None,
        expiration_date: None,
        reorder_status: ReorderStatus::NotNeeded,
        needs_reorder: false,
        expected_delivery_date: None,
    }
}

fn warehouses() -> Vec<Warehouse> {
    vec![
        Warehouse {
            id: 1,
            name: "Main Stores".to_string(),
            warehouse_type: None,
            is_active: true,
        },
        Warehouse {
            id: 2,
            name: "Annex".to_string(),
            warehouse_type: None,
            is_active: true,
        },
    ]
}

fn inventory() -> Vec<Chemical> {
    let mut sealant = chemical(1, "CHEM001", ChemicalStatus::LowStock, 5.0);
    sealant.description = Some("Polysulfide Sealant".to_string());
    sealant.category = Some("Sealant".to_string());
    sealant.warehouse_id = Some(1);
    sealant.expiration_date = NaiveDate::from_ymd_opt(2027, 5, 1);

    let mut primer = chemical(2, "CHEM002", ChemicalStatus::Available, 40.0);
    primer.manufacturer = Some("PPG Aerospace".to_string());
    primer.category = Some("Paint".to_string());
    primer.warehouse_id = Some(2);
    primer.expiration_date = NaiveDate::from_ymd_opt(2026, 12, 1);

    let mut solvent = chemical(3, "CHEM003", ChemicalStatus::Available, 12.5);
    solvent.category = Some("Solvent".to_string());
    solvent.kit_id = Some(9);
    solvent.kit_name = Some("B737 Kit A".to_string());

    let mut expired = chemical(4, "CHEM004", ChemicalStatus::Expired, 2.0);
    expired.category = Some("Sealant".to_string());
    expired.warehouse_id = Some(1);
    expired.expiration_date = NaiveDate::from_ymd_opt(2025, 1, 1);

    vec![sealant, primer, solvent, expired]
}

fn part_numbers(rows: &[&Chemical]) -> Vec<String> {
    rows.iter().map(|c| c.part_number.clone()).collect()
}

#[test]
fn default_status_filter_includes_low_stock() {
    let items = inventory();
    let state = chemical_list_state(30);
    let page = state.apply(&items, &WarehouseDirectory::new(&warehouses()));
    assert_eq!(part_numbers(&page.items), ["CHEM001", "CHEM002", "CHEM003"]);
}

#[test]
fn available_only_excludes_low_stock() -> Result<(), String> {
    let items = inventory();
    let mut state = chemical_list_state(30);
    let statuses: AllowList<ChemicalStatus> = "available".parse()?;
    state.update_filter(|f| f.statuses = statuses);
    let page = state.apply(&items, &WarehouseDirectory::default());
    assert!(page.items.iter().all(|c| c.part_number != "CHEM001"));
    assert_eq!(part_numbers(&page.items), ["CHEM002", "CHEM003"]);
    Ok(())
}

#[test]
fn every_returned_row_satisfies_every_predicate() -> Result<(), String> {
    let items = inventory();
    let filter = ChemicalFilter {
        category: Some("Sealant".to_string()),
        statuses: "all".parse()?,
        warehouse: WarehouseFilter::Warehouse(1),
    };
    let search = SearchTerm::new("  chem00 ");
    let rows = filter_and_sort(
        &items,
        &search,
        &filter,
        SortConfig::ascending(ChemicalSortKey::PartNumber),
        &WarehouseDirectory::default(),
    );
    assert_eq!(part_numbers(&rows), ["CHEM001", "CHEM004"]);
    assert!(rows.iter().all(|c| filter.matches(c)));
    Ok(())
}

#[test]
fn in_kit_means_no_warehouse_but_a_kit() {
    let items = inventory();
    let filter = ChemicalFilter {
        warehouse: WarehouseFilter::InKit,
        statuses: AllowList::everything(),
        ..ChemicalFilter::default()
    };
    let rows = filter_and_sort(
        &items,
        &SearchTerm::default(),
        &filter,
        SortConfig::ascending(ChemicalSortKey::PartNumber),
        &WarehouseDirectory::default(),
    );
    assert_eq!(part_numbers(&rows), ["CHEM003"]);
}

#[test]
fn search_covers_description_and_manufacturer_case_insensitively() {
    let items = inventory();
    let mut state = chemical_list_state(30);
    state.set_search("POLYSULFIDE");
    let page = state.apply(&items, &WarehouseDirectory::default());
    assert_eq!(part_numbers(&page.items), ["CHEM001"]);

    state.set_search("ppg");
    let page = state.apply(&items, &WarehouseDirectory::default());
    assert_eq!(part_numbers(&page.items), ["CHEM002"]);
}

#[test]
fn quantity_sorts_numerically() {
    let items = inventory();
    let mut state = chemical_list_state(30);
    state.update_filter(|f| f.statuses = AllowList::everything());
    state.request_sort(ChemicalSortKey::Quantity);
    let page = state.apply(&items, &WarehouseDirectory::default());
    assert_eq!(
        part_numbers(&page.items),
        ["CHEM004", "CHEM001", "CHEM003", "CHEM002"]
    );
}

#[test]
fn missing_expiration_dates_sort_last_in_both_directions() {
    let items = inventory();
    let mut state = chemical_list_state(30);
    state.update_filter(|f| f.statuses = AllowList::everything());

    state.request_sort(ChemicalSortKey::ExpirationDate);
    let ascending = state.apply(&items, &WarehouseDirectory::default());
    assert_eq!(
        part_numbers(&ascending.items),
        ["CHEM004", "CHEM002", "CHEM001", "CHEM003"]
    );

    state.request_sort(ChemicalSortKey::ExpirationDate);
    assert_eq!(state.sort().direction, SortDirection::Descending);
    let descending = state.apply(&items, &WarehouseDirectory::default());
    assert_eq!(
        part_numbers(&descending.items),
        ["CHEM001", "CHEM002", "CHEM004", "CHEM003"]
    );
}

#[test]
fn warehouse_name_resolves_through_directory_then_kit() {
    let items = inventory();
    let mut state = chemical_list_state(30);
    state.update_filter(|f| f.statuses = AllowList::everything());
    state.request_sort(ChemicalSortKey::WarehouseName);
    let page = state.apply(&items, &WarehouseDirectory::new(&warehouses()));
    // Annex, B737 Kit A, Main Stores (x2, tie broken by id)
    assert_eq!(
        part_numbers(&page.items),
        ["CHEM002", "CHEM003", "CHEM001", "CHEM004"]
    );
}

#[test]
fn sorting_is_idempotent_and_toggle_round_trips() {
    let mut items = inventory();
    // Duplicate keys exercise the tie-break.
    items.push(chemical(10, "CHEM002", ChemicalStatus::Available, 40.0));
    items.push(chemical(5, "CHEM002", ChemicalStatus::Available, 40.0));
    let everything = ChemicalFilter {
        statuses: AllowList::everything(),
        ..ChemicalFilter::default()
    };
    let dir = WarehouseDirectory::default();

    let ascending = SortConfig::ascending(ChemicalSortKey::Quantity);
    let once = filter_and_sort(&items, &SearchTerm::default(), &everything, ascending, &dir);
    let resorted: Vec<Chemical> = once.iter().map(|c| (*c).clone()).collect();
    let twice = filter_and_sort(&resorted, &SearchTerm::default(), &everything, ascending, &dir);
    assert_eq!(part_numbers(&once), part_numbers(&twice));
    let ids: Vec<i64> = twice.iter().map(|c| c.id).collect();
    assert_eq!(ids, [4, 1, 3, 2, 5, 10]);

    let mut sort = ascending;
    sort.request(ChemicalSortKey::Quantity);
    sort.request(ChemicalSortKey::Quantity);
    assert_eq!(sort, ascending);
    let back = filter_and_sort(&items, &SearchTerm::default(), &everything, sort, &dir);
    assert_eq!(part_numbers(&back), part_numbers(&once));
}

#[test]
fn new_sort_column_starts_ascending() {
    let mut sort = SortConfig::ascending(ChemicalSortKey::PartNumber);
    sort.request(ChemicalSortKey::PartNumber);
    assert_eq!(sort.direction, SortDirection::Descending);
    sort.request(ChemicalSortKey::Quantity);
    assert_eq!(sort, SortConfig::ascending(ChemicalSortKey::Quantity));
}

#[test]
fn page_length_matches_formula() {
    let items: Vec<u32> = (0..65).collect();
    for size in [1_usize, 7, 30, 100] {
        for page in 1..=5 {
            let expected = size.min(items.len().saturating_sub((page - 1) * size));
            assert_eq!(paginate(&items, page, size).len(), expected, "page {page} size {size}");
        }
    }
    assert_eq!(paginate(&items, 3, 30), &items[60..65]);
    assert!(paginate(&items, 0, 30).is_empty());
}

#[test]
fn any_input_change_resets_to_first_page() {
    let items: Vec<Chemical> = (1..=75)
        .map(|id| chemical(id, &format!("P-{id:03}"), ChemicalStatus::Available, 1.0))
        .collect();
    let dir = WarehouseDirectory::default();
    let mut state = chemical_list_state(30);

    state.set_page(3);
    let page = state.apply(&items, &dir);
    assert_eq!((page.page, page.items.len(), page.total_pages), (3, 15, 3));
    assert!(!page.has_next());
    assert!(page.has_previous());

    state.set_search("P-");
    assert_eq!(state.page(), 1);

    state.set_page(2);
    state.update_filter(|f| f.category = None);
    assert_eq!(state.page(), 1);

    state.set_page(2);
    state.request_sort(ChemicalSortKey::Quantity);
    assert_eq!(state.page(), 1);
}

#[test]
fn tool_view_filters_status_and_sorts_by_calibration_date() -> Result<(), String> {
    let tool = |id: i64, number: &str, status: ToolStatus, next: Option<NaiveDate>| Tool {
        id,
        tool_number: number.to_string(),
        serial_number: format!("SN-{id}"),
        description: None,
        category: Some("Torque".to_string()),
        condition: Some("good".to_string()),
        location: Some("Crib 1".to_string()),
        status,
        warehouse_id: None,
        requires_calibration: next.is_some(),
        calibration_frequency_days: None,
        last_calibration_date: None,
        next_calibration_date: next,
        calibration_status: None,
    };
    let tools = vec![
        tool(1, "T-1", ToolStatus::Available, NaiveDate::from_ymd_opt(2027, 2, 1)),
        tool(2, "T-2", ToolStatus::CheckedOut, NaiveDate::from_ymd_opt(2026, 11, 1)),
        tool(3, "T-3", ToolStatus::Available, None),
        tool(4, "T-4", ToolStatus::Available, NaiveDate::from_ymd_opt(2026, 10, 30)),
    ];

    let mut state = tool_list_state(30);
    let status: ToolStatus = "available".parse()?;
    state.update_filter(|f| f.status = Some(status));
    state.request_sort("next_calibration_date".parse::<ToolSortKey>()?);
    let page = state.apply(&tools, &());
    let numbers: Vec<&str> = page.items.iter().map(|t| t.tool_number.as_str()).collect();
    assert_eq!(numbers, ["T-4", "T-1", "T-3"]);
    assert!("calibration".parse::<ToolSortKey>().is_err());
    Ok(())
}

#[test]
fn kit_view_filters_aircraft_type_and_status_then_searches() {
    let kit = |id: i64, name: &str, aircraft_type_id: i64, status: KitStatus| Kit {
        id,
        name: name.to_string(),
        aircraft_type_id,
        aircraft_type_name: Some(if aircraft_type_id == 1 { "Q400" } else { "CL-415" }.to_string()),
        description: Some(format!("Deployable kit {name}")),
        status,
        box_count: 2,
        item_count: 10,
        created_at: None,
    };
    let kits = vec![
        kit(1, "Kit Bravo", 1, KitStatus::Active),
        kit(2, "Kit Alpha", 1, KitStatus::Active),
        kit(3, "Kit Charlie", 1, KitStatus::Maintenance),
        kit(4, "Kit Delta", 2, KitStatus::Active),
    ];

    let mut state = kit_list_state(30);
    state.update_filter(|f| {
        f.aircraft_type_id = Some(1);
        f.status = Some(KitStatus::Active);
    });
    let page = state.apply(&kits, &());
    let names: Vec<&str> = page.items.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, ["Kit Alpha", "Kit Bravo"]);

    let mut state = kit_list_state(30);
    state.set_search("cl-415");
    let page = state.apply(&kits, &());
    let ids: Vec<i64> = page.items.iter().map(|k| k.id).collect();
    assert_eq!(ids, [4]);
}

#[test]
fn calibration_view_defaults_to_newest_first_and_filters() {
    let record = |id: i64, tool_id: i64, day: u32, outcome: CalibrationOutcome, by: &str| {
        CalibrationRecord {
            id,
            tool_id,
            tool_number: Some(format!("T-{tool_id}")),
            serial_number: Some(format!("SN-{tool_id}")),
            calibration_date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap_or_default(),
            next_calibration_date: None,
            outcome,
            performed_by: Some(by.to_string()),
            notes: None,
        }
    };
    let records = vec![
        record(1, 7, 3, CalibrationOutcome::Pass, "Metrology Lab"),
        record(2, 7, 15, CalibrationOutcome::Fail, "Metrology Lab"),
        record(3, 8, 9, CalibrationOutcome::Pass, "Vendor Cal Co"),
        record(4, 7, 12, CalibrationOutcome::Pass, "Metrology Lab"),
    ];

    let state = calibration_list_state(10);
    assert_eq!(state.sort().direction, SortDirection::Descending);
    let page = state.apply(&records, &());
    let ids: Vec<i64> = page.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, [2, 4, 3, 1]);

    let mut state = calibration_list_state(10);
    state.update_filter(|f| {
        f.outcome = Some(CalibrationOutcome::Pass);
        f.tool_id = Some(7);
    });
    let page = state.apply(&records, &());
    let ids: Vec<i64> = page.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, [4, 1]);

    let mut state = calibration_list_state(10);
    state.set_search("vendor");
    let page = state.apply(&records, &());
    let ids: Vec<i64> = page.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, [3]);
}

#[test]
fn batch_view_filters_status_and_searches_name() {
    let batch = |id: i64, name: &str, status: BatchStatus| CycleCountBatch {
        id,
        schedule_id: None,
        name: name.to_string(),
        status,
        start_date: None,
        end_date: None,
        item_count: 20,
        completed_count: 5,
        created_at: None,
    };
    let batches = vec![
        batch(1, "Hangar 2 weekly", BatchStatus::InProgress),
        batch(2, "Crib A monthly", BatchStatus::Pending),
        batch(3, "Hangar 1 weekly", BatchStatus::InProgress),
        batch(4, "Hangar 3 weekly", BatchStatus::Completed),
    ];

    let mut state = batch_list_state(30);
    state.update_filter(|f| f.status = Some(BatchStatus::InProgress));
    let page = state.apply(&batches, &());
    let mut ids: Vec<i64> = page.items.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 3]);

    let mut state = batch_list_state(30);
    state.set_search("HANGAR");
    let page = state.apply(&batches, &());
    let mut ids: Vec<i64> = page.items.iter().map(|b| b.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 3, 4]);
}
