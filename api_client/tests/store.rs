use api_client::{ApiError, InventoryStore, SupplyLineClient};
use reqwest::StatusCode;
use shared::supplyline::warehouse::Warehouse;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

fn offline_store() -> InventoryStore {
    let client =
        SupplyLineClient::new_with_client(reqwest::Client::new(), "http://127.0.0.1:9/").unwrap();
    InventoryStore::new(client)
}

fn warehouse(id: i64, name: &str) -> Warehouse {
    Warehouse {
        id,
        name: name.to_string(),
        warehouse_type: None,
        is_active: true,
    }
}

#[tokio::test]
async fn stale_response_never_overwrites_newer_data() {
    let store = offline_store();
    let cancel = CancellationToken::new();
    let (old_tx, old_rx) = oneshot::channel::<Vec<Warehouse>>();
    let (new_tx, new_rx) = oneshot::channel::<Vec<Warehouse>>();

    let older = store.refresh_with(
        "warehouses",
        |s| &mut s.warehouses,
        async { Ok(old_rx.await.unwrap()) },
        &cancel,
    );
    let newer = store.refresh_with(
        "warehouses",
        |s| &mut s.warehouses,
        async { Ok(new_rx.await.unwrap()) },
        &cancel,
    );
    let release = async {
        new_tx.send(vec![warehouse(1, "Newer")]).unwrap();
        tokio::task::yield_now().await;
        old_tx.send(vec![warehouse(1, "Older")]).unwrap();
    };

    let (older, newer, ()) = tokio::join!(older, newer, release);
    assert_eq!(older.unwrap()[0].name, "Older");
    assert_eq!(newer.unwrap()[0].name, "Newer");

    let slot = store.snapshot().warehouses;
    assert_eq!(slot.generation(), 2);
    assert!(!slot.loading);
    assert_eq!(slot.data.unwrap()[0].name, "Newer");
}

#[tokio::test]
async fn cancelled_refresh_clears_loading() {
    let store = offline_store();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = store
        .refresh_with(
            "warehouses",
            |s| &mut s.warehouses,
            std::future::pending::<Result<Vec<Warehouse>, ApiError>>(),
            &cancel,
        )
        .await;

    assert!(matches!(result, Err(ApiError::Cancelled)));
    store.read(|state| {
        assert!(!state.warehouses.loading);
        assert_eq!(state.warehouses.generation(), 1);
        assert!(state.warehouses.data.is_none());
        assert!(state.warehouses.error.is_none());
    });
}

#[tokio::test]
async fn failed_refresh_keeps_previous_data() {
    let store = offline_store();
    let cancel = CancellationToken::new();

    store
        .refresh_with(
            "warehouses",
            |s| &mut s.warehouses,
            async { Ok(vec![warehouse(2, "Line")]) },
            &cancel,
        )
        .await
        .unwrap();

    let result = store
        .refresh_with(
            "warehouses",
            |s| &mut s.warehouses,
            async {
                Err::<Vec<Warehouse>, _>(ApiError::Rejected {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    message: "Maintenance window".to_string(),
                })
            },
            &cancel,
        )
        .await;
    assert!(result.is_err());

    store.read(|state| {
        let slot = &state.warehouses;
        assert_eq!(slot.error.as_deref(), Some("Maintenance window"));
        assert_eq!(slot.data.as_ref().map(Vec::len), Some(1));
        assert!(slot.loaded_at.is_some());
    });
}
