//! Cached server state shared by every view.
//!
//! Each slot is refreshed independently. A refresh bumps the slot's
//! generation before the request goes out; when the response arrives it is
//! only applied if no newer refresh of that slot has started in the meantime.

use crate::client::SupplyLineClient;
use crate::error::ApiError;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use shared::error::UserFacingError;
use shared::supplyline::admin::DashboardStats;
use shared::supplyline::calibration::CalibrationRecord;
use shared::supplyline::chemical::Chemical;
use shared::supplyline::cycle_count::CycleCountBatch;
use shared::supplyline::kit::Kit;
use shared::supplyline::tool::Tool;
use shared::supplyline::warehouse::Warehouse;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Races `fut` against `cancel`. A cancelled token wins ties.
pub async fn cancellable<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(ApiError::Cancelled),
        result = fut => result,
    }
}

#[derive(Debug, Clone)]
pub struct Loadable<T> {
    pub data: Option<T>,
    pub loading: bool,
    /// User-facing message from the last failed refresh.
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    generation: u64,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            loaded_at: None,
            generation: 0,
        }
    }
}

impl<T> Loadable<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct InventoryState {
    pub chemicals: Loadable<Vec<Chemical>>,
    pub warehouses: Loadable<Vec<Warehouse>>,
    pub tools: Loadable<Vec<Tool>>,
    pub kits: Loadable<Vec<Kit>>,
    pub calibrations: Loadable<Vec<CalibrationRecord>>,
    pub batches: Loadable<Vec<CycleCountBatch>>,
    pub dashboard: Loadable<DashboardStats>,
}

#[derive(Clone)]
pub struct InventoryStore {
    client: SupplyLineClient,
    state: Arc<RwLock<InventoryState>>,
}

impl InventoryStore {
    pub fn new(client: SupplyLineClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(InventoryState::default())),
        }
    }

    pub fn client(&self) -> &SupplyLineClient {
        &self.client
    }

    pub fn read<R>(&self, f: impl FnOnce(&InventoryState) -> R) -> R {
        f(&self.state.read())
    }

    pub fn snapshot(&self) -> InventoryState {
        self.state.read().clone()
    }

    /// Runs `fetch` for one slot and applies the result unless it is stale.
    ///
    /// The caller always receives the fetch result, even when the store
    /// discarded it.
    pub async fn refresh_with<T, S, Fut>(
        &self,
        slot: &'static str,
        select: S,
        fetch: Fut,
        cancel: &CancellationToken,
    ) -> Result<T, ApiError>
    where
        T: Clone,
        S: Fn(&mut InventoryState) -> &mut Loadable<T>,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let generation = {
            let mut state = self.state.write();
            let entry = select(&mut state);
            entry.generation += 1;
            entry.loading = true;
            entry.generation
        };

        let result = cancellable(cancel, fetch).await;

        let mut state = self.state.write();
        let entry = select(&mut state);
        if entry.generation != generation {
            debug!(slot, generation, latest = entry.generation, "discarding stale response");
            return result;
        }

        entry.loading = false;
        match &result {
            Ok(data) => {
                entry.data = Some(data.clone());
                entry.error = None;
                entry.loaded_at = Some(Utc::now());
            }
            Err(ApiError::Cancelled) => debug!(slot, "refresh cancelled"),
            Err(e) => {
                warn!(slot, error = %e, "refresh failed");
                entry.error = Some(e.user_message());
            }
        }
        result
    }

    pub async fn refresh_chemicals(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Chemical>, ApiError> {
        self.refresh_with(
            "chemicals",
            |s| &mut s.chemicals,
            self.client.list_chemicals(),
            cancel,
        )
        .await
    }

    pub async fn refresh_warehouses(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<Warehouse>, ApiError> {
        self.refresh_with(
            "warehouses",
            |s| &mut s.warehouses,
            self.client.list_warehouses(),
            cancel,
        )
        .await
    }

    pub async fn refresh_tools(&self, cancel: &CancellationToken) -> Result<Vec<Tool>, ApiError> {
        self.refresh_with("tools", |s| &mut s.tools, self.client.list_tools(), cancel)
            .await
    }

    pub async fn refresh_kits(&self, cancel: &CancellationToken) -> Result<Vec<Kit>, ApiError> {
        self.refresh_with("kits", |s| &mut s.kits, self.client.list_kits(), cancel)
            .await
    }

    pub async fn refresh_calibrations(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<CalibrationRecord>, ApiError> {
        self.refresh_with(
            "calibrations",
            |s| &mut s.calibrations,
            self.client.list_calibrations(),
            cancel,
        )
        .await
    }

    pub async fn refresh_batches(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<CycleCountBatch>, ApiError> {
        self.refresh_with(
            "batches",
            |s| &mut s.batches,
            self.client.cycle_count_batches(),
            cancel,
        )
        .await
    }

    pub async fn refresh_dashboard(
        &self,
        cancel: &CancellationToken,
    ) -> Result<DashboardStats, ApiError> {
        self.refresh_with(
            "dashboard",
            |s| &mut s.dashboard,
            self.client.dashboard_stats(),
            cancel,
        )
        .await
    }
}
