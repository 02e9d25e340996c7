use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minehaul_core::{AggregateRoot, DomainError, DomainResult, OperationId, WarehouseId};
use minehaul_events::Notice;
use minehaul_transport::TransportOperation;

/// Aggregate root: mineral stock accumulated from finalized operations.
///
/// Mutated only through `ingest`; every rejected ingestion leaves the
/// inventory exactly as it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    id: WarehouseId,
    /// Mineral type → accumulated tonnes. Ordered map keeps reporting stable.
    inventory: BTreeMap<String, f64>,
    /// Operations already counted into the inventory.
    ingested: BTreeSet<OperationId>,
    version: u64,
}

impl Warehouse {
    /// Create an empty warehouse.
    pub fn new(id: WarehouseId) -> Self {
        Self {
            id,
            inventory: BTreeMap::new(),
            ingested: BTreeSet::new(),
            version: 0,
        }
    }

    pub fn inventory(&self) -> &BTreeMap<String, f64> {
        &self.inventory
    }

    /// Accumulated tonnes of one mineral type; 0 for an unknown type.
    pub fn stock_of(&self, mineral: &str) -> f64 {
        self.inventory.get(mineral).copied().unwrap_or(0.0)
    }

    /// Total stock across every mineral type; 0 for an empty warehouse.
    pub fn total_stock_t(&self) -> f64 {
        self.inventory.values().sum()
    }

    /// Count a finalized operation's cargo into the inventory.
    ///
    /// Rejects operations that are still open, and operations that were
    /// already counted once — double counting stock is the harmful
    /// outcome, so repeats fail loudly instead of silently accumulating.
    pub fn ingest(&mut self, operation: &TransportOperation) -> DomainResult<CargoReceived> {
        let operation_id = operation.id_typed();
        if !operation.is_finalized() {
            return Err(DomainError::invalid_state(format!(
                "operation {operation_id} is still open; only finalized operations can be ingested"
            )));
        }
        if self.ingested.contains(&operation_id) {
            return Err(DomainError::conflict(format!(
                "operation {operation_id} was already ingested"
            )));
        }

        let load = operation.load();
        let mineral = load.mineral().to_string();
        *self.inventory.entry(mineral.clone()).or_insert(0.0) += load.weight_t();
        self.ingested.insert(operation_id);
        self.version += 1;

        tracing::info!(
            warehouse = %self.id,
            %operation_id,
            mineral = %mineral,
            weight_t = load.weight_t(),
            "cargo received"
        );

        Ok(CargoReceived {
            warehouse_id: self.id.clone(),
            operation_id,
            mineral,
            weight_t: load.weight_t(),
            occurred_at: Utc::now(),
        })
    }
}

impl AggregateRoot for Warehouse {
    type Id = WarehouseId;

    fn id(&self) -> &WarehouseId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Notice: a finalized operation's cargo entered the warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoReceived {
    pub warehouse_id: WarehouseId,
    pub operation_id: OperationId,
    pub mineral: String,
    pub weight_t: f64,
    pub occurred_at: DateTime<Utc>,
}

impl Notice for CargoReceived {
    fn notice_type(&self) -> &'static str {
        "warehouse.cargo.received"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
