use serde::{Deserialize, Serialize};

use minehaul_core::{
    AggregateRoot, DomainError, DomainResult, Entity, OperationId, OperatorId, ValueObject,
    VehicleId,
};
use minehaul_fleet::Vehicle;

use crate::load::MineralLoad;

/// Lifecycle of a transport operation: open until finalized, then terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Open,
    Finalized,
}

/// Aggregate: one haul from the mineral source to the warehouse.
///
/// Operator and vehicle are referenced by id — both outlive the operation
/// and are reused across operations — while the load is owned exclusively
/// by its operation. Construction never checks the load against the
/// vehicle: `validate_weight` is the explicit second phase, so an
/// operation can exist transiently in an invalid state until the caller
/// runs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportOperation {
    id: OperationId,
    operator_id: OperatorId,
    vehicle_id: VehicleId,
    load: MineralLoad,
    distance_km: f64,
    status: OperationStatus,
    version: u64,
}

impl TransportOperation {
    /// Open a new operation; the id comes from the process-wide sequence.
    pub fn new(
        operator_id: OperatorId,
        vehicle_id: VehicleId,
        load: MineralLoad,
        distance_km: f64,
    ) -> Self {
        Self {
            id: OperationId::next(),
            operator_id,
            vehicle_id,
            load,
            distance_km,
            status: OperationStatus::Open,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> OperationId {
        self.id
    }

    pub fn operator_id(&self) -> &OperatorId {
        &self.operator_id
    }

    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    pub fn load(&self) -> &MineralLoad {
        &self.load
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn is_finalized(&self) -> bool {
        self.status == OperationStatus::Finalized
    }

    /// Check the load against the carrying vehicle's capacity.
    ///
    /// The explicit second phase of construction. A failed check leaves
    /// the operation untouched; callers must run this before trusting the
    /// operation.
    pub fn validate_weight(&self, vehicle: &Vehicle) -> DomainResult<()> {
        self.ensure_vehicle(vehicle)?;
        if self.load.weight_t() > vehicle.capacity_t() {
            return Err(DomainError::capacity(format!(
                "load of {} t exceeds the {} t capacity of vehicle {}",
                self.load.weight_t(),
                vehicle.capacity_t(),
                self.vehicle_id,
            )));
        }
        Ok(())
    }

    /// Close the operation. A one-way latch; repeating it is a no-op.
    pub fn finalize(&mut self) {
        if self.status == OperationStatus::Open {
            self.status = OperationStatus::Finalized;
            self.version += 1;
        }
    }

    /// Haul report, callable in any lifecycle state.
    pub fn report(&self, vehicle: &Vehicle) -> DomainResult<OperationReport> {
        self.ensure_vehicle(vehicle)?;
        Ok(OperationReport {
            operation_id: self.id,
            vehicle_id: self.vehicle_id.clone(),
            weight_t: self.load.weight_t(),
            haul_yield: vehicle.haul_yield(self.distance_km, self.load.weight_t()),
        })
    }

    fn ensure_vehicle(&self, vehicle: &Vehicle) -> DomainResult<()> {
        if vehicle.id() != &self.vehicle_id {
            return Err(DomainError::invariant(format!(
                "operation {} is assigned to vehicle {}, got {}",
                self.id,
                self.vehicle_id,
                vehicle.id(),
            )));
        }
        Ok(())
    }
}

impl AggregateRoot for TransportOperation {
    type Id = OperationId;

    fn id(&self) -> &OperationId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// What a haul produced: identity plus the vehicle's computed yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationReport {
    pub operation_id: OperationId,
    pub vehicle_id: VehicleId,
    pub weight_t: f64,
    pub haul_yield: f64,
}

impl ValueObject for OperationReport {}
