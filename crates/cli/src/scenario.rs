//! The reference scenario: three vehicles, three operators, two hauls that
//! reach the warehouse and one that is rejected at weight validation.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use minehaul_core::{Entity, OperatorId, VehicleId, WarehouseId};
use minehaul_events::{InMemoryNoticeBus, Notice, NoticeBus, NoticeEnvelope, Subscription};
use minehaul_fleet::{Suspension, Vehicle, VehicleKind};
use minehaul_operators::{BonusPolicy, OperationRegistered, Operator, OperatorRole};
use minehaul_transport::{MineralLoad, OperationReport, TransportOperation};
use minehaul_warehouse::{CargoReceived, Warehouse};

/// Everything the scenario publishes on the notice bus.
#[derive(Debug, Clone)]
pub enum ScenarioNotice {
    Registered(OperationRegistered),
    Received(CargoReceived),
}

impl Notice for ScenarioNotice {
    fn notice_type(&self) -> &'static str {
        match self {
            ScenarioNotice::Registered(n) => n.notice_type(),
            ScenarioNotice::Received(n) => n.notice_type(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ScenarioNotice::Registered(n) => n.occurred_at(),
            ScenarioNotice::Received(n) => n.occurred_at(),
        }
    }
}

type ScenarioBus = Arc<InMemoryNoticeBus<NoticeEnvelope<ScenarioNotice>>>;

/// What the scenario produced, ready for rendering.
#[derive(Debug, Serialize)]
pub struct ScenarioSummary {
    pub reports: Vec<OperationReport>,
    pub inventory: BTreeMap<String, f64>,
    pub total_stock_t: f64,
    pub bonuses: Vec<(String, u64)>,
    pub rejected_operation: String,
    pub notices: Vec<String>,
}

/// Run the reference scenario end-to-end against the given warehouse site.
pub fn run(site: WarehouseId) -> Result<ScenarioSummary> {
    let bus: ScenarioBus = Arc::new(InMemoryNoticeBus::new());
    let subscription = bus.subscribe();

    let tolva = Vehicle::new(
        VehicleId::new("T001"),
        20.0,
        VehicleKind::Tipper {
            chassis_resistance: 85.0,
        },
    )?;
    let volquete = Vehicle::new(
        VehicleId::new("V010"),
        35.0,
        VehicleKind::ArticulatedDumper { axle_count: 4 },
    )?;
    let ligero = Vehicle::new(
        VehicleId::new("L100"),
        5.0,
        VehicleKind::LightTruck {
            suspension: Suspension::Hydraulic,
        },
    )?;

    let mut juan = Operator::new(
        "Juan",
        OperatorId::new("123"),
        "AII",
        OperatorRole::TruckOperator,
    );
    let mut maria = Operator::new(
        "María",
        OperatorId::new("456"),
        "SUP",
        OperatorRole::TransportSupervisor,
    );
    let luis = Operator::new(
        "Luis",
        OperatorId::new("789"),
        "CTRL",
        OperatorRole::WarehouseController,
    );

    juan.assign_vehicle(tolva.id().clone());
    juan.assign_vehicle(ligero.id().clone());

    let mut warehouse = Warehouse::new(site);
    let mut reports = Vec::new();

    // Two hauls that make it all the way into the warehouse.
    let copper = MineralLoad::new("Cobre", 2.5, 15.0)?;
    reports.push(run_haul(&mut juan, &tolva, copper, 12.0, &mut warehouse, &bus)?);

    let silver = MineralLoad::new("Plata", 1.0, 25.0)?;
    reports.push(run_haul(
        &mut maria,
        &volquete,
        silver,
        40.0,
        &mut warehouse,
        &bus,
    )?);

    // The deliberately invalid haul: 6 t of gold on a 5 t light truck.
    let gold = MineralLoad::new("Oro", 0.8, 6.0)?;
    let overweight = TransportOperation::new(juan.id().clone(), ligero.id().clone(), gold, 8.0);
    let rejected_operation = match overweight.validate_weight(&ligero) {
        Ok(()) => anyhow::bail!("overweight haul unexpectedly passed validation"),
        Err(err) => {
            tracing::warn!(operation = %overweight.id_typed(), "rejected haul: {err}");
            err.to_string()
        }
    };

    let policy = BonusPolicy::default();
    let bonuses = [&juan, &maria, &luis]
        .into_iter()
        .map(|op| (op.name().to_string(), op.bonus(&policy)))
        .collect();

    Ok(ScenarioSummary {
        reports,
        inventory: warehouse.inventory().clone(),
        total_stock_t: warehouse.total_stock_t(),
        bonuses,
        rejected_operation,
        notices: drain(&subscription),
    })
}

/// One successful haul: validate, register, finalize, ingest.
fn run_haul(
    operator: &mut Operator,
    vehicle: &Vehicle,
    load: MineralLoad,
    distance_km: f64,
    warehouse: &mut Warehouse,
    bus: &ScenarioBus,
) -> Result<OperationReport> {
    let mut operation =
        TransportOperation::new(operator.id().clone(), vehicle.id().clone(), load, distance_km);
    operation.validate_weight(vehicle)?;

    let registered = operator.register_operation(&operation);
    publish(bus, "operators", ScenarioNotice::Registered(registered));

    operation.finalize();
    let received = warehouse.ingest(&operation)?;
    publish(bus, "warehouse", ScenarioNotice::Received(received));

    Ok(operation.report(vehicle)?)
}

fn publish(bus: &ScenarioBus, source: &str, notice: ScenarioNotice) {
    // Best-effort fan-out; domain state is already committed.
    let _ = bus.publish(NoticeEnvelope::new(source, notice));
}

fn drain(subscription: &Subscription<NoticeEnvelope<ScenarioNotice>>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(envelope) = subscription.try_recv() {
        lines.push(format!(
            "{} [{}] from {}",
            envelope.payload().notice_type(),
            envelope.notice_id(),
            envelope.source(),
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_reference() -> ScenarioSummary {
        run(WarehouseId::new("CENTRAL")).unwrap()
    }

    #[test]
    fn scenario_fills_the_warehouse_as_expected() {
        let summary = run_reference();

        let expected: BTreeMap<String, f64> =
            [("Cobre".to_string(), 15.0), ("Plata".to_string(), 25.0)].into();
        assert_eq!(summary.inventory, expected);
        assert_eq!(summary.total_stock_t, 40.0);
    }

    #[test]
    fn scenario_reports_carry_the_reference_yields() {
        let summary = run_reference();

        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.reports[0].haul_yield, 5.829);
        assert_eq!(summary.reports[1].haul_yield, 37.714);
    }

    #[test]
    fn scenario_rejects_the_overweight_haul() {
        let summary = run_reference();
        assert!(summary.rejected_operation.contains("capacity"));
    }

    #[test]
    fn scenario_publishes_a_notice_per_side_effect() {
        let summary = run_reference();

        // Two registrations and two ingestions.
        assert_eq!(summary.notices.len(), 4);
        assert!(
            summary
                .notices
                .iter()
                .any(|n| n.starts_with("operators.operation.registered"))
        );
        assert!(
            summary
                .notices
                .iter()
                .any(|n| n.starts_with("warehouse.cargo.received"))
        );
    }

    #[test]
    fn scenario_pays_the_reference_bonuses() {
        let summary = run_reference();
        let expected = vec![
            ("Juan".to_string(), 100),
            ("María".to_string(), 200),
            ("Luis".to_string(), 80),
        ];
        assert_eq!(summary.bonuses, expected);
    }
}
