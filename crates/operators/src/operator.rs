use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minehaul_core::{Entity, OperationId, OperatorId, ValueObject, VehicleId};
use minehaul_events::Notice;
use minehaul_transport::TransportOperation;

/// Operator role; drives the registration message and the bonus policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorRole {
    TruckOperator,
    TransportSupervisor,
    WarehouseController,
}

/// Per-role bonus amounts.
///
/// Kept as data rather than per-role code so amounts can later vary with
/// operator attributes; the defaults carry the reference amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPolicy {
    pub truck_operator: u64,
    pub transport_supervisor: u64,
    pub warehouse_controller: u64,
}

impl Default for BonusPolicy {
    fn default() -> Self {
        Self {
            truck_operator: 100,
            transport_supervisor: 200,
            warehouse_controller: 80,
        }
    }
}

impl BonusPolicy {
    pub fn amount_for(&self, role: OperatorRole) -> u64 {
        match role {
            OperatorRole::TruckOperator => self.truck_operator,
            OperatorRole::TransportSupervisor => self.transport_supervisor,
            OperatorRole::WarehouseController => self.warehouse_controller,
        }
    }
}

impl ValueObject for BonusPolicy {}

/// Entity: a transport operator, keyed by national id.
///
/// The roster holds non-owning `VehicleId` handles — vehicles are shared
/// across operators and operations, never owned by either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    national_id: OperatorId,
    name: String,
    license: String,
    role: OperatorRole,
    roster: Vec<VehicleId>,
    journal: Vec<OperationId>,
}

impl Operator {
    pub fn new(
        name: impl Into<String>,
        national_id: OperatorId,
        license: impl Into<String>,
        role: OperatorRole,
    ) -> Self {
        Self {
            national_id,
            name: name.into(),
            license: license.into(),
            role,
            roster: Vec::new(),
            journal: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn role(&self) -> OperatorRole {
        self.role
    }

    /// Vehicles associated with this operator, in association order.
    pub fn roster(&self) -> &[VehicleId] {
        &self.roster
    }

    /// Operations registered by this operator, in registration order.
    pub fn journal(&self) -> &[OperationId] {
        &self.journal
    }

    /// Associate a vehicle with this operator.
    ///
    /// Idempotent: a vehicle already on the roster stays where it is.
    pub fn assign_vehicle(&mut self, vehicle_id: VehicleId) {
        if !self.roster.contains(&vehicle_id) {
            self.roster.push(vehicle_id);
        }
    }

    /// Record that `operation` happened under this operator's watch.
    ///
    /// Side effect only: journals the operation id, emits a
    /// role-distinguishing log line, and returns a notice for bus
    /// publication. The operation itself is untouched.
    pub fn register_operation(&mut self, operation: &TransportOperation) -> OperationRegistered {
        let operation_id = operation.id_typed();
        self.journal.push(operation_id);

        match self.role {
            OperatorRole::TruckOperator => tracing::info!(
                operator = %self.national_id,
                %operation_id,
                "truck operator recorded the operation"
            ),
            OperatorRole::TransportSupervisor => tracing::info!(
                operator = %self.national_id,
                %operation_id,
                "transport supervisor validated the operation"
            ),
            OperatorRole::WarehouseController => tracing::info!(
                operator = %self.national_id,
                %operation_id,
                "warehouse controller logged the intake of the operation"
            ),
        }

        OperationRegistered {
            operator_id: self.national_id.clone(),
            role: self.role,
            operation_id,
            occurred_at: Utc::now(),
        }
    }

    /// Bonus owed to this operator under `policy`.
    pub fn bonus(&self, policy: &BonusPolicy) -> u64 {
        policy.amount_for(self.role)
    }
}

impl Entity for Operator {
    type Id = OperatorId;

    fn id(&self) -> &OperatorId {
        &self.national_id
    }
}

/// Notice: an operator registered a transport operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRegistered {
    pub operator_id: OperatorId,
    pub role: OperatorRole,
    pub operation_id: OperationId,
    pub occurred_at: DateTime<Utc>,
}

impl Notice for OperationRegistered {
    fn notice_type(&self) -> &'static str {
        "operators.operation.registered"
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minehaul_transport::MineralLoad;

    fn truck_operator() -> Operator {
        Operator::new(
            "Juan",
            OperatorId::new("123"),
            "AII",
            OperatorRole::TruckOperator,
        )
    }

    fn copper_haul() -> TransportOperation {
        let load = MineralLoad::new("Cobre", 2.5, 15.0).unwrap();
        TransportOperation::new(OperatorId::new("123"), VehicleId::new("T001"), load, 12.0)
    }

    #[test]
    fn assign_vehicle_is_idempotent_and_order_preserving() {
        let mut operator = truck_operator();
        operator.assign_vehicle(VehicleId::new("T001"));
        operator.assign_vehicle(VehicleId::new("L100"));
        operator.assign_vehicle(VehicleId::new("T001"));

        assert_eq!(
            operator.roster(),
            &[VehicleId::new("T001"), VehicleId::new("L100")]
        );
    }

    #[test]
    fn register_operation_journals_the_operation_id() {
        let mut operator = truck_operator();
        let op = copper_haul();

        let notice = operator.register_operation(&op);

        assert_eq!(operator.journal(), &[op.id_typed()]);
        assert_eq!(notice.operation_id, op.id_typed());
        assert_eq!(notice.operator_id, OperatorId::new("123"));
        assert_eq!(notice.role, OperatorRole::TruckOperator);
        assert_eq!(notice.notice_type(), "operators.operation.registered");
    }

    #[test]
    fn register_operation_does_not_mutate_the_operation() {
        let mut operator = truck_operator();
        let op = copper_haul();
        let before = op.clone();

        operator.register_operation(&op);
        assert_eq!(op, before);
    }

    #[test]
    fn bonus_follows_the_role_policy() {
        let policy = BonusPolicy::default();
        let juan = truck_operator();
        let maria = Operator::new(
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

        assert_eq!(juan.bonus(&policy), 100);
        assert_eq!(maria.bonus(&policy), 200);
        assert_eq!(luis.bonus(&policy), 80);
    }

    #[test]
    fn bonus_amounts_are_policy_data() {
        let policy = BonusPolicy {
            truck_operator: 150,
            ..BonusPolicy::default()
        };
        assert_eq!(truck_operator().bonus(&policy), 150);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: however often vehicles are re-assigned, the roster
            /// is duplicate-free and ordered by first assignment.
            #[test]
            fn roster_stays_duplicate_free(assignments in prop::collection::vec(0usize..4, 0..32)) {
                let codes = ["T001", "V010", "L100", "T002"];
                let mut operator = truck_operator();
                let mut expected: Vec<VehicleId> = Vec::new();

                for idx in assignments {
                    let id = VehicleId::new(codes[idx]);
                    if !expected.contains(&id) {
                        expected.push(id.clone());
                    }
                    operator.assign_vehicle(id);
                }

                prop_assert_eq!(operator.roster(), expected.as_slice());
            }
        }
    }
}
