use serde::{Deserialize, Serialize};

use minehaul_core::{DomainError, DomainResult, Entity, VehicleId};

/// Operational state of a vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleState {
    #[default]
    Available,
    InTransit,
    Maintenance,
}

/// Suspension fitted to a light truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suspension {
    Hydraulic,
    Pneumatic,
    Spring,
}

/// Vehicle kind plus the per-kind parameters feeding the yield formula.
///
/// A closed set: the haul-yield dispatch matches on this enum, so adding a
/// kind means extending the formula in one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// Tipping truck; `chassis_resistance` is a 0-100 rating.
    Tipper { chassis_resistance: f64 },
    /// Articulated dumper; yield scales with the axle count.
    ArticulatedDumper { axle_count: u32 },
    /// Light truck for small hauls.
    LightTruck { suspension: Suspension },
}

/// Entity: a fleet vehicle.
///
/// Identity is fixed at construction. Capacity and state may change later,
/// always through validated mutators; a vehicle is never destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    capacity_t: f64,
    state: VehicleState,
    kind: VehicleKind,
}

impl Vehicle {
    /// Create a vehicle with a validated capacity. State starts `Available`.
    pub fn new(id: VehicleId, capacity_t: f64, kind: VehicleKind) -> DomainResult<Self> {
        check_capacity(capacity_t)?;
        Ok(Self {
            id,
            capacity_t,
            state: VehicleState::default(),
            kind,
        })
    }

    pub fn capacity_t(&self) -> f64 {
        self.capacity_t
    }

    pub fn state(&self) -> VehicleState {
        self.state
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    /// Re-rate the vehicle's capacity.
    ///
    /// Rejects negative (or non-finite) values; the current capacity is
    /// untouched on rejection. No upper bound is enforced.
    pub fn set_capacity_t(&mut self, capacity_t: f64) -> DomainResult<()> {
        check_capacity(capacity_t)?;
        self.capacity_t = capacity_t;
        Ok(())
    }

    pub fn set_state(&mut self, state: VehicleState) {
        self.state = state;
    }

    /// Transport efficiency for a haul of `distance_km` carrying `weight_t`.
    ///
    /// Pure and deterministic; rounded to 3 decimal places. Weight
    /// validation against capacity is a separate step owned by the
    /// transport operation, so the load fraction is clamped to 1.0 and the
    /// formula degrades gracefully when called with an overweight load.
    pub fn haul_yield(&self, distance_km: f64, weight_t: f64) -> f64 {
        let f = self.load_fraction(weight_t);
        let raw = match self.kind {
            VehicleKind::Tipper { chassis_resistance } => {
                (1.0 / (1.0 + f)) * distance_km * (chassis_resistance / 100.0)
            }
            VehicleKind::ArticulatedDumper { axle_count } => {
                let axle_factor = 1.0 + (f64::from(axle_count) - 2.0) * 0.05;
                distance_km * axle_factor * (1.0 - 0.2 * f)
            }
            VehicleKind::LightTruck { .. } => {
                (distance_km * 0.6 - f * 0.8 * distance_km).max(0.0)
            }
        };
        round3(raw)
    }

    /// Carried weight as a fraction of capacity, clamped to at most 1.0.
    ///
    /// A zero-capacity vehicle counts as fully loaded by any positive
    /// weight, which keeps the yield formulas finite.
    pub fn load_fraction(&self, weight_t: f64) -> f64 {
        if weight_t <= 0.0 {
            0.0
        } else if self.capacity_t <= 0.0 {
            1.0
        } else {
            (weight_t / self.capacity_t).min(1.0)
        }
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &VehicleId {
        &self.id
    }
}

fn check_capacity(capacity_t: f64) -> DomainResult<()> {
    if !capacity_t.is_finite() || capacity_t < 0.0 {
        return Err(DomainError::validation(format!(
            "capacity must be a non-negative number of tonnes, got {capacity_t}"
        )));
    }
    Ok(())
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
