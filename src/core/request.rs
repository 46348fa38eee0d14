use serde::{Deserialize, Serialize};

use crate::core::types::{
    GravityVariant, MotorKind, ShaftKind, TopPieceKind, ValveKind, ValvePosition,
};

/// Raw, partial equipment specification as received at the boundary.
///
/// Every field is optional; the normalizer decides what is required and
/// coerces the rest. Numeric fields stay plain numbers here so that an
/// out-of-range diameter or power surfaces as a validation notice instead
/// of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRequest {
    /// Shaft kind (series tag or long name)
    pub shaft: Option<ShaftKind>,

    /// Shaft diameter in millimeters
    pub diameter: Option<u16>,

    /// Valve kind
    pub valve: Option<ValveKind>,

    /// Rotary valve position
    pub valve_position: Option<ValvePosition>,

    /// Gravity valve variant
    pub gravity_variant: Option<GravityVariant>,

    /// Motor kind (6E single-phase / 6D three-phase)
    pub motor: Option<MotorKind>,

    /// Motor power in watts
    pub power: Option<u16>,

    /// Top piece kind
    pub top_piece: Option<TopPieceKind>,

    /// Sealing membrane requested
    pub membrane: bool,

    /// Sealing tape requested
    pub tape: bool,

    /// Circuit breaker requested
    pub breaker: bool,

    /// Drip catcher requested
    pub drip_catcher: bool,

    /// Distribution cone requested
    pub cone: bool,

    /// Mounting kit requested
    pub mounting_kit: bool,

    /// Extension length beyond the base section, whole meters
    pub extension_m: u32,
}
