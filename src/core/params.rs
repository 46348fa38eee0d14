use crate::core::types::{
    Diameter, GravityVariant, MotorKind, PowerRating, ShaftKind, TopPieceKind, ValveKind,
    ValvePosition,
};

/// Validated, fully-coerced configuration parameters.
///
/// Produced only by [`crate::resolve::normalize`]; every invariant from the
/// catalog's compatibility table already holds here (power matches diameter,
/// supply shafts carry rotary valves, and so on), so the resolvers never
/// re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalParams {
    pub shaft: ShaftKind,
    pub diameter: Diameter,
    pub valve: ValveKind,

    /// Set whenever the valve is rotary
    pub valve_position: Option<ValvePosition>,

    /// Set whenever the valve is gravity
    pub gravity_variant: Option<GravityVariant>,

    /// Present for motorized configurations
    pub motor: Option<MotorKind>,

    /// Present whenever derivable from the diameter or supplied by the caller
    pub power: Option<PowerRating>,

    pub top_piece: Option<TopPieceKind>,
    pub membrane: bool,
    pub tape: bool,
    pub breaker: bool,
    pub drip_catcher: bool,
    pub cone: bool,
    pub mounting_kit: bool,
    pub extension_m: u32,
}

impl CanonicalParams {
    /// Distribution cone applies automatically to admixing shafts
    pub fn wants_cone(&self) -> bool {
        self.cone || self.shaft == ShaftKind::SupplyMix
    }

    /// Drip catchers only make sense on shafts that move exhaust air
    pub fn drip_catcher_eligible(&self) -> bool {
        matches!(self.shaft, ShaftKind::Exhaust | ShaftKind::SupplyMix)
    }
}
