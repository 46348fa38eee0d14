use crate::core::params::CanonicalParams;
use crate::core::types::ValveKind;

/// Build the direct lookup-table key for a canonical configuration.
///
/// Grammar (tokens joined by `_`):
///
/// - rotary:      `{shaft}_{dia}_{power}_{phase}_pov_{position}`
/// - gravity:     `{shaft}_{dia}_{power}_{phase}_grav_{variant}`
/// - double-flap: `{shaft}_{dia}_dvustv` (these items are not
///   differentiated by motor, so power and phase are omitted)
///
/// Returns `None` whenever a required token is missing. An absent key is
/// not an error by itself; the base resolver falls through to its search
/// tiers instead.
pub fn build_key(params: &CanonicalParams) -> Option<String> {
    let shaft = params.shaft.tag();
    let dia = params.diameter.millimeters();

    match params.valve {
        ValveKind::DoubleFlap => Some(format!("{shaft}_{dia}_dvustv")),
        ValveKind::Rotary => {
            let power = params.power?.watts();
            let phase = params.motor?.phase_token();
            let position = params.valve_position?.token();
            Some(format!("{shaft}_{dia}_{power}_{phase}_pov_{position}"))
        }
        ValveKind::Gravity => {
            let power = params.power?.watts();
            let phase = params.motor?.phase_token();
            let variant = params.gravity_variant?.token();
            Some(format!("{shaft}_{dia}_{power}_{phase}_grav_{variant}"))
        }
    }
}
