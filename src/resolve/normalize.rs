use thiserror::Error;

use crate::core::params::CanonicalParams;
use crate::core::request::RawRequest;
use crate::core::types::{
    Diameter, Notice, NoticeCode, PowerRating, ShaftKind, TopPieceKind, ValveKind, ValvePosition,
};

/// Hard validation failures; everything else becomes a correction notice
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Required field '{0}' is missing or not a supported value")]
    MissingRequiredField(&'static str),

    #[error("Motor type is required for a {shaft} shaft with a {valve} valve")]
    MissingMotorType { shaft: ShaftKind, valve: ValveKind },
}

impl NormalizeError {
    pub fn code(&self) -> NoticeCode {
        match self {
            Self::MissingRequiredField(_) => NoticeCode::MissingRequiredField,
            Self::MissingMotorType { .. } => NoticeCode::MissingMotorType,
        }
    }
}

/// Validate and canonicalize a raw request.
///
/// Applies, in order: the shaft-kind valve/position coercions, the motor
/// requirement check, and the diameter-implied power table. Every coercion
/// of a conflicting user value appends a [`NoticeCode::CorrectedParameter`]
/// notice; silent derivation of an absent value does not.
pub fn normalize(raw: &RawRequest) -> Result<(CanonicalParams, Vec<Notice>), NormalizeError> {
    let shaft = raw
        .shaft
        .ok_or(NormalizeError::MissingRequiredField("shaft"))?;
    let diameter = raw
        .diameter
        .and_then(|mm| Diameter::try_from(mm).ok())
        .ok_or(NormalizeError::MissingRequiredField("diameter"))?;
    let requested_valve = raw
        .valve
        .ok_or(NormalizeError::MissingRequiredField("valve"))?;

    let mut notices = Vec::new();

    let valve = coerce_valve(shaft, requested_valve, &mut notices);
    let valve_position = coerce_position(shaft, valve, raw.valve_position, &mut notices);

    // Variant tags only survive on the valve kind they belong to
    let gravity_variant = (valve == ValveKind::Gravity)
        .then_some(raw.gravity_variant)
        .flatten();

    let motor_required =
        matches!(valve, ValveKind::Rotary | ValveKind::Gravity) && shaft.is_motor_bearing();
    if motor_required && raw.motor.is_none() {
        return Err(NormalizeError::MissingMotorType { shaft, valve });
    }

    let power = derive_power(diameter, raw.power, &mut notices);

    // Supply shafts always close with a canopy unless told otherwise
    let top_piece = raw
        .top_piece
        .or_else(|| shaft.is_supply().then_some(TopPieceKind::Canopy));

    let params = CanonicalParams {
        shaft,
        diameter,
        valve,
        valve_position,
        gravity_variant,
        motor: raw.motor,
        power,
        top_piece,
        membrane: raw.membrane,
        tape: raw.tape,
        breaker: raw.breaker,
        drip_catcher: raw.drip_catcher,
        cone: raw.cone,
        mounting_kit: raw.mounting_kit,
        extension_m: raw.extension_m,
    };

    Ok((params, notices))
}

/// Supply shafts other than the exhaust series only exist with rotary valves
fn coerce_valve(shaft: ShaftKind, requested: ValveKind, notices: &mut Vec<Notice>) -> ValveKind {
    let forced_rotary = matches!(
        shaft,
        ShaftKind::SupplyActive | ShaftKind::SupplyPassive | ShaftKind::SupplyMix
    );
    if forced_rotary && requested != ValveKind::Rotary {
        notices.push(Notice::new(
            NoticeCode::CorrectedParameter,
            format!("{shaft} shafts take a rotary valve; replaced the requested {requested} valve"),
        ));
        return ValveKind::Rotary;
    }
    requested
}

/// Active and admixing supply shafts mount the valve at the bottom
fn coerce_position(
    shaft: ShaftKind,
    valve: ValveKind,
    requested: Option<ValvePosition>,
    notices: &mut Vec<Notice>,
) -> Option<ValvePosition> {
    if valve != ValveKind::Rotary {
        return None;
    }
    if matches!(shaft, ShaftKind::SupplyActive | ShaftKind::SupplyMix) {
        if let Some(pos) = requested {
            if pos != ValvePosition::Bottom {
                notices.push(Notice::new(
                    NoticeCode::CorrectedParameter,
                    format!("{shaft} shafts mount the valve at the bottom; replaced position '{pos}'"),
                ));
            }
        }
        return Some(ValvePosition::Bottom);
    }
    requested
}

/// Fixed diameter -> power table; a conflicting user value is overridden
/// with a correction notice rather than rejected
fn derive_power(
    diameter: Diameter,
    raw_power: Option<u16>,
    notices: &mut Vec<Notice>,
) -> Option<PowerRating> {
    let user = raw_power.map(|w| (w, PowerRating::try_from(w).ok()));

    if let Some(implied) = diameter.implied_power() {
        if let Some((watts, parsed)) = user {
            if parsed != Some(implied) {
                notices.push(Notice::new(
                    NoticeCode::CorrectedParameter,
                    format!(
                        "Diameter {diameter} pairs with a {implied} motor; replaced the requested {watts} W"
                    ),
                ));
            }
        }
        return Some(implied);
    }

    // No table entry (1100 mm): keep a valid user value, drop the rest
    match user {
        Some((_, Some(rating))) => Some(rating),
        Some((watts, None)) => {
            notices.push(Notice::new(
                NoticeCode::CorrectedParameter,
                format!("Power rating {watts} W is not available; ignored"),
            ));
            None
        }
        None => None,
    }
}
