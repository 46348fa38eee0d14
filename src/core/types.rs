use serde::{Deserialize, Serialize};

/// Shaft kind, identified by the catalog series tag it is listed under.
///
/// The tag (`vbv`, `vba`, ...) appears both in direct lookup keys and in
/// catalog item names, so it doubles as the name-matching marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaftKind {
    /// Exhaust shaft (VBV series)
    #[serde(alias = "vbv", alias = "VBV")]
    Exhaust,
    /// Active supply shaft (VBA series)
    #[serde(alias = "vba", alias = "VBA")]
    SupplyActive,
    /// Passive supply shaft (VBP series)
    #[serde(alias = "vbp", alias = "VBP")]
    SupplyPassive,
    /// Supply shaft with admixing (VBR series)
    #[serde(alias = "vbr", alias = "VBR")]
    SupplyMix,
}

impl ShaftKind {
    /// Series tag used in lookup keys and catalog names
    pub fn tag(self) -> &'static str {
        match self {
            Self::Exhaust => "vbv",
            Self::SupplyActive => "vba",
            Self::SupplyPassive => "vbp",
            Self::SupplyMix => "vbr",
        }
    }

    /// Supply-side shafts default to a canopy top piece
    pub fn is_supply(self) -> bool {
        matches!(self, Self::SupplyActive | Self::SupplyPassive | Self::SupplyMix)
    }

    /// Shafts that carry a motor, making the motor kind mandatory for
    /// rotary and gravity valves
    pub fn is_motor_bearing(self) -> bool {
        matches!(self, Self::Exhaust | Self::SupplyPassive | Self::SupplyMix)
    }

    pub fn all() -> [ShaftKind; 4] {
        [
            Self::Exhaust,
            Self::SupplyActive,
            Self::SupplyPassive,
            Self::SupplyMix,
        ]
    }

    /// Valve kinds a shaft of this kind can actually be built with; the
    /// normalizer coerces anything else to rotary
    pub fn admissible_valves(self) -> &'static [ValveKind] {
        match self {
            Self::Exhaust => &[ValveKind::Rotary, ValveKind::Gravity, ValveKind::DoubleFlap],
            Self::SupplyActive | Self::SupplyPassive | Self::SupplyMix => &[ValveKind::Rotary],
        }
    }
}

impl std::fmt::Display for ShaftKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag().to_uppercase())
    }
}

/// Shaft diameter in millimeters; only four sizes exist in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Diameter {
    D560,
    D710,
    D800,
    D1100,
}

impl Diameter {
    pub fn millimeters(self) -> u16 {
        match self {
            Self::D560 => 560,
            Self::D710 => 710,
            Self::D800 => 800,
            Self::D1100 => 1100,
        }
    }

    /// Power rating implied by the diameter. 1100 mm shafts have no entry
    /// in the fixed table, so the caller's value is left alone there.
    pub fn implied_power(self) -> Option<PowerRating> {
        match self {
            Self::D560 | Self::D710 => Some(PowerRating::W370),
            Self::D800 => Some(PowerRating::W750),
            Self::D1100 => None,
        }
    }

    pub fn all() -> [Diameter; 4] {
        [Self::D560, Self::D710, Self::D800, Self::D1100]
    }
}

impl TryFrom<u16> for Diameter {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            560 => Ok(Self::D560),
            710 => Ok(Self::D710),
            800 => Ok(Self::D800),
            1100 => Ok(Self::D1100),
            other => Err(format!("unsupported diameter: {other}")),
        }
    }
}

impl From<Diameter> for u16 {
    fn from(value: Diameter) -> Self {
        value.millimeters()
    }
}

impl std::fmt::Display for Diameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.millimeters())
    }
}

/// Valve kind; the token is the key-grammar spelling inherited from the
/// catalog's lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValveKind {
    #[serde(alias = "pov")]
    Rotary,
    #[serde(alias = "grav")]
    Gravity,
    #[serde(alias = "dvustv")]
    DoubleFlap,
}

impl ValveKind {
    pub fn token(self) -> &'static str {
        match self {
            Self::Rotary => "pov",
            Self::Gravity => "grav",
            Self::DoubleFlap => "dvustv",
        }
    }
}

impl std::fmt::Display for ValveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rotary => write!(f, "rotary"),
            Self::Gravity => write!(f, "gravity"),
            Self::DoubleFlap => write!(f, "double-flap"),
        }
    }
}

/// Mounting position of a rotary valve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValvePosition {
    #[serde(alias = "verh")]
    Top,
    #[serde(alias = "niz")]
    Bottom,
}

impl ValvePosition {
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "verh",
            Self::Bottom => "niz",
        }
    }
}

impl std::fmt::Display for ValvePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// Variant of a gravity valve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityVariant {
    #[serde(alias = "vnut")]
    Inner,
    #[serde(alias = "vnesh")]
    Outer,
}

impl GravityVariant {
    pub fn token(self) -> &'static str {
        match self {
            Self::Inner => "vnut",
            Self::Outer => "vnesh",
        }
    }
}

/// Motor kind. 6E motors are single-phase, 6D three-phase; the phase digit
/// is what the lookup-key grammar encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorKind {
    #[serde(alias = "6e", alias = "6E")]
    SinglePhase,
    #[serde(alias = "6d", alias = "6D")]
    ThreePhase,
}

impl MotorKind {
    pub fn phase_token(self) -> &'static str {
        match self {
            Self::SinglePhase => "1",
            Self::ThreePhase => "3",
        }
    }

    /// Motor series label as printed in catalog names
    pub fn label(self) -> &'static str {
        match self {
            Self::SinglePhase => "6E",
            Self::ThreePhase => "6D",
        }
    }
}

impl std::fmt::Display for MotorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SinglePhase => write!(f, "single-phase ({})", self.label()),
            Self::ThreePhase => write!(f, "three-phase ({})", self.label()),
        }
    }
}

/// Motor power rating in watts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum PowerRating {
    W370,
    W750,
}

impl PowerRating {
    pub fn watts(self) -> u16 {
        match self {
            Self::W370 => 370,
            Self::W750 => 750,
        }
    }
}

impl TryFrom<u16> for PowerRating {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            370 => Ok(Self::W370),
            750 => Ok(Self::W750),
            other => Err(format!("unsupported power rating: {other}")),
        }
    }
}

impl From<PowerRating> for u16 {
    fn from(value: PowerRating) -> Self {
        value.watts()
    }
}

impl std::fmt::Display for PowerRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} W", self.watts())
    }
}

/// Top piece closing the shaft above the roof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopPieceKind {
    #[serde(alias = "zont")]
    Canopy,
    #[serde(alias = "rastrub")]
    Spigot,
}

impl std::fmt::Display for TopPieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canopy => write!(f, "canopy"),
            Self::Spigot => write!(f, "spigot"),
        }
    }
}

/// Stable machine-readable code attached to every diagnostic notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeCode {
    /// Shaft kind, diameter, or valve kind absent (hard failure)
    MissingRequiredField,
    /// Motor kind required for this configuration but absent (hard failure)
    MissingMotorType,
    /// A supplied value was coerced to satisfy a catalog invariant
    CorrectedParameter,
    /// No base assembly matched after all fallback tiers
    UnresolvedBaseAssembly,
    /// A requested accessory had no catalog match
    UnresolvedAccessory,
    /// No circuit breaker rated at or above the target current
    NoBreakerFound,
    /// Informational note, e.g. the drive listing
    Advisory,
}

impl NoticeCode {
    /// Hard failures abort resolution with an empty BOM
    pub fn is_hard(self) -> bool {
        matches!(self, Self::MissingRequiredField | Self::MissingMotorType)
    }
}

/// A diagnostic generated during resolution: a stable code plus
/// human-readable text, collected in generation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub code: NoticeCode,
    pub message: String,
}

impl Notice {
    pub fn new(code: NoticeCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
