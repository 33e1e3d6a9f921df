// ============================================================================
// Process Profiles
// Calibrated rate rows for laser cutting, press-brake bending and welding
// ============================================================================

use super::errors::CatalogError;
use super::settings::GasKind;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A row keyed by a physical threshold (thickness or fillet size).
///
/// Rows live in a [`super::ProfileTable`], which orders them by
/// [`Tiered::tier_key`] and resolves queries with a ceiling match.
pub trait Tiered {
    /// Table name used in diagnostics ("cutting", "bending", "welding")
    const TABLE: &'static str;

    fn tier_key(&self) -> Decimal;

    /// Named values that must not be negative
    fn checked_fields(&self) -> Vec<(&'static str, Decimal)>;

    fn validate(&self) -> Result<(), CatalogError> {
        for (field, value) in self.checked_fields() {
            if value < Decimal::ZERO {
                return Err(CatalogError::NegativeProfileValue {
                    table: Self::TABLE,
                    tier: self.tier_key(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Cutting
// ============================================================================

/// Laser cutting calibration for one sheet thickness
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CuttingProfile {
    pub thickness_mm: Decimal,
    pub gas: GasKind,
    /// Contour speed in meters per minute
    pub cutting_speed_m_per_min: Decimal,
    /// Flat charge per pierce, on top of the machine time it consumes
    pub pierce_price: Decimal,
    /// Markup over machine cost, in percent (140 means ×2.4)
    pub markup_percent: Decimal,
}

impl CuttingProfile {
    pub fn new(
        thickness_mm: Decimal,
        gas: GasKind,
        cutting_speed_m_per_min: Decimal,
        pierce_price: Decimal,
        markup_percent: Decimal,
    ) -> Self {
        Self {
            thickness_mm,
            gas,
            cutting_speed_m_per_min,
            pierce_price,
            markup_percent,
        }
    }

    pub fn markup_factor(&self) -> Decimal {
        Decimal::ONE + self.markup_percent / dec!(100)
    }
}

impl Tiered for CuttingProfile {
    const TABLE: &'static str = "cutting";

    fn tier_key(&self) -> Decimal {
        self.thickness_mm
    }

    fn checked_fields(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("thickness_mm", self.thickness_mm),
            ("cutting_speed_m_per_min", self.cutting_speed_m_per_min),
            ("pierce_price", self.pierce_price),
            ("markup_percent", self.markup_percent),
        ]
    }
}

// ============================================================================
// Bending
// ============================================================================

/// Upper bound of the short bend-length band
pub const BEND_BAND_SHORT_MM: Decimal = dec!(1500);
/// Upper bound of the medium bend-length band
pub const BEND_BAND_MEDIUM_MM: Decimal = dec!(3000);
/// Press-brake bed length; longer bends cannot be made in one stroke
pub const BEND_MACHINE_LIMIT_MM: Decimal = dec!(6000);

/// Bend-length price band. Prices step between bands; they are not
/// interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendLengthBand {
    UpTo1500,
    UpTo3000,
    UpTo6000,
    /// Longer than the machine bed; priced as `UpTo6000`
    BeyondMachineLimit,
}

impl BendLengthBand {
    pub fn for_length(bend_length_mm: Decimal) -> Self {
        if bend_length_mm <= BEND_BAND_SHORT_MM {
            BendLengthBand::UpTo1500
        } else if bend_length_mm <= BEND_BAND_MEDIUM_MM {
            BendLengthBand::UpTo3000
        } else if bend_length_mm <= BEND_MACHINE_LIMIT_MM {
            BendLengthBand::UpTo6000
        } else {
            BendLengthBand::BeyondMachineLimit
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BendLengthBand::UpTo1500 => "<=1.5m",
            BendLengthBand::UpTo3000 => "<=3m",
            BendLengthBand::UpTo6000 | BendLengthBand::BeyondMachineLimit => "<=6m",
        }
    }
}

/// Press-brake calibration for one sheet thickness
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BendingProfile {
    pub thickness_mm: Decimal,
    /// V-die opening
    pub die_size_mm: Decimal,
    pub minimum_flange_mm: Decimal,
    pub price_up_to_1500: Decimal,
    pub price_up_to_3000: Decimal,
    pub price_up_to_6000: Decimal,
    /// Tooling changeover, charged once per batch
    pub setup_fee: Decimal,
}

impl BendingProfile {
    pub fn price_per_bend(&self, band: BendLengthBand) -> Decimal {
        match band {
            BendLengthBand::UpTo1500 => self.price_up_to_1500,
            BendLengthBand::UpTo3000 => self.price_up_to_3000,
            BendLengthBand::UpTo6000 | BendLengthBand::BeyondMachineLimit => self.price_up_to_6000,
        }
    }
}

impl Tiered for BendingProfile {
    const TABLE: &'static str = "bending";

    fn tier_key(&self) -> Decimal {
        self.thickness_mm
    }

    fn checked_fields(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("thickness_mm", self.thickness_mm),
            ("die_size_mm", self.die_size_mm),
            ("minimum_flange_mm", self.minimum_flange_mm),
            ("price_up_to_1500", self.price_up_to_1500),
            ("price_up_to_3000", self.price_up_to_3000),
            ("price_up_to_6000", self.price_up_to_6000),
            ("setup_fee", self.setup_fee),
        ]
    }
}

// ============================================================================
// Welding
// ============================================================================

/// Fillet leg estimated from base-metal thickness
pub const FILLET_TO_THICKNESS_RATIO: Decimal = dec!(0.7);

pub fn estimated_fillet_size(thickness_mm: Decimal) -> Decimal {
    FILLET_TO_THICKNESS_RATIO * thickness_mm
}

/// Welding calibration for one fillet size
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeldingProfile {
    pub fillet_size_mm: Decimal,
    /// Travel speed in centimeters per minute
    pub welding_speed_cm_per_min: Decimal,
    /// Deposited wire per centimeter of seam, grams
    pub wire_weight_g_per_cm: Decimal,
    /// Reference cost per cm from the calibration sheet
    pub base_cost_per_cm: Decimal,
    /// Reference client price per cm from the calibration sheet
    pub price_per_cm: Decimal,
    pub markup_multiplier: Decimal,
}

impl Tiered for WeldingProfile {
    const TABLE: &'static str = "welding";

    fn tier_key(&self) -> Decimal {
        self.fillet_size_mm
    }

    fn checked_fields(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("fillet_size_mm", self.fillet_size_mm),
            ("welding_speed_cm_per_min", self.welding_speed_cm_per_min),
            ("wire_weight_g_per_cm", self.wire_weight_g_per_cm),
            ("base_cost_per_cm", self.base_cost_per_cm),
            ("price_per_cm", self.price_per_cm),
            ("markup_multiplier", self.markup_multiplier),
        ]
    }
}
