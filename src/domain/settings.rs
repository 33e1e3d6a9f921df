// ============================================================================
// Economic Settings
// Workshop-wide cost parameters and the hourly/per-minute rates derived from them
// ============================================================================

use super::errors::CatalogError;
use crate::numeric::{checked_product, checked_total, guarded_div, NumericResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: Decimal = dec!(60);

// ============================================================================
// Gas Kind
// ============================================================================

/// Assist gas used by a laser cutting profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GasKind {
    /// Compressed ambient air, thin sheet
    Air,
    /// Oxidizing cut with bottled oxygen, thick plate; gas is billed per minute
    Oxygen,
}

impl GasKind {
    pub fn is_oxidizing(&self) -> bool {
        matches!(self, GasKind::Oxygen)
    }
}

impl fmt::Display for GasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GasKind::Air => write!(f, "air"),
            GasKind::Oxygen => write!(f, "oxygen"),
        }
    }
}

impl FromStr for GasKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "air" => Ok(GasKind::Air),
            "oxygen" | "o2" => Ok(GasKind::Oxygen),
            _ => Err(CatalogError::UnknownGas(s.to_string())),
        }
    }
}

// ============================================================================
// Gas Bottle
// ============================================================================

/// A refillable gas bottle and the flow it is drawn at.
///
/// Usable gas is `volume × pressure` liters; at `flow_rate_lpm` the bottle
/// lasts `volume × pressure / flow` minutes, so one minute of use costs
/// `price / runtime`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasBottle {
    pub volume_liters: Decimal,
    pub pressure_atm: Decimal,
    pub flow_rate_lpm: Decimal,
    /// Refill price of one bottle
    pub price: Decimal,
}

impl GasBottle {
    pub fn new(
        volume_liters: Decimal,
        pressure_atm: Decimal,
        flow_rate_lpm: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            volume_liters,
            pressure_atm,
            flow_rate_lpm,
            price,
        }
    }

    /// Gas available at atmospheric pressure, in liters
    pub fn capacity_liters(&self) -> NumericResult<Decimal> {
        checked_product([self.volume_liters, self.pressure_atm])
    }

    /// Minutes one bottle lasts at the configured flow rate (0 when flow is 0)
    pub fn runtime_minutes(&self) -> NumericResult<Decimal> {
        guarded_div(self.capacity_liters()?, self.flow_rate_lpm)
    }

    /// Cost of one minute of gas flow (0 when the bottle has no runtime)
    pub fn cost_per_minute(&self) -> NumericResult<Decimal> {
        guarded_div(self.price, self.runtime_minutes()?)
    }
}

// ============================================================================
// Economic Settings
// ============================================================================

/// Workshop-wide cost parameters.
///
/// A quote computation receives one immutable copy of these settings; they
/// are edited only through [`crate::catalog::Catalog::update_settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EconomicSettings {
    // --- Labor ---
    pub operator_monthly_salary: Decimal,
    pub work_days_per_month: u32,
    pub work_hours_per_day: u32,

    // --- Utility ---
    pub electricity_price_per_kwh: Decimal,
    pub amortization_per_hour: Decimal,

    // --- Laser power draw ---
    /// Source, chiller and drives; drawn whenever the laser runs
    pub laser_power_kw: Decimal,
    /// Compressor draw while cutting with ambient air
    pub compressor_power_air_kw: Decimal,
    /// Compressor draw while cutting with oxygen
    pub compressor_power_oxygen_kw: Decimal,
    /// Machine time consumed by one pierce
    pub pierce_seconds: Decimal,

    // --- Cutting gas ---
    pub oxygen_bottle: GasBottle,

    // --- Welding consumables ---
    pub wire_price_per_kg: Decimal,
    /// Wire use when a welding profile carries no calibrated wire weight
    pub wire_consumption_g_per_cm: Decimal,
    pub welding_gas_bottle: GasBottle,
    pub welding_consumables_per_month: Decimal,
    pub welder_monthly_salary: Decimal,

    // --- Policy ---
    pub heavy_material_threshold_mm: Decimal,
    pub heavy_handling_cost_per_detail: Decimal,
    pub laser_min_charge_per_job: Decimal,
    pub laser_setup_fee_per_job: Decimal,
    pub material_markup_percent: Decimal,

    // --- Fallback rates ---
    /// Flat price per bend when no bending profile covers the thickness
    pub bending_base_price_per_bend: Decimal,
    /// Flat price per cm when no welding profile covers the fillet size
    pub welding_legacy_cost_per_cm: Decimal,
}

impl Default for EconomicSettings {
    fn default() -> Self {
        Self {
            operator_monthly_salary: dec!(300000),
            work_days_per_month: 26,
            work_hours_per_day: 8,
            electricity_price_per_kwh: dec!(25),
            amortization_per_hour: dec!(650),
            laser_power_kw: dec!(15),
            compressor_power_air_kw: dec!(5),
            compressor_power_oxygen_kw: dec!(22),
            pierce_seconds: dec!(2),
            oxygen_bottle: GasBottle::new(dec!(40), dec!(150), dec!(15), dec!(3000)),
            wire_price_per_kg: dec!(1500),
            wire_consumption_g_per_cm: dec!(0.5),
            welding_gas_bottle: GasBottle::new(dec!(40), dec!(150), dec!(12), dec!(8000)),
            welding_consumables_per_month: dec!(50000),
            welder_monthly_salary: dec!(250000),
            heavy_material_threshold_mm: dec!(16),
            heavy_handling_cost_per_detail: dec!(300),
            laser_min_charge_per_job: dec!(2000),
            laser_setup_fee_per_job: dec!(500),
            material_markup_percent: dec!(15),
            bending_base_price_per_bend: dec!(500),
            welding_legacy_cost_per_cm: dec!(50),
        }
    }
}

impl EconomicSettings {
    /// Validate that every rate, price and threshold is non-negative
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (field, value) in self.rate_fields() {
            if value < Decimal::ZERO {
                return Err(CatalogError::NegativeSetting { field, value });
            }
        }
        Ok(())
    }

    fn rate_fields(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("operator_monthly_salary", self.operator_monthly_salary),
            ("electricity_price_per_kwh", self.electricity_price_per_kwh),
            ("amortization_per_hour", self.amortization_per_hour),
            ("laser_power_kw", self.laser_power_kw),
            ("compressor_power_air_kw", self.compressor_power_air_kw),
            ("compressor_power_oxygen_kw", self.compressor_power_oxygen_kw),
            ("pierce_seconds", self.pierce_seconds),
            ("oxygen_bottle.volume_liters", self.oxygen_bottle.volume_liters),
            ("oxygen_bottle.pressure_atm", self.oxygen_bottle.pressure_atm),
            ("oxygen_bottle.flow_rate_lpm", self.oxygen_bottle.flow_rate_lpm),
            ("oxygen_bottle.price", self.oxygen_bottle.price),
            ("wire_price_per_kg", self.wire_price_per_kg),
            ("wire_consumption_g_per_cm", self.wire_consumption_g_per_cm),
            ("welding_gas_bottle.volume_liters", self.welding_gas_bottle.volume_liters),
            ("welding_gas_bottle.pressure_atm", self.welding_gas_bottle.pressure_atm),
            ("welding_gas_bottle.flow_rate_lpm", self.welding_gas_bottle.flow_rate_lpm),
            ("welding_gas_bottle.price", self.welding_gas_bottle.price),
            ("welding_consumables_per_month", self.welding_consumables_per_month),
            ("welder_monthly_salary", self.welder_monthly_salary),
            ("heavy_material_threshold_mm", self.heavy_material_threshold_mm),
            ("heavy_handling_cost_per_detail", self.heavy_handling_cost_per_detail),
            ("laser_min_charge_per_job", self.laser_min_charge_per_job),
            ("laser_setup_fee_per_job", self.laser_setup_fee_per_job),
            ("material_markup_percent", self.material_markup_percent),
            ("bending_base_price_per_bend", self.bending_base_price_per_bend),
            ("welding_legacy_cost_per_cm", self.welding_legacy_cost_per_cm),
        ]
    }

    // ========================================================================
    // Work calendar
    // ========================================================================

    pub fn monthly_work_hours(&self) -> Decimal {
        Decimal::from(self.work_days_per_month) * Decimal::from(self.work_hours_per_day)
    }

    pub fn monthly_work_minutes(&self) -> Decimal {
        self.monthly_work_hours() * MINUTES_PER_HOUR
    }

    /// Operator wage per hour (0 with an empty work calendar)
    pub fn labor_hourly_rate(&self) -> NumericResult<Decimal> {
        guarded_div(self.operator_monthly_salary, self.monthly_work_hours())
    }

    // ========================================================================
    // Laser
    // ========================================================================

    /// Electrical draw of the cutting cell for the given assist gas
    pub fn power_draw_kw(&self, gas: GasKind) -> NumericResult<Decimal> {
        let compressor = match gas {
            GasKind::Air => self.compressor_power_air_kw,
            GasKind::Oxygen => self.compressor_power_oxygen_kw,
        };
        checked_total([self.laser_power_kw, compressor])
    }

    /// Operator wage + electricity + amortization for one machine hour.
    /// Oxygen is billed separately per minute of cutting.
    pub fn machine_hourly_cost(&self, gas: GasKind) -> NumericResult<Decimal> {
        let electricity = checked_product([self.power_draw_kw(gas)?, self.electricity_price_per_kwh])?;
        checked_total([self.labor_hourly_rate()?, electricity, self.amortization_per_hour])
    }

    pub fn oxygen_cost_per_minute(&self) -> NumericResult<Decimal> {
        self.oxygen_bottle.cost_per_minute()
    }

    pub fn is_heavy(&self, thickness_mm: Decimal) -> bool {
        thickness_mm > self.heavy_material_threshold_mm
    }

    // ========================================================================
    // Welding
    // ========================================================================

    pub fn welding_gas_cost_per_minute(&self) -> NumericResult<Decimal> {
        self.welding_gas_bottle.cost_per_minute()
    }

    pub fn welder_per_minute_rate(&self) -> NumericResult<Decimal> {
        guarded_div(self.welder_monthly_salary, self.monthly_work_minutes())
    }

    /// Monthly consumables budget spread over the work calendar
    pub fn consumables_per_minute(&self) -> NumericResult<Decimal> {
        guarded_div(self.welding_consumables_per_month, self.monthly_work_minutes())
    }

    // ========================================================================
    // Material
    // ========================================================================

    /// Multiplier applied to purchase price: `1 + markup% / 100`
    pub fn material_markup_factor(&self) -> Decimal {
        Decimal::ONE + self.material_markup_percent / dec!(100)
    }
}

// ============================================================================
// Builder methods
// ============================================================================

impl EconomicSettings {
    pub fn with_labor(mut self, monthly_salary: Decimal, days: u32, hours: u32) -> Self {
        self.operator_monthly_salary = monthly_salary;
        self.work_days_per_month = days;
        self.work_hours_per_day = hours;
        self
    }

    pub fn with_oxygen_bottle(mut self, bottle: GasBottle) -> Self {
        self.oxygen_bottle = bottle;
        self
    }

    pub fn with_cutting_policy(mut self, min_charge_per_job: Decimal, setup_fee_per_job: Decimal) -> Self {
        self.laser_min_charge_per_job = min_charge_per_job;
        self.laser_setup_fee_per_job = setup_fee_per_job;
        self
    }

    pub fn with_heavy_handling(mut self, threshold_mm: Decimal, cost_per_detail: Decimal) -> Self {
        self.heavy_material_threshold_mm = threshold_mm;
        self.heavy_handling_cost_per_detail = cost_per_detail;
        self
    }
}
