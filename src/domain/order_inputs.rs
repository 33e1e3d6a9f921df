// ============================================================================
// Order Inputs
// Part geometry, material and process selection for one quote
// ============================================================================

use super::errors::ValidationError;
use super::material::MaterialKind;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the operator entered for one quote.
///
/// Quantities are per part unless the field says otherwise: `cutting_length_m`
/// is the contour of one part, `weld_length_cm` the seam of one part, and
/// `measured_weight_kg` the weight of the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrderInputs {
    pub client_name: String,
    pub thickness_mm: Decimal,
    pub quantity: u32,

    pub width_mm: Decimal,
    pub height_mm: Decimal,
    /// Weighed batch; takes precedence over blank geometry when positive
    pub measured_weight_kg: Option<Decimal>,
    pub material: Option<MaterialKind>,

    pub cutting_length_m: Decimal,
    pub pierce_count: u32,

    pub bending_enabled: bool,
    pub bends_per_part: u32,
    pub bend_length_mm: Decimal,

    pub welding_enabled: bool,
    pub weld_length_cm: Decimal,
}

impl Default for OrderInputs {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            thickness_mm: Decimal::ZERO,
            quantity: 1,
            width_mm: Decimal::ZERO,
            height_mm: Decimal::ZERO,
            measured_weight_kg: None,
            material: None,
            cutting_length_m: Decimal::ZERO,
            pierce_count: 0,
            bending_enabled: false,
            bends_per_part: 0,
            bend_length_mm: Decimal::ZERO,
            welding_enabled: false,
            weld_length_cm: Decimal::ZERO,
        }
    }
}

impl OrderInputs {
    /// Create inputs with the required parameters; every process is off
    pub fn new(client_name: impl Into<String>, thickness_mm: Decimal, quantity: u32) -> Self {
        Self {
            client_name: client_name.into(),
            thickness_mm,
            quantity,
            ..Self::default()
        }
    }

    /// Builder method: blank size of one part
    pub fn with_blank(mut self, width_mm: Decimal, height_mm: Decimal) -> Self {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self
    }

    /// Builder method: weighed batch
    pub fn with_measured_weight(mut self, batch_weight_kg: Decimal) -> Self {
        self.measured_weight_kg = Some(batch_weight_kg);
        self
    }

    pub fn with_material(mut self, material: MaterialKind) -> Self {
        self.material = Some(material);
        self
    }

    /// Builder method: laser contour length per part and pierce count per part
    pub fn with_cutting(mut self, length_m: Decimal, pierce_count: u32) -> Self {
        self.cutting_length_m = length_m;
        self.pierce_count = pierce_count;
        self
    }

    pub fn with_bending(mut self, bends_per_part: u32, bend_length_mm: Decimal) -> Self {
        self.bending_enabled = true;
        self.bends_per_part = bends_per_part;
        self.bend_length_mm = bend_length_mm;
        self
    }

    pub fn with_welding(mut self, weld_length_cm: Decimal) -> Self {
        self.welding_enabled = true;
        self.weld_length_cm = weld_length_cm;
        self
    }

    /// Measured batch weight when one was entered and is positive
    pub fn effective_measured_weight(&self) -> Option<Decimal> {
        self.measured_weight_kg.filter(|kg| *kg > Decimal::ZERO)
    }

    pub fn has_blank_geometry(&self) -> bool {
        self.width_mm > Decimal::ZERO && self.height_mm > Decimal::ZERO && self.thickness_mm > Decimal::ZERO
    }

    /// Quantity used as a divisor when amortizing per-job fees over parts
    pub fn amortization_divisor(&self) -> Decimal {
        Decimal::from(self.quantity.max(1))
    }

    /// Decimal measurements paired with their field names
    pub(crate) fn measurements(&self) -> [(&'static str, Decimal); 6] {
        [
            ("thickness_mm", self.thickness_mm),
            ("width_mm", self.width_mm),
            ("height_mm", self.height_mm),
            ("measured_weight_kg", self.measured_weight_kg.unwrap_or(Decimal::ZERO)),
            ("cutting_length_m", self.cutting_length_m),
            ("bend_length_mm", self.bend_length_mm),
        ]
    }

    pub(crate) fn weld_measurement(&self) -> (&'static str, Decimal) {
        ("weld_length_cm", self.weld_length_cm)
    }

    /// Caller-level validation, run before a quote is issued.
    ///
    /// The engine prices whatever it is given; this catches the inputs an
    /// operator would consider a mistake (missing material, enabled process
    /// without its measurements, zero parts).
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weld = self.weld_measurement();
        for (field, value) in self.measurements().into_iter().chain(std::iter::once(weld)) {
            if value < Decimal::ZERO {
                return Err(ValidationError::NegativeValue { field, value });
            }
        }

        if self.thickness_mm <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveThickness(self.thickness_mm));
        }
        if self.quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        if self.material.is_none() {
            return Err(ValidationError::MissingMaterial);
        }
        if self.effective_measured_weight().is_none() && !self.has_blank_geometry() {
            return Err(ValidationError::MissingGeometry);
        }
        if self.bending_enabled {
            if self.bends_per_part == 0 {
                return Err(ValidationError::IncompleteBending("bends_per_part"));
            }
            if self.bend_length_mm <= Decimal::ZERO {
                return Err(ValidationError::IncompleteBending("bend_length_mm"));
            }
        }
        if self.welding_enabled && self.weld_length_cm <= Decimal::ZERO {
            return Err(ValidationError::IncompleteWelding);
        }
        Ok(())
    }
}
