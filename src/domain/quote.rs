// ============================================================================
// Quote Breakdown
// Itemized result of one quote and the ordered trace explaining it
// ============================================================================

use crate::numeric::{Money, NumericResult};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A costed process, in the order the engine runs them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Process {
    Material,
    Cutting,
    Bending,
    Welding,
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Process::Material => "material",
            Process::Cutting => "cutting",
            Process::Bending => "bending",
            Process::Welding => "welding",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    Info,
    /// A fallback rate or a machine limit was hit; the quote is still priced
    Warning,
}

/// One line of the human-readable calculation trace
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLine {
    pub process: Process,
    pub severity: Severity,
    pub message: String,
}

impl TraceLine {
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Info => write!(f, "[{}] {}", self.process, self.message),
            Severity::Warning => write!(f, "[{}] WARNING: {}", self.process, self.message),
        }
    }
}

/// Short label of a process that contributed to the quote.
///
/// Rendered into the operations summary stored with an order record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Metal { kg_per_part: Decimal, quantity: u32 },
    Laser,
    Bend { bends_per_part: u32 },
    Weld { length_cm: Decimal },
}

impl Operation {
    pub fn process(&self) -> Process {
        match self {
            Operation::Metal { .. } => Process::Material,
            Operation::Laser => Process::Cutting,
            Operation::Bend { .. } => Process::Bending,
            Operation::Weld { .. } => Process::Welding,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Metal {
                kg_per_part,
                quantity,
            } => write!(f, "Metal({}kg x {})", kg_per_part.round_dp(1).normalize(), quantity),
            Operation::Laser => f.write_str("Laser"),
            Operation::Bend { bends_per_part } => write!(f, "Bend({}x)", bends_per_part),
            Operation::Weld { length_cm } => write!(f, "Weld({}cm)", length_cm.normalize()),
        }
    }
}

// ============================================================================
// Trace builder
// ============================================================================

/// Collects trace lines and operation labels while modules run
#[derive(Debug, Default, Clone)]
pub struct QuoteTrace {
    lines: Vec<TraceLine>,
    operations: Vec<Operation>,
}

impl QuoteTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, process: Process, message: impl Into<String>) {
        self.push(process, Severity::Info, message.into());
    }

    pub fn warn(&mut self, process: Process, message: impl Into<String>) {
        self.push(process, Severity::Warning, message.into());
    }

    pub fn record_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn push(&mut self, process: Process, severity: Severity, message: String) {
        self.lines.push(TraceLine {
            process,
            severity,
            message,
        });
    }

    pub(crate) fn into_parts(self) -> (Vec<TraceLine>, Vec<Operation>) {
        (self.lines, self.operations)
    }
}

// ============================================================================
// Breakdown
// ============================================================================

/// Itemized price of one order.
///
/// `total` is always the exact sum of the four process amounts; each amount
/// was rounded to cents once, when its module finished.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteBreakdown {
    pub material_cost: Money,
    pub cutting_cost: Money,
    pub bending_cost: Money,
    pub welding_cost: Money,
    pub total: Money,
    pub trace: Vec<TraceLine>,
    pub operations: Vec<Operation>,
}

impl QuoteBreakdown {
    /// Assemble a breakdown, computing the total with overflow checks
    pub fn new(
        material_cost: Money,
        cutting_cost: Money,
        bending_cost: Money,
        welding_cost: Money,
        trace: QuoteTrace,
    ) -> NumericResult<Self> {
        let total = Money::checked_sum([material_cost, cutting_cost, bending_cost, welding_cost])?;
        let (trace, operations) = trace.into_parts();
        Ok(Self {
            material_cost,
            cutting_cost,
            bending_cost,
            welding_cost,
            total,
            trace,
            operations,
        })
    }

    pub fn cost_of(&self, process: Process) -> Money {
        match process {
            Process::Material => self.material_cost,
            Process::Cutting => self.cutting_cost,
            Process::Bending => self.bending_cost,
            Process::Welding => self.welding_cost,
        }
    }

    pub fn warnings(&self) -> impl Iterator<Item = &TraceLine> {
        self.trace.iter().filter(|line| line.is_warning())
    }

    pub fn has_warnings(&self) -> bool {
        self.trace.iter().any(TraceLine::is_warning)
    }

    /// Processes that produced an operation label, in run order
    pub fn fired_processes(&self) -> Vec<Process> {
        let mut processes: Vec<Process> = self.operations.iter().map(Operation::process).collect();
        processes.dedup();
        processes
    }

    /// Operations label, e.g. `Metal(0.8kg x 5) + Laser + Bend(2x)`
    pub fn summary(&self) -> String {
        self.operations
            .iter()
            .map(Operation::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Total rounded to whole currency units, ties to even
    pub fn rounded_total(&self) -> NumericResult<Money> {
        self.total.round_to_units()
    }
}
