//! Monthly cap rebalancing.
//!
//! Regular hours are capped at the configured monthly maximum. Hours above the
//! cap move into regular overtime; when regular hours fall short of the cap,
//! regular overtime is reclaimed to fill the gap. Holiday overtime never takes
//! part.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ReconcileResult;
use crate::models::AuditStep;

use super::hour_overflow;

/// How the cap changed the split between regular and overtime hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum CapAdjustment {
    /// Regular hours exceeded the cap; the excess moved to overtime.
    Overflow(Decimal),
    /// Regular hours were under the cap; overtime moved into regular hours.
    Reclaimed(Decimal),
    /// Nothing moved.
    Unchanged,
}

/// The result of rebalancing hours against the monthly cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapRebalance {
    /// Regular hours after rebalancing; never above the cap.
    pub regular_hours: Decimal,
    /// Regular overtime hours after rebalancing.
    pub overtime_hours: Decimal,
    /// What was moved.
    pub adjustment: CapAdjustment,
    /// The audit step recording this rebalance.
    pub audit_step: AuditStep,
}

/// Rebalances regular and overtime hours against `cap`.
///
/// Fails with [`InvalidInput`] if moving hours between the two totals
/// overflows.
///
/// [`InvalidInput`]: crate::error::ReconcileError::InvalidInput
///
/// # Examples
///
/// ## Regular hours above the cap
///
/// ```
/// use hour_reconciler::calculation::{rebalance_to_cap, CapAdjustment};
/// use rust_decimal::Decimal;
///
/// let result = rebalance_to_cap(Decimal::from(210), Decimal::from(20), Decimal::from(208), 1)?;
/// assert_eq!(result.regular_hours, Decimal::from(208));
/// assert_eq!(result.overtime_hours, Decimal::from(22));
/// assert_eq!(result.adjustment, CapAdjustment::Overflow(Decimal::from(2)));
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
///
/// ## Regular hours below the cap
///
/// ```
/// use hour_reconciler::calculation::rebalance_to_cap;
/// use rust_decimal::Decimal;
///
/// let result = rebalance_to_cap(Decimal::from(180), Decimal::from(30), Decimal::from(208), 1)?;
/// assert_eq!(result.regular_hours, Decimal::from(208));
/// assert_eq!(result.overtime_hours, Decimal::from(2));
/// # Ok::<(), hour_reconciler::error::ReconcileError>(())
/// ```
pub fn rebalance_to_cap(
    regular_hours: Decimal,
    overtime_hours: Decimal,
    cap: Decimal,
    step_number: u32,
) -> ReconcileResult<CapRebalance> {
    let (new_regular, new_overtime, adjustment) = if regular_hours > cap {
        let overflow = regular_hours
            .checked_sub(cap)
            .ok_or_else(|| hour_overflow("Hours above the cap"))?;
        let overtime = overtime_hours
            .checked_add(overflow)
            .ok_or_else(|| hour_overflow("Overtime total"))?;
        (cap, overtime, CapAdjustment::Overflow(overflow))
    } else if regular_hours < cap {
        let deficit = cap
            .checked_sub(regular_hours)
            .ok_or_else(|| hour_overflow("Hours below the cap"))?;
        let moved = overtime_hours.min(deficit);
        if moved.is_zero() {
            (regular_hours, overtime_hours, CapAdjustment::Unchanged)
        } else {
            let regular = regular_hours
                .checked_add(moved)
                .ok_or_else(|| hour_overflow("Regular hours total"))?;
            let overtime = overtime_hours
                .checked_sub(moved)
                .ok_or_else(|| hour_overflow("Overtime total"))?;
            (regular, overtime, CapAdjustment::Reclaimed(moved))
        }
    } else {
        (regular_hours, overtime_hours, CapAdjustment::Unchanged)
    };

    let reasoning = match adjustment {
        CapAdjustment::Overflow(hours) => format!(
            "{} regular hours exceed the {} hour cap; {} hours moved to overtime",
            regular_hours.normalize(),
            cap.normalize(),
            hours.normalize()
        ),
        CapAdjustment::Reclaimed(hours) => format!(
            "{} regular hours are under the {} hour cap; {} overtime hours moved to regular",
            regular_hours.normalize(),
            cap.normalize(),
            hours.normalize()
        ),
        CapAdjustment::Unchanged => format!(
            "{} regular hours and {} overtime hours need no rebalancing against the {} hour cap",
            regular_hours.normalize(),
            overtime_hours.normalize(),
            cap.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "cap_rebalance".to_string(),
        rule_name: "Monthly Cap Rebalance".to_string(),
        input: serde_json::json!({
            "regular_hours": regular_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string(),
            "cap": cap.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": new_regular.normalize().to_string(),
            "overtime_hours": new_overtime.normalize().to_string()
        }),
        reasoning,
    };

    Ok(CapRebalance {
        regular_hours: new_regular,
        overtime_hours: new_overtime,
        adjustment,
        audit_step,
    })
}
