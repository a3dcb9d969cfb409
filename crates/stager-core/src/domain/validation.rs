use crate::domain::{
    error::ValidationErrors,
    fields::{Absent, FieldDef},
};

/// Centralized required-field validation.
///
/// Every builder funnels its `validate()` through here, not through
/// per-entity ad-hoc checks: one pass over the declaration table, one
/// aggregate raised at the end.
///
/// `fields` and `slots` are parallel arrays — slot `i` holds the staged
/// value for declaration `i`. Optional declarations are skipped; each
/// required declaration whose slot is absent contributes one
/// `"Value is required"` entry under its field name, in declaration order.
pub fn check_required(
    fields: &[FieldDef],
    slots: &[&dyn Absent],
) -> Result<(), ValidationErrors> {
    debug_assert_eq!(
        fields.len(),
        slots.len(),
        "declaration table and staging slots must be parallel"
    );

    let mut errors = ValidationErrors::new();
    for (field, slot) in fields.iter().zip(slots) {
        if field.is_required() && slot.is_absent() {
            errors.append(field.name(), ValidationErrors::VALUE_REQUIRED);
        }
    }
    errors.into_result()
}
