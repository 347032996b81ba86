use log::trace;

use crate::BeanError;

use super::bean::Bean;

/// Copies same-named, same-kind fields from `source` to `target` without any plan.
///
/// Every call matches the two field tables again, which is what makes this the
/// slow baseline next to [`BeanCopier`](super::copier::BeanCopier). Returns the
/// number of fields written.
pub fn copy_properties(source: &dyn Bean, target: &mut dyn Bean) -> Result<usize, BeanError> {
    let source_type = source.bean_type();
    let target_type = target.bean_type();
    let mut copied = 0;

    for target_field in target_type.fields() {
        let Some(source_field) = source_type.field(target_field.name) else {
            continue;
        };
        if source_field.kind != target_field.kind {
            trace!(
                "Ignoring {}.{}: kinds differ",
                target_type.name(),
                target_field.name
            );
            continue;
        }
        let Some(value) = source.get(source_field.name) else {
            continue;
        };
        if value.is_null() && !target_field.nullable {
            continue;
        }
        target.set(target_field.name, value)?;
        copied += 1;
    }

    Ok(copied)
}
