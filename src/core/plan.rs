use log::trace;

use crate::BeanError;

use super::{
    bean::{Bean, BeanType},
    converter::Converter,
    value::FieldKind,
};

/// One field moved by a [`CopyPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    pub name: &'static str,
    pub source_kind: FieldKind,
    pub target_kind: FieldKind,
    pub target_nullable: bool,
}

impl FieldBinding {
    /// Whether the value must go through a converter to reach the target.
    pub fn needs_conversion(&self) -> bool {
        self.source_kind != self.target_kind
    }
}

/// Compiled description of how to move values from one bean type to another.
///
/// A plan holds one binding per field name present on both sides, in the target's
/// declaration order. It is immutable once built and independent of the converter,
/// which is supplied each time the plan is applied.
#[derive(Debug, Clone)]
pub struct CopyPlan {
    source: BeanType,
    target: BeanType,
    bindings: Vec<FieldBinding>,
}

impl CopyPlan {
    pub fn build(source: &BeanType, target: &BeanType) -> Self {
        let bindings = target
            .fields()
            .iter()
            .filter_map(|target_field| {
                source.field(target_field.name).map(|source_field| FieldBinding {
                    name: target_field.name,
                    source_kind: source_field.kind,
                    target_kind: target_field.kind,
                    target_nullable: target_field.nullable,
                })
            })
            .collect();

        Self {
            source: *source,
            target: *target,
            bindings,
        }
    }

    pub fn source(&self) -> &BeanType {
        &self.source
    }

    pub fn target(&self) -> &BeanType {
        &self.target
    }

    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    /// Moves the bound fields from `source` into `target`.
    ///
    /// Without a converter, bindings whose kinds differ are skipped and the target
    /// keeps its current value. With a converter, every bound value goes through it
    /// once and the target decides whether it accepts the result.
    ///
    /// Null source values are only written to nullable target fields.
    pub fn apply(
        &self,
        source: &dyn Bean,
        target: &mut dyn Bean,
        converter: Option<&dyn Converter>,
    ) -> Result<(), BeanError> {
        for binding in &self.bindings {
            if converter.is_none() && binding.needs_conversion() {
                trace!(
                    "Skipping {}.{}: {:?} -> {:?} without converter",
                    self.target.name(),
                    binding.name,
                    binding.source_kind,
                    binding.target_kind
                );
                continue;
            }

            let Some(value) = source.get(binding.name) else {
                continue;
            };

            let value = match converter {
                Some(converter) => converter.convert(&value, binding.target_kind)?,
                None => value,
            };

            if value.is_null() && !binding.target_nullable {
                continue;
            }

            target.set(binding.name, value)?;
        }
        Ok(())
    }
}
