use std::{
    any::TypeId,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use log::debug;

use super::{bean::BeanType, plan::CopyPlan};

/// Cache key of a copy plan: the ordered pair of source and target type identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopierKey {
    source: TypeId,
    target: TypeId,
}

impl CopierKey {
    pub fn new(source: &BeanType, target: &BeanType) -> Self {
        Self {
            source: source.id(),
            target: target.id(),
        }
    }
}

static GLOBAL: LazyLock<Arc<PlanCache>> = LazyLock::new(|| Arc::new(PlanCache::new()));

/// Memoizes [`CopyPlan`]s per (source type, target type) pair.
///
/// Entries are never evicted: the cache grows with the number of distinct type
/// pairs copied during the life of the process, which is fixed by the program's
/// code rather than by its input.
///
/// Concurrent first requests for the same pair may each build a plan; the first
/// one stored wins and every caller receives that stored plan.
#[derive(Debug, Default)]
pub struct PlanCache {
    plans: DashMap<CopierKey, Arc<CopyPlan>>,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache shared by copiers that do not bring their own.
    pub fn global() -> Arc<PlanCache> {
        Arc::clone(&GLOBAL)
    }

    pub fn get_plan(&self, source: &BeanType, target: &BeanType) -> Arc<CopyPlan> {
        let key = CopierKey::new(source, target);

        if let Some(plan) = self.plans.get(&key) {
            return Arc::clone(plan.value());
        }

        let plan = Arc::new(CopyPlan::build(source, target));
        debug!(
            "Built copy plan {} -> {} with {} bindings",
            source.name(),
            target.name(),
            plan.bindings().len()
        );

        let stored = self.plans.entry(key).or_insert(plan);
        Arc::clone(stored.value())
    }

    pub fn contains(&self, source: &BeanType, target: &BeanType) -> bool {
        self.plans.contains_key(&CopierKey::new(source, target))
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
