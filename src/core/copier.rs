use std::sync::Arc;

use log::debug;

use crate::{BeanError, util::datetime::DateTimePattern};

use super::{
    bean::{Bean, BeanClass, BeanType, downcast},
    cache::PlanCache,
    converter::{Converter, DefaultConverter},
};

/// Type alias for copy results.
pub type CopyResult<T> = Result<T, BeanError>;

/// Copies same-named fields from source beans into fresh target beans.
///
/// The copier looks up a [`CopyPlan`](super::plan::CopyPlan) for every
/// (source type, target type) pair in its [`PlanCache`], building it on first use.
/// It holds no per-call state and can be shared between threads.
///
/// # Examples
///
/// ```
/// use bean_copier_rs::{bean, core::copier::BeanCopier};
///
/// bean! {
///     #[derive(Debug, Default)]
///     pub struct UserDo {
///         pub id: i32,
///         pub user_name: String,
///         pub password: String,
///     }
/// }
///
/// bean! {
///     #[derive(Debug, Default)]
///     pub struct UserDto {
///         pub id: i32,
///         pub user_name: String,
///     }
/// }
///
/// let user = UserDo {
///     id: 1,
///     user_name: "van".to_string(),
///     password: "secret".to_string(),
/// };
///
/// let copier = BeanCopier::default();
/// let dto: UserDto = copier.copy(&user).unwrap();
/// assert_eq!(dto.id, 1);
/// assert_eq!(dto.user_name, "van");
/// ```
#[derive(Clone)]
pub struct BeanCopier {
    cache: Arc<PlanCache>,
    converter: Arc<dyn Converter>,
}

impl Default for BeanCopier {
    fn default() -> Self {
        Self {
            cache: PlanCache::global(),
            converter: Arc::new(DefaultConverter::default()),
        }
    }
}

impl BeanCopier {
    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    /// Copies `source` into a new instance of `target`.
    ///
    /// Fields whose kinds differ between source and target are left at their
    /// default value.
    ///
    /// # Errors
    /// - [`BeanError::InvalidArgument`] when `source` or `target` is `None`
    /// - [`BeanError::Instantiation`] when the target cannot be created
    /// - [`BeanError::Property`] when the target rejects a value
    pub fn copy_object(
        &self,
        source: Option<&dyn Bean>,
        target: Option<BeanType>,
    ) -> CopyResult<Box<dyn Bean>> {
        self.copy_bean(source, target, None)
    }

    /// Same as [`copy_object`](Self::copy_object), with kind-mismatched fields
    /// passed through the copier's converter.
    pub fn copy_with_converter(
        &self,
        source: Option<&dyn Bean>,
        target: Option<BeanType>,
    ) -> CopyResult<Box<dyn Bean>> {
        self.copy_bean(source, target, Some(self.converter.as_ref()))
    }

    /// Same as [`copy_with_converter`](Self::copy_with_converter) with a converter
    /// supplied for this call only.
    pub fn copy_using(
        &self,
        source: Option<&dyn Bean>,
        target: Option<BeanType>,
        converter: &dyn Converter,
    ) -> CopyResult<Box<dyn Bean>> {
        self.copy_bean(source, target, Some(converter))
    }

    /// Typed form of [`copy_object`](Self::copy_object).
    pub fn copy<T: BeanClass>(&self, source: &dyn Bean) -> CopyResult<T> {
        downcast(self.copy_object(Some(source), Some(T::class()))?)
    }

    /// Typed form of [`copy_with_converter`](Self::copy_with_converter).
    pub fn copy_converted<T: BeanClass>(&self, source: &dyn Bean) -> CopyResult<T> {
        downcast(self.copy_with_converter(Some(source), Some(T::class()))?)
    }

    /// Copies every element of `sources` into a new instance of `target`.
    ///
    /// The output has the same length and order as the input. The first failing
    /// element aborts the whole batch.
    ///
    /// # Errors
    /// - [`BeanError::InvalidArgument`] when `sources` is `None` or empty
    /// - any error of [`copy_object`](Self::copy_object)
    pub fn copy_list<S: Bean>(
        &self,
        sources: Option<&[S]>,
        target: Option<BeanType>,
    ) -> CopyResult<Vec<Box<dyn Bean>>> {
        let sources = match sources {
            Some(sources) if !sources.is_empty() => sources,
            _ => {
                return Err(BeanError::InvalidArgument(
                    "source list is absent or empty".to_string(),
                ));
            }
        };

        debug!("Copying list of {} items", sources.len());
        sources
            .iter()
            .map(|source| self.copy_object(Some(source), target))
            .collect()
    }

    /// Typed form of [`copy_list`](Self::copy_list).
    pub fn copy_list_as<S: Bean, T: BeanClass>(&self, sources: &[S]) -> CopyResult<Vec<T>> {
        self.copy_list(Some(sources), Some(T::class()))?
            .into_iter()
            .map(downcast::<T>)
            .collect()
    }

    /// Copies a list and lets `callback` finish every target after its fields have
    /// been copied, e.g. to fill fields no plan can derive.
    pub fn copy_list_with_callback<S, T, F>(&self, sources: &[S], callback: F) -> CopyResult<Vec<T>>
    where
        S: Bean,
        T: BeanClass,
        F: Fn(&S, &mut T),
    {
        let mut targets: Vec<T> = self.copy_list_as(sources)?;
        for (source, target) in sources.iter().zip(targets.iter_mut()) {
            callback(source, target);
        }
        Ok(targets)
    }

    /// Copies fields of `source` into an existing `target`, optionally through the
    /// copier's converter.
    pub fn copy_properties(
        &self,
        source: &dyn Bean,
        target: &mut dyn Bean,
        use_converter: bool,
    ) -> CopyResult<()> {
        let plan = self
            .cache
            .get_plan(&source.bean_type(), &target.bean_type());
        let converter = use_converter.then(|| self.converter.as_ref());
        plan.apply(source, target, converter)
    }

    fn copy_bean(
        &self,
        source: Option<&dyn Bean>,
        target: Option<BeanType>,
        converter: Option<&dyn Converter>,
    ) -> CopyResult<Box<dyn Bean>> {
        let (source, target_type) = match (source, target) {
            (Some(source), Some(target)) => (source, target),
            _ => {
                return Err(BeanError::InvalidArgument(
                    "source object or target type is absent".to_string(),
                ));
            }
        };

        let mut target = target_type.instantiate().map_err(|error| match error {
            BeanError::Instantiation { .. } => error,
            other => BeanError::Instantiation {
                type_name: target_type.name().to_string(),
                reason: other.to_string(),
            },
        })?;

        let plan = self.cache.get_plan(&source.bean_type(), &target_type);
        plan.apply(source, target.as_mut(), converter)?;
        Ok(target)
    }
}

/// Builder for [`BeanCopier`].
///
/// ```
/// use bean_copier_rs::core::copier::BeanCopierBuilder;
///
/// let copier = BeanCopierBuilder::new()
///     .date_pattern("yyyy/MM/dd HH:mm")
///     .private_cache()
///     .build()
///     .unwrap();
/// assert!(copier.cache().is_empty());
/// ```
#[derive(Default)]
pub struct BeanCopierBuilder {
    cache: Option<Arc<PlanCache>>,
    converter: Option<Arc<dyn Converter>>,
    date_pattern: Option<String>,
}

impl BeanCopierBuilder {
    pub fn new() -> BeanCopierBuilder {
        Self {
            cache: None,
            converter: None,
            date_pattern: None,
        }
    }

    /// Shares `cache` with the copier. Defaults to [`PlanCache::global`].
    pub fn cache(mut self, cache: Arc<PlanCache>) -> BeanCopierBuilder {
        self.cache = Some(cache);
        self
    }

    /// Gives the copier a cache of its own.
    pub fn private_cache(mut self) -> BeanCopierBuilder {
        self.cache = Some(Arc::new(PlanCache::new()));
        self
    }

    /// Replaces the default converter. Takes precedence over `date_pattern`.
    pub fn converter(mut self, converter: impl Converter + 'static) -> BeanCopierBuilder {
        self.converter = Some(Arc::new(converter));
        self
    }

    /// Pattern used by the default converter to render temporal values.
    pub fn date_pattern(mut self, pattern: &str) -> BeanCopierBuilder {
        self.date_pattern = Some(pattern.to_string());
        self
    }

    /// # Errors
    /// [`BeanError::Pattern`] when the date pattern is invalid.
    pub fn build(self) -> Result<BeanCopier, BeanError> {
        let converter: Arc<dyn Converter> = match (self.converter, self.date_pattern) {
            (Some(converter), _) => converter,
            (None, Some(pattern)) => Arc::new(DefaultConverter::new(
                DateTimePattern::of_pattern(&pattern)?,
            )),
            (None, None) => Arc::new(DefaultConverter::default()),
        };

        Ok(BeanCopier {
            cache: self.cache.unwrap_or_else(PlanCache::global),
            converter,
        })
    }
}
