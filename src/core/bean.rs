use std::{
    any::{Any, TypeId},
    fmt::{self, Debug},
};

use crate::BeanError;

use super::value::{FieldKind, Value};

/// Name and declared kind of a single bean field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind, nullable: bool) -> Self {
        Self {
            name,
            kind,
            nullable,
        }
    }
}

/// Creates a zero-value instance of a bean type.
pub type BeanFactory = fn() -> Result<Box<dyn Bean>, BeanError>;

/// Runtime descriptor of a bean type.
///
/// A `BeanType` carries everything the copier needs to know about a type without
/// looking at an instance: its identity, its static field table and a factory for
/// fresh instances. Descriptors are cheap to copy and compare by type identity.
#[derive(Clone, Copy)]
pub struct BeanType {
    type_id: TypeId,
    name: &'static str,
    fields: &'static [FieldDescriptor],
    factory: BeanFactory,
}

impl BeanType {
    /// Descriptor for a bean whose zero value is its `Default`.
    pub fn new<B>(name: &'static str, fields: &'static [FieldDescriptor]) -> Self
    where
        B: Bean + Default,
    {
        Self::with_factory::<B>(name, fields, default_factory::<B>)
    }

    /// Descriptor for a bean with a custom factory.
    pub fn with_factory<B: Bean>(
        name: &'static str,
        fields: &'static [FieldDescriptor],
        factory: BeanFactory,
    ) -> Self {
        Self {
            type_id: TypeId::of::<B>(),
            name,
            fields,
            factory,
        }
    }

    pub fn id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Creates a new zero-value instance of the described type.
    pub fn instantiate(&self) -> Result<Box<dyn Bean>, BeanError> {
        (self.factory)()
    }
}

impl PartialEq for BeanType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for BeanType {}

impl Debug for BeanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanType")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

fn default_factory<B: Bean + Default>() -> Result<Box<dyn Bean>, BeanError> {
    Ok(Box::new(B::default()))
}

/// A record whose fields can be read and written by name.
///
/// Beans are normally declared through the [`bean!`](crate::bean) macro, which
/// generates the field table at compile time. Hand-written implementations are
/// needed for types that cannot provide a `Default` value.
pub trait Bean: Any + Debug + Send + Sync {
    fn bean_type(&self) -> BeanType;

    /// Reads a field, `None` when the bean has no such field.
    fn get(&self, field: &str) -> Option<Value>;

    /// Writes a field, failing when the field is unknown or the value does not fit.
    fn set(&mut self, field: &str, value: Value) -> Result<(), BeanError>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Statically known bean type.
pub trait BeanClass: Bean + Sized {
    fn class() -> BeanType;
}

/// Recovers the concrete type of a boxed bean.
pub fn downcast<T: BeanClass>(bean: Box<dyn Bean>) -> Result<T, BeanError> {
    let actual = bean.bean_type().name();
    bean.into_any()
        .downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| {
            BeanError::Property(format!(
                "expected an instance of {}, got {}",
                T::class().name(),
                actual
            ))
        })
}

/// Declares a struct as a [`Bean`].
///
/// The struct must implement `Default` and every field type must implement
/// [`FieldValue`](crate::core::value::FieldValue).
///
/// ```
/// use bean_copier_rs::{bean, core::bean::{Bean, BeanClass}, core::value::Value};
///
/// bean! {
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct UserDto {
///         pub id: i32,
///         pub user_name: String,
///     }
/// }
///
/// let mut user = UserDto::default();
/// user.set("user_name", Value::from("van")).unwrap();
/// assert_eq!(user.get("user_name"), Some(Value::from("van")));
/// assert_eq!(UserDto::class().fields().len(), 2);
/// ```
#[macro_export]
macro_rules! bean {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::core::bean::BeanClass for $name {
            fn class() -> $crate::core::bean::BeanType {
                const FIELDS: &[$crate::core::bean::FieldDescriptor] = &[
                    $(
                        $crate::core::bean::FieldDescriptor::new(
                            stringify!($field),
                            <$ty as $crate::core::value::FieldValue>::KIND,
                            <$ty as $crate::core::value::FieldValue>::NULLABLE,
                        ),
                    )*
                ];
                $crate::core::bean::BeanType::new::<$name>(stringify!($name), FIELDS)
            }
        }

        impl $crate::core::bean::Bean for $name {
            fn bean_type(&self) -> $crate::core::bean::BeanType {
                <$name as $crate::core::bean::BeanClass>::class()
            }

            #[allow(unused_variables)]
            fn get(&self, field: &str) -> ::std::option::Option<$crate::core::value::Value> {
                $(
                    if field == stringify!($field) {
                        return ::std::option::Option::Some(
                            $crate::core::value::FieldValue::to_value(&self.$field),
                        );
                    }
                )*
                ::std::option::Option::None
            }

            fn set(
                &mut self,
                field: &str,
                value: $crate::core::value::Value,
            ) -> ::std::result::Result<(), $crate::BeanError> {
                $(
                    if field == stringify!($field) {
                        self.$field = <$ty as $crate::core::value::FieldValue>::from_value(value)
                            .map_err(|rejected| {
                                $crate::BeanError::Property(::std::format!(
                                    "cannot assign {:?} to {}.{} of kind {:?}",
                                    rejected,
                                    stringify!($name),
                                    field,
                                    <$ty as $crate::core::value::FieldValue>::KIND,
                                ))
                            })?;
                        return ::std::result::Result::Ok(());
                    }
                )*
                ::std::result::Result::Err($crate::BeanError::Property(::std::format!(
                    "{} has no field `{}` (value {:?})",
                    stringify!($name),
                    field,
                    value,
                )))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }
        }
    };
}
