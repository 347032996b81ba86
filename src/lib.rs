#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 <div align="center">
   <h1>Bean Copier for Rust</h1>
   <h3>Copy same-named properties between records, with cached copy plans</h3>

   ![license](https://shields.io/badge/license-MIT%2FApache--2.0-blue)

  </div>

 # Bean Copier for Rust

 Layered applications move the same data through several shapes: a persistence
 record, a domain object, a transfer object sent to clients. **Bean Copier** copies
 the properties two such records have in common, by name, and remembers how to do it
 for every pair of types it has seen.

 ## Core Concepts

- **Bean:** A record whose fields can be read and written by name. Declared with the `bean!` macro.
- **BeanType:** Runtime descriptor of a bean type: identity, field table and factory.
- **CopyPlan:** The list of fields to transfer between one source type and one target type.
- **PlanCache:** Concurrent map from (source type, target type) to its `CopyPlan`. Plans are built once and never evicted.
- **Converter:** Turns a source value into the kind a target field expects, e.g. a timestamp into text.
- **BeanCopier:** Copies single beans and lists, with or without a converter.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| digest        | Enables salted PBKDF2-HMAC-SHA512 password digests            |
| store         | Enables the `KeyValueStore` trait, an in-memory store and the `StringStore` facade |
| result        | Enables the `HttpResult` response envelope                    |
| full          | Enables all available features                                |

 ## Getting Started

```rust
# use bean_copier_rs::{bean, core::copier::BeanCopier, error::BeanError};
# use chrono::{NaiveDate, NaiveDateTime};
bean! {
    #[derive(Debug, Default)]
    pub struct UserDo {
        pub id: i32,
        pub user_name: String,
        pub gmt_broth: Option<NaiveDateTime>,
    }
}

bean! {
    #[derive(Debug, Default)]
    pub struct UserDto {
        pub id: i32,
        pub user_name: String,
        pub gmt_broth: String,
    }
}

fn main() -> Result<(), BeanError> {
    let user = UserDo {
        id: 1,
        user_name: "van".to_string(),
        gmt_broth: NaiveDate::from_ymd_opt(2019, 3, 1).and_then(|d| d.and_hms_opt(6, 6, 49)),
    };

    let copier = BeanCopier::default();

    // Fields of different kinds are skipped without a converter.
    let plain: UserDto = copier.copy(&user)?;
    assert_eq!(plain.gmt_broth, "");

    let converted: UserDto = copier.copy_converted(&user)?;
    assert_eq!(converted.user_name, "van");
    assert_eq!(converted.gmt_broth, "2019-03-01 06:06:49");

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 */

/// Core module for copy operations
pub mod core;

/// Error types for copy operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Helpers around the copier: date patterns, digests, key-value store, result envelope
pub mod util;
