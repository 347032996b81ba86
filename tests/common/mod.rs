#![allow(dead_code)]

pub mod mocks;

pub use mocks::MockStore;

use std::str::FromStr;

use bean_copier_rs::bean;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};

bean! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct User {
        pub id: i32,
        pub user_name: String,
    }
}

bean! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct UserDo {
        pub id: i32,
        pub user_name: String,
        pub gmt_broth: Option<NaiveDateTime>,
        pub balance: Option<BigDecimal>,
        pub ids: Vec<i32>,
    }
}

bean! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct UserDto {
        pub id: i32,
        pub user_name: String,
        pub gmt_broth: String,
        pub balance: String,
        pub ids: Vec<i32>,
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn birth() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2019, 3, 1)
        .and_then(|date| date.and_hms_opt(6, 6, 49))
        .unwrap()
}

pub fn create_data() -> UserDo {
    UserDo {
        id: 1,
        user_name: "van".to_string(),
        gmt_broth: Some(birth()),
        balance: Some(BigDecimal::from_str("1.5E+3").unwrap()),
        ids: vec![1, 2, 3],
    }
}

pub fn create_data_list(size: i32) -> Vec<UserDo> {
    (0..size)
        .map(|id| UserDo {
            id,
            user_name: format!("van{}", id),
            ..create_data()
        })
        .collect()
}
