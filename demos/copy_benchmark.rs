use std::{str::FromStr, time::Instant};

use bean_copier_rs::{
    bean,
    core::{
        copier::BeanCopier,
        mapper::{FromMapper, Mapper},
        reflect,
    },
};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;

const SIZE: i32 = 10_000;

bean! {
    #[derive(Debug, Clone, Default)]
    pub struct UserDo {
        pub id: i32,
        pub user_name: String,
        pub gmt_broth: Option<NaiveDateTime>,
        pub balance: Option<BigDecimal>,
    }
}

bean! {
    #[derive(Debug, Clone, Default)]
    pub struct UserDto {
        pub id: i32,
        pub user_name: String,
        pub gmt_broth: String,
        pub balance: String,
    }
}

impl From<&UserDo> for UserDto {
    fn from(user: &UserDo) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name.clone(),
            gmt_broth: user
                .gmt_broth
                .map(|born| born.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            balance: user
                .balance
                .as_ref()
                .map(BigDecimal::to_plain_string)
                .unwrap_or_default(),
        }
    }
}

fn create_data_list() -> anyhow::Result<Vec<UserDo>> {
    let born = NaiveDate::from_ymd_opt(2019, 3, 1)
        .and_then(|date| date.and_hms_opt(6, 6, 49))
        .ok_or_else(|| anyhow::anyhow!("invalid birth date"))?;
    let balance = BigDecimal::from_str("1.5E+3")?;

    Ok((0..SIZE)
        .map(|id| UserDo {
            id,
            user_name: format!("van{}", id),
            gmt_broth: Some(born),
            balance: Some(balance.clone()),
        })
        .collect())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let users = create_data_list()?;

    let start = Instant::now();
    let mut reflected = Vec::with_capacity(users.len());
    for user in &users {
        let mut dto = UserDto::default();
        reflect::copy_properties(user, &mut dto)?;
        reflected.push(dto);
    }
    info!("reflect: {} items in {:?}", reflected.len(), start.elapsed());

    let copier = BeanCopier::default();
    let start = Instant::now();
    let copied: Vec<UserDto> = copier.copy_list_as(&users)?;
    info!("bean copier: {} items in {:?}", copied.len(), start.elapsed());

    let start = Instant::now();
    let converted: Vec<UserDto> = users
        .iter()
        .map(|user| copier.copy_converted::<UserDto>(user))
        .collect::<Result<_, _>>()?;
    info!(
        "bean copier with converter: {} items in {:?}",
        converted.len(),
        start.elapsed()
    );

    let start = Instant::now();
    let mapped = FromMapper::<UserDo, UserDto>::new().map_list(&users);
    info!("mapper: {} items in {:?}", mapped.len(), start.elapsed());

    Ok(())
}
