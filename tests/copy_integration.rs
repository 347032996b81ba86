pub mod common;

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use bean_copier_rs::{
    BeanError,
    core::{
        bean::{Bean, BeanClass, downcast},
        cache::PlanCache,
        converter::{Converter, DefaultConverter},
        copier::{BeanCopier, BeanCopierBuilder},
        mapper::Mapper,
        reflect,
        value::{FieldKind, Value},
    },
    util::datetime::DateTimePattern,
};

use common::{User, UserDo, UserDto, birth, create_data, create_data_list, init_logger};

fn copier() -> BeanCopier {
    BeanCopierBuilder::new().private_cache().build().unwrap()
}

#[test]
fn copy_user_to_user_dto() -> anyhow::Result<()> {
    init_logger();
    let user = User {
        id: 1,
        user_name: "van".to_string(),
    };

    let dto: UserDto = copier().copy(&user)?;

    assert_eq!(dto.id, 1);
    assert_eq!(dto.user_name, "van");
    assert_eq!(dto.gmt_broth, "");
    assert!(dto.ids.is_empty());
    Ok(())
}

#[test]
fn copy_without_converter_skips_mismatched_fields() -> anyhow::Result<()> {
    let dto: UserDto = copier().copy(&create_data())?;

    assert_eq!(dto.user_name, "van");
    assert_eq!(dto.ids, vec![1, 2, 3]);
    assert_eq!(dto.gmt_broth, "");
    assert_eq!(dto.balance, "");
    Ok(())
}

#[test]
fn copy_with_converter_renders_datetime_and_decimal() -> anyhow::Result<()> {
    let dto: UserDto = copier().copy_converted(&create_data())?;

    assert_eq!(dto.gmt_broth, "2019-03-01 06:06:49");
    assert_eq!(dto.balance, "1500");
    assert_eq!(dto.id, 1);
    Ok(())
}

/// Upper-cases every text it produces.
#[derive(Default)]
struct ShoutingConverter {
    inner: DefaultConverter,
    calls: AtomicUsize,
}

impl Converter for ShoutingConverter {
    fn convert(&self, value: &Value, target: FieldKind) -> Result<Value, BeanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.inner.convert(value, target)? {
            Value::Text(text) => Ok(Value::Text(text.to_uppercase())),
            other => Ok(other),
        }
    }
}

#[test]
fn custom_converter_runs_for_every_shared_field() -> anyhow::Result<()> {
    let converter = ShoutingConverter::default();

    let source = create_data();
    let boxed = copier().copy_using(Some(&source), Some(UserDto::class()), &converter)?;
    let dto: UserDto = downcast(boxed)?;

    // id, user_name, gmt_broth, balance and ids
    assert_eq!(converter.calls.load(Ordering::SeqCst), 5);
    assert_eq!(dto.user_name, "VAN");
    assert_eq!(dto.gmt_broth, "2019-03-01 06:06:49");
    assert_eq!(dto.balance, "1500");
    assert_eq!(dto.ids, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn converted_null_is_not_forced_into_text() -> anyhow::Result<()> {
    let source = UserDo {
        gmt_broth: None,
        ..create_data()
    };
    let dto: UserDto = copier().copy_converted(&source)?;
    assert_eq!(dto.gmt_broth, "");
    Ok(())
}

#[test]
fn copy_list_keeps_length_and_order() -> anyhow::Result<()> {
    init_logger();
    let sources = create_data_list(10_000);

    let targets: Vec<UserDto> = copier().copy_list_as(&sources)?;

    assert_eq!(targets.len(), 10_000);
    for (index, target) in targets.iter().enumerate() {
        assert_eq!(target.id, index as i32);
        assert_eq!(target.user_name, format!("van{}", index));
    }
    Ok(())
}

#[test]
fn copy_list_matches_single_copies() -> anyhow::Result<()> {
    let copier = copier();
    let sources = create_data_list(20);

    let boxed = copier.copy_list(Some(sources.as_slice()), Some(UserDto::class()))?;

    for (source, target) in sources.iter().zip(boxed) {
        let single: UserDto =
            downcast(copier.copy_object(Some(source), Some(UserDto::class()))?)?;
        assert_eq!(downcast::<UserDto>(target)?, single);
    }
    Ok(())
}

#[test]
fn copy_list_with_callback_fills_converted_fields() -> anyhow::Result<()> {
    let copier = copier();
    let pattern = DateTimePattern::default();
    let sources = create_data_list(3);

    let targets: Vec<UserDto> =
        copier.copy_list_with_callback(&sources, |source: &UserDo, target: &mut UserDto| {
            if let Some(born) = &source.gmt_broth {
                target.gmt_broth = pattern.format_datetime(born);
            }
        })?;

    assert!(targets.iter().all(|t| t.gmt_broth == "2019-03-01 06:06:49"));
    Ok(())
}

#[test]
fn copied_target_is_independent_of_source() -> anyhow::Result<()> {
    let mut source = create_data();
    let dto: UserDto = copier().copy(&source)?;

    source.ids.push(4);
    source.user_name.push('!');

    assert_eq!(dto.ids, vec![1, 2, 3]);
    assert_eq!(dto.user_name, "van");
    Ok(())
}

#[test]
fn copies_back_into_source_type() -> anyhow::Result<()> {
    let copier = copier();
    let dto: UserDto = copier.copy_converted(&create_data())?;

    let back: UserDo = copier.copy(&dto)?;

    assert_eq!(back.id, 1);
    assert_eq!(back.user_name, "van");
    assert_eq!(back.gmt_broth, None);
    assert_eq!(back.ids, vec![1, 2, 3]);
    Ok(())
}

#[test]
fn global_cache_is_shared_by_default_copiers() -> anyhow::Result<()> {
    let _: UserDto = BeanCopier::default().copy(&User::default())?;

    assert!(PlanCache::global().contains(&User::class(), &UserDto::class()));
    assert!(
        BeanCopier::default()
            .cache()
            .contains(&User::class(), &UserDto::class())
    );
    Ok(())
}

#[test]
fn concurrent_copies_share_one_plan() {
    init_logger();
    let cache = Arc::new(PlanCache::new());
    let copier = BeanCopierBuilder::new().cache(cache.clone()).build().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let copier = copier.clone();
            thread::spawn(move || {
                let sources = create_data_list(200);
                let targets: Vec<UserDto> = copier.copy_list_as(&sources).unwrap();
                assert_eq!(targets.len(), 200);
                assert_eq!(targets[199].user_name, "van199", "worker {}", worker);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 1);
}

#[test]
fn strategies_agree_on_compatible_fields() -> anyhow::Result<()> {
    struct UserMapper;

    impl Mapper<UserDo, UserDto> for UserMapper {
        fn map(&self, source: &UserDo) -> UserDto {
            UserDto {
                id: source.id,
                user_name: source.user_name.clone(),
                ids: source.ids.clone(),
                ..UserDto::default()
            }
        }
    }

    let source = create_data();

    let by_copier: UserDto = copier().copy(&source)?;

    let mut by_reflect = UserDto::default();
    reflect::copy_properties(&source, &mut by_reflect)?;

    let by_mapper = UserMapper.map(&source);

    assert_eq!(by_copier, by_reflect);
    assert_eq!(by_copier, by_mapper);
    assert_eq!(source.gmt_broth, Some(birth()));
    Ok(())
}

#[test]
fn boxed_copy_reports_target_type() -> anyhow::Result<()> {
    let boxed = copier().copy_object(Some(&create_data()), Some(UserDto::class()))?;
    assert_eq!(boxed.bean_type().name(), "UserDto");
    assert_eq!(
        boxed
            .get("user_name")
            .and_then(|v| v.as_text().map(str::to_string)),
        Some("van".to_string())
    );
    Ok(())
}
