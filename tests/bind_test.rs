use envar::{BindError, Envar};
use std::env;

#[derive(Debug, Default, Clone, Envar)]
#[allow(non_snake_case)]
pub struct Service {
    pub Name: String,
    #[envar("SERVICE_PORT")]
    pub Port: i32,
    pub Tags: Vec<String>,
}

#[test]
fn test_end_to_end() {
    env::remove_var("Name");
    env::set_var("SERVICE_PORT", "8080");
    env::set_var("Tags", "a,b");

    let mut service = Service::default();
    envar::bind(&mut service).unwrap();

    assert_eq!(service.Name, "");
    assert_eq!(service.Port, 8080);
    assert_eq!(service.Tags, vec!["a", "b"]);
}

#[derive(Debug, Default, Envar)]
pub struct Scalars {
    pub test_bind_flag: bool,
    pub test_bind_label: String,
    pub test_bind_count: i64,
    pub test_bind_small: i8,
}

#[test]
fn test_field_name_is_the_default_key() {
    env::set_var("test_bind_flag", "True");
    env::set_var("test_bind_label", " spaced ");
    env::set_var("test_bind_count", "-7");
    env::set_var("test_bind_small", "42");

    let mut scalars = Scalars::default();
    envar::bind(&mut scalars).unwrap();

    assert!(scalars.test_bind_flag);
    assert_eq!(scalars.test_bind_label, " spaced ");
    assert_eq!(scalars.test_bind_count, -7);
    assert_eq!(scalars.test_bind_small, 42);
}

#[derive(Debug, Default, Envar)]
pub struct Keyed {
    #[envar(key = "TEST_BIND_KEYED_HOST")]
    pub host: String,
}

#[test]
fn test_explicit_key_is_the_only_key_consulted() {
    env::set_var("host", "from-field-name");
    env::remove_var("TEST_BIND_KEYED_HOST");

    let mut keyed = Keyed::default();
    envar::bind(&mut keyed).unwrap();
    assert_eq!(keyed.host, "");

    env::set_var("TEST_BIND_KEYED_HOST", "from-key");
    envar::bind(&mut keyed).unwrap();
    assert_eq!(keyed.host, "from-key");
}

#[derive(Debug, Default, Envar)]
pub struct Prior {
    #[envar("TEST_BIND_PRIOR_NAME")]
    pub name: String,
    #[envar("TEST_BIND_PRIOR_LIST")]
    pub list: Vec<String>,
}

#[test]
fn test_empty_variable_leaves_field_unchanged() {
    env::set_var("TEST_BIND_PRIOR_NAME", "");
    env::set_var("TEST_BIND_PRIOR_LIST", "");

    let mut prior = Prior {
        name: "kept".to_string(),
        list: vec!["kept".to_string()],
    };
    envar::bind(&mut prior).unwrap();

    assert_eq!(prior.name, "kept");
    assert_eq!(prior.list, vec!["kept"]);
}

#[derive(Debug, Default, Envar)]
pub struct Lists {
    #[envar("TEST_BIND_LIST_EMPTY_MIDDLE")]
    pub middle: Vec<String>,
    #[envar("TEST_BIND_LIST_LEADING")]
    pub leading: Vec<String>,
    #[envar("TEST_BIND_LIST_TRAILING")]
    pub trailing: Vec<String>,
    #[envar("TEST_BIND_LIST_FLAGS")]
    pub flags: Vec<bool>,
    #[envar("TEST_BIND_LIST_NUMBERS")]
    pub numbers: Vec<i16>,
}

#[test]
fn test_list_splitting() {
    env::set_var("TEST_BIND_LIST_EMPTY_MIDDLE", "a,,c");
    env::set_var("TEST_BIND_LIST_LEADING", ",a");
    env::set_var("TEST_BIND_LIST_TRAILING", "a,");
    env::set_var("TEST_BIND_LIST_FLAGS", "true,FALSE,True");
    env::set_var("TEST_BIND_LIST_NUMBERS", "1,2");

    let mut lists = Lists::default();
    envar::bind(&mut lists).unwrap();

    assert_eq!(lists.middle, vec!["a", "", "c"]);
    assert_eq!(lists.leading, vec!["", "a"]);
    assert_eq!(lists.trailing, vec!["a", ""]);
    assert_eq!(lists.flags, vec![true, false, true]);
    assert_eq!(lists.numbers, vec![1, 2]);
}

#[derive(Debug, Default, Clone, Envar)]
pub struct BadList {
    #[envar("TEST_BIND_BAD_LIST_NAME")]
    pub name: String,
    #[envar("TEST_BIND_BAD_LIST_IDS")]
    pub ids: Vec<i64>,
}

#[test]
fn test_bad_list_piece_leaves_list_unassigned() {
    env::set_var("TEST_BIND_BAD_LIST_NAME", "svc");
    env::set_var("TEST_BIND_BAD_LIST_IDS", "1,2,x");

    let mut bad = BadList {
        name: String::new(),
        ids: vec![9],
    };
    let result = envar::bind(&mut bad);

    assert_eq!(
        result,
        Err(BindError::InvalidInteger {
            key: "TEST_BIND_BAD_LIST_IDS".to_string(),
            value: "x".to_string(),
        })
    );
    assert_eq!(bad.name, "svc");
    assert_eq!(bad.ids, vec![9]);
}

#[derive(Debug, Default, Clone, PartialEq, Envar)]
pub struct Mixed {
    #[envar("TEST_BIND_MIXED_BEFORE")]
    pub before: String,
    #[envar("TEST_BIND_MIXED_RATIO")]
    pub ratio: f64,
    #[envar("TEST_BIND_MIXED_AFTER")]
    pub after: bool,
}

#[test]
fn test_unsupported_type_aborts_remaining_fields() {
    env::set_var("TEST_BIND_MIXED_BEFORE", "written");
    env::set_var("TEST_BIND_MIXED_RATIO", "0.5");
    env::set_var("TEST_BIND_MIXED_AFTER", "true");

    let mut mixed = Mixed::default();
    let result = envar::bind(&mut mixed);

    assert_eq!(
        result,
        Err(BindError::UnsupportedType {
            key: "TEST_BIND_MIXED_RATIO".to_string(),
            kind: "f64".to_string(),
        })
    );
    assert_eq!(mixed.before, "written");
    assert!(!mixed.after);
}

#[derive(Debug, Default, Clone, PartialEq, Envar)]
pub struct Atomic {
    #[envar("TEST_BIND_ATOMIC_NAME")]
    pub name: String,
    #[envar("TEST_BIND_ATOMIC_PORT")]
    pub port: i32,
}

#[test]
fn test_bind_atomic_leaves_record_untouched_on_failure() {
    env::set_var("TEST_BIND_ATOMIC_NAME", "svc");
    env::set_var("TEST_BIND_ATOMIC_PORT", "abc");

    let mut atomic = Atomic::default();
    let result = envar::bind_atomic(&mut atomic);

    assert!(matches!(result, Err(BindError::InvalidInteger { .. })));
    assert_eq!(atomic, Atomic::default());

    env::set_var("TEST_BIND_ATOMIC_PORT", "9090");
    envar::bind_atomic(&mut atomic).unwrap();
    assert_eq!(atomic.name, "svc");
    assert_eq!(atomic.port, 9090);
}

#[derive(Debug, Default, Envar)]
pub struct FromEnv {
    #[envar("TEST_BIND_FROM_ENV_DEBUG")]
    pub debug: bool,
    #[envar("TEST_BIND_FROM_ENV_LEVEL")]
    pub level: i16,
}

#[test]
fn test_from_env_starts_from_default() {
    env::set_var("TEST_BIND_FROM_ENV_DEBUG", "FALSE");
    env::remove_var("TEST_BIND_FROM_ENV_LEVEL");

    let config = envar::from_env::<FromEnv>().unwrap();
    assert!(!config.debug);
    assert_eq!(config.level, 0);

    env::set_var("TEST_BIND_FROM_ENV_LEVEL", "70000");
    let result = envar::from_env::<FromEnv>();
    assert_eq!(
        result.unwrap_err(),
        BindError::InvalidInteger {
            key: "TEST_BIND_FROM_ENV_LEVEL".to_string(),
            value: "70000".to_string(),
        }
    );
}

#[derive(Debug, Default, Envar)]
pub struct Flag {
    #[envar("TEST_BIND_FLAG_ENABLED")]
    pub enabled: bool,
}

#[test]
fn test_invalid_boolean() {
    env::set_var("TEST_BIND_FLAG_ENABLED", "1");

    let result = envar::from_env::<Flag>();
    assert_eq!(
        result.unwrap_err(),
        BindError::InvalidBoolean {
            key: "TEST_BIND_FLAG_ENABLED".to_string(),
            value: "1".to_string(),
        }
    );
}

#[derive(Debug, Default, Envar)]
pub struct Wide {
    #[envar("TEST_BIND_WIDE_VALUE")]
    pub value: i128,
    #[envar("TEST_BIND_WIDE_LIST")]
    pub list: Vec<i128>,
}

#[test]
fn test_i128_field() {
    env::set_var("TEST_BIND_WIDE_VALUE", "5");
    env::set_var("TEST_BIND_WIDE_LIST", "-9223372036854775808,7");

    let wide = envar::from_env::<Wide>().unwrap();
    assert_eq!(wide.value, 5);
    assert_eq!(wide.list, vec![i64::MIN as i128, 7]);
}
