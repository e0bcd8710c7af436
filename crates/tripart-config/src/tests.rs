//! Tests for solver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        worker_count = { count = 4 }
        random_seed = 42
        search_strategy = "fixed_order"
        symmetry_breaking = false
        log_search_progress = true
        output_dir = "solutions"

        [termination]
        seconds_spent_limit = 30
        stall_seconds_limit = 90
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.worker_count, WorkerCount::Count(4));
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.search_strategy, SearchStrategy::FixedOrder);
    assert!(!config.symmetry_breaking);
    assert!(config.log_search_progress);
    assert_eq!(config.output_dir(), Path::new("solutions"));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
    assert_eq!(config.stall_threshold(), Duration::from_secs(90));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        worker_count: auto
        random_seed: 7
        termination:
          minutes_spent_limit: 1
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.worker_count, WorkerCount::Auto);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config.worker_count, WorkerCount::Auto);
    assert_eq!(config.search_strategy, SearchStrategy::Automatic);
    assert!(config.symmetry_breaking);
    assert!(!config.log_search_progress);
    assert_eq!(config.time_limit(), None);
    assert_eq!(
        config.stall_threshold(),
        Duration::from_secs(DEFAULT_STALL_SECONDS)
    );
    assert_eq!(config.output_dir(), Path::new("."));
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_worker_count(3)
        .with_random_seed(123)
        .with_time_limit_seconds(60)
        .with_stall_threshold_seconds(5)
        .with_search_strategy(SearchStrategy::FixedOrder)
        .without_symmetry_breaking()
        .with_output_dir("/tmp/out");

    assert_eq!(config.worker_count.resolve(), 3);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(config.stall_threshold(), Duration::from_secs(5));
    assert_eq!(config.search_strategy, SearchStrategy::FixedOrder);
    assert!(!config.symmetry_breaking);
    assert_eq!(config.output_dir(), Path::new("/tmp/out"));
}

#[test]
fn test_zero_workers_rejected() {
    let err = SolverConfig::from_toml_str("worker_count = { count = 0 }").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_zero_stall_threshold_rejected() {
    let toml = r#"
        [termination]
        stall_seconds_limit = 0
    "#;
    assert!(matches!(
        SolverConfig::from_toml_str(toml),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_worker_count_resolve() {
    assert_eq!(WorkerCount::None.resolve(), 1);
    assert_eq!(WorkerCount::Count(8).resolve(), 8);
    assert!(WorkerCount::Auto.resolve() >= 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SolverConfig::load("definitely/not/here/solver.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_huge_time_limit_saturates() {
    let config = SolverConfig::from_toml_str(&format!(
        "[termination]\nseconds_spent_limit = 10\nminutes_spent_limit = {}\n",
        i64::MAX
    ))
    .unwrap();

    assert_eq!(config.time_limit(), Some(Duration::from_secs(u64::MAX)));
}
