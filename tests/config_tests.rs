use std::fs;
use std::path::{Path, PathBuf};

use bgpchurn::{ChurnConfig, ChurnError, ConfigError, PrefixUniverse};

const SAMPLE_YAML: &str = "PREFIXES_FILE: prefixes.txt
NUM_DIFFERENT_AS_PATHS: 100
MIN_AS_LENGTH: 1
MAX_AS_LENGTH: 8
INITIAL_WARMUP: 1000
INITIAL_WAIT: 60
MIN_PREFIXES: 10
MAX_PREFIXES: 50
MAX_TOTAL: 5000
REMOVE_PREFIXES: 2
WAITING_TIME: 1.5
NEXT_HOP: 192.0.2.254
";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "churn.yml", SAMPLE_YAML);

    let config = ChurnConfig::load(&path).unwrap();

    assert_eq!(config.prefixes_file, PathBuf::from("prefixes.txt"));
    assert_eq!(config.num_different_as_paths, 100);
    assert_eq!(config.min_as_length, 1);
    assert_eq!(config.max_as_length, 8);
    assert_eq!(config.initial_warmup, 1000);
    assert_eq!(config.initial_wait, 60.0);
    assert_eq!(config.min_prefixes, 10);
    assert_eq!(config.max_prefixes, 50);
    assert_eq!(config.max_total, 5000);
    assert_eq!(config.remove_prefixes, 2.0);
    assert_eq!(config.waiting_time, 1.5);
    assert_eq!(config.next_hop, "192.0.2.254");
    assert_eq!(config.resolve_prefixes_file(&path), dir.path().join("prefixes.txt"));
}

#[test]
fn test_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = ChurnConfig::from_yaml_str(SAMPLE_YAML).unwrap();
    let path = write_file(dir.path(), "churn.json", &serde_json::to_string(&yaml).unwrap());

    assert_eq!(ChurnConfig::load(&path).unwrap(), yaml);
}

#[test]
fn test_missing_key_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let without_next_hop: String = SAMPLE_YAML
        .lines()
        .filter(|l| !l.starts_with("NEXT_HOP"))
        .map(|l| format!("{}\n", l))
        .collect();
    let path = write_file(dir.path(), "churn.yaml", &without_next_hop);

    match ChurnConfig::load(&path) {
        Err(ChurnError::Config(ConfigError::Parse { message, .. })) => {
            assert!(message.contains("NEXT_HOP"), "{}", message)
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.yml");
    assert!(matches!(ChurnConfig::load(&missing), Err(ChurnError::Io { .. })));
    assert!(matches!(PrefixUniverse::from_file(&missing), Err(ChurnError::Io { .. })));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "churn.ini", SAMPLE_YAML);
    assert!(matches!(
        ChurnConfig::load(&path),
        Err(ChurnError::Config(ConfigError::UnsupportedFormat { .. }))
    ));
}

#[test]
fn test_bound_inversions_rejected() {
    let inverted_as = SAMPLE_YAML.replace("MIN_AS_LENGTH: 1", "MIN_AS_LENGTH: 9");
    assert!(matches!(
        ChurnConfig::from_yaml_str(&inverted_as),
        Err(ConfigError::InvertedBounds { min: 9, max: 8, .. })
    ));

    let inverted_prefixes = SAMPLE_YAML.replace("MIN_PREFIXES: 10", "MIN_PREFIXES: 51");
    assert!(matches!(
        ChurnConfig::from_yaml_str(&inverted_prefixes),
        Err(ConfigError::InvertedBounds { min: 51, max: 50, .. })
    ));

    let no_paths = SAMPLE_YAML.replace("NUM_DIFFERENT_AS_PATHS: 100", "NUM_DIFFERENT_AS_PATHS: 0");
    assert!(matches!(
        ChurnConfig::from_yaml_str(&no_paths),
        Err(ConfigError::EmptyPathPool)
    ));

    let too_much = SAMPLE_YAML.replace("REMOVE_PREFIXES: 2", "REMOVE_PREFIXES: 120");
    assert!(matches!(
        ChurnConfig::from_yaml_str(&too_much),
        Err(ConfigError::OutOfRange { key: "REMOVE_PREFIXES", .. })
    ));

    let negative_wait = SAMPLE_YAML.replace("WAITING_TIME: 1.5", "WAITING_TIME: -1");
    assert!(matches!(
        ChurnConfig::from_yaml_str(&negative_wait),
        Err(ConfigError::OutOfRange { key: "WAITING_TIME", .. })
    ));

    let endless_wait = SAMPLE_YAML.replace("INITIAL_WAIT: 60", "INITIAL_WAIT: 1e30");
    assert!(matches!(
        ChurnConfig::from_yaml_str(&endless_wait),
        Err(ConfigError::OutOfRange { key: "INITIAL_WAIT", .. })
    ));

    let endless_cycle = SAMPLE_YAML.replace("WAITING_TIME: 1.5", "WAITING_TIME: 1e30");
    assert!(matches!(
        ChurnConfig::from_yaml_str(&endless_cycle),
        Err(ConfigError::OutOfRange { key: "WAITING_TIME", .. })
    ));
}

#[test]
fn test_absolute_prefixes_file() {
    let dir = tempfile::tempdir().unwrap();
    let absolute = dir.path().join("list.txt");
    let yaml = SAMPLE_YAML.replace("prefixes.txt", &absolute.display().to_string());
    let config = ChurnConfig::from_yaml_str(&yaml).unwrap();

    assert_eq!(config.resolve_prefixes_file(Path::new("/etc/churn/churn.yml")), absolute);
}

#[test]
fn test_prefix_file_set_semantics() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "prefixes.txt",
        "10.0.0.0/24\n  10.0.1.0/24  \n\n10.0.0.0/24\n2001:db8::/32\nnot-a-prefix\n",
    );

    let universe = PrefixUniverse::from_file(&path).unwrap();

    assert_eq!(universe.len(), 4);
    assert!(universe.contains("10.0.0.0/24"));
    assert!(universe.contains("10.0.1.0/24"));
    assert!(universe.contains("2001:db8::/32"));
    // Tokens are opaque; unparsable ones are kept.
    assert!(universe.contains("not-a-prefix"));
    assert!(!universe.contains(""));
}
