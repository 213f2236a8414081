use logtree::fmt::TimePrecision;
use logtree::{Config, Error, Facility, Level, Logger};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn empty_config_is_console_at_info() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config.facility().unwrap(), Facility::Console);
    assert_eq!(config.general.level, "INFO");
    assert_eq!(config.precision(), TimePrecision::Microseconds);
    assert_eq!(config.contention_timeout(), Duration::from_secs(1));
    assert!(config.log_path().is_none());
    assert!(config.output.colors);
    assert!(!config.output.console);
}

#[test]
fn full_config_parses() {
    let config = Config::from_toml_str(
        r#"
        [general]
        process_name = "myapp"
        component = "CORE"
        level = "debug"

        [output]
        facility = "file"
        path = "/var/log/myapp.log"
        precision = "milliseconds"
        colors = false
        console = true
        contention_timeout_ms = 250
        "#,
    )
    .unwrap();

    assert_eq!(config.general.process_name, "myapp");
    assert_eq!(config.general.component, "CORE");
    assert_eq!(config.facility().unwrap(), Facility::File);
    assert_eq!(config.log_path().unwrap().to_str(), Some("/var/log/myapp.log"));
    assert_eq!(config.precision(), TimePrecision::Milliseconds);
    assert_eq!(config.contention_timeout(), Duration::from_millis(250));
}

#[test]
fn tilde_is_expanded() {
    let config = Config::from_toml_str("[output]\npath = \"~/logs/app.log\"").unwrap();
    let path = config.log_path().unwrap();
    assert!(!path.starts_with("~"));
    assert!(path.ends_with("logs/app.log"));
}

#[test]
fn syntax_error_is_reported() {
    assert!(matches!(
        Config::from_toml_str("[output\nfacility = 1"),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn unknown_precision_falls_back() {
    let config = Config::from_toml_str("[output]\nprecision = \"nanoseconds\"").unwrap();
    assert_eq!(config.precision(), TimePrecision::Microseconds);
}

#[test]
fn load_from_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(
        Config::load_from(&tmp.path().join("absent.toml")),
        Err(Error::Io(_))
    ));
}

#[test]
fn logger_from_config_writes_to_file() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("app.log");
    let config_path = tmp.path().join("logtree.toml");
    fs::write(
        &config_path,
        format!(
            "[general]\nprocess_name = \"cfgapp\"\ncomponent = \"MAIN\"\nlevel = \"warning\"\n\
             [output]\nfacility = \"file\"\npath = \"{}\"\nprecision = \"ms\"\n",
            log.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let root = Logger::from_config_with(&config).unwrap();

    assert_eq!(root.process_name(), "cfgapp");
    assert_eq!(root.level(), Level::Warning);
    assert_eq!(root.facility(), Facility::File);
    assert_eq!(root.time_precision(), TimePrecision::Milliseconds);

    root.log(Level::Info, "filtered");
    root.log(Level::Error, "kept");

    let content = fs::read_to_string(&log).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.trim_end().ends_with("[ERROR] [MAIN] kept"));
}

#[test]
fn logger_from_config_rejects_unknown_facility() {
    let config = Config::from_toml_str("[output]\nfacility = \"carrier-pigeon\"").unwrap();
    assert!(matches!(
        Logger::from_config_with(&config),
        Err(Error::InvalidFacility(_))
    ));
}

#[test]
fn logger_from_config_recovers_from_bad_level() {
    let config =
        Config::from_toml_str("[general]\nlevel = \"loud\"\n[output]\nfacility = \"none\"")
            .unwrap();
    let root = Logger::from_config_with(&config).unwrap();
    assert_eq!(root.level(), Level::Info);
    assert_eq!(root.facility(), Facility::None);
}
