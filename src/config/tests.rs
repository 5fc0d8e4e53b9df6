use super::Config;
use crate::error::DjstartError;
use crate::exit_codes;
use tempfile::TempDir;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.python_alias, "python3");
    assert_eq!(config.venv_name, ".venv");
    assert_eq!(config.apps_list(), vec!["home"]);
}

#[test]
fn yaml_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.project_dir = "films_project".to_string();
    config.apps = "films,budget".to_string();
    config.language = "pt-br".to_string();

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(parsed.project_dir, "films_project");
    assert_eq!(parsed.apps_list(), vec!["films", "budget"]);
    assert_eq!(parsed.language, "pt-br");
}

#[test]
fn from_yaml_applies_defaults_for_missing_fields() {
    let config = Config::from_yaml("project_dir: mysite\n").unwrap();
    assert_eq!(config.project_dir, "mysite");
    assert_eq!(config.python_alias, "python3");
    assert_eq!(config.project_module, "project_main");
}

#[test]
fn from_yaml_ignores_unknown_fields() {
    let config = Config::from_yaml("project_dir: mysite\nfuture_knob: 42\n").unwrap();
    assert_eq!(config.project_dir, "mysite");
}

#[test]
fn from_yaml_rejects_malformed_yaml() {
    let result = Config::from_yaml("apps: [unclosed\n");
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, DjstartError::ConfigError(_)));
    assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
}

#[test]
fn load_missing_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = Config::load(temp_dir.path().join("nope.yaml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, DjstartError::ConfigError(_)));
    assert!(err.to_string().contains("djstart init"));
}

#[test]
fn load_reads_file_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("djstart.yaml");
    std::fs::write(&path, "apps: films,budget\ntimezone: America/Sao_Paulo\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.apps_list(), vec!["films", "budget"]);
    assert_eq!(config.timezone, "America/Sao_Paulo");
}

#[test]
fn apps_list_single_bare_name() {
    let mut config = Config::default();
    config.apps = "films".to_string();
    assert_eq!(config.apps_list(), vec!["films"]);
}

#[test]
fn apps_list_trims_whitespace_and_drops_empties() {
    let mut config = Config::default();
    config.apps = " films , budget ,, authentication,".to_string();
    assert_eq!(config.apps_list(), vec!["films", "budget", "authentication"]);
}

#[test]
fn apps_list_preserves_order() {
    let mut config = Config::default();
    config.apps = "films,budget,public,authentication".to_string();
    assert_eq!(
        config.apps_list(),
        vec!["films", "budget", "public", "authentication"]
    );
}

#[test]
fn validate_rejects_empty_app_list() {
    let mut config = Config::default();
    config.apps = " , ,".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("at least one app"));
}

#[test]
fn validate_rejects_non_identifier_app_name() {
    let mut config = Config::default();
    config.apps = "films,my-app".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("my-app"));
    assert!(err.to_string().contains("identifier"));
}

#[test]
fn validate_rejects_duplicate_app_names() {
    let mut config = Config::default();
    config.apps = "films,budget,films".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn validate_rejects_bad_project_module() {
    let mut config = Config::default();
    config.project_module = "1main".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_path_like_names() {
    let mut config = Config::default();
    config.project_dir = "nested/dir".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.venv_name = "..".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_empty_alias() {
    let mut config = Config::default();
    config.python_alias = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn validate_accepts_multiword_alias() {
    let mut config = Config::default();
    config.python_alias = "py -3".to_string();
    assert!(config.validate().is_ok());
}
