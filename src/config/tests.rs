use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, serialized with #[serial].
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, serialized with #[serial].
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_title_guard_env() {
    // SAFETY: Test code only, serialized with #[serial].
    unsafe {
        env::remove_var("TITLE_GUARD_PORT");
        env::remove_var("TITLE_GUARD_BIND_ADDR");
        env::remove_var("TITLE_GUARD_MODEL_PATH");
        env::remove_var("TITLE_GUARD_CORPUS_PATH");
        env::remove_var("TITLE_GUARD_RESTRICTED_WORDS_PATH");
        env::remove_var("TITLE_GUARD_FORBIDDEN_AFFIXES_PATH");
    }
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn valid_config() -> Config {
    let data = manifest_dir().join("data");
    Config {
        corpus_path: data.join("existing_titles.txt"),
        restricted_words_path: data.join("restricted_words.txt"),
        forbidden_affixes_path: data.join("forbidden_prefix_suffix.txt"),
        ..Default::default()
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.model_path.is_none());
    assert_eq!(
        config.corpus_path,
        PathBuf::from("./data/existing_titles.txt")
    );
    assert_eq!(
        config.restricted_words_path,
        PathBuf::from("./data/restricted_words.txt")
    );
    assert_eq!(
        config.forbidden_affixes_path,
        PathBuf::from("./data/forbidden_prefix_suffix.txt")
    );
}

#[test]
fn test_socket_addr() {
    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_title_guard_env();

    let config = Config::from_env().expect("should parse with defaults");
    assert_eq!(config.port, 8080);
    assert!(config.model_path.is_none());
}

#[test]
#[serial]
fn test_from_env_custom_values() {
    clear_title_guard_env();

    with_env_vars(
        &[
            ("TITLE_GUARD_PORT", "5000"),
            ("TITLE_GUARD_BIND_ADDR", "::1"),
            ("TITLE_GUARD_MODEL_PATH", "/models/paraphrase-MiniLM-L6-v2"),
            ("TITLE_GUARD_CORPUS_PATH", "/srv/titles.json"),
            ("TITLE_GUARD_RESTRICTED_WORDS_PATH", "/srv/restricted.txt"),
            ("TITLE_GUARD_FORBIDDEN_AFFIXES_PATH", "/srv/affixes.txt"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(config.port, 5000);
            assert_eq!(
                config.bind_addr,
                IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
            );
            assert_eq!(
                config.model_path,
                Some(PathBuf::from("/models/paraphrase-MiniLM-L6-v2"))
            );
            assert_eq!(config.corpus_path, PathBuf::from("/srv/titles.json"));
            assert_eq!(
                config.restricted_words_path,
                PathBuf::from("/srv/restricted.txt")
            );
            assert_eq!(
                config.forbidden_affixes_path,
                PathBuf::from("/srv/affixes.txt")
            );
        },
    );
}

#[test]
#[serial]
fn test_blank_model_path_means_stub() {
    clear_title_guard_env();

    with_env_vars(&[("TITLE_GUARD_MODEL_PATH", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.model_path.is_none());
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_title_guard_env();

    with_env_vars(&[("TITLE_GUARD_PORT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPort { .. }));
        assert!(err.to_string().starts_with("TITLE_GUARD_PORT"));
    });
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_title_guard_env();

    with_env_vars(&[("TITLE_GUARD_PORT", "eighty")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("eighty"));
    });
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_title_guard_env();

    with_env_vars(&[("TITLE_GUARD_BIND_ADDR", "not.an.ip.address")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    });
}

#[test]
fn test_validate_success() {
    assert!(valid_config().validate().is_ok());

    let config = Config {
        model_path: Some(manifest_dir().join("src")),
        ..valid_config()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_missing_corpus() {
    let config = Config {
        corpus_path: PathBuf::from("/nonexistent/titles.txt"),
        ..valid_config()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::PathNotFound {
            setting: "TITLE_GUARD_CORPUS_PATH",
            ..
        }
    ));
    assert!(err.to_string().contains("/nonexistent/titles.txt"));
}

#[test]
fn test_validate_word_list_is_directory() {
    let config = Config {
        restricted_words_path: manifest_dir().join("src"),
        ..valid_config()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NotAFile {
            setting: "TITLE_GUARD_RESTRICTED_WORDS_PATH",
            ..
        }
    ));
}

#[test]
fn test_validate_model_path_is_file() {
    let config = Config {
        model_path: Some(manifest_dir().join("Cargo.toml")),
        ..valid_config()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotADirectory { .. }));
}

#[test]
fn test_validate_missing_model_path() {
    let config = Config {
        model_path: Some(PathBuf::from("/nonexistent/model")),
        ..valid_config()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}
