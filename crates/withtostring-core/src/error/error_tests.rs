#![allow(non_snake_case)]

use super::*;
use std::io;

#[test]
fn GenerationError___create___uses_exact_template() {
    let err = GenerationError::Create {
        file: "p.AWithToString".into(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
    };

    assert_eq!(
        err.to_string(),
        "Failed to create the file p.AWithToString: access denied"
    );
}

#[test]
fn GenerationError___write___uses_exact_template() {
    let err = GenerationError::Write {
        file: "p/AWithToString.java".into(),
        source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };

    assert_eq!(
        err.to_string(),
        "Failed to write to the file p/AWithToString.java: disk full"
    );
}

#[test]
fn GenerationError___file___returns_target_for_both_variants() {
    let create = GenerationError::Create {
        file: "a".into(),
        source: io::Error::new(io::ErrorKind::Other, "x"),
    };
    let write = GenerationError::Write {
        file: "b".into(),
        source: io::Error::new(io::ErrorKind::Other, "y"),
    };

    assert_eq!(create.file(), "a");
    assert_eq!(write.file(), "b");
}

#[test]
fn GenerationError___source___exposes_io_error() {
    use std::error::Error as _;

    let err = GenerationError::Create {
        file: "a".into(),
        source: io::Error::new(io::ErrorKind::NotFound, "missing"),
    };

    assert!(err.source().is_some());
}

#[test]
fn ConfigError___invalid___displays_message() {
    let err = ConfigError::Invalid("marker_annotation cannot be empty".into());

    assert_eq!(
        err.to_string(),
        "invalid configuration: marker_annotation cannot be empty"
    );
}

#[test]
fn ConfigError___from_io_error___converts() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "not found");

    let err: ConfigError = io_err.into();

    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn ConfigError___from_serde_error___converts_to_json() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: ConfigError = json_err.into();

    assert!(matches!(err, ConfigError::Json(_)));
}
