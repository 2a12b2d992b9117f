use std::io::Write;

use t3tspray_config::{ConfigError, SprayConfig};

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().expect("temp file");
	writeln!(file, "base_identifier = \"03F0FE00000000AA\"\nshort_codes = [\"FE00\"]").unwrap();

	let config = SprayConfig::load(file.path()).unwrap();
	assert!(config.enabled);
	assert_eq!(config.base_identifier, "03F0FE00000000AA");
	assert_eq!(config.short_codes, vec!["FE00"]);
}

#[test]
fn load_reports_missing_file_path() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = dir.path().join("absent.toml");

	match SprayConfig::load(&path) {
		Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("expected an I/O error, got {other:?}"),
	}
}
