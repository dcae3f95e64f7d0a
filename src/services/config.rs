use crate::domain::constants::{CONFIG_ENV, DEFAULT_CONFIG_FILE};
use crate::domain::models::Config;
use crate::error::CheckError;
use std::path::{Path, PathBuf};

pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("unable to read config {}: {}", path.display(), e))?;
    let config: Config = toml::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    validate_config(&config)
        .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
    Ok(config)
}

/// Rejects values that would only fail later, deep inside a run.
pub fn validate_config(config: &Config) -> Result<(), CheckError> {
    if config.source_set.trim().is_empty() {
        return Err(CheckError::Configuration(
            "source_set must not be empty".to_string(),
        ));
    }
    if let Some(t) = config.targets.iter().find(|t| t.trim().is_empty()) {
        return Err(CheckError::Configuration(format!(
            "invalid target name '{}'",
            t
        )));
    }
    for module in &config.exclude {
        let parts: Vec<&str> = module.trim().split(':').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(CheckError::Configuration(format!(
                "exclude entry '{}' is not group:artifact",
                module
            )));
        }
    }
    Ok(())
}

/// Explicit `--config` first, then `$KMPMT_CONFIG`, then `./kmpmt.toml` if it
/// exists. Without any of these the defaults apply.
pub fn resolve_config(cli_config: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = cli_config {
        return Ok((load_config_file(path)?, Some(path.to_path_buf())));
    }
    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(env_path);
        return Ok((load_config_file(&path)?, Some(path)));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Ok((load_config_file(&local)?, Some(local)));
    }
    Ok((Config::default(), None))
}

#[cfg(test)]
mod tests {
    use super::{load_config_file, validate_config};
    use crate::domain::models::Config;
    use crate::error::CheckError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kmpmt.toml");
        fs::write(&path, "").unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.source_set, "commonMain");
        assert_eq!(
            config.output_dir,
            std::path::PathBuf::from("build/reports/kmp-missing-targets")
        );
        assert!(!config.ignore_targetless);
        assert!(!config.native.include_deprecated);
    }

    #[test]
    fn reads_all_sections() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kmpmt.toml");
        fs::write(
            &path,
            r#"
project = "app"
source_set = "appleMain"
targets = ["iosArm64", "macosArm64"]
repositories = ["https://repo.maven.apache.org/maven2", "~/.m2/repository"]
exclude = ["org.jetbrains:annotations"]
ignore_targetless = true

[native]
include_deprecated = true
targets = { linux_riscv64 = false }
"#,
        )
        .unwrap();
        let config = load_config_file(&path).unwrap();
        assert_eq!(config.project.as_deref(), Some("app"));
        assert_eq!(config.source_set, "appleMain");
        assert_eq!(config.targets, vec!["iosArm64", "macosArm64"]);
        assert_eq!(config.repositories.len(), 2);
        assert_eq!(config.exclude, vec!["org.jetbrains:annotations"]);
        assert!(config.ignore_targetless);
        assert!(config.native.include_deprecated);
        assert_eq!(config.native.targets.get("linux_riscv64"), Some(&false));
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "targets = [").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn malformed_exclude_is_rejected() {
        let config = Config {
            exclude: vec!["org.jetbrains:annotations:13.0".to_string()],
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, CheckError::Configuration(_)));
        assert!(err.to_string().contains("group:artifact"));
    }

    #[test]
    fn blank_source_set_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("kmpmt.toml");
        fs::write(&path, "source_set = \"  \"\n").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("source_set must not be empty"));
    }
}
