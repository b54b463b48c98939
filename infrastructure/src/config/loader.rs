//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILENAMES: [&str; 2] = ["parley.toml", ".parley.toml"];
const ENV_PREFIX: &str = "PARLEY_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PARLEY_` environment variables, `__` separating sections
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./parley.toml` or `./.parley.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/parley/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// `$XDG_CONFIG_HOME/parley/config.toml`, or the platform equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("parley").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./parley.toml or ./.parley.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.model, "gpt-4o");
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("parley"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "parley.toml",
                r#"
                [api]
                model = "gpt-4o-mini"
                "#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.model, "gpt-4o-mini");
            assert_eq!(config.api.base_url, "https://api.openai.com/v1");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("parley.toml", "[api]\nmodel = \"project\"\n")?;
            jail.create_file("custom.toml", "[api]\nmodel = \"explicit\"\n")?;

            let path = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.api.model, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file(".parley.toml", "[api]\nmodel = \"from-file\"\n")?;
            jail.set_env("PARLEY_API__MODEL", "from-env");
            jail.set_env("PARLEY_REPL__SHOW_PROGRESS", "false");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.model, "from-env");
            assert!(!config.repl.show_progress);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("parley.toml", "[api]\nmax_image_bytes = \"lots\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
