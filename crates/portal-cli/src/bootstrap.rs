use anyhow::Context;
use portal_config::PortalConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PortalConfig> {
    let config = PortalConfig::load_with_dotenv().context("failed to load portal config")?;
    apply_overrides(config, flags)
}

fn apply_overrides(mut config: PortalConfig, flags: &GlobalFlags) -> anyhow::Result<PortalConfig> {
    if let Some(url) = &flags.api_url {
        config.api.base_url.clone_from(url);
        config
            .api
            .validate()
            .context("invalid --api-url")?;
    }

    if let Some(path) = &flags.session_file {
        config.session.path = path.to_string_lossy().into_owned();
        config.session.ephemeral = false;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn flags(api_url: Option<&str>, session_file: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: None,
            quiet: false,
            verbose: false,
            api_url: api_url.map(str::to_string),
            session_file: session_file.map(PathBuf::from),
        }
    }

    #[test]
    fn no_flags_keep_loaded_values() {
        let config = apply_overrides(PortalConfig::default(), &flags(None, None)).expect("config");
        assert_eq!(config.api.base_url, portal_config::DEFAULT_BASE_URL);
        assert!(config.session.path.is_empty());
    }

    #[test]
    fn api_url_flag_replaces_base_url() {
        let config = apply_overrides(
            PortalConfig::default(),
            &flags(Some("https://portal.example.edu"), None),
        )
        .expect("config");
        assert_eq!(config.api.base_url, "https://portal.example.edu");
    }

    #[test]
    fn invalid_api_url_flag_is_rejected() {
        let result = apply_overrides(PortalConfig::default(), &flags(Some("ftp://x"), None));
        assert!(result.is_err());
    }

    #[test]
    fn session_file_flag_turns_off_ephemeral_mode() {
        let mut loaded = PortalConfig::default();
        loaded.session.ephemeral = true;
        let config = apply_overrides(loaded, &flags(None, Some("/tmp/s.json"))).expect("config");
        assert_eq!(config.session.path, "/tmp/s.json");
        assert!(!config.session.ephemeral);
    }
}
