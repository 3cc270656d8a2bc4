use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartTab {
    Home,
    Research,
    Teaching,
}

/// Launch defaults that can be saved to the config file with `--save`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_mouse: bool,
    pub theme: Option<ThemeMode>,
    pub tab: Option<StartTab>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_mouse: self.no_mouse || other.no_mouse,
            theme: other.theme.or(self.theme),
            tab: other.tab.or(self.tab),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("vita").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("vita")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("vita").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("vita").join("config");
        }
    }

    PathBuf::from(".vitarc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".vitarc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# vita defaults (saved with --save)".to_string());
    if flags.no_mouse {
        lines.push("--no-mouse".to_string());
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        lines.push(format!("--theme {}", theme_str));
    }
    if let Some(tab) = flags.tab {
        let tab_str = match tab {
            StartTab::Home => "home",
            StartTab::Research => "research",
            StartTab::Teaching => "teaching",
        };
        lines.push(format!("--tab {}", tab_str));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-mouse" {
            flags.no_mouse = true;
        } else if token == "--theme" {
            if let Some(next) = tokens.get(i + 1) {
                flags.theme = parse_theme(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--theme=") {
            flags.theme = parse_theme(value);
        } else if token == "--tab" {
            if let Some(next) = tokens.get(i + 1) {
                flags.tab = parse_tab(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--tab=") {
            flags.tab = parse_tab(value);
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

fn parse_tab(s: &str) -> Option<StartTab> {
    match s {
        "home" => Some(StartTab::Home),
        "research" => Some(StartTab::Research),
        "teaching" => Some(StartTab::Teaching),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "vita".to_string(),
            "--no-mouse".to_string(),
            "--theme".to_string(),
            "dark".to_string(),
            "--tab=research".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.no_mouse);
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert_eq!(flags.tab, Some(StartTab::Research));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_unknown_values() {
        let args = vec!["--theme".to_string(), "sepia".to_string()];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.theme, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_mouse: true,
            theme: Some(ThemeMode::Light),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            theme: Some(ThemeMode::Dark),
            tab: Some(StartTab::Teaching),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_mouse);
        assert_eq!(merged.theme, Some(ThemeMode::Dark));
        assert_eq!(merged.tab, Some(StartTab::Teaching));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".vitarc");
        let flags = ConfigFlags {
            no_mouse: true,
            theme: Some(ThemeMode::Dark),
            tab: Some(StartTab::Research),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }
}
