//! Collision configuration.
//!
//! Holds the two policy knobs of the collision core and reads them from the
//! host game's INI file. Missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [collision]
//! ; solid | open | wrap
//! edge = solid
//! ; horizontal | vertical
//! tie_break = horizontal
//! ```

use configparser::ini::Ini;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::types::{EdgePolicy, TieBreak};

const SECTION: &str = "collision";
const KEY_EDGE: &str = "edge";
const KEY_TIE_BREAK: &str = "tie_break";

/// Policies shared by the tile map and the resolver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// How cells outside the map answer solidity queries.
    pub edge: EdgePolicy,
    /// Fast axis on equal horizontal and vertical displacement.
    pub tie_break: TieBreak,
}

impl CollisionConfig {
    /// Load from an INI file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        let mut cfg = Self::default();
        if let Some(v) = ini.get(SECTION, KEY_EDGE) {
            cfg.edge = parse_edge(&v)?;
        }
        if let Some(v) = ini.get(SECTION, KEY_TIE_BREAK) {
            cfg.tie_break = parse_tie_break(&v)?;
        }

        info!(
            "Loaded collision config from {}: edge={:?}, tie_break={:?}",
            path.display(),
            cfg.edge,
            cfg.tie_break
        );
        Ok(cfg)
    }

    /// Write to an INI file, creating it if needed.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.set(SECTION, KEY_EDGE, Some(edge_name(self.edge).to_string()));
        ini.set(SECTION, KEY_TIE_BREAK, Some(tie_break_name(self.tie_break).to_string()));
        ini.write(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        info!("Saved collision config to {}", path.display());
        Ok(())
    }
}

fn parse_edge(value: &str) -> Result<EdgePolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "solid" => Ok(EdgePolicy::Solid),
        "open" => Ok(EdgePolicy::Open),
        "wrap" => Ok(EdgePolicy::Wrap),
        _ => Err(ConfigError::InvalidValue { key: KEY_EDGE.into(), value: value.into() }),
    }
}

fn parse_tie_break(value: &str) -> Result<TieBreak, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "horizontal" | "x" => Ok(TieBreak::Horizontal),
        "vertical" | "y" => Ok(TieBreak::Vertical),
        _ => Err(ConfigError::InvalidValue { key: KEY_TIE_BREAK.into(), value: value.into() }),
    }
}

fn edge_name(edge: EdgePolicy) -> &'static str {
    match edge {
        EdgePolicy::Solid => "solid",
        EdgePolicy::Open => "open",
        EdgePolicy::Wrap => "wrap",
    }
}

fn tie_break_name(tie_break: TieBreak) -> &'static str {
    match tie_break {
        TieBreak::Horizontal => "horizontal",
        TieBreak::Vertical => "vertical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_boundary_wall_and_horizontal_tie() {
        let cfg = CollisionConfig::default();
        assert_eq!(cfg.edge, EdgePolicy::Solid);
        assert_eq!(cfg.tie_break, TieBreak::Horizontal);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[collision]\nedge = Open").unwrap();
        let cfg = CollisionConfig::load_from_file(file.path()).unwrap();
        assert_eq!(cfg.edge, EdgePolicy::Open);
        assert_eq!(cfg.tie_break, TieBreak::Horizontal);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collision.ini");
        let cfg = CollisionConfig { edge: EdgePolicy::Wrap, tie_break: TieBreak::Vertical };
        cfg.save_to_file(&path).unwrap();
        assert_eq!(CollisionConfig::load_from_file(&path).unwrap(), cfg);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[collision]\ntie_break = diagonal").unwrap();
        let err = CollisionConfig::load_from_file(file.path()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: "tie_break".into(), value: "diagonal".into() }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CollisionConfig::load_from_file(dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_embeds_in_host_json_settings() {
        let cfg: CollisionConfig = serde_json::from_str(r#"{"edge":"wrap"}"#).unwrap();
        assert_eq!(cfg.edge, EdgePolicy::Wrap);
        assert_eq!(cfg.tie_break, TieBreak::Horizontal);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"edge":"wrap","tie_break":"horizontal"}"#);
    }
}
