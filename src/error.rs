use thiserror::Error;

/// Tile map construction failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("tile map dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    /// The cell buffer does not hold exactly `width * height` entries.
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    /// A side exceeds `i32::MAX`, the range of cell query coordinates.
    #[error("tile map dimensions {width}x{height} exceed the i32 cell range")]
    TooLarge { width: u32, height: u32 },
}

/// Collision config loading/saving failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The INI file could not be read, parsed or written.
    #[error("config file error: {0}")]
    Io(String),

    #[error("invalid value {value:?} for key {key:?}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let e = MapError::CellCountMismatch { expected: 4, actual: 3 };
        assert_eq!(e.to_string(), "expected 4 cells, got 3");
        let e = MapError::TooLarge { width: 1 << 31, height: 2 };
        assert_eq!(e.to_string(), "tile map dimensions 2147483648x2 exceed the i32 cell range");
        let e = ConfigError::InvalidValue { key: "edge".into(), value: "lava".into() };
        assert_eq!(e.to_string(), r#"invalid value "lava" for key "edge""#);
    }
}
