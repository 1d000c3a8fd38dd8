//! Game constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use super::ConfigError;

/// Global game constants instance
static GAME_CONSTANTS: OnceLock<GameConstants> = OnceLock::new();

/// Initialize the global game constants from a TOML file
///
/// Call once at startup, before the first character is built.
/// Returns error if already initialized or if loading fails.
pub fn init_constants(path: &Path) -> Result<(), ConfigError> {
    let constants = GameConstants::load_from_path(path)?;
    GAME_CONSTANTS
        .set(constants)
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Initialize the global game constants with default values
pub fn init_constants_default() -> Result<(), ConfigError> {
    GAME_CONSTANTS
        .set(GameConstants::default())
        .map_err(|_| ConfigError::ValidationError("GameConstants already initialized".to_string()))
}

/// Get a reference to the global game constants
///
/// Falls back to the defaults when nothing was initialized.
pub fn constants() -> &'static GameConstants {
    GAME_CONSTANTS.get_or_init(GameConstants::default)
}

/// Check if constants have been initialized
pub fn constants_initialized() -> bool {
    GAME_CONSTANTS.get().is_some()
}

/// Ensure constants are initialized with defaults (idempotent, useful for tests)
pub fn ensure_constants_initialized() {
    GAME_CONSTANTS.get_or_init(GameConstants::default);
}

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub character: CharacterConstants,
    #[serde(default)]
    pub racial: RacialConstants,
    #[serde(default)]
    pub armor: ArmorConstants,
    #[serde(default)]
    pub resistance: ResistanceConstants,
}

impl GameConstants {
    /// Load constants from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Parse constants from a TOML string
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        let constants: GameConstants = toml::from_str(toml)?;
        constants.validate()?;
        Ok(constants)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.character.level == 0 {
            return Err(ConfigError::ValidationError(
                "character.level must be at least 1".to_string(),
            ));
        }
        if self.resistance.level_factor <= 0.0 {
            return Err(ConfigError::ValidationError(
                "resistance.level_factor must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterConstants {
    /// Level whose catalog base stats seed a new character
    #[serde(default = "default_level")]
    pub level: u32,
}

impl Default for CharacterConstants {
    fn default() -> Self {
        CharacterConstants {
            level: default_level(),
        }
    }
}

fn default_level() -> u32 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacialConstants {
    /// Gnome multiplier on intellect granted by items
    #[serde(default = "default_racial_multiplier")]
    pub gnome_intellect_multiplier: f64,
    /// Human multiplier on spirit granted by items
    #[serde(default = "default_racial_multiplier")]
    pub human_spirit_multiplier: f64,
}

impl Default for RacialConstants {
    fn default() -> Self {
        RacialConstants {
            gnome_intellect_multiplier: default_racial_multiplier(),
            human_spirit_multiplier: default_racial_multiplier(),
        }
    }
}

fn default_racial_multiplier() -> f64 {
    1.05
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmorConstants {
    /// reduction = armor / (armor + level_coefficient * level - level_offset)
    #[serde(default = "default_level_coefficient")]
    pub level_coefficient: f64,
    #[serde(default = "default_level_offset")]
    pub level_offset: f64,
    #[serde(default = "default_level")]
    pub default_attacker_level: u32,
}

impl Default for ArmorConstants {
    fn default() -> Self {
        ArmorConstants {
            level_coefficient: default_level_coefficient(),
            level_offset: default_level_offset(),
            default_attacker_level: default_level(),
        }
    }
}

fn default_level_coefficient() -> f64 {
    467.5
}
fn default_level_offset() -> f64 {
    22167.5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResistanceConstants {
    /// chance = resistance / (level_factor * level) * chance_factor
    #[serde(default = "default_resist_level_factor")]
    pub level_factor: f64,
    #[serde(default = "default_resist_chance_factor")]
    pub chance_factor: f64,
    #[serde(default = "default_level")]
    pub default_caster_level: u32,
}

impl Default for ResistanceConstants {
    fn default() -> Self {
        ResistanceConstants {
            level_factor: default_resist_level_factor(),
            chance_factor: default_resist_chance_factor(),
            default_caster_level: default_level(),
        }
    }
}

fn default_resist_level_factor() -> f64 {
    5.0
}
fn default_resist_chance_factor() -> f64 {
    0.75
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert_eq!(constants.character.level, 60);
        assert!((constants.racial.gnome_intellect_multiplier - 1.05).abs() < f64::EPSILON);
        assert!((constants.armor.level_coefficient - 467.5).abs() < f64::EPSILON);
        assert!((constants.armor.level_offset - 22167.5).abs() < f64::EPSILON);
        assert!((constants.resistance.chance_factor - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[character]
level = 60

[racial]
gnome_intellect_multiplier = 1.05
human_spirit_multiplier = 1.05

[armor]
level_coefficient = 467.5
level_offset = 22167.5
default_attacker_level = 63

[resistance]
level_factor = 5
chance_factor = 0.75
"#;

        let constants = GameConstants::parse(toml).unwrap();
        assert_eq!(constants.armor.default_attacker_level, 63);
        assert_eq!(constants.resistance.default_caster_level, 60);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let constants = GameConstants::parse("[armor]\ndefault_attacker_level = 62\n").unwrap();
        assert_eq!(constants.character.level, 60);
        assert!((constants.racial.human_spirit_multiplier - 1.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_level_rejected() {
        let result = GameConstants::parse("[character]\nlevel = 0\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
