//! Effect parser - typed bonuses from item effect descriptions
//!
//! Item effects reference spells whose names follow a loose vocabulary:
//! `Increase Spell Dam 18`, `Increased Critical`, `Attack Power 40`. A
//! bonus category is recognized when the text ends with its label,
//! optionally followed by whitespace and an integer magnitude. Labels
//! starting with a verb accept either inflection ("Increase" or
//! "Increased"), since the vocabulary uses both.

use item_core::MagicSchool;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recognized bonus categories, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusCategory {
    SpellDamage,
    FireDamage,
    ShadowDamage,
    NatureDamage,
    FrostDamage,
    HolyDamage,
    ArcaneDamage,
    Healing,
    CriticalSpell,
    Critical,
    ManaRegen,
    Defense,
    Dodge,
    Parry,
    AttackPower,
    HitChance,
}

/// Verb prefixes a verb-led label matches
const VERB_FORMS: [&str; 2] = ["Increase ", "Increased "];

impl BonusCategory {
    /// Every category in match priority order
    ///
    /// No label stem is a suffix of a later one, so the first match is
    /// always the most specific.
    pub fn all() -> &'static [BonusCategory] {
        &[
            BonusCategory::SpellDamage,
            BonusCategory::FireDamage,
            BonusCategory::ShadowDamage,
            BonusCategory::NatureDamage,
            BonusCategory::FrostDamage,
            BonusCategory::HolyDamage,
            BonusCategory::ArcaneDamage,
            BonusCategory::Healing,
            BonusCategory::CriticalSpell,
            BonusCategory::Critical,
            BonusCategory::ManaRegen,
            BonusCategory::Defense,
            BonusCategory::Dodge,
            BonusCategory::Parry,
            BonusCategory::AttackPower,
            BonusCategory::HitChance,
        ]
    }

    /// Canonical label, as it appears in the effect vocabulary
    pub fn label(self) -> &'static str {
        match self {
            BonusCategory::SpellDamage => "Increase Spell Dam",
            BonusCategory::FireDamage => "Increase Fire Dam",
            BonusCategory::ShadowDamage => "Increase Shadow Dam",
            BonusCategory::NatureDamage => "Increase Nature Dam",
            BonusCategory::FrostDamage => "Increase Frost Dam",
            BonusCategory::HolyDamage => "Increase Holy Dam",
            BonusCategory::ArcaneDamage => "Increase Arcane Dam",
            BonusCategory::Healing => "Increase Healing",
            BonusCategory::CriticalSpell => "Increased Critical Spell",
            BonusCategory::Critical => "Increased Critical",
            BonusCategory::ManaRegen => "Increased Mana Regen",
            BonusCategory::Defense => "Increased Defense",
            BonusCategory::Dodge => "Increased Dodge",
            BonusCategory::Parry => "Increased Parry",
            BonusCategory::AttackPower => "Attack Power",
            BonusCategory::HitChance => "Increased Hit Chance",
        }
    }

    /// Label without its leading verb
    fn stem(self) -> &'static str {
        let label = self.label();
        VERB_FORMS
            .iter()
            .rev()
            .find_map(|verb| label.strip_prefix(verb))
            .unwrap_or(label)
    }

    fn is_verb_led(self) -> bool {
        self.stem().len() != self.label().len()
    }

    /// School of a school-specific spell damage bonus
    pub fn school(self) -> Option<MagicSchool> {
        match self {
            BonusCategory::HolyDamage => Some(MagicSchool::Holy),
            BonusCategory::FireDamage => Some(MagicSchool::Fire),
            BonusCategory::NatureDamage => Some(MagicSchool::Nature),
            BonusCategory::FrostDamage => Some(MagicSchool::Frost),
            BonusCategory::ShadowDamage => Some(MagicSchool::Shadow),
            BonusCategory::ArcaneDamage => Some(MagicSchool::Arcane),
            _ => None,
        }
    }

    /// Look a category up by its canonical label
    pub fn from_label(label: &str) -> Option<BonusCategory> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }

    /// Whether `body` (text with any magnitude already removed) ends with this label
    fn matches(self, body: &str) -> bool {
        let Some(head) = body.strip_suffix(self.stem()) else {
            return false;
        };
        !self.is_verb_led() || VERB_FORMS.iter().any(|verb| head.ends_with(verb))
    }
}

impl fmt::Display for BonusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recognized bonus and its magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectBonus {
    pub category: BonusCategory,
    pub magnitude: i32,
}

/// Split a trailing whitespace-separated integer off `text`
fn split_magnitude(text: &str) -> (&str, Option<i32>) {
    let head = text.trim_end_matches(|c: char| c.is_ascii_digit());
    if head.len() == text.len() {
        return (text, None);
    }
    let body = head.trim_end();
    if body.len() == head.len() {
        // Digits glued to a word are part of the text
        return (text, None);
    }
    match text[head.len()..].parse::<i32>() {
        Ok(magnitude) => (body, Some(magnitude)),
        Err(_) => (text, None),
    }
}

/// Parse an effect description into a typed bonus
///
/// `fallback` is the magnitude used when the text carries none (the
/// effect's stored base points). Returns `None` for unrecognized text.
pub fn parse_effect(text: &str, fallback: i32) -> Option<EffectBonus> {
    let (body, magnitude) = split_magnitude(text);
    BonusCategory::all()
        .iter()
        .copied()
        .find(|category| category.matches(body))
        .map(|category| EffectBonus {
            category,
            magnitude: magnitude.unwrap_or(fallback),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_categories() {
        assert_eq!(BonusCategory::all().len(), 16);
        for category in BonusCategory::all() {
            assert_eq!(BonusCategory::from_label(category.label()), Some(*category));
        }
    }

    #[test]
    fn test_no_stem_shadows_a_later_category() {
        let all = BonusCategory::all();
        for (i, earlier) in all.iter().enumerate() {
            for later in &all[i + 1..] {
                assert!(
                    !later.stem().ends_with(earlier.stem()),
                    "{} would shadow {}",
                    earlier.label(),
                    later.label()
                );
            }
        }
    }

    #[test]
    fn test_trailing_magnitude_overrides_base_points() {
        let bonus = parse_effect("Increase Critical Spell 15", 1).unwrap();
        assert_eq!(bonus.category, BonusCategory::CriticalSpell);
        assert_eq!(bonus.magnitude, 15);
    }

    #[test]
    fn test_fallback_magnitude() {
        let bonus = parse_effect("Increased Critical", 1).unwrap();
        assert_eq!(bonus.category, BonusCategory::Critical);
        assert_eq!(bonus.magnitude, 1);

        let bonus = parse_effect("Increased Critical Spell", 2).unwrap();
        assert_eq!(bonus.category, BonusCategory::CriticalSpell);
        assert_eq!(bonus.magnitude, 2);
    }

    #[test]
    fn test_school_spell_damage() {
        let bonus = parse_effect("Increase Fire Dam 43", 42).unwrap();
        assert_eq!(bonus.category, BonusCategory::FireDamage);
        assert_eq!(bonus.magnitude, 43);
        assert_eq!(bonus.category.school(), Some(MagicSchool::Fire));
        assert_eq!(BonusCategory::SpellDamage.school(), None);
    }

    #[test]
    fn test_unanchored_prefix() {
        let bonus = parse_effect("Greater Attack Power 40", 39).unwrap();
        assert_eq!(bonus.category, BonusCategory::AttackPower);
        assert_eq!(bonus.magnitude, 40);
    }

    #[test]
    fn test_verb_required_for_verb_led_labels() {
        assert!(parse_effect("Spell Dam 10", 10).is_none());
        assert!(parse_effect("Decreased Dodge 1", 1).is_none());
        assert_eq!(
            parse_effect("Increase Dodge 1", 0).map(|b| b.category),
            Some(BonusCategory::Dodge)
        );
    }

    #[test]
    fn test_unrecognized_text() {
        assert!(parse_effect("Frost Oil", 5).is_none());
        assert!(parse_effect("", 5).is_none());
        assert!(parse_effect("Increased Critical Spell now", 5).is_none());
    }

    #[test]
    fn test_glued_digits_are_not_a_magnitude() {
        assert!(parse_effect("Attack Power40", 40).is_none());
    }

    #[test]
    fn test_whitespace_before_magnitude() {
        let bonus = parse_effect("Increased Hit Chance\t2", 0).unwrap();
        assert_eq!(bonus.category, BonusCategory::HitChance);
        assert_eq!(bonus.magnitude, 2);
    }
}
