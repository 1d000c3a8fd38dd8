//! Stat formulas - class and race dependent derivation rules
//!
//! Pure functions; `derive_stats` recomputes every derived stat from
//! scratch.

use super::{Accumulators, DerivedStats, PrimaryStats};
use catalog_core::BaseHpMana;
use item_core::{CharacterClass, Race};

/// Recompute every derived stat
pub fn derive_stats(
    class: CharacterClass,
    race: Race,
    base: &BaseHpMana,
    primary: &PrimaryStats,
    acc: &Accumulators,
) -> DerivedStats {
    DerivedStats {
        hp: hit_points(race, base.base_hp, primary.stamina, acc.bonus_hp),
        mana: mana(base.base_mana, primary.intellect),
        armor: armor(primary.agility, acc.base_armor),
        melee_attack_power: melee_attack_power(
            class,
            primary.strength,
            primary.agility,
            acc.base_attack_power,
        ),
        ranged_attack_power: ranged_attack_power(class, primary.agility, acc.base_attack_power),
        spell_power: acc.spell_power,
        healing_power: acc.healing_power,
        crit: crit_chance(class, primary.agility, acc.base_crit),
        spell_crit: spell_crit_chance(class, primary.intellect, acc.base_spell_crit),
        mana_regen: mana_regen(class, primary.spirit, acc.mana_regen_bonus),
        dodge: dodge_chance(class, primary.agility, acc.base_dodge),
        parry: acc.parry,
        defence: acc.defence,
        hit_chance: acc.hit_chance,
    }
}

pub fn hit_points(race: Race, base_hp: f64, stamina: f64, bonus_hp: f64) -> f64 {
    let per_stamina = if race == Race::Tauren { 10.5 } else { 10.0 };
    base_hp + stamina * per_stamina + bonus_hp
}

pub fn mana(base_mana: f64, intellect: f64) -> f64 {
    base_mana + intellect * 15.0
}

pub fn armor(agility: f64, base_armor: f64) -> f64 {
    agility * 2.0 + base_armor
}

pub fn melee_attack_power(
    class: CharacterClass,
    strength: f64,
    agility: f64,
    base_attack_power: f64,
) -> f64 {
    use CharacterClass::*;

    let per_strength = match class {
        Hunter | Mage | Priest | Rogue | Warlock => 1.0,
        _ => 2.0,
    };
    let mut power = base_attack_power + strength * per_strength;
    if matches!(class, Rogue | Druid | Hunter) {
        power += agility;
    }
    power
}

/// Ranged attack power; 0 for classes without a ranged agility scaling
pub fn ranged_attack_power(class: CharacterClass, agility: f64, base_attack_power: f64) -> f64 {
    match class {
        CharacterClass::Rogue | CharacterClass::Warrior => base_attack_power + agility,
        CharacterClass::Hunter => base_attack_power + agility * 2.0,
        _ => 0.0,
    }
}

pub fn crit_chance(class: CharacterClass, agility: f64, base_crit: f64) -> f64 {
    use CharacterClass::*;

    let agility_per_point = match class {
        Druid | Paladin | Shaman | Warrior => 20.0,
        Rogue => 29.0,
        Hunter => 53.0,
        _ => return base_crit,
    };
    base_crit + agility / agility_per_point
}

pub fn spell_crit_chance(class: CharacterClass, intellect: f64, base_spell_crit: f64) -> f64 {
    let intellect_per_point = if class == CharacterClass::Paladin { 54.0 } else { 60.0 };
    base_spell_crit + intellect / intellect_per_point
}

/// Mana regeneration; classes without a spirit scaling keep the bonus term
pub fn mana_regen(class: CharacterClass, spirit: f64, mana_regen_bonus: f64) -> f64 {
    use CharacterClass::*;

    let spirit_divisor = match class {
        Druid | Paladin | Warlock | Hunter | Shaman => 5.0,
        Mage | Priest => 4.0,
        Warrior | Rogue => return mana_regen_bonus,
    };
    mana_regen_bonus + spirit / spirit_divisor
}

pub fn dodge_chance(class: CharacterClass, agility: f64, base_dodge: f64) -> f64 {
    let agility_per_point = match class {
        CharacterClass::Rogue => 14.5,
        CharacterClass::Hunter => 26.0,
        _ => 20.0,
    };
    base_dodge + agility / agility_per_point
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::GameKey;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn sample_primary() -> PrimaryStats {
        PrimaryStats {
            stamina: 100.0,
            strength: 80.0,
            intellect: 120.0,
            spirit: 100.0,
            agility: 58.0,
        }
    }

    #[test]
    fn test_tauren_stamina_bonus() {
        assert!(approx(hit_points(Race::Tauren, 1000.0, 100.0, 50.0), 2100.0));
        assert!(approx(hit_points(Race::Orc, 1000.0, 100.0, 50.0), 2050.0));
    }

    #[test]
    fn test_mana_and_armor() {
        assert!(approx(mana(1000.0, 120.0), 2800.0));
        assert!(approx(armor(58.0, 300.0), 416.0));
    }

    #[test]
    fn test_melee_attack_power_by_class() {
        // strength x1, no agility
        assert!(approx(melee_attack_power(CharacterClass::Mage, 80.0, 58.0, 10.0), 90.0));
        // strength x2, no agility
        assert!(approx(melee_attack_power(CharacterClass::Warrior, 80.0, 58.0, 10.0), 170.0));
        // strength x1 plus agility
        assert!(approx(melee_attack_power(CharacterClass::Rogue, 80.0, 58.0, 10.0), 148.0));
        assert!(approx(melee_attack_power(CharacterClass::Hunter, 80.0, 58.0, 10.0), 148.0));
        // strength x2 plus agility
        assert!(approx(melee_attack_power(CharacterClass::Druid, 80.0, 58.0, 10.0), 228.0));
    }

    #[test]
    fn test_ranged_attack_power_by_class() {
        assert!(approx(ranged_attack_power(CharacterClass::Warrior, 58.0, 10.0), 68.0));
        assert!(approx(ranged_attack_power(CharacterClass::Hunter, 58.0, 10.0), 126.0));
        assert_eq!(ranged_attack_power(CharacterClass::Priest, 58.0, 10.0), 0.0);
    }

    #[test]
    fn test_crit_divisors() {
        assert!(approx(crit_chance(CharacterClass::Shaman, 100.0, 1.0), 6.0));
        assert!(approx(crit_chance(CharacterClass::Rogue, 290.0, 0.0), 10.0));
        assert!(approx(crit_chance(CharacterClass::Hunter, 106.0, 0.0), 2.0));
        assert!(approx(crit_chance(CharacterClass::Warlock, 500.0, 3.0), 3.0));
    }

    #[test]
    fn test_spell_crit_divisors() {
        assert!(approx(spell_crit_chance(CharacterClass::Paladin, 108.0, 0.0), 2.0));
        assert!(approx(spell_crit_chance(CharacterClass::Mage, 120.0, 1.0), 3.0));
    }

    #[test]
    fn test_mana_regen_groups() {
        assert!(approx(mana_regen(CharacterClass::Druid, 100.0, 15.0), 35.0));
        assert!(approx(mana_regen(CharacterClass::Priest, 100.0, 12.5), 37.5));
        assert!(approx(mana_regen(CharacterClass::Warrior, 100.0, 0.0), 0.0));
        assert!(approx(mana_regen(CharacterClass::Rogue, 100.0, 4.0), 4.0));
    }

    #[test]
    fn test_dodge_divisors() {
        assert!(approx(dodge_chance(CharacterClass::Rogue, 29.0, 0.0), 2.0));
        assert!(approx(dodge_chance(CharacterClass::Hunter, 52.0, 1.0), 3.0));
        assert!(approx(dodge_chance(CharacterClass::Paladin, 40.0, 0.0), 2.0));
    }

    #[test]
    fn test_derive_is_deterministic_for_every_class() {
        let base = BaseHpMana {
            base_hp: 1500.0,
            base_mana: 1000.0,
        };
        for class in CharacterClass::all() {
            let acc = Accumulators::for_class(*class);
            let first = derive_stats(*class, Race::Troll, &base, &sample_primary(), &acc);
            let second = derive_stats(*class, Race::Troll, &base, &sample_primary(), &acc);
            assert_eq!(first, second);
            assert!(approx(first.hp, 2500.0));
            assert!(approx(first.mana, 2800.0));
        }
    }

    #[test]
    fn test_pass_through_accumulators() {
        let base = BaseHpMana::default();
        let acc = Accumulators {
            spell_power: 40.0,
            healing_power: 70.0,
            parry: 1.0,
            defence: 7.0,
            hit_chance: 2.0,
            ..Accumulators::default()
        };
        let primary = sample_primary();
        let stats = derive_stats(CharacterClass::Priest, Race::Human, &base, &primary, &acc);
        assert_eq!(stats.spell_power, 40.0);
        assert_eq!(stats.healing_power, 70.0);
        assert_eq!(stats.parry, 1.0);
        assert_eq!(stats.defence, 7.0);
        assert_eq!(stats.hit_chance, 2.0);
    }
}
