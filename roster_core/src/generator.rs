use crate::catalog::WeaponCatalog;
use crate::config::{FighterConfig, RosterConfig, StatRange};
use crate::RosterError;
use arena_core::config::constants;
use arena_core::{enhance_combatant, Combatant, Stats};
use armory_core::enhance_weapon_with;
use rand::Rng;
use tracing::debug;

/// Rolls fighters from a validated [`RosterConfig`]
#[derive(Debug, Clone)]
pub struct RosterGenerator {
    config: RosterConfig,
    catalog: WeaponCatalog,
}

impl RosterGenerator {
    /// Validate `config` and prepare its weapon catalogue
    pub fn new(config: RosterConfig) -> Result<Self, RosterError> {
        config.validate()?;
        let catalog = WeaponCatalog::from_configs(&config.weapons)?;
        Ok(RosterGenerator { config, catalog })
    }

    /// Generator for the built-in roster
    pub fn reference() -> Result<Self, RosterError> {
        Self::new(RosterConfig::reference())
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn catalog(&self) -> &WeaponCatalog {
        &self.catalog
    }

    /// Roll the whole roster (random source: thread RNG)
    pub fn generate(&self) -> Vec<Combatant> {
        let mut rng = rand::thread_rng();
        self.generate_with_rng(&mut rng)
    }

    /// Roll the whole roster, in config order
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Vec<Combatant> {
        self.config
            .fighters
            .iter()
            .map(|fighter| self.generate_fighter(fighter, rng))
            .collect()
    }

    /// Roll one fighter
    ///
    /// The weapon is enhanced with `enhance_chance`, then stats are rolled
    /// uniformly over each inclusive range, then the fighter itself is
    /// enhanced with `enhance_chance`.
    pub fn generate_fighter<R: Rng>(&self, fighter: &FighterConfig, rng: &mut R) -> Combatant {
        let chance = self.config.enhance_chance;

        let weapon = fighter
            .weapon
            .as_deref()
            .and_then(|id| self.catalog.forge(id))
            .map(|weapon| {
                if rng.gen::<f64>() < chance {
                    enhance_weapon_with(weapon, &constants().weapon_bonus)
                } else {
                    weapon
                }
            });

        let ranges = &self.config.stats;
        let stats = Stats {
            life: roll(ranges.life, rng),
            magic: roll(ranges.magic, rng),
            speed: roll(ranges.speed, rng),
            attack: roll(ranges.attack, rng),
            agility: roll(ranges.agility, rng),
            luck: roll(ranges.luck, rng),
        };

        let mut combatant = Combatant::new(&fighter.name, &fighter.description, stats)
            .at_position(fighter.position);
        combatant.weapon = weapon;

        let combatant = if rng.gen::<f64>() < chance {
            enhance_combatant(combatant)
        } else {
            combatant
        };

        debug!(
            name = %combatant.name,
            enhanced = combatant.enhanced,
            weapon = combatant.weapon.as_ref().map(|w| w.name.as_str()).unwrap_or("none"),
            "fighter generated"
        );

        combatant
    }
}

/// Roll uniformly within an inclusive range
fn roll<R: Rng>(range: StatRange, rng: &mut R) -> u32 {
    if range.min() >= range.max() {
        range.max()
    } else {
        rng.gen_range(range.min()..=range.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatRanges;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn no_enhancement() -> RosterConfig {
        let mut config = RosterConfig::reference();
        config.enhance_chance = 0.0;
        config
    }

    #[test]
    fn test_reference_roster_within_ranges() {
        let generator = RosterGenerator::reference().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        for _ in 0..200 {
            let roster = generator.generate_with_rng(&mut rng);
            assert_eq!(roster.len(), 4);

            for combatant in &roster {
                // Enhanced fighters may exceed the base range by their bonus
                let (bonus_life, bonus_speed, bonus_luck) =
                    if combatant.enhanced { (30, 10, 5) } else { (0, 0, 0) };
                let s = combatant.stats;
                assert!((100..=119 + bonus_life).contains(&s.life));
                assert!((20..=29 + bonus_speed).contains(&s.speed));
                assert!((15..=24 + bonus_luck).contains(&s.luck));
                assert!(combatant.weapon.is_some());
                assert_eq!(combatant.position, 0);
            }
        }
    }

    #[test]
    fn test_no_enhancement_keeps_base_values() {
        let generator = RosterGenerator::new(no_enhancement()).unwrap();
        let roster = generator.generate();

        let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Le'Gard", "Ragnvaldr", "Enki", "Kahara"]);
        assert!(roster.iter().all(|c| !c.enhanced));
        assert_eq!(roster[0].description, "Mighty warrior");

        let sword = roster[0].weapon.as_ref().unwrap();
        assert_eq!(sword.name, "Sword");
        assert_eq!(sword.attack, 25);
        assert_eq!(sword.durability, 500);
    }

    #[test]
    fn test_certain_enhancement() {
        let mut config = RosterConfig::reference();
        config.enhance_chance = 1.0;
        config.stats = StatRanges {
            life: StatRange::Single(100),
            magic: StatRange::Single(30),
            speed: StatRange::Single(20),
            attack: StatRange::Single(25),
            agility: StatRange::Single(10),
            luck: StatRange::Single(15),
        };
        let generator = RosterGenerator::new(config).unwrap();
        let mut rng = StepRng::new(0, 0);

        let roster = generator.generate_with_rng(&mut rng);
        let warrior = &roster[0];

        assert!(warrior.enhanced);
        assert_eq!(warrior.stats.life, 130);
        assert_eq!(warrior.stats.speed, 30);
        assert_eq!(warrior.description, "At the peak of their strength: Mighty warrior");

        let sword = warrior.weapon.as_ref().unwrap();
        assert_eq!(sword.name, "Enhanced Sword");
        assert_eq!(sword.attack, 35);
        assert_eq!(sword.durability, 700);
    }

    #[test]
    fn test_enhancement_rate() {
        let generator = RosterGenerator::reference().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut weapons = 0u32;
        let mut fighters = 0u32;
        let rosters = 2_500;

        for _ in 0..rosters {
            for combatant in generator.generate_with_rng(&mut rng) {
                if combatant.enhanced {
                    fighters += 1;
                }
                if combatant.weapon.as_ref().is_some_and(|w| w.enhanced) {
                    weapons += 1;
                }
            }
        }

        let total = (rosters * 4) as f64;
        let weapon_rate = weapons as f64 / total;
        let fighter_rate = fighters as f64 / total;
        assert!(weapon_rate > 0.18 && weapon_rate < 0.22, "Weapon rate was {}", weapon_rate);
        assert!(fighter_rate > 0.18 && fighter_rate < 0.22, "Fighter rate was {}", fighter_rate);
    }

    #[test]
    fn test_unarmed_fighter() {
        let config = RosterConfig::parse(
            r#"
enhance_chance = 0.0

[[fighters]]
name = "Monk"
position = 4
"#,
        )
        .unwrap();
        let generator = RosterGenerator::new(config).unwrap();

        let roster = generator.generate();
        assert!(roster[0].weapon.is_none());
        assert_eq!(roster[0].position, 4);
    }

    #[test]
    fn test_generator_exposes_validated_config() {
        let generator = RosterGenerator::reference().unwrap();
        assert_eq!(generator.config(), &RosterConfig::reference());

        let mut ids: Vec<&str> = generator.catalog().weapon_ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["bow", "dagger", "staff", "sword"]);
        assert_eq!(generator.catalog().forge("bow").unwrap().attack, 15);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = RosterConfig::reference();
        config.fighters[0].weapon = Some("trident".to_string());
        assert!(matches!(
            RosterGenerator::new(config),
            Err(RosterError::UnknownWeapon { .. })
        ));
    }
}
