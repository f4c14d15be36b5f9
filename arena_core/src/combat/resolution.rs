//! Attack resolution between two combatants
//!
//! Two protocols coexist:
//! - [`Combatant::take_attack`] is resolved by the defender: dodge, then
//!   block, then damage. The defender's own weapon wears down by the damage
//!   taken.
//! - [`Combatant::try_attack`] is resolved by the attacker: no dodge or block
//!   is rolled, and the attacker's weapon wears down by the damage dealt.
//!   This is the protocol the round engine uses.

use super::result::{AttackOutcome, DefenseOutcome};
use crate::combatant::Combatant;
use rand::Rng;

impl Combatant {
    /// Receive an attack from `opponent` (random source: thread RNG)
    pub fn take_attack(&mut self, opponent: &Combatant) -> DefenseOutcome {
        let mut rng = rand::thread_rng();
        self.take_attack_with_rng(opponent, &mut rng)
    }

    /// Receive an attack from `opponent` with a provided RNG (for deterministic testing)
    pub fn take_attack_with_rng(
        &mut self,
        opponent: &Combatant,
        rng: &mut impl Rng,
    ) -> DefenseOutcome {
        // Step 1: Dodge check on own luck
        if self.dodged(opponent, rng) {
            return DefenseOutcome::Dodged;
        }

        // Step 2: Block check on the opponent's agility
        if self.is_attack_blocked(opponent, rng) {
            return DefenseOutcome::Blocked;
        }

        // Step 3: Take the opponent's damage
        let damage = opponent.damage();
        self.take_damage(damage);

        // Step 3b: An intact weapon absorbs the same amount of wear
        if let Some(weapon) = self.weapon.as_mut().filter(|w| !w.is_broken()) {
            weapon.take_damage(damage);
        }

        DefenseOutcome::Hit { damage }
    }

    /// Strike `opponent` directly with the held weapon
    ///
    /// Fails with [`AttackOutcome::WeaponBroken`] when no usable weapon is
    /// held, including when the combatant has no weapon at all.
    pub fn try_attack(&mut self, opponent: &mut Combatant) -> AttackOutcome {
        if !self.has_usable_weapon() {
            return AttackOutcome::WeaponBroken;
        }

        let damage = self.damage();
        opponent.take_damage(damage);
        if let Some(weapon) = self.weapon.as_mut() {
            weapon.take_damage(damage);
        }

        AttackOutcome::Hit { damage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::tests::stats;
    use armory_core::Weapon;
    use rand::rngs::mock::StepRng;

    fn defender(luck: u32) -> Combatant {
        Combatant::new("Defender", "", stats(100, 30, 0, luck))
            .with_weapon(Weapon::new("Sword", 25, 500, 1))
    }

    fn attacker(agility: u32) -> Combatant {
        Combatant::new("Attacker", "", stats(100, 30, agility, 0))
            .with_weapon(Weapon::new("Dagger", 18, 350, 1))
    }

    #[test]
    fn test_dodge_prevents_damage() {
        let mut target = defender(100);
        let opponent = attacker(100);

        let outcome = target.take_attack(&opponent);
        assert_eq!(outcome, DefenseOutcome::Dodged);
        assert_eq!(target.life(), 100);
        assert_eq!(target.weapon.as_ref().map(|w| w.durability), Some(500));
    }

    #[test]
    fn test_block_checked_after_dodge() {
        let mut target = defender(0);
        let opponent = attacker(100);

        let outcome = target.take_attack(&opponent);
        assert_eq!(outcome, DefenseOutcome::Blocked);
        assert_eq!(target.life(), 100);
    }

    #[test]
    fn test_hit_wears_defender_weapon() {
        let mut target = defender(0);
        let opponent = attacker(0);
        let mut rng = StepRng::new(0, 0);

        let outcome = target.take_attack_with_rng(&opponent, &mut rng);
        assert_eq!(outcome, DefenseOutcome::Hit { damage: 18 });
        assert_eq!(outcome.damage(), 18);
        assert_eq!(target.life(), 82);
        // Defender's weapon degrades, the attacker's does not
        assert_eq!(target.weapon.as_ref().map(|w| w.durability), Some(482));
        assert_eq!(opponent.weapon.as_ref().map(|w| w.durability), Some(350));
    }

    #[test]
    fn test_hit_by_unarmed_opponent() {
        let mut target = Combatant::new("Target", "", stats(100, 30, 0, 0));
        let opponent = Combatant::new("Brawler", "", stats(100, 34, 0, 0));

        let outcome = target.take_attack(&opponent);
        // 34 * 0.2 = 6.8 -> 7
        assert_eq!(outcome, DefenseOutcome::Hit { damage: 7 });
        assert_eq!(target.life(), 93);
        assert!(target.weapon.is_none());
    }

    #[test]
    fn test_broken_defender_weapon_untouched() {
        let mut target = Combatant::new("Target", "", stats(100, 30, 0, 0))
            .with_weapon(Weapon::new("Bow", 15, 0, 3));
        let opponent = attacker(0);

        target.take_attack(&opponent);
        assert_eq!(target.weapon.as_ref().map(|w| w.durability), Some(0));
        assert_eq!(target.life(), 82);
    }

    #[test]
    fn test_try_attack_bypasses_defenses() {
        let mut striker = attacker(0);
        let mut target = defender(100);

        let outcome = striker.try_attack(&mut target);
        assert_eq!(outcome, AttackOutcome::Hit { damage: 18 });
        assert_eq!(outcome.to_string(), "Attack dealt 18 damage");
        assert_eq!(target.life(), 82);
        // Attacker's weapon degrades, the target's does not
        assert_eq!(striker.weapon.as_ref().map(|w| w.durability), Some(332));
        assert_eq!(target.weapon.as_ref().map(|w| w.durability), Some(500));
    }

    #[test]
    fn test_try_attack_with_broken_weapon() {
        let mut striker = Combatant::new("Striker", "", stats(100, 30, 0, 0))
            .with_weapon(Weapon::new("Sword", 25, 0, 1));
        let mut target = defender(0);

        let outcome = striker.try_attack(&mut target);
        assert_eq!(outcome, AttackOutcome::WeaponBroken);
        assert_eq!(outcome.damage(), 0);
        assert_eq!(outcome.to_string(), "Weapon is broken!");
        assert_eq!(target.life(), 100);
    }

    #[test]
    fn test_try_attack_unarmed_is_refused() {
        let mut striker = Combatant::new("Striker", "", stats(100, 30, 0, 0));
        let mut target = defender(0);

        // Unarmed damage() would be 6, but the weapon check refuses the attack
        assert_eq!(striker.damage(), 6);
        assert_eq!(striker.try_attack(&mut target), AttackOutcome::WeaponBroken);
        assert_eq!(target.life(), 100);
    }

    #[test]
    fn test_try_attack_breaks_weapon_on_last_use() {
        let mut striker = Combatant::new("Striker", "", stats(100, 30, 0, 0))
            .with_weapon(Weapon::new("Sword", 25, 10, 1));
        let mut target = Combatant::new("Target", "", stats(200, 30, 0, 0));

        assert_eq!(striker.try_attack(&mut target), AttackOutcome::Hit { damage: 25 });
        assert!(striker.weapon.as_ref().is_some_and(|w| w.is_broken()));
        assert_eq!(striker.try_attack(&mut target), AttackOutcome::WeaponBroken);
        assert_eq!(target.life(), 175);
    }
}
