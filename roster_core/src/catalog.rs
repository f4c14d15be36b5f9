use crate::config::WeaponConfig;
use crate::RosterError;
use armory_core::Weapon;
use std::collections::HashMap;

/// Registry of catalogue weapons, keyed by id
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    weapons: HashMap<String, Weapon>,
}

impl WeaponCatalog {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue, rejecting duplicate ids
    pub fn from_configs(configs: &[WeaponConfig]) -> Result<Self, RosterError> {
        let mut catalog = Self::new();
        for config in configs {
            let weapon = Weapon::new(&config.name, config.attack, config.durability, config.range);
            if catalog.weapons.insert(config.id.clone(), weapon).is_some() {
                return Err(RosterError::DuplicateWeapon(config.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// Get a weapon template by id
    pub fn get(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    /// Check if a weapon exists
    pub fn contains(&self, id: &str) -> bool {
        self.weapons.contains_key(id)
    }

    /// List all weapon ids
    pub fn weapon_ids(&self) -> impl Iterator<Item = &str> {
        self.weapons.keys().map(|s| s.as_str())
    }

    /// A fresh copy of the weapon with `id`, ready to be handed to one fighter
    pub fn forge(&self, id: &str) -> Option<Weapon> {
        self.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RosterConfig;

    #[test]
    fn test_reference_catalog() {
        let catalog = WeaponCatalog::from_configs(&RosterConfig::reference().weapons).unwrap();
        let mut ids: Vec<&str> = catalog.weapon_ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["bow", "dagger", "staff", "sword"]);

        let bow = catalog.get("bow").unwrap();
        assert_eq!(bow, &Weapon::new("Bow", 15, 300, 3));
    }

    #[test]
    fn test_forged_weapons_are_independent() {
        let catalog = WeaponCatalog::from_configs(&RosterConfig::reference().weapons).unwrap();
        let mut first = catalog.forge("sword").unwrap();
        first.take_damage(100);

        let second = catalog.forge("sword").unwrap();
        assert_eq!(second.durability, 500);
        assert_eq!(catalog.get("sword").map(|w| w.durability), Some(500));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut weapons = RosterConfig::reference().weapons;
        weapons.push(weapons[0].clone());
        assert_eq!(
            WeaponCatalog::from_configs(&weapons).unwrap_err(),
            RosterError::DuplicateWeapon("sword".to_string())
        );
    }

    #[test]
    fn test_unknown_id() {
        let catalog = WeaponCatalog::new();
        assert!(!catalog.contains("sword"));
        assert!(catalog.forge("sword").is_none());
    }
}
