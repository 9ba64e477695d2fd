//! Equipment slots and equippable gear.

/// Equipment slot. A character holds at most one piece per slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Shield,
}

/// A piece of equipment contributing additive attack or defense.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub name: String,
    pub slot: EquipmentSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_bonus: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense_bonus: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_rarity"))]
    pub rarity: String,
}

#[cfg(feature = "serde")]
fn default_rarity() -> String {
    "common".to_string()
}

impl Equipment {
    pub fn weapon(name: impl Into<String>, attack_bonus: u32) -> Self {
        Self::new(name, EquipmentSlot::Weapon, attack_bonus, 0)
    }

    pub fn armor(name: impl Into<String>, defense_bonus: u32) -> Self {
        Self::new(name, EquipmentSlot::Armor, 0, defense_bonus)
    }

    pub fn shield(name: impl Into<String>, defense_bonus: u32) -> Self {
        Self::new(name, EquipmentSlot::Shield, 0, defense_bonus)
    }

    pub fn new(
        name: impl Into<String>,
        slot: EquipmentSlot,
        attack_bonus: u32,
        defense_bonus: u32,
    ) -> Self {
        Self {
            name: name.into(),
            slot,
            attack_bonus,
            defense_bonus,
            description: String::new(),
            price: 0,
            rarity: "common".to_string(),
        }
    }
}

/// Currently equipped gear, one optional piece per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    pub weapon: Option<Equipment>,
    pub armor: Option<Equipment>,
    pub shield: Option<Equipment>,
}

impl Loadout {
    /// Puts `equipment` in its slot, returning whatever was there before.
    pub fn equip(&mut self, equipment: Equipment) -> Option<Equipment> {
        let slot = self.slot_mut(equipment.slot);
        slot.replace(equipment)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Equipment> {
        self.slot_mut(slot).take()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Equipment> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
            EquipmentSlot::Shield => self.shield.as_ref(),
        }
    }

    /// Attack contributed by the weapon.
    pub fn attack_bonus(&self) -> u32 {
        self.weapon.as_ref().map_or(0, |w| w.attack_bonus)
    }

    /// Defense contributed by armor and shield.
    pub fn defense_bonus(&self) -> u32 {
        self.armor.as_ref().map_or(0, |a| a.defense_bonus)
            + self.shield.as_ref().map_or(0, |s| s.defense_bonus)
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Equipment> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Shield => &mut self.shield,
        }
    }
}
