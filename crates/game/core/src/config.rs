/// Combat balance constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Base critical hit chance in percent, before the attacker's level bonus.
    pub base_crit_chance: u32,
    /// Multiplier applied to base damage on a critical basic attack.
    pub crit_multiplier: f64,
    /// Base escape chance in percent, before the level difference adjustment.
    pub escape_base_chance: i32,
    /// Upper bound for poison durations applied during combat.
    pub poison_max_turns: u32,
    /// Upper bound for buff durations applied during combat.
    pub buff_max_turns: u32,
    /// Chance in percent that a venomous enemy poisons the player after acting.
    pub venom_chance: u32,
    /// Poison duration applied by venom.
    pub venom_turns: u32,
    /// Base damage multiplier for an enemy charge attack.
    pub charge_multiplier: f64,
}

impl CombatConfig {
    // ===== status effect constants =====
    pub const DEFENSE_BUFF_TURNS: u32 = 3;
    pub const FURY_TURNS: u32 = 4;
    pub const REGEN_TURNS: u32 = 5;
    /// Defense buff granted by an enemy `defend` action. Two turns so the
    /// buff survives the status tick at the end of the enemy's own turn.
    pub const DEFEND_TURNS: u32 = 2;

    // ===== escape bounds =====
    pub const ESCAPE_MIN_CHANCE: i32 = 10;
    pub const ESCAPE_MAX_CHANCE: i32 = 90;
    pub const ESCAPE_LEVEL_STEP: i32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_CRIT_CHANCE: u32 = 15;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.75;
    pub const DEFAULT_ESCAPE_BASE_CHANCE: i32 = 60;
    pub const DEFAULT_POISON_MAX_TURNS: u32 = 5;
    pub const DEFAULT_BUFF_MAX_TURNS: u32 = 10;
    pub const DEFAULT_VENOM_CHANCE: u32 = 50;
    pub const DEFAULT_VENOM_TURNS: u32 = 3;
    pub const DEFAULT_CHARGE_MULTIPLIER: f64 = 1.5;

    pub fn new() -> Self {
        Self {
            base_crit_chance: Self::DEFAULT_BASE_CRIT_CHANCE,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            escape_base_chance: Self::DEFAULT_ESCAPE_BASE_CHANCE,
            poison_max_turns: Self::DEFAULT_POISON_MAX_TURNS,
            buff_max_turns: Self::DEFAULT_BUFF_MAX_TURNS,
            venom_chance: Self::DEFAULT_VENOM_CHANCE,
            venom_turns: Self::DEFAULT_VENOM_TURNS,
            charge_multiplier: Self::DEFAULT_CHARGE_MULTIPLIER,
        }
    }

    pub fn with_base_crit_chance(mut self, base_crit_chance: u32) -> Self {
        self.base_crit_chance = base_crit_chance;
        self
    }

    pub fn with_escape_base_chance(mut self, escape_base_chance: i32) -> Self {
        self.escape_base_chance = escape_base_chance;
        self
    }

    pub fn with_venom_chance(mut self, venom_chance: u32) -> Self {
        self.venom_chance = venom_chance;
        self
    }

    /// Critical hit chance in percent for an attacker of the given level.
    pub fn crit_chance(&self, attacker_level: u32) -> u32 {
        self.base_crit_chance + attacker_level * 2
    }

    /// Escape chance in percent, clamped to `[10, 90]`.
    pub fn escape_chance(&self, player_level: u32, enemy_level: u32) -> i32 {
        let level_diff = player_level as i64 - enemy_level as i64;
        let raw = self.escape_base_chance as i64 + level_diff * Self::ESCAPE_LEVEL_STEP as i64;
        raw.clamp(
            Self::ESCAPE_MIN_CHANCE as i64,
            Self::ESCAPE_MAX_CHANCE as i64,
        ) as i32
    }

    /// Clamps a status duration against the configured buff ceiling.
    pub fn clamp_buff_turns(&self, turns: u32) -> u32 {
        turns.min(self.buff_max_turns)
    }

    /// Clamps a poison duration against the configured poison ceiling.
    pub fn clamp_poison_turns(&self, turns: u32) -> u32 {
        turns.min(self.poison_max_turns)
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_chance_is_clamped_high() {
        let config = CombatConfig::default();
        assert_eq!(config.escape_chance(51, 1), 90);
    }

    #[test]
    fn escape_chance_is_clamped_low() {
        let config = CombatConfig::default();
        assert_eq!(config.escape_chance(1, 60), 10);
    }

    #[test]
    fn escape_chance_scales_with_level_difference() {
        let config = CombatConfig::default();
        assert_eq!(config.escape_chance(3, 1), 70);
        assert_eq!(config.escape_chance(1, 3), 50);
    }

    #[test]
    fn crit_chance_grows_two_per_level() {
        let config = CombatConfig::default();
        assert_eq!(config.crit_chance(1), 17);
        assert_eq!(config.crit_chance(10), 35);
    }
}
