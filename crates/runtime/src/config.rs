//! Runtime tunables and their environment overrides.
use std::env;
use std::time::Duration;

use game_content::CombatProfile;

/// Knobs the decision core reads besides the build itself.
///
/// Combat thresholds default to the build's own values; a `Some` here
/// replaces them for the whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Delay between presence checks while waiting for a boss to spawn.
    pub spawn_poll_interval: Duration,
    /// Engagement loops run against a boss that is still standing. One round
    /// keeps the attack ceiling as the total budget per boss.
    pub engagement_rounds: u32,
    pub max_attack_loops: Option<u32>,
    pub low_mana_percent: Option<u32>,
    pub early_level: Option<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            spawn_poll_interval: Duration::from_millis(200),
            engagement_rounds: 1,
            max_attack_loops: None,
            low_mana_percent: None,
            early_level: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `BOT_MAX_ATTACK_LOOPS` - Attack-cycle ceiling (default: from build)
    /// - `BOT_LOW_MANA_PERCENT` - Low mana threshold (default: from build)
    /// - `BOT_EARLY_LEVEL` - Early-game level limit (default: from build)
    /// - `BOT_SPAWN_POLL_MS` - Spawn-wait poll interval (default: 200)
    /// - `BOT_ENGAGEMENT_ROUNDS` - Rounds per boss (default: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(loops) = read_env::<u32>("BOT_MAX_ATTACK_LOOPS") {
            config.max_attack_loops = Some(loops.max(1));
        }
        config.low_mana_percent = read_env::<u32>("BOT_LOW_MANA_PERCENT").map(|p| p.min(100));
        config.early_level = read_env::<u32>("BOT_EARLY_LEVEL");

        if let Some(ms) = read_env::<u64>("BOT_SPAWN_POLL_MS") {
            config.spawn_poll_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(rounds) = read_env::<u32>("BOT_ENGAGEMENT_ROUNDS") {
            config.engagement_rounds = rounds.max(1);
        }

        config
    }

    /// The build's combat profile with this configuration's overrides applied.
    pub fn combat_profile(&self, base: &CombatProfile) -> CombatProfile {
        let mut profile = base.clone();
        if let Some(loops) = self.max_attack_loops {
            profile.max_attack_loops = loops.max(1);
        }
        if let Some(percent) = self.low_mana_percent {
            profile.low_mana_percent = percent;
        }
        if let Some(level) = self.early_level {
            profile.early_level = level;
        }
        profile
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use game_content::presets;

    use super::*;

    #[test]
    fn defaults_keep_build_values() {
        let base = presets::sorceress_leveling_fire().combat;
        let profile = RuntimeConfig::default().combat_profile(&base);
        assert_eq!(profile, base);
    }

    #[test]
    fn overrides_replace_thresholds() {
        let base = presets::sorceress_leveling_fire().combat;
        let config = RuntimeConfig {
            max_attack_loops: Some(3),
            early_level: Some(40),
            ..RuntimeConfig::default()
        };
        let profile = config.combat_profile(&base);
        assert_eq!(profile.max_attack_loops, 3);
        assert_eq!(profile.early_level, 40);
        assert_eq!(profile.low_mana_percent, base.low_mana_percent);
    }

    #[test]
    fn ceiling_override_never_disables_combat() {
        let base = presets::sorceress_leveling_fire().combat;
        let config = RuntimeConfig {
            max_attack_loops: Some(0),
            ..RuntimeConfig::default()
        };
        assert_eq!(config.combat_profile(&base).max_attack_loops, 1);
        assert_eq!(RuntimeConfig::default().engagement_rounds, 1);
    }
}
