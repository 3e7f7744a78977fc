//! Boss table loader.

use std::path::Path;

use crate::bosses::BossTable;
use crate::loaders::{LoadResult, read_file};

/// Loader for the boss table RON file.
pub struct BossLoader;

impl BossLoader {
    pub fn load(path: &Path) -> LoadResult<BossTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BossTable> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse boss table RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use game_core::{DistanceEnvelope, Resist};

    use super::*;
    use crate::bosses::BossId;

    #[test]
    fn loads_minimal_table() {
        let table = BossLoader::parse(
            r#"[
                (
                    id: Andariel,
                    targeting: Single(npc: Andariel, kind: Unique),
                ),
                (
                    id: Diablo,
                    targeting: Single(npc: Diablo, kind: Unique),
                    precast: Some((min: 1, max: 5)),
                    spawn_wait_ms: 20000,
                ),
            ]"#,
        )
        .unwrap();

        assert!(table.get(BossId::Andariel).is_some());
        assert_eq!(table.get(BossId::Diablo).unwrap().spawn_wait_ms, 20000);
        assert!(table.get(BossId::Baal).is_none());
    }

    #[test]
    fn duplicate_entries_fail_to_load() {
        let error = BossLoader::parse(
            r#"[
                (id: Andariel, targeting: Single(npc: Andariel, kind: Unique)),
                (id: Andariel, targeting: Single(npc: Andariel, kind: Unique)),
            ]"#,
        )
        .unwrap_err();
        assert!(error.to_string().contains("more than once"), "{error}");
    }

    #[test]
    fn reversed_envelope_is_normalized_on_load() {
        let table = BossLoader::parse(
            r#"[
                (
                    id: Izual,
                    targeting: Single(npc: Izual, kind: Unique),
                    precast: Some((min: 30, max: 25)),
                ),
            ]"#,
        )
        .unwrap();

        let izual = table.get(BossId::Izual).unwrap();
        assert_eq!(izual.precast, Some(DistanceEnvelope::new(25, 30)));
        assert_eq!(izual.precast.map(|e| e.min), Some(25));
    }

    #[test]
    fn skip_list_is_optional() {
        let table = BossLoader::parse(
            r#"[
                (id: Andariel, targeting: Single(npc: Andariel, kind: Unique)),
                (
                    id: Mephisto,
                    targeting: Single(npc: Mephisto, kind: Unique),
                    skip_on_immunities: [Fire, Cold],
                ),
            ]"#,
        )
        .unwrap();

        assert!(table.get(BossId::Andariel).unwrap().skip_on_immunities.is_empty());
        assert_eq!(
            table.get(BossId::Mephisto).unwrap().skip_on_immunities,
            vec![Resist::Fire, Resist::Cold]
        );
    }
}
