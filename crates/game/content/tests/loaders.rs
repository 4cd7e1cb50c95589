use std::fs;
use std::path::{Path, PathBuf};

use game_content::{BannerLoader, ContentFactory, ItemLoader};
use game_core::config::RewardSplit;
use game_core::env::{GuaranteePolicy, ItemKind};
use game_core::state::{BannerId, Rarity, StageId};

fn shipped_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn shipped_content_loads_and_cross_checks() {
    let bundle = ContentFactory::new(shipped_data()).load_bundle().unwrap();

    assert_eq!(bundle.config.max_battle_turns, 100);
    assert_eq!(bundle.config.reward_split, RewardSplit::Survivors);

    let festival = bundle
        .banners
        .iter()
        .find(|banner| banner.id == BannerId::from("dragon_festival"))
        .unwrap();
    assert_eq!(festival.top_rarity(), Some(Rarity::Legendary));
    assert_eq!(festival.guarantee_policy, GuaranteePolicy::ArmOnStandardTop);

    let den = bundle
        .stages
        .iter()
        .find(|stage| stage.id == StageId::from("forest-2"))
        .unwrap();
    assert_eq!(den.enemies.len(), 3);
    assert!(!bundle.missions.is_empty());
}

#[test]
fn overflowing_rate_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "banners.ron",
        r#"(
            banners: [(
                id: "broken",
                name: "Broken",
                rates: [
                    (rarity: legendary, base_rate: 0.6),
                    (rarity: common, base_rate: 0.5),
                ],
                cost: (single: 1, ten: 10, currency: gold),
                start_time: "2024-01-01T00:00:00Z",
            )],
        )"#,
    );

    let err = BannerLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken"));
}

#[test]
fn item_kinds_parse_from_ron() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "items.ron",
        r#"(
            items: [
                (id: "elixir", name: "Elixir", rarity: epic, kind: consumable(effect: "heal", value: 200)),
                (id: "axe", name: "Axe", rarity: rare, kind: equipment(slot: weapon, atk_bonus: 9, hp_bonus: 0)),
            ],
        )"#,
    );

    let items = ItemLoader::load(&path).unwrap();
    assert!(matches!(items[0].kind, ItemKind::Consumable { value: 200, .. }));
    assert!(items[1].is_equipment());
    assert!(!items[1].is_stackable());
}

#[test]
fn dangling_stage_enemy_fails_the_bundle() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["config.toml", "banners.ron", "heroes.ron", "items.ron", "missions.ron"] {
        fs::copy(shipped_data().join(name), dir.path().join(name)).unwrap();
    }
    write(
        dir.path(),
        "stages.ron",
        r#"(
            enemies: [(id: "goblin", name: "Goblin", hp: 80, atk: 10)],
            stages: [(
                id: "cave-1",
                name: "Cave",
                enemies: ["goblin", "bat"],
                gold_reward: 10,
                exp_reward: 10,
            )],
        )"#,
    );

    let err = ContentFactory::new(dir.path()).load_bundle().unwrap_err();
    assert!(err.to_string().contains("unknown enemy type 'bat'"));
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path()).load_config().unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn config_keys_default_when_omitted() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "config.toml", "reward_split = \"all\"\n");

    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.reward_split, RewardSplit::All);
    assert_eq!(config.max_battle_turns, 100);
    assert_eq!(config.idle.max_idle_hours, 12);
}
