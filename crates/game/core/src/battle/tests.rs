use arrayvec::ArrayVec;

use crate::combat::{FirstReadyLowestHp, Outcome};
use crate::config::RewardSplit;
use crate::env::{
    DropEntry, EnemyTemplate, FixedClock, PcgRng, Requirement, SequentialIds, StageDefinition,
};
use crate::error::GameError;
use crate::state::{
    EnemyTypeId, Hero, HeroId, HeroTypeId, Item, ItemId, ItemTemplateId, PlayerSnapshot, StageId,
    TeamSlots, UserId,
};
use crate::testing::{TestCatalog, now};

use super::*;

fn player() -> PlayerSnapshot {
    let mut player = PlayerSnapshot::new(UserId::from("u1"));
    player.resources.gold = 500;
    for (id, hero_type) in [("h-knight", "knight"), ("h-archer", "archer")] {
        player.heroes.push(Hero::new(
            HeroId::from(id),
            UserId::from("u1"),
            HeroTypeId::from(hero_type),
            now(),
        ));
    }
    player
}

fn request(stage: &str, heroes: &[&str]) -> BattleRequest {
    let slots = TeamSlots::from_assignments(
        heroes
            .iter()
            .enumerate()
            .map(|(index, hero)| (index + 1, HeroId::from(*hero))),
    )
    .unwrap();
    BattleRequest {
        user_id: UserId::from("u1"),
        team_id: None,
        slots,
        stage_id: StageId::from(stage),
    }
}

fn stage(id: &str, enemies: &[&str], drops: Vec<DropEntry>) -> StageDefinition {
    let enemies: ArrayVec<EnemyTypeId, 5> =
        enemies.iter().map(|enemy| EnemyTypeId::from(*enemy)).collect();
    StageDefinition {
        id: StageId::from(id),
        name: id.into(),
        description: String::new(),
        enemies,
        gold_reward: 100,
        exp_reward: 150,
        drops,
    }
}

fn enemy(id: &str, hp: u32, atk: u32) -> EnemyTemplate {
    EnemyTemplate {
        id: EnemyTypeId::from(id),
        name: id.into(),
        hp,
        atk,
        skills: Vec::new(),
    }
}

/// The brute knocks out the archer in turn 1; the knight finishes it in
/// turn 2.
fn catalog_with_ambush() -> TestCatalog {
    let mut catalog = TestCatalog::new();
    catalog.add_enemy(enemy("brute", 150, 85));
    catalog.add_stage(stage("ambush", &["brute"], Vec::new()));
    catalog
}

fn run(
    catalog: &TestCatalog,
    player: &PlayerSnapshot,
    request: &BattleRequest,
    seed: u64,
) -> Result<BattleOutcome, BattleError> {
    let clock = FixedClock::new(now());
    let mut rng = PcgRng::new(seed);
    let ids = SequentialIds::new();
    resolve_stage(
        request,
        BattleContext {
            catalog: catalog.env(),
            player,
            clock: &clock,
            rng: &mut rng,
            ids: &ids,
            policy: &FirstReadyLowestHp,
            drops: &IndependentDrops,
        },
    )
}

#[test]
fn victory_credits_gold_and_splits_experience() {
    let catalog = TestCatalog::new();
    let outcome = run(
        &catalog,
        &player(),
        &request("forest-1", &["h-knight", "h-archer"]),
        1,
    )
    .unwrap();
    let result = &outcome.result;

    assert_eq!(result.outcome, Outcome::Victory);
    assert_eq!(result.turn_count(), 1);
    let remaining: Vec<u32> = result.log[0]
        .actions
        .iter()
        .map(|action| action.target_hp_remaining)
        .collect();
    assert_eq!(remaining, vec![30, 70, 0]);

    assert_eq!(result.rewards.gold, 100);
    assert_eq!(result.rewards.experience[&HeroId::from("h-knight")], 75);
    assert_eq!(result.rewards.experience[&HeroId::from("h-archer")], 75);
    assert_eq!(outcome.delta.resources.as_ref().unwrap().gold, 600);
    assert_eq!(outcome.delta.heroes.len(), 2);
    assert!(outcome.delta.heroes.iter().all(|hero| hero.experience() == 75));
    assert_eq!(outcome.delta.battle_result.as_ref(), Some(result));
}

#[test]
fn fallen_heroes_share_nothing_by_default() {
    let catalog = catalog_with_ambush();
    let outcome = run(
        &catalog,
        &player(),
        &request("ambush", &["h-archer", "h-knight"]),
        1,
    )
    .unwrap();
    let result = &outcome.result;

    assert_eq!(result.outcome, Outcome::Victory);
    assert_eq!(result.turn_count(), 2);
    assert_eq!(result.rewards.experience.len(), 1);
    assert_eq!(result.rewards.experience[&HeroId::from("h-knight")], 150);

    assert_eq!(result.level_changes.len(), 1);
    assert!(result.level_changes[0].leveled_up());
    assert_eq!(outcome.delta.heroes[0].level(), 2);
}

#[test]
fn split_across_all_members_includes_the_fallen() {
    let mut catalog = catalog_with_ambush();
    catalog.config = catalog.config.clone().with_reward_split(RewardSplit::All);
    let outcome = run(
        &catalog,
        &player(),
        &request("ambush", &["h-archer", "h-knight"]),
        1,
    )
    .unwrap();

    let experience = &outcome.result.rewards.experience;
    assert_eq!(experience[&HeroId::from("h-archer")], 75);
    assert_eq!(experience[&HeroId::from("h-knight")], 75);
}

#[test]
fn defeat_pays_nothing_but_is_recorded() {
    let mut catalog = TestCatalog::new();
    catalog.add_enemy(enemy("titan", 10_000, 1_000));
    catalog.add_stage(stage(
        "summit",
        &["titan"],
        vec![DropEntry {
            item: ItemTemplateId::from("potion"),
            chance: 1.0,
            quantity: 1,
        }],
    ));

    let outcome = run(&catalog, &player(), &request("summit", &["h-knight"]), 1).unwrap();
    assert_eq!(outcome.result.outcome, Outcome::Defeat);
    assert!(outcome.result.rewards.is_empty());
    assert!(outcome.delta.resources.is_none());
    assert!(outcome.delta.heroes.is_empty());
    assert!(outcome.delta.items.is_empty());
    assert!(outcome.delta.battle_result.is_some());
}

#[test]
fn drops_merge_into_owned_stacks() {
    let mut catalog = TestCatalog::new();
    catalog.add_stage(stage(
        "forest-2",
        &["goblin"],
        vec![
            DropEntry {
                item: ItemTemplateId::from("potion"),
                chance: 1.0,
                quantity: 2,
            },
            DropEntry {
                item: ItemTemplateId::from("sword"),
                chance: 1.0,
                quantity: 1,
            },
        ],
    ));
    let mut player = player();
    player.items.push(Item::new(
        ItemId::from("potions"),
        UserId::from("u1"),
        ItemTemplateId::from("potion"),
        3,
        now(),
    ));

    let outcome = run(&catalog, &player, &request("forest-2", &["h-knight"]), 1).unwrap();
    assert_eq!(
        outcome.result.rewards.items,
        vec![
            ItemTemplateId::from("potion"),
            ItemTemplateId::from("potion"),
            ItemTemplateId::from("sword"),
        ]
    );
    let potions = outcome
        .delta
        .items
        .iter()
        .find(|item| item.id == ItemId::from("potions"))
        .unwrap();
    assert_eq!(potions.quantity, 5);
    assert!(
        outcome
            .delta
            .items
            .iter()
            .any(|item| item.template_id == ItemTemplateId::from("sword"))
    );
}

#[test]
fn invalid_requests_fail_before_any_fight() {
    let catalog = TestCatalog::new();
    let player = player();

    let empty = BattleRequest {
        slots: TeamSlots::new(),
        ..request("forest-1", &["h-knight"])
    };
    assert_eq!(
        run(&catalog, &player, &empty, 1).unwrap_err(),
        BattleError::EmptyTeam
    );

    let stranger = request("forest-1", &["h-stranger"]);
    let err = run(&catalog, &player, &stranger, 1).unwrap_err();
    assert_eq!(err, BattleError::HeroNotOwned(HeroId::from("h-stranger")));
    assert_eq!(err.error_code(), "BATTLE_HERO_NOT_OWNED");
    assert_eq!(run(&catalog, &player, &stranger, 2).unwrap_err(), err);

    assert_eq!(
        run(&catalog, &player, &request("nowhere", &["h-knight"]), 1).unwrap_err(),
        BattleError::StageNotFound(StageId::from("nowhere"))
    );
}

#[test]
fn heroes_of_another_user_are_not_owned() {
    let catalog = TestCatalog::new();
    let mut player = player();
    player.heroes[0].user_id = UserId::from("u2");

    assert_eq!(
        run(&catalog, &player, &request("forest-1", &["h-knight"]), 1).unwrap_err(),
        BattleError::HeroNotOwned(HeroId::from("h-knight"))
    );
}

#[test]
fn same_seed_replays_same_battle() {
    let mut catalog = catalog_with_ambush();
    catalog.add_stage(stage(
        "ambush-loot",
        &["brute", "goblin"],
        vec![DropEntry {
            item: ItemTemplateId::from("potion"),
            chance: 0.5,
            quantity: 1,
        }],
    ));
    let player = player();
    let request = request("ambush-loot", &["h-knight", "h-archer"]);

    let first = run(&catalog, &player, &request, 42).unwrap();
    let second = run(&catalog, &player, &request, 42).unwrap();
    assert_eq!(first, second);
}

#[test]
fn victory_reports_mission_progress() {
    let catalog = TestCatalog::new();
    let outcome = run(&catalog, &player(), &request("forest-1", &["h-knight"]), 1).unwrap();

    let events = outcome.progress_events();
    let requirements: Vec<Requirement> = events.iter().map(|event| event.requirement).collect();
    assert_eq!(
        requirements,
        vec![
            Requirement::CompleteBattles,
            Requirement::WinBattles,
            Requirement::KillEnemies,
            Requirement::LevelUpHero,
        ]
    );
}
