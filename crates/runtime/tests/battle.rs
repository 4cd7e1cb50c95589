mod common;

use game_core::combat::Outcome;
use game_core::state::{HeroId, StageId, TeamId, TeamSlots, UserId};
use runtime::{BattleEvent, Event, TeamSelection, Topic};

use common::{heroes, runtime, wallet};

fn lineup(player: &game_core::state::PlayerSnapshot) -> TeamSlots {
    TeamSlots::from_assignments(
        player
            .heroes
            .iter()
            .enumerate()
            .map(|(index, hero)| (index + 1, hero.id.clone())),
    )
    .unwrap()
}

#[tokio::test]
async fn saved_team_clears_first_stage_and_gets_paid() {
    let rt = runtime();
    let user = UserId::from("alice");
    let player = rt
        .register_player(wallet(&user, 500, 0), &heroes(&["knight", "archer"]))
        .await
        .unwrap();
    let team_id = TeamId::from("main");
    rt.set_team(&user, team_id.clone(), "Main", lineup(&player))
        .await
        .unwrap();
    let mut events = rt.subscribe_events(Topic::Battle);

    let result = rt
        .start_battle(
            &user,
            TeamSelection::Saved(team_id.clone()),
            &StageId::from("forest-1"),
        )
        .await
        .unwrap();

    assert_eq!(result.outcome, Outcome::Victory);
    assert_eq!(result.turn_count(), 1);
    assert_eq!(result.team_id, Some(team_id));
    assert_eq!(result.rewards.gold, 100);
    assert_eq!(result.rewards.total_experience(), 150);

    let after = rt.player(&user).unwrap();
    assert_eq!(after.resources.gold, 600);
    let experience: u32 = after.heroes.iter().map(|hero| hero.experience()).sum();
    assert_eq!(experience, 150);
    let dropped: u32 = after.items.iter().map(|item| item.quantity).sum();
    assert_eq!(dropped as usize, result.rewards.items.len());

    let history = rt.battle_history(&user, 10).unwrap();
    assert_eq!(history, vec![result.clone()]);

    match events.recv().await.unwrap() {
        Event::Battle(BattleEvent::Resolved { battle_id, .. }) => assert_eq!(battle_id, result.id),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn lost_battle_is_recorded_without_rewards() {
    let rt = runtime();
    let user = UserId::from("bob");
    let player = rt
        .register_player(wallet(&user, 0, 0), &heroes(&["peasant"]))
        .await
        .unwrap();

    let result = rt
        .start_battle(
            &user,
            TeamSelection::Slots(lineup(&player)),
            &StageId::from("bridge-1"),
        )
        .await
        .unwrap();

    assert_eq!(result.outcome, Outcome::Defeat);
    assert!(result.rewards.is_empty());
    assert_eq!(result.team_id, None);
    let after = rt.player(&user).unwrap();
    assert_eq!(after.resources.gold, 0);
    assert_eq!(after.heroes[0].experience(), 0);
    assert_eq!(rt.battle_history(&user, 10).unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_lineups_are_rejected_before_anything_changes() {
    let rt = runtime();
    let user = UserId::from("carol");
    rt.register_player(wallet(&user, 0, 0), &heroes(&["knight"]))
        .await
        .unwrap();
    let forest = StageId::from("forest-1");

    let stranger = TeamSlots::from_assignments([(1, HeroId::from("hero-999"))]).unwrap();
    let err = rt
        .set_team(&user, TeamId::from("t"), "T", stranger.clone())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "BATTLE_HERO_NOT_OWNED");

    for _ in 0..2 {
        let err = rt
            .start_battle(&user, TeamSelection::Slots(stranger.clone()), &forest)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "BATTLE_HERO_NOT_OWNED");
    }

    let err = rt
        .start_battle(&user, TeamSelection::Slots(TeamSlots::new()), &forest)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "BATTLE_EMPTY_TEAM");

    let err = rt
        .start_battle(&user, TeamSelection::Saved(TeamId::from("missing")), &forest)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "TEAM_NOT_FOUND");

    assert!(rt.battle_history(&user, 10).unwrap().is_empty());
}

#[test]
fn decoded_lineups_keep_heroes_unique() {
    let err = serde_json::from_str::<TeamSlots>(r#"["hero-1", null, "hero-1", null, null]"#)
        .unwrap_err();
    assert!(err.to_string().contains("already occupies position 1"), "{err}");

    let slots: TeamSlots =
        serde_json::from_str(r#"[null, "hero-1", null, null, "hero-2"]"#).unwrap();
    assert_eq!(slots.get(2), Some(&HeroId::from("hero-1")));
    assert_eq!(slots.get(5), Some(&HeroId::from("hero-2")));
    assert_eq!(serde_json::to_string(&slots).unwrap(), r#"[null,"hero-1",null,null,"hero-2"]"#);
}
