//! Settling mission and idle rewards into a [`PlayerDelta`].
use chrono::{DateTime, Duration, Utc};

use crate::config::IdleConfig;
use crate::env::{CatalogEnv, IdSource, MissionRewards};
use crate::state::{CurrencyKind, Grants, Hero, HeroId, Mission, PlayerDelta, PlayerSnapshot};

use super::idle::{IdleRewards, idle_rewards};
use super::leveling::LevelChange;
use super::missions::MissionError;

/// Divides `total` evenly across `recipients`, which are given in position
/// order. The remainder goes one point each to the earliest positions.
pub fn split_experience(total: u32, recipients: &[HeroId]) -> Vec<(HeroId, u32)> {
    let Ok(count) = u32::try_from(recipients.len()) else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }
    let share = total / count;
    let remainder = (total % count) as usize;
    recipients
        .iter()
        .enumerate()
        .map(|(rank, hero)| {
            let bonus = u32::from(rank < remainder);
            (hero.clone(), share + bonus)
        })
        .collect()
}

/// Shares `amount` across every hero the player owns, oldest first, and
/// records the updated heroes in `delta`. A player without heroes gains
/// nothing.
pub fn distribute_experience(
    player: &PlayerSnapshot,
    amount: u32,
    delta: &mut PlayerDelta,
) -> Vec<LevelChange> {
    let mut roster: Vec<&Hero> = player.heroes.iter().collect();
    roster.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
    let recipients: Vec<HeroId> = roster.iter().map(|hero| hero.id.clone()).collect();

    let mut changes = Vec::with_capacity(recipients.len());
    for (hero_id, share) in split_experience(amount, &recipients) {
        let Some(hero) = player.hero(&hero_id) else {
            continue;
        };
        let mut hero = hero.clone();
        changes.push(hero.add_experience(share));
        delta.upsert_hero(hero);
    }
    changes
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissionClaim {
    pub mission: Mission,
    pub rewards: MissionRewards,
    pub level_changes: Vec<LevelChange>,
    pub delta: PlayerDelta,
}

/// Claims a completed mission and pays out its template rewards.
///
/// Gold and gems go to the wallet, experience is shared across the roster,
/// and each reward item is granted once.
pub fn claim_mission(
    mission: &Mission,
    player: &PlayerSnapshot,
    catalog: CatalogEnv<'_>,
    now: DateTime<Utc>,
    ids: &dyn IdSource,
) -> Result<MissionClaim, MissionError> {
    let template = catalog.mission_template(&mission.template_id)?;
    let mut mission = mission.clone();
    mission.claim(now)?;

    let rewards = template.rewards;
    let mut delta = PlayerDelta::new(player.user_id.clone());

    let mut resources = player.resources.clone();
    resources.credit(CurrencyKind::Gold, rewards.gold);
    resources.credit(CurrencyKind::Gems, rewards.gems);
    delta.resources = Some(resources);

    let level_changes = distribute_experience(player, rewards.experience, &mut delta);

    let mut grants = Grants::new(player);
    for template_id in &rewards.items {
        let item = catalog.item_template(template_id)?;
        grants.grant_item(&item.id, 1, item.is_stackable(), now, ids);
    }
    delta.items = grants.items;
    delta.upsert_mission(mission.clone());

    Ok(MissionClaim {
        mission,
        rewards,
        level_changes,
        delta,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct IdleClaim {
    pub rewards: IdleRewards,
    pub level_changes: Vec<LevelChange>,
    pub delta: PlayerDelta,
}

/// Collects offline rewards and advances the idle clock.
///
/// The clock moves forward by the whole minutes paid, so a partial minute
/// carries into the next claim. A capped claim restarts it at `now`. It never
/// moves backwards: a `now` earlier than the last claim pays nothing and keeps
/// the stored timestamp.
pub fn claim_idle(player: &PlayerSnapshot, now: DateTime<Utc>, config: &IdleConfig) -> IdleClaim {
    let last_claim = player.resources.last_idle_claim;
    let rewards = idle_rewards(last_claim, now, config);
    let cap_minutes = i64::from(config.max_idle_hours) * 60;
    let next_claim = match last_claim {
        None => now,
        Some(last) if (now - last).num_minutes() > cap_minutes => now,
        Some(last) => last + Duration::minutes(rewards.minutes as i64),
    };

    let mut delta = PlayerDelta::new(player.user_id.clone());
    let mut resources = player.resources.clone();
    resources.credit(CurrencyKind::Gold, rewards.gold);
    resources.last_idle_claim = Some(next_claim);
    delta.resources = Some(resources);

    let experience = u32::try_from(rewards.experience).unwrap_or(u32::MAX);
    let level_changes = if experience > 0 {
        distribute_experience(player, experience, &mut delta)
    } else {
        Vec::new()
    };

    IdleClaim {
        rewards,
        level_changes,
        delta,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::env::{MissionKind, MissionTemplate, Requirement, SequentialIds};
    use crate::state::{
        HeroTypeId, Item, ItemId, ItemTemplateId, MissionId, MissionStatus, MissionTemplateId,
        UserId,
    };
    use crate::testing::{TestCatalog, now};

    fn heroes(ids: &[&str]) -> Vec<HeroId> {
        ids.iter().map(|id| HeroId::from(*id)).collect()
    }

    fn player() -> PlayerSnapshot {
        let mut player = PlayerSnapshot::new(UserId::from("u1"));
        player.heroes.push(Hero::new(
            HeroId::from("h-2"),
            UserId::from("u1"),
            HeroTypeId::from("archer"),
            now(),
        ));
        player.heroes.push(Hero::new(
            HeroId::from("h-1"),
            UserId::from("u1"),
            HeroTypeId::from("knight"),
            now() - Duration::days(1),
        ));
        player
    }

    fn catalog() -> TestCatalog {
        let mut catalog = TestCatalog::new();
        catalog.add_mission(MissionTemplate {
            id: MissionTemplateId::from("daily-win"),
            title: "Win a battle".into(),
            description: String::new(),
            kind: MissionKind::Daily,
            requirement: Requirement::WinBattles,
            target_value: 1,
            rewards: MissionRewards {
                gold: 200,
                gems: 20,
                experience: 201,
                items: vec![ItemTemplateId::from("potion")],
            },
        });
        catalog
    }

    fn completed_mission(catalog: &TestCatalog) -> Mission {
        let template = catalog.missions[&MissionTemplateId::from("daily-win")].clone();
        let mut mission =
            Mission::assign(MissionId::from("m-1"), UserId::from("u1"), &template, now());
        mission.record_progress(1, &template, now()).unwrap();
        mission
    }

    #[test]
    fn remainder_goes_to_earliest_positions() {
        let split = split_experience(150, &heroes(&["a", "b", "c", "d"]));
        let amounts: Vec<u32> = split.iter().map(|(_, exp)| *exp).collect();
        assert_eq!(amounts, vec![38, 38, 37, 37]);
    }

    #[test]
    fn nobody_to_reward_yields_nothing() {
        assert!(split_experience(100, &[]).is_empty());
    }

    #[test]
    fn oldest_hero_receives_the_odd_point() {
        let player = player();
        let mut delta = PlayerDelta::new(UserId::from("u1"));
        let changes = distribute_experience(&player, 101, &mut delta);

        assert_eq!(changes[0].hero_id, HeroId::from("h-1"));
        assert_eq!(changes[0].experience_gained, 51);
        assert_eq!(changes[1].experience_gained, 50);
        assert_eq!(delta.heroes.len(), 2);
    }

    #[test]
    fn claiming_pays_template_rewards_once() {
        let catalog = catalog();
        let mut player = player();
        player.items.push(Item::new(
            ItemId::from("potions"),
            UserId::from("u1"),
            ItemTemplateId::from("potion"),
            4,
            now(),
        ));
        let ids = SequentialIds::new();

        let mission = completed_mission(&catalog);
        let claim = claim_mission(&mission, &player, catalog.env(), now(), &ids).unwrap();
        assert_eq!(claim.mission.status(), MissionStatus::Claimed);
        let resources = claim.delta.resources.as_ref().unwrap();
        assert_eq!((resources.gold, resources.gems), (200, 20));
        assert_eq!(claim.delta.items[0].quantity, 5);
        assert_eq!(claim.level_changes.len(), 2);
        assert!(claim.level_changes.iter().all(LevelChange::leveled_up));
        assert_eq!(claim.delta.missions, vec![claim.mission.clone()]);

        let again = claim_mission(&claim.mission, &player, catalog.env(), now(), &ids);
        assert_eq!(
            again.unwrap_err(),
            MissionError::NotCompleted {
                status: MissionStatus::Claimed
            }
        );
    }

    #[test]
    fn unfinished_mission_cannot_be_claimed() {
        let catalog = catalog();
        let template = catalog.missions[&MissionTemplateId::from("daily-win")].clone();
        let mission =
            Mission::assign(MissionId::from("m-1"), UserId::from("u1"), &template, now());

        let err = claim_mission(&mission, &player(), catalog.env(), now(), &SequentialIds::new())
            .unwrap_err();
        assert_eq!(
            err,
            MissionError::NotCompleted {
                status: MissionStatus::InProgress
            }
        );
    }

    #[test]
    fn first_idle_claim_only_starts_the_clock() {
        let player = player();
        let claim = claim_idle(&player, now(), &IdleConfig::default());

        assert!(claim.rewards.is_empty());
        assert!(claim.level_changes.is_empty());
        let resources = claim.delta.resources.unwrap();
        assert_eq!(resources.gold, 0);
        assert_eq!(resources.last_idle_claim, Some(now()));
    }

    #[test]
    fn idle_claim_pays_gold_and_shares_experience() {
        let mut player = player();
        player.resources.last_idle_claim = Some(now() - Duration::minutes(90));
        let claim = claim_idle(&player, now(), &IdleConfig::default());

        assert_eq!(claim.rewards.minutes, 90);
        let resources = claim.delta.resources.as_ref().unwrap();
        assert_eq!(resources.gold, 450);
        assert_eq!(resources.last_idle_claim, Some(now()));
        let gained: Vec<u32> = claim
            .level_changes
            .iter()
            .map(|change| change.experience_gained)
            .collect();
        assert_eq!(gained, vec![90, 90]);
    }

    #[test]
    fn partial_minutes_carry_into_the_next_claim() {
        let mut player = player();
        let last = now() - Duration::minutes(90) - Duration::seconds(30);
        player.resources.last_idle_claim = Some(last);
        let claim = claim_idle(&player, now(), &IdleConfig::default());
        assert_eq!(claim.rewards.minutes, 90);
        let stored = claim.delta.resources.unwrap().last_idle_claim;
        assert_eq!(stored, Some(last + Duration::minutes(90)));

        // The leftover 30 seconds still count toward the next minute.
        player.resources.last_idle_claim = stored;
        let early = claim_idle(&player, now(), &IdleConfig::default());
        assert!(early.rewards.is_empty());
        player.resources.last_idle_claim = early.delta.resources.unwrap().last_idle_claim;
        assert_eq!(player.resources.last_idle_claim, stored);
        let later = claim_idle(&player, now() + Duration::seconds(30), &IdleConfig::default());
        assert_eq!(later.rewards.minutes, 1);
    }

    #[test]
    fn capped_claim_restarts_the_clock() {
        let mut player = player();
        let config = IdleConfig::default();
        let away = Duration::hours(i64::from(config.max_idle_hours) + 3);
        player.resources.last_idle_claim = Some(now() - away - Duration::seconds(20));
        let claim = claim_idle(&player, now(), &config);
        assert_eq!(
            claim.rewards.minutes,
            u64::from(config.max_idle_hours) * 60
        );
        assert_eq!(claim.delta.resources.unwrap().last_idle_claim, Some(now()));
    }

    #[test]
    fn idle_clock_never_runs_backwards() {
        let mut player = player();
        let later = now() + Duration::hours(1);
        player.resources.last_idle_claim = Some(later);
        let claim = claim_idle(&player, now(), &IdleConfig::default());

        assert!(claim.rewards.is_empty());
        assert_eq!(claim.delta.resources.unwrap().last_idle_claim, Some(later));
    }
}
