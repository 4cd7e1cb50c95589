//! Scripted runs against a fresh in-memory player.
use std::str::FromStr;

use anyhow::{Context, Result};
use game_core::gacha::PullKind;
use game_core::state::{
    BannerId, HeroTypeId, MissionStatus, MissionTemplateId, PlayerResources, StageId, TeamId,
    TeamSlots, UserId,
};
use runtime::{Runtime, TeamSelection};
use serde_json::json;

/// Opening wallet and roster for the scripted player.
pub struct Starter {
    pub gold: u64,
    pub gems: u64,
    pub heroes: Vec<HeroTypeId>,
}

impl Default for Starter {
    fn default() -> Self {
        Self {
            gold: 20_000,
            gems: 2_000,
            heroes: vec![HeroTypeId::from("knight"), HeroTypeId::from("archer")],
        }
    }
}

fn print(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn register(rt: &Runtime, user: &UserId, starter: &Starter) -> Result<()> {
    let mut resources = PlayerResources::new(user.clone());
    resources.gold = starter.gold;
    resources.gems = starter.gems;
    rt.register_player(resources, &starter.heroes).await?;
    Ok(())
}

/// First five owned heroes, in roster order.
fn lineup(rt: &Runtime, user: &UserId) -> Result<TeamSlots> {
    let player = rt.player(user)?;
    let slots = TeamSlots::from_assignments(
        player
            .heroes
            .iter()
            .take(5)
            .enumerate()
            .map(|(index, hero)| (index + 1, hero.id.clone())),
    )?;
    Ok(slots)
}

pub async fn rates(rt: &Runtime, user: &UserId, banner: &str) -> Result<()> {
    register(rt, user, &Starter::default()).await?;
    print(&rt.rate_info(user, &BannerId::from(banner))?)
}

pub async fn summon(
    rt: &Runtime,
    user: &UserId,
    starter: &Starter,
    banner: &str,
    kind: &str,
    times: u32,
) -> Result<()> {
    let pull_kind = PullKind::from_str(kind)?;
    let banner = BannerId::from(banner);
    register(rt, user, starter).await?;

    let mut results = Vec::with_capacity(times as usize);
    for attempt in 1..=times {
        let result = rt
            .summon(user, &banner, pull_kind)
            .await
            .with_context(|| format!("summon {attempt} of {times} failed"))?;
        results.push(result);
    }
    print(&json!({
        "summons": results,
        "rates": rt.rate_info(user, &banner)?,
        "wallet": rt.player(user)?.resources,
    }))
}

pub async fn battle(
    rt: &Runtime,
    user: &UserId,
    starter: &Starter,
    stage: &str,
    times: u32,
) -> Result<()> {
    register(rt, user, starter).await?;
    let slots = lineup(rt, user)?;
    let stage = StageId::from(stage);

    let mut results = Vec::with_capacity(times as usize);
    for _ in 0..times {
        results.push(
            rt.start_battle(user, TeamSelection::Slots(slots.clone()), &stage)
                .await?,
        );
    }
    print(&json!({
        "battles": results,
        "heroes": rt.heroes(user)?,
        "wallet": rt.player(user)?.resources,
    }))
}

/// A short session touching every service: free and paid summons, a saved
/// team, three battles, missions and an idle claim.
pub async fn demo(rt: &Runtime, user: &UserId) -> Result<()> {
    register(rt, user, &Starter::default()).await?;
    for template in ["daily-summon", "daily-battles", "weekly-hunter", "collector"] {
        rt.assign_mission(user, &MissionTemplateId::from(template))
            .await?;
    }

    let free = rt
        .summon(user, &BannerId::from("standard"), PullKind::DailyFree)
        .await?;
    let festival = rt
        .summon(user, &BannerId::from("dragon_festival"), PullKind::Ten)
        .await?;

    let team_id = TeamId::from("main");
    let team = rt
        .set_team(user, team_id.clone(), "Main", lineup(rt, user)?)
        .await?;
    let mut battles = Vec::new();
    for stage in ["forest-1", "forest-1", "forest-2"] {
        let result = rt
            .start_battle(user, TeamSelection::Saved(team_id.clone()), &StageId::from(stage))
            .await?;
        battles.push(json!({
            "stage": result.stage_id,
            "outcome": result.outcome,
            "turns": result.turn_count(),
            "rewards": result.rewards,
        }));
    }

    let mut claimed = Vec::new();
    for view in rt.missions(user)? {
        if view.status == MissionStatus::Completed {
            let claim = rt.claim_mission(user, &view.mission_id).await?;
            claimed.push(json!({ "mission": view.title, "rewards": claim.rewards }));
        }
    }
    let idle = rt.claim_idle_rewards(user).await?;

    print(&json!({
        "daily_free": free,
        "festival_ten_pull": festival,
        "team": team.slots,
        "battles": battles,
        "missions": rt.missions(user)?,
        "claimed": claimed,
        "idle": idle.rewards,
        "heroes": rt.heroes(user)?,
        "wallet": rt.player(user)?.resources,
    }))
}
