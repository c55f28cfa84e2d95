//! Collision classifier: decides what a contact means and applies it.

use hecs::World;

use wizard_core::config::SimConfig;
use wizard_core::constants::{EXPLOSION_EFFECT_SECS, PLAYER_HIT_EFFECT_SECS};
use wizard_core::enums::{ActorTag, ContactOutcome, EffectKind, RemovalReason};
use wizard_core::error::SimError;
use wizard_core::events::{ContactEvent, SceneEvent, UiEvent};

use crate::scheduler::{Scheduler, Task};
use crate::session::GameSession;
use crate::world_setup;

/// Classify a pair of category tags. Order of the pair does not matter.
pub fn classify(a: ActorTag, b: ActorTag) -> ContactOutcome {
    use ActorTag::*;
    match (a, b) {
        (Player, Player) => ContactOutcome::Irrelevant,
        (Player, _) | (_, Player) => ContactOutcome::PlayerHit,
        (Spell | EnemyProjectile | Target, Spell | EnemyProjectile | Target) => {
            ContactOutcome::ProjectileDestroyed
        }
    }
}

/// Resolve one contact against the registry and session.
///
/// Fails with `MissingActor` if either side was already removed (for example
/// a second contact for the same projectile in one physics step); nothing is
/// changed in that case.
pub fn resolve(
    world: &mut World,
    session: &mut GameSession,
    scheduler: &mut Scheduler<Task>,
    config: &SimConfig,
    contact: &ContactEvent,
    scene_events: &mut Vec<SceneEvent>,
    ui_events: &mut Vec<UiEvent>,
) -> Result<ContactOutcome, SimError> {
    if contact.a == contact.b {
        return Ok(ContactOutcome::Irrelevant);
    }

    let tag_a = world_setup::tag_of(world, contact.a)?;
    let tag_b = world_setup::tag_of(world, contact.b)?;
    let outcome = classify(tag_a, tag_b);

    match outcome {
        ContactOutcome::ProjectileDestroyed => {
            world_setup::remove_actor(world, contact.a, RemovalReason::Contact, scene_events)?;
            world_setup::remove_actor(world, contact.b, RemovalReason::Contact, scene_events)?;

            scene_events.push(SceneEvent::EffectSpawned {
                kind: EffectKind::Explosion,
                point: contact.point,
                lifetime_secs: EXPLOSION_EFFECT_SECS,
            });

            let target_destroyed = tag_a == ActorTag::Target || tag_b == ActorTag::Target;
            if target_destroyed && config.score_target_hits {
                session.award_point(ui_events);
            }
            ui_events.push(UiEvent::ProjectileDestroyed {
                point: contact.point,
                target_destroyed,
            });
            log::debug!(
                "{tag_a:?} {} destroyed {tag_b:?} {}",
                contact.a,
                contact.b
            );
        }
        ContactOutcome::PlayerHit => {
            let other = if tag_a == ActorTag::Player {
                contact.b
            } else {
                contact.a
            };
            world_setup::remove_actor(world, other, RemovalReason::Contact, scene_events)?;

            scene_events.push(SceneEvent::EffectSpawned {
                kind: EffectKind::PlayerHit,
                point: contact.point,
                lifetime_secs: PLAYER_HIT_EFFECT_SECS,
            });

            if !session.on_player_hit(scheduler, ui_events) {
                log::debug!("player hit by {other} after the run ended");
            }
        }
        ContactOutcome::Irrelevant => {
            log::debug!("ignoring {tag_a:?}/{tag_b:?} contact");
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard_core::enums::ActorTag::*;

    #[test]
    fn classify_is_order_independent() {
        for a in ActorTag::ALL {
            for b in ActorTag::ALL {
                assert_eq!(classify(a, b), classify(b, a), "{a:?}/{b:?}");
            }
        }
    }

    #[test]
    fn any_single_player_side_is_a_hit() {
        for other in [Spell, EnemyProjectile, Target] {
            assert_eq!(classify(Player, other), ContactOutcome::PlayerHit);
        }
    }

    #[test]
    fn non_player_pairs_destroy_each_other() {
        assert_eq!(classify(Spell, EnemyProjectile), ContactOutcome::ProjectileDestroyed);
        assert_eq!(classify(Spell, Target), ContactOutcome::ProjectileDestroyed);
        assert_eq!(classify(Spell, Spell), ContactOutcome::ProjectileDestroyed);
        assert_eq!(
            classify(EnemyProjectile, EnemyProjectile),
            ContactOutcome::ProjectileDestroyed
        );
        assert_eq!(classify(Target, Target), ContactOutcome::ProjectileDestroyed);
    }

    #[test]
    fn player_pair_is_irrelevant() {
        assert_eq!(classify(Player, Player), ContactOutcome::Irrelevant);
    }
}
