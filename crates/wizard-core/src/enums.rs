//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Category tag assigned to every actor at creation. Never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorTag {
    /// A fireball cast by the player, channelled on the wand or in flight.
    Spell,
    /// The player's own body, riding on the viewer.
    Player,
    /// An incoming projectile fired at the player.
    EnemyProjectile,
    /// A stationary practice target.
    Target,
}

impl ActorTag {
    pub const ALL: [ActorTag; 4] = [
        ActorTag::Spell,
        ActorTag::Player,
        ActorTag::EnemyProjectile,
        ActorTag::Target,
    ];

    /// Category bit for host physics engines that filter contacts by bitmask.
    pub fn category_bit(self) -> u32 {
        match self {
            ActorTag::Spell => 1 << 0,
            ActorTag::Player => 1 << 1,
            ActorTag::EnemyProjectile => 1 << 2,
            ActorTag::Target => 1 << 3,
        }
    }

    /// Bitmask of categories this tag should report contacts against.
    ///
    /// The player body only tests against enemy projectiles so the wand's
    /// own channelled spell never registers as a hit.
    pub fn contact_mask(self) -> u32 {
        match self {
            ActorTag::Spell => {
                ActorTag::EnemyProjectile.category_bit() | ActorTag::Target.category_bit()
            }
            ActorTag::Player => ActorTag::EnemyProjectile.category_bit(),
            ActorTag::EnemyProjectile => {
                ActorTag::Spell.category_bit() | ActorTag::Player.category_bit()
            }
            ActorTag::Target => ActorTag::Spell.category_bit(),
        }
    }

    /// Whether a host should report contacts between `self` and `other`.
    pub fn reports_contact_with(self, other: ActorTag) -> bool {
        self.contact_mask() & other.category_bit() != 0
            || other.contact_mask() & self.category_bit() != 0
    }
}

/// Phase of the casting gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastPhase {
    #[default]
    Idle,
    /// Press is held; a spell is glowing on the wand tip.
    Channeling,
}

/// Top-level session phase, derived from the `started`/`alive` flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Playing,
    /// Death screen is showing.
    Dead,
}

/// Cosmetic effect placed at a contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Short burst when two projectiles (or a spell and a target) meet.
    Explosion,
    /// Colored, longer-lived burst when the player is struck.
    PlayerHit,
}

/// Why an actor left the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Destroyed while resolving a contact.
    Contact,
    /// Lifespan ran out.
    Expired,
    /// Cleared by a session restart.
    Reset,
}

/// Result of classifying a single contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactOutcome {
    /// Neither side was the player: both actors were removed.
    ProjectileDestroyed,
    /// One side was the player: the other actor was removed.
    PlayerHit,
    /// The pair carries no gameplay meaning.
    Irrelevant,
}
