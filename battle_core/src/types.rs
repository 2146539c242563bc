//! Core types specific to battle_core

use serde::{Deserialize, Serialize};

/// Body part slot on a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartSlot {
    Head,
    RightArm,
    LeftArm,
    Legs,
}

impl PartSlot {
    /// Get all part slots
    pub fn all() -> &'static [PartSlot] {
        &[
            PartSlot::Head,
            PartSlot::RightArm,
            PartSlot::LeftArm,
            PartSlot::Legs,
        ]
    }

    /// Human-readable slot name for narration
    pub fn label(self) -> &'static str {
        match self {
            PartSlot::Head => "head",
            PartSlot::RightArm => "right arm",
            PartSlot::LeftArm => "left arm",
            PartSlot::Legs => "legs",
        }
    }
}

/// Broad skill category of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Shooting,
    Melee,
    Support,
    None,
}

impl SkillCategory {
    /// Whether this category resolves through the attack path
    pub fn is_offensive(self) -> bool {
        matches!(self, SkillCategory::Shooting | SkillCategory::Melee)
    }
}

/// Support skill carried by a Support-category part
///
/// A closed enum: the resolver matches it exhaustively, so adding a new
/// support skill forces a handler at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportSkill {
    Heal,
    Shield,
    Charge,
    Scan,
}

/// Medal affinity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Affinity {
    Beetle,
    Stag,
    Dragon,
    Phoenix,
    Tortoise,
    Serpent,
    Wolf,
    Bear,
    Falcon,
    Mantis,
    Spider,
    Mermaid,
}

impl Affinity {
    /// Get all affinity categories
    pub fn all() -> &'static [Affinity] {
        &[
            Affinity::Beetle,
            Affinity::Stag,
            Affinity::Dragon,
            Affinity::Phoenix,
            Affinity::Tortoise,
            Affinity::Serpent,
            Affinity::Wolf,
            Affinity::Bear,
            Affinity::Falcon,
            Affinity::Mantis,
            Affinity::Spider,
            Affinity::Mermaid,
        ]
    }
}

/// Aspect of combat an affinity bonus applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffinityAspect {
    Shooting,
    Melee,
    Support,
    Speed,
}
