//! Build service — keyword selection over the static build table.
//!
//! DESIGN
//! ======
//! Five pre-authored builds live in a `const` table. Selection is a fixed,
//! priority-ordered decision tree over lower-cased substrings: the first
//! branch with any hit wins and nothing is scored. Because the stealth branch
//! is tested before the mage branch, "stealthy fire mage" resolves to the
//! stealth build. Callers should treat that ordering as the contract.

use serde::{Deserialize, Serialize};

// =============================================================================
// BUILD RECORD
// =============================================================================

/// A static, pre-authored character build suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRecord {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub key_item: String,
    pub playstyle: String,
    pub description: String,
}

/// Compile-time form of a build. Converted to [`BuildRecord`] at the wire edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticBuild {
    pub id: &'static str,
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub key_item: &'static str,
    pub playstyle: &'static str,
    pub description: &'static str,
}

impl StaticBuild {
    #[must_use]
    pub fn to_record(&self) -> BuildRecord {
        BuildRecord {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            skills: self.skills.iter().map(|s| (*s).to_owned()).collect(),
            key_item: self.key_item.to_owned(),
            playstyle: self.playstyle.to_owned(),
            description: self.description.to_owned(),
        }
    }
}

// =============================================================================
// BUILD TABLE
// =============================================================================

pub const VENOM_PALADIN: StaticBuild = StaticBuild {
    id: "1",
    name: "Venom Paladin",
    skills: &["Blade", "Alchemy", "Restoration", "Heavy Armor", "Block"],
    key_item: "Virulent Sword of Poison",
    playstyle: "Heal allies while poisoning enemies",
    description: "A holy warrior who uses alchemy to create deadly poisons while maintaining healing \
                  abilities. This build combines the defensive capabilities of heavy armor with the \
                  utility of restoration magic and the offensive power of alchemical poisons.",
};

pub const SHADOW_ALCHEMIST: StaticBuild = StaticBuild {
    id: "2",
    name: "Shadow Alchemist",
    skills: &["Sneak", "Alchemy", "Illusion", "Marksman", "Light Armor"],
    key_item: "Invisibility Potion",
    playstyle: "Stealth-based combat with alchemical support",
    description: "A master of stealth who uses alchemy to enhance their sneaking and illusion \
                  abilities. This build excels at avoiding detection while using poisons and potions \
                  to gain tactical advantages.",
};

pub const BATTLE_MAGE: StaticBuild = StaticBuild {
    id: "3",
    name: "Battle Mage",
    skills: &["Destruction", "Heavy Armor", "Enchanting", "Alteration", "Restoration"],
    key_item: "Staff of Storms",
    playstyle: "Heavy armor mage with destructive spells",
    description: "A heavily armored spellcaster who combines destructive magic with physical \
                  protection. This build allows you to cast powerful spells while being protected by \
                  heavy armor and defensive enchantments.",
};

pub const ARCANE_ARCHER: StaticBuild = StaticBuild {
    id: "4",
    name: "Arcane Archer",
    skills: &["Marksman", "Enchanting", "Alteration", "Sneak", "Light Armor"],
    key_item: "Enchanted Bow of Lightning",
    playstyle: "Ranged combat with magical enhancements",
    description: "A skilled archer who enhances their arrows with magical enchantments. This build \
                  combines the precision of archery with the power of magic to create devastating \
                  ranged attacks.",
};

pub const SPELLSWORD: StaticBuild = StaticBuild {
    id: "5",
    name: "Spellsword",
    skills: &["Blade", "Destruction", "Enchanting", "Light Armor", "Alteration"],
    key_item: "Enchanted Sword of Fire",
    playstyle: "Melee combat enhanced with destruction magic",
    description: "A warrior who wields both sword and magic in perfect harmony. This build allows you \
                  to engage in close combat while casting destructive spells and maintaining magical \
                  protections.",
};

/// Every build, in id order.
pub const BUILDS: [StaticBuild; 5] = [VENOM_PALADIN, SHADOW_ALCHEMIST, BATTLE_MAGE, ARCANE_ARCHER, SPELLSWORD];

// =============================================================================
// KEYWORD BRANCHES
// =============================================================================

const STEALTH_KEYWORDS: &[&str] = &["stealth", "sneak", "shadow"];
const MAGE_KEYWORDS: &[&str] = &["mage", "magic", "spell"];
const MAGE_ARMORED_KEYWORDS: &[&str] = &["battle", "armor", "heavy"];
const MAGE_MELEE_KEYWORDS: &[&str] = &["sword", "blade", "melee"];
const ARCHER_KEYWORDS: &[&str] = &["archer", "bow", "ranged"];
const PALADIN_KEYWORDS: &[&str] = &["paladin", "holy", "heal"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Pick the build for a free-text prompt. Total: always returns a build.
#[must_use]
#[allow(clippy::if_same_then_else)]
pub fn select_build(prompt: &str) -> &'static StaticBuild {
    let prompt = prompt.to_lowercase();

    if contains_any(&prompt, STEALTH_KEYWORDS) {
        &SHADOW_ALCHEMIST
    } else if contains_any(&prompt, MAGE_KEYWORDS) {
        if contains_any(&prompt, MAGE_ARMORED_KEYWORDS) {
            &BATTLE_MAGE
        } else if contains_any(&prompt, MAGE_MELEE_KEYWORDS) {
            &SPELLSWORD
        } else {
            &BATTLE_MAGE
        }
    } else if contains_any(&prompt, ARCHER_KEYWORDS) {
        &ARCANE_ARCHER
    } else if contains_any(&prompt, PALADIN_KEYWORDS) {
        &VENOM_PALADIN
    } else {
        &VENOM_PALADIN
    }
}

/// Chat reply text describing a build.
#[must_use]
pub fn describe_build(build: &StaticBuild) -> String {
    let primary = build
        .skills
        .iter()
        .take(2)
        .copied()
        .collect::<Vec<_>>()
        .join(" and ");
    format!(
        "Here's a {} build for you! This character focuses on {}. The build emphasizes {} as primary skills, with {} as your signature equipment.",
        build.name,
        build.playstyle.to_lowercase(),
        primary,
        build.key_item,
    )
}

#[cfg(test)]
#[path = "builds_test.rs"]
mod tests;
