use std::collections::HashSet;

use super::*;

// =========================================================================
// build table
// =========================================================================

#[test]
fn build_ids_are_unique() {
    let ids: HashSet<_> = BUILDS.iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), BUILDS.len());
}

#[test]
fn every_build_has_skills() {
    for build in &BUILDS {
        assert!(!build.skills.is_empty(), "{} has no skills", build.name);
    }
}

#[test]
fn to_record_preserves_skill_order() {
    let record = SPELLSWORD.to_record();
    assert_eq!(record.id, "5");
    assert_eq!(record.skills, vec!["Blade", "Destruction", "Enchanting", "Light Armor", "Alteration"]);
    assert_eq!(record.key_item, "Enchanted Sword of Fire");
}

#[test]
fn record_serializes_key_item_camel_case() {
    let json = serde_json::to_value(VENOM_PALADIN.to_record()).unwrap();
    assert_eq!(json["keyItem"], "Virulent Sword of Poison");
    assert!(json.get("key_item").is_none());
}

// =========================================================================
// select_build
// =========================================================================

#[test]
fn stealth_keywords_select_shadow_alchemist() {
    for prompt in ["a sneaky thief", "STEALTH", "Walk in the Shadows", "sneak attack bow"] {
        assert_eq!(select_build(prompt).id, SHADOW_ALCHEMIST.id, "prompt: {prompt}");
    }
}

#[test]
fn stealth_outranks_mage() {
    assert_eq!(select_build("stealthy fire mage").id, SHADOW_ALCHEMIST.id);
}

#[test]
fn plain_mage_defaults_to_battle_mage() {
    assert_eq!(select_build("fire mage").id, BATTLE_MAGE.id);
    assert_eq!(select_build("I love Magic").id, BATTLE_MAGE.id);
}

#[test]
fn armored_mage_selects_battle_mage() {
    assert_eq!(select_build("a spellcaster in heavy plate").id, BATTLE_MAGE.id);
    assert_eq!(select_build("battle wizard with magic").id, BATTLE_MAGE.id);
}

#[test]
fn melee_mage_selects_spellsword() {
    assert_eq!(select_build("mage with a sword").id, SPELLSWORD.id);
    assert_eq!(select_build("spell blade").id, SPELLSWORD.id);
}

#[test]
fn armored_check_precedes_melee_check() {
    assert_eq!(select_build("magic sword and heavy armor").id, BATTLE_MAGE.id);
}

#[test]
fn archer_keywords_select_arcane_archer() {
    for prompt in ["an elven archer", "longBOW user", "ranged attacks"] {
        assert_eq!(select_build(prompt).id, ARCANE_ARCHER.id, "prompt: {prompt}");
    }
}

#[test]
fn substring_match_ignores_word_boundaries() {
    // "damage" contains "mage".
    assert_eq!(select_build("ranged damage").id, BATTLE_MAGE.id);
}

#[test]
fn archer_is_outranked_by_mage() {
    assert_eq!(select_build("magic archer").id, BATTLE_MAGE.id);
}

#[test]
fn paladin_keywords_select_venom_paladin() {
    for prompt in ["paladin", "a HOLY knight", "I want to heal people"] {
        assert_eq!(select_build(prompt).id, VENOM_PALADIN.id, "prompt: {prompt}");
    }
}

#[test]
fn unmatched_prompt_selects_default() {
    assert_eq!(select_build("a barbarian with an axe").id, VENOM_PALADIN.id);
    assert_eq!(select_build("").id, VENOM_PALADIN.id);
}

// =========================================================================
// describe_build
// =========================================================================

#[test]
fn describe_build_mentions_primary_skills_and_item() {
    let text = describe_build(&ARCANE_ARCHER);
    assert_eq!(
        text,
        "Here's a Arcane Archer build for you! This character focuses on ranged combat with magical \
         enhancements. The build emphasizes Marksman and Enchanting as primary skills, with Enchanted \
         Bow of Lightning as your signature equipment."
    );
}
