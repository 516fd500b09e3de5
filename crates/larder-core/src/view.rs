//! Weekly plan view derivation.

use std::collections::HashMap;

use crate::models::Recipe;

/// Resolves a slot → recipe-id mapping against a set of saved recipes,
/// producing the slot → recipe view the planner displays.
///
/// Pure derivation with no failure mode. A slot whose recipe id has no match
/// is dropped: the cascade normally prevents dangling references, but a
/// database written before foreign keys were enforced, or read between a
/// delete and its cascade becoming visible, can still contain them, and an
/// unresolvable slot is simply an empty slot.
pub fn build_weekly_view(
    recipes: &[Recipe],
    slots: &HashMap<String, String>,
) -> HashMap<String, Recipe> {
    slots
        .iter()
        .filter_map(|(slot_id, recipe_id)| {
            recipes
                .iter()
                .find(|recipe| recipe.id == *recipe_id)
                .map(|recipe| (slot_id.clone(), recipe.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            image_url: None,
            category: None,
            instructions: None,
            source_url: None,
        }
    }

    #[test]
    fn test_empty_slot_map_yields_empty_view() {
        let recipes = vec![recipe("1", "Feijoada")];
        let view = build_weekly_view(&recipes, &HashMap::new());
        assert!(view.is_empty());
    }

    #[test]
    fn test_fully_covered_slot_map() {
        let recipes = vec![recipe("1", "Feijoada"), recipe("2", "Moqueca")];
        let mut slots = HashMap::new();
        slots.insert("Monday-lunch".to_string(), "1".to_string());
        slots.insert("Monday-dinner".to_string(), "2".to_string());

        let view = build_weekly_view(&recipes, &slots);
        assert_eq!(view.len(), 2);
        assert_eq!(view["Monday-lunch"].name, "Feijoada");
        assert_eq!(view["Monday-dinner"].name, "Moqueca");
    }

    #[test]
    fn test_dangling_reference_is_dropped() {
        let recipes = vec![recipe("1", "Feijoada")];
        let mut slots = HashMap::new();
        slots.insert("Monday-lunch".to_string(), "1".to_string());
        slots.insert("Tuesday-lunch".to_string(), "999".to_string());

        let view = build_weekly_view(&recipes, &slots);
        assert_eq!(view.len(), 1);
        assert!(view.contains_key("Monday-lunch"));
        assert!(!view.contains_key("Tuesday-lunch"));
    }

    #[test]
    fn test_same_recipe_in_multiple_slots() {
        let recipes = vec![recipe("1", "Feijoada")];
        let mut slots = HashMap::new();
        slots.insert("Monday-lunch".to_string(), "1".to_string());
        slots.insert("Friday-dinner".to_string(), "1".to_string());

        let view = build_weekly_view(&recipes, &slots);
        assert_eq!(view.len(), 2);
        assert_eq!(view["Monday-lunch"], view["Friday-dinner"]);
    }
}
