//! Display implementations for domain models.

use std::fmt;

use crate::models::Recipe;

impl fmt::Display for Recipe {
    /// Full markdown detail view of a recipe.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} ({})", self.name, self.id)?;
        writeln!(f)?;

        if let Some(category) = &self.category {
            writeln!(f, "- Category: {category}")?;
        }
        if let Some(image) = &self.image_url {
            writeln!(f, "- Image: {image}")?;
        }
        if let Some(source) = &self.source_url {
            writeln!(f, "- Source: {source}")?;
        }

        match &self.instructions {
            Some(instructions) if !instructions.is_empty() => {
                writeln!(f, "\n## Instructions")?;
                writeln!(f)?;
                writeln!(f, "{instructions}")?;
            }
            _ => {
                writeln!(f, "\nNo instructions recorded.")?;
            }
        }

        Ok(())
    }
}

impl Recipe {
    /// Compact single-line form used in book listings and planner rows.
    pub fn summary_line(&self) -> String {
        match &self.category {
            Some(category) => format!("**{}** ({}) — {}", self.name, self.id, category),
            None => format!("**{}** ({})", self.name, self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Recipe;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            image_url: Some("https://example.com/teriyaki.jpg".to_string()),
            category: Some("Chicken".to_string()),
            instructions: Some("Preheat oven to 350 degrees.".to_string()),
            source_url: None,
        }
    }

    #[test]
    fn test_recipe_display_includes_sections() {
        let output = sample_recipe().to_string();
        assert!(output.contains("# Teriyaki Chicken Casserole (52772)"));
        assert!(output.contains("- Category: Chicken"));
        assert!(output.contains("## Instructions"));
        assert!(output.contains("Preheat oven"));
        assert!(!output.contains("Source:"));
    }

    #[test]
    fn test_recipe_display_without_instructions() {
        let recipe = Recipe {
            instructions: None,
            ..sample_recipe()
        };
        assert!(recipe.to_string().contains("No instructions recorded."));
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            sample_recipe().summary_line(),
            "**Teriyaki Chicken Casserole** (52772) — Chicken"
        );
    }
}
