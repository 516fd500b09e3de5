//! Command-line interface definitions and handlers.
//!
//! Argument structs here are clap-specific wrappers over the core parameter
//! types in [`larder_core::params`]; each converts via `From` so the core
//! stays free of CLI framework concerns. The [`Cli`] struct owns the larder
//! facade and the terminal renderer and executes one command per run.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use larder_core::{
    display::{DeleteResult, OperationStatus, RecipeList, SaveResult, UpdateResult, WeeklyPlan},
    models::{MealSlot, Recipe},
    params::{AssignSlot, RecipeId, SlotId, UpdateRecipe},
    Larder, LarderError,
};

use crate::remote::MealDbClient;
use crate::renderer::TerminalRenderer;

/// Search the remote recipe API by name
#[derive(Args)]
pub struct SearchArgs {
    /// Name or partial name to search for (e.g. "Teriyaki")
    pub term: String,
    /// Save the result with this meal id to the recipe book
    #[arg(long, value_name = "ID")]
    pub save: Option<String>,
}

/// Fetch a random recipe suggestion
#[derive(Args)]
pub struct RandomArgs {
    /// Save the suggestion to the recipe book
    #[arg(long)]
    pub save: bool,
}

/// Show a saved recipe
#[derive(Args)]
pub struct ShowRecipeArgs {
    /// Id of the recipe to show
    pub id: String,
}

impl From<ShowRecipeArgs> for RecipeId {
    fn from(val: ShowRecipeArgs) -> Self {
        RecipeId { id: val.id }
    }
}

/// Edit a saved recipe's name and/or instructions
///
/// Only these two fields are editable; image, category, and source URL keep
/// the values from the last save.
#[derive(Args)]
pub struct EditRecipeArgs {
    /// Id of the recipe to edit
    pub id: String,
    /// New display name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New preparation instructions
    #[arg(short, long)]
    pub instructions: Option<String>,
}

impl From<EditRecipeArgs> for UpdateRecipe {
    fn from(val: EditRecipeArgs) -> Self {
        UpdateRecipe {
            id: val.id,
            name: val.name,
            instructions: val.instructions,
        }
    }
}

/// Delete a saved recipe
#[derive(Args)]
pub struct DeleteRecipeArgs {
    /// Id of the recipe to delete
    pub id: String,
}

impl From<DeleteRecipeArgs> for RecipeId {
    fn from(val: DeleteRecipeArgs) -> Self {
        RecipeId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List every saved recipe
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a saved recipe
    #[command(alias = "s")]
    Show(ShowRecipeArgs),
    /// Edit a saved recipe's name and/or instructions
    #[command(alias = "e")]
    Edit(EditRecipeArgs),
    /// Delete a saved recipe (clears any planner slots using it)
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRecipeArgs),
}

/// Assign a saved recipe to a planner slot
#[derive(Args)]
pub struct SetSlotArgs {
    /// Planner slot, e.g. "Monday-lunch" (case-insensitive)
    #[arg(value_parser = parse_meal_slot)]
    pub slot: MealSlot,
    /// Id of the saved recipe to plan
    pub recipe_id: String,
}

impl From<SetSlotArgs> for AssignSlot {
    fn from(val: SetSlotArgs) -> Self {
        AssignSlot {
            slot_id: val.slot.to_string(),
            recipe_id: val.recipe_id,
        }
    }
}

/// Clear a planner slot
#[derive(Args)]
pub struct ClearSlotArgs {
    /// Planner slot to clear, e.g. "Monday-lunch"
    #[arg(value_parser = parse_meal_slot)]
    pub slot: MealSlot,
}

impl From<ClearSlotArgs> for SlotId {
    fn from(val: ClearSlotArgs) -> Self {
        SlotId {
            slot_id: val.slot.to_string(),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the weekly plan
    #[command(alias = "v")]
    View,
    /// Assign a saved recipe to a slot
    #[command(alias = "s")]
    Set(SetSlotArgs),
    /// Clear a slot
    #[command(alias = "c")]
    Clear(ClearSlotArgs),
}

fn parse_meal_slot(s: &str) -> Result<MealSlot, String> {
    s.parse()
}

/// Command executor owning the larder facade and the terminal renderer.
pub struct Cli {
    larder: Larder,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new command executor.
    pub fn new(larder: Larder, renderer: TerminalRenderer) -> Self {
        Self { larder, renderer }
    }

    /// Dispatch a `recipe` subcommand.
    pub async fn handle_recipe_command(self, command: RecipeCommands) -> Result<()> {
        match command {
            RecipeCommands::List => self.list_recipes().await,
            RecipeCommands::Show(args) => self.show_recipe(&args.into()).await,
            RecipeCommands::Edit(args) => self.edit_recipe(&args.into()).await,
            RecipeCommands::Delete(args) => self.delete_recipe(&args.into()).await,
        }
    }

    /// Dispatch a `plan` subcommand.
    pub async fn handle_plan_command(self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::View => self.view_plan().await,
            PlanCommands::Set(args) => self.set_slot(&args.into()).await,
            PlanCommands::Clear(args) => self.clear_slot(&args.into()).await,
        }
    }

    /// Search the remote API, optionally saving one of the results.
    pub async fn search(self, args: SearchArgs) -> Result<()> {
        let client = MealDbClient::new();
        let meals = client
            .search(&args.term)
            .await
            .context("Remote recipe search failed")?;

        if let Some(save_id) = args.save {
            let Some(meal) = meals.iter().find(|meal| meal.id == save_id) else {
                bail!("No search result with id '{save_id}' for '{}'", args.term);
            };
            let recipe = self.larder.save_recipe(meal).await?;
            return self.renderer.render(&SaveResult::new(recipe).to_string());
        }

        if meals.is_empty() {
            return self.renderer.render(
                &OperationStatus::failure(format!("No recipes found for '{}'.", args.term))
                    .to_string(),
            );
        }

        let mut output = format!("# Results for '{}'\n\n", args.term);
        for meal in meals {
            output.push_str(&format!("- {}\n", Recipe::from(meal).summary_line()));
        }
        output.push_str("\nSave one with: larder search <term> --save <id>\n");
        self.renderer.render(&output)
    }

    /// Fetch a random suggestion, optionally saving it.
    pub async fn random(self, args: RandomArgs) -> Result<()> {
        let client = MealDbClient::new();
        let Some(meal) = client
            .random()
            .await
            .context("Remote recipe lookup failed")?
        else {
            return self
                .renderer
                .render(&OperationStatus::failure("The recipe API returned no suggestion.").to_string());
        };

        if args.save {
            let recipe = self.larder.save_recipe(&meal).await?;
            self.renderer.render(&SaveResult::new(recipe).to_string())
        } else {
            self.renderer.render(&Recipe::from(meal).to_string())
        }
    }

    /// List every saved recipe.
    pub async fn list_recipes(self) -> Result<()> {
        let recipes = self.larder.list_recipes().await?;
        self.renderer
            .render(&format!("# Recipe book\n\n{}", RecipeList(recipes)))
    }

    async fn show_recipe(self, params: &RecipeId) -> Result<()> {
        match self.larder.get_recipe(params).await? {
            Some(recipe) => self.renderer.render(&recipe.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("No recipe with id '{}' is saved.", params.id))
                    .to_string(),
            ),
        }
    }

    async fn edit_recipe(self, params: &UpdateRecipe) -> Result<()> {
        if params.name.is_none() && params.instructions.is_none() {
            bail!("Nothing to change: pass --name and/or --instructions");
        }

        match self.larder.update_recipe(params).await? {
            Some(recipe) => self.renderer.render(&UpdateResult::new(recipe).to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("No recipe with id '{}' is saved.", params.id))
                    .to_string(),
            ),
        }
    }

    async fn delete_recipe(self, params: &RecipeId) -> Result<()> {
        if self.larder.delete_recipe(params).await? {
            self.renderer
                .render(&DeleteResult::new(params.id.clone()).to_string())
        } else {
            self.renderer.render(
                &OperationStatus::failure(format!("No recipe with id '{}' is saved.", params.id))
                    .to_string(),
            )
        }
    }

    async fn view_plan(self) -> Result<()> {
        let plan = self.larder.weekly_plan().await?;
        self.renderer
            .render(&format!("# Weekly plan\n\n{}", WeeklyPlan(plan)))
    }

    async fn set_slot(self, params: &AssignSlot) -> Result<()> {
        // Friendlier failure than the foreign-key error for the common case
        // of a mistyped id; the constraint still backs this up.
        let recipe = match self
            .larder
            .require_recipe(&RecipeId {
                id: params.recipe_id.clone(),
            })
            .await
        {
            Ok(recipe) => recipe,
            Err(LarderError::RecipeNotFound { id }) => {
                bail!("Recipe '{id}' is not in the book; save it first with: larder search <term> --save {id}")
            }
            Err(e) => return Err(e.into()),
        };

        self.larder.assign_slot(params).await?;
        self.renderer.render(
            &OperationStatus::success(format!(
                "Planned '{}' for {}.",
                recipe.name, params.slot_id
            ))
            .to_string(),
        )
    }

    async fn clear_slot(self, params: &SlotId) -> Result<()> {
        let message = if self.larder.clear_slot(params).await? {
            format!("Cleared {}.", params.slot_id)
        } else {
            format!("{} was already empty.", params.slot_id)
        };
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }
}
