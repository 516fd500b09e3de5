//! Typed weekly planner slot keys.
//!
//! The planner store itself accepts any string key; these types exist so
//! callers can construct and parse the fourteen well-known slot ids
//! (seven days, two meals each) without string plumbing. The canonical
//! form is `"<Day>-<meal>"`, e.g. `"Monday-lunch"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Days of the week, in planner display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(format!("Invalid weekday: {s}")),
        }
    }
}

/// The two meals the planner tracks per day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl MealType {
    /// Both meals in display order.
    pub const ALL: [MealType; 2] = [MealType::Lunch, MealType::Dinner];

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            _ => Err(format!("Invalid meal type: {s}")),
        }
    }
}

/// A (weekday, meal-type) planner slot key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSlot {
    pub day: Weekday,
    pub meal: MealType,
}

impl MealSlot {
    /// Creates a slot key for the given day and meal.
    pub fn new(day: Weekday, meal: MealType) -> Self {
        Self { day, meal }
    }

    /// Iterates the fourteen well-known slots in display order,
    /// lunch before dinner within each day.
    pub fn all() -> impl Iterator<Item = MealSlot> {
        Weekday::ALL
            .into_iter()
            .flat_map(|day| MealType::ALL.into_iter().map(move |meal| MealSlot { day, meal }))
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day.as_str(), self.meal.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, meal) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid slot id: {s}. Expected '<day>-<meal>', e.g. 'Monday-lunch'"))?;
        Ok(MealSlot {
            day: day.parse()?,
            meal: meal.parse()?,
        })
    }
}
