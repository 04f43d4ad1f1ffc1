use crate::catalog;
use crate::error::MarketError;
use std::fmt;
use std::str::FromStr;

/// Anything that can be ordered: a plain item or a decorated one.
pub trait FoodItem: fmt::Debug + Send {
    fn price(&self) -> f64;
    fn description(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pizza,
    Burger,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Pizza, Category::Burger];

    /// Maps the top-level menu number to a category.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Category::Pizza),
            2 => Some(Category::Burger),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Pizza => "Pizza",
            Category::Burger => "Burger",
        }
    }

    /// Lowercase form used in prompts and error messages ("pizza choice").
    pub fn noun(self) -> &'static str {
        match self {
            Category::Pizza => "pizza",
            Category::Burger => "burger",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pizza" => Ok(Category::Pizza),
            "Burger" => Ok(Category::Burger),
            other => Err(MarketError::UnknownCategory(other.to_string())),
        }
    }
}

/// A catalog item. The variant is free text; only the catalog decides
/// whether it has a price.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub category: Category,
    pub variant: String,
}

impl Item {
    pub fn new(category: Category, variant: impl Into<String>) -> Self {
        Self {
            category,
            variant: variant.into(),
        }
    }
}

impl FoodItem for Item {
    fn price(&self) -> f64 {
        catalog::price(self)
    }

    fn description(&self) -> String {
        catalog::description(self)
    }
}
