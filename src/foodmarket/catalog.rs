//! # Item Catalog
//!
//! Prices and menus are plain data tables keyed by variant name. Lookups are
//! pure: an unknown variant prices at `0.0` and still gets a description.
//!
//! The burger menu offers the variants `"Cheese"` and `"Chicken"`, while the
//! price table is keyed on `"Cheeseburger"` and `"Chicken Burger"`. Burgers
//! ordered from the menu therefore price at `0.0`. That is the shipped
//! behavior and the tests pin it.

use crate::model::{Category, Item};

/// Price charged for any variant missing from a category's table.
pub const UNKNOWN_PRICE: f64 = 0.0;

const PIZZA_PRICES: &[(&str, f64)] = &[("Margherita", 10.0), ("Pepperoni", 12.0)];

const BURGER_PRICES: &[(&str, f64)] = &[("Cheeseburger", 5.0), ("Chicken Burger", 6.0)];

/// One numbered line of a category menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChoice {
    /// Text shown next to the number.
    pub label: &'static str,
    /// Variant assigned to the item when this line is picked.
    pub variant: &'static str,
}

const PIZZA_MENU: &[MenuChoice] = &[
    MenuChoice {
        label: "Margherita",
        variant: "Margherita",
    },
    MenuChoice {
        label: "Pepperoni",
        variant: "Pepperoni",
    },
];

const BURGER_MENU: &[MenuChoice] = &[
    MenuChoice {
        label: "Cheese burger",
        variant: "Cheese",
    },
    MenuChoice {
        label: "Chicken Burger",
        variant: "Chicken",
    },
];

pub fn price_table(category: Category) -> &'static [(&'static str, f64)] {
    match category {
        Category::Pizza => PIZZA_PRICES,
        Category::Burger => BURGER_PRICES,
    }
}

pub fn menu(category: Category) -> &'static [MenuChoice] {
    match category {
        Category::Pizza => PIZZA_MENU,
        Category::Burger => BURGER_MENU,
    }
}

/// Builds a default-variant item from a category name, or `None` when the
/// name is not a known category.
pub fn create_item(category: &str) -> Option<Item> {
    let category = category.parse::<Category>().ok()?;
    Some(Item::new(category, ""))
}

/// Builds the item behind a 1-based menu number.
pub fn select_variant(category: Category, choice: i64) -> Option<Item> {
    let index = usize::try_from(choice).ok()?.checked_sub(1)?;
    menu(category)
        .get(index)
        .map(|entry| Item::new(category, entry.variant))
}

pub fn price(item: &Item) -> f64 {
    price_table(item.category)
        .iter()
        .find(|(variant, _)| *variant == item.variant)
        .map(|(_, price)| *price)
        .unwrap_or(UNKNOWN_PRICE)
}

pub fn description(item: &Item) -> String {
    format!("{} {}", item.variant, item.category)
}

/// A menu line together with the item it produces.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub category: Category,
    pub number: usize,
    pub choice: MenuChoice,
    pub item: Item,
}

/// Every orderable line of every category, in menu order.
pub fn menu_entries() -> Vec<MenuEntry> {
    Category::ALL
        .iter()
        .flat_map(|&category| {
            menu(category)
                .iter()
                .enumerate()
                .map(move |(i, choice)| MenuEntry {
                    category,
                    number: i + 1,
                    choice: *choice,
                    item: Item::new(category, choice.variant),
                })
        })
        .collect()
}
