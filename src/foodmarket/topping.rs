use crate::model::{FoodItem, Item};

/// Decorates a food item with one extra priced topping.
///
/// The topping price is taken as given, negative values included.
/// Wrappers nest, so `wrap(wrap(item, ..), ..)` stacks toppings.
#[derive(Debug, Clone, PartialEq)]
pub struct ToppingWrapper<F: FoodItem = Item> {
    inner: F,
    topping: String,
    topping_price: f64,
}

pub fn wrap<F: FoodItem>(
    inner: F,
    topping: impl Into<String>,
    topping_price: f64,
) -> ToppingWrapper<F> {
    ToppingWrapper {
        inner,
        topping: topping.into(),
        topping_price,
    }
}

impl<F: FoodItem> ToppingWrapper<F> {
    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn topping(&self) -> &str {
        &self.topping
    }
}

impl<F: FoodItem> FoodItem for ToppingWrapper<F> {
    fn price(&self) -> f64 {
        self.inner.price() + self.topping_price
    }

    fn description(&self) -> String {
        format!("{} with {}", self.inner.description(), self.topping)
    }
}
