//! # Interaction Loop
//!
//! One ordering conversation over any reader/writer pair:
//!
//! ```text
//! SelectCategory -> SelectVariant -> SelectTopping -> Report
//! ```
//!
//! Any malformed token or out-of-range number ends the conversation with a
//! printed message and no order. There is no retry. Only I/O failures
//! surface as `Err`; everything the user can cause becomes
//! [`Outcome::Aborted`].

use crate::catalog;
use crate::config::MarketConfig;
use crate::error::{MarketError, Result};
use crate::input::TokenReader;
use crate::model::{Category, FoodItem, Item};
use crate::order_log::OrderLog;
use crate::topping::{wrap, ToppingWrapper};
use console::style;
use std::io::{BufRead, Write};

/// How a conversation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ordered {
        description: String,
        price: f64,
        /// Whether the order went into the log (topped orders only).
        logged: bool,
    },
    Aborted {
        message: String,
    },
}

#[derive(Debug)]
enum Order {
    Plain(Item),
    Topped(ToppingWrapper),
}

impl Order {
    fn as_food(&self) -> &dyn FoodItem {
        match self {
            Order::Plain(item) => item,
            Order::Topped(wrapper) => wrapper,
        }
    }
}

#[derive(Debug)]
enum State {
    SelectCategory,
    SelectVariant(Category),
    SelectTopping(Item),
    Report(Order),
}

pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
    config: MarketConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: MarketConfig) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            config,
        }
    }

    /// Runs one conversation, appending to `log` if a topped order is placed.
    pub fn run(&mut self, log: &mut OrderLog) -> Result<Outcome> {
        match self.take_order(log) {
            Err(err) if err.is_user_facing() => {
                let message = err.to_string();
                log::debug!("order aborted: {}", message);
                self.print_error(&message)?;
                Ok(Outcome::Aborted { message })
            }
            other => other,
        }
    }

    fn take_order(&mut self, log: &mut OrderLog) -> Result<Outcome> {
        let mut state = State::SelectCategory;
        loop {
            log::debug!("entering {:?}", state);
            state = match state {
                State::SelectCategory => State::SelectVariant(self.select_category()?),
                State::SelectVariant(category) => {
                    State::SelectTopping(self.select_variant(category)?)
                }
                State::SelectTopping(item) => State::Report(self.select_topping(item)?),
                State::Report(order) => return self.report(order, log),
            };
        }
    }

    fn select_category(&mut self) -> Result<Category> {
        writeln!(self.output, "Welcome to the Food Market!")?;
        writeln!(self.output, "Choose your food:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category)?;
        }

        let field = "choice";
        let choice = self.read_int(field)?;
        Category::from_choice(choice).ok_or_else(|| MarketError::InvalidSelection {
            field: field.to_string(),
            choice,
        })
    }

    fn select_variant(&mut self, category: Category) -> Result<Item> {
        writeln!(self.output, "Choose your {}:", category.noun())?;
        for (i, entry) in catalog::menu(category).iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, entry.label)?;
        }

        let field = format!("{} choice", category.noun());
        let choice = self.read_int(&field)?;
        catalog::select_variant(category, choice)
            .ok_or(MarketError::InvalidSelection { field, choice })
    }

    fn select_topping(&mut self, item: Item) -> Result<Order> {
        writeln!(self.output, "Do you want any extra topping? (Y/N)")?;
        let answer = self.read_token("input")?;
        if !matches!(answer.as_str(), "Y" | "y") {
            return Ok(Order::Plain(item));
        }

        write!(self.output, "Enter the topping: ")?;
        let topping = self.read_token("topping input")?;
        write!(self.output, "Enter the topping price: ")?;
        let topping_price = self.read_float("topping price input")?;

        Ok(Order::Topped(wrap(item, topping, topping_price)))
    }

    fn report(&mut self, order: Order, log: &mut OrderLog) -> Result<Outcome> {
        let food = order.as_food();
        let description = food.description();
        let price = food.price();
        writeln!(
            self.output,
            "You ordered a {} for {}.",
            description,
            self.config.format_price(price)
        )?;
        self.output.flush()?;

        let logged = match order {
            Order::Topped(wrapper) => {
                log.place_order(wrapper);
                true
            }
            Order::Plain(_) => false,
        };

        Ok(Outcome::Ordered {
            description,
            price,
            logged,
        })
    }

    fn read_token(&mut self, field: &str) -> Result<String> {
        self.output.flush()?;
        self.input
            .next_token()
            .map_err(|e| MarketError::input(field, e))
    }

    fn read_int(&mut self, field: &str) -> Result<i64> {
        self.output.flush()?;
        self.input.next_int().map_err(|e| MarketError::input(field, e))
    }

    fn read_float(&mut self, field: &str) -> Result<f64> {
        self.output.flush()?;
        self.input
            .next_float()
            .map_err(|e| MarketError::input(field, e))
    }

    fn print_error(&mut self, message: &str) -> Result<()> {
        if self.config.color {
            writeln!(self.output, "{}", style(message).red())?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELCOME: &str = "Welcome to the Food Market!\nChoose your food:\n1. Pizza\n2. Burger\n";
    const PIZZA_MENU: &str = "Choose your pizza:\n1. Margherita\n2. Pepperoni\n";
    const BURGER_MENU: &str = "Choose your burger:\n1. Cheese burger\n2. Chicken Burger\n";
    const TOPPING_PROMPT: &str = "Do you want any extra topping? (Y/N)\n";

    fn plain_config() -> MarketConfig {
        MarketConfig {
            color: false,
            ..MarketConfig::default()
        }
    }

    fn run_with(input: &str, log: &mut OrderLog) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = Session::new(input.as_bytes(), &mut out, plain_config())
            .run(log)
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plain_pizza_is_reported_but_not_logged() {
        let mut log = OrderLog::new();
        let (outcome, out) = run_with("1\n1\nN\n", &mut log);

        assert_eq!(
            out,
            format!(
                "{}{}{}You ordered a Margherita Pizza for 10.000000.\n",
                WELCOME, PIZZA_MENU, TOPPING_PROMPT
            )
        );
        assert_eq!(
            outcome,
            Outcome::Ordered {
                description: "Margherita Pizza".into(),
                price: 10.0,
                logged: false,
            }
        );
        assert!(log.is_empty());
    }

    #[test]
    fn topped_burger_is_logged() {
        let mut log = OrderLog::new();
        let (outcome, out) = run_with("2\n2\nY\nbacon\n1.50\n", &mut log);

        assert_eq!(
            out,
            format!(
                "{}{}{}Enter the topping: Enter the topping price: \
                 You ordered a Chicken Burger with bacon for 1.500000.\n",
                WELCOME, BURGER_MENU, TOPPING_PROMPT
            )
        );
        assert!(matches!(outcome, Outcome::Ordered { logged: true, .. }));
        assert_eq!(log.len(), 1);
        assert_eq!(
            log.iter().next().unwrap().description(),
            "Chicken Burger with bacon"
        );
    }

    #[test]
    fn tokens_may_share_a_line() {
        let mut log = OrderLog::new();
        let (outcome, _) = run_with("1 2 y chili -0.5", &mut log);
        assert_eq!(
            outcome,
            Outcome::Ordered {
                description: "Pepperoni Pizza with chili".into(),
                price: 11.5,
                logged: true,
            }
        );
    }

    #[test]
    fn only_y_means_yes() {
        for answer in ["yes", "n", "Yes", "x"] {
            let mut log = OrderLog::new();
            let (outcome, out) = run_with(&format!("1 1 {}", answer), &mut log);
            assert!(matches!(outcome, Outcome::Ordered { logged: false, .. }));
            assert!(!out.contains("Enter the topping"));
            assert!(log.is_empty());
        }
    }

    #[test]
    fn unknown_category_aborts() {
        let mut log = OrderLog::new();
        let (outcome, out) = run_with("3\n", &mut log);

        assert_eq!(out, format!("{}Invalid choice\n", WELCOME));
        assert_eq!(
            outcome,
            Outcome::Aborted {
                message: "Invalid choice".into()
            }
        );
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_pizza_choice_aborts() {
        let mut log = OrderLog::new();
        let (outcome, out) = run_with("1\nabc\n", &mut log);

        let message = "Invalid pizza choice: expected integer, got \"abc\"";
        assert_eq!(out, format!("{}{}{}\n", WELCOME, PIZZA_MENU, message));
        assert_eq!(
            outcome,
            Outcome::Aborted {
                message: message.into()
            }
        );
        assert!(log.is_empty());
    }

    #[test]
    fn out_of_range_burger_choice_aborts() {
        let mut log = OrderLog::new();
        let (_, out) = run_with("2 5", &mut log);
        assert!(out.ends_with("Invalid burger choice\n"));
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_topping_price_places_no_order() {
        let mut log = OrderLog::new();
        let (_, out) = run_with("1 1 Y olives cheap", &mut log);
        assert!(out.ends_with(
            "Enter the topping price: Invalid topping price input: \
             expected floating-point number, got \"cheap\"\n"
        ));
        assert!(!out.contains("You ordered"));
        assert!(log.is_empty());
    }

    #[test]
    fn running_out_of_input_aborts() {
        let mut log = OrderLog::new();
        let (_, out) = run_with("", &mut log);
        assert_eq!(
            out,
            format!("{}Invalid choice: unexpected end of input\n", WELCOME)
        );

        let (_, out) = run_with("1 1", &mut log);
        assert!(out.ends_with("Invalid input: unexpected end of input\n"));

        let (_, out) = run_with("1 1 Y", &mut log);
        assert!(out.ends_with("Invalid topping input: unexpected end of input\n"));
        assert!(log.is_empty());
    }

    #[test]
    fn non_utf8_input_does_not_break_the_order() {
        let mut log = OrderLog::new();
        let mut out = Vec::new();
        let outcome = Session::new(&b"1 1 Y jalape\xf1o 1.0\n"[..], &mut out, plain_config())
            .run(&mut log)
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Ordered {
                description: "Margherita Pizza with jalape\u{fffd}o".into(),
                price: 11.0,
                logged: true,
            }
        );
        assert_eq!(log.len(), 1);

        let mut out = Vec::new();
        let outcome = Session::new(&b"1 1 N \xff\n"[..], &mut out, plain_config())
            .run(&mut log)
            .unwrap();
        assert!(matches!(outcome, Outcome::Ordered { logged: false, .. }));
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("You ordered a Margherita Pizza for 10.000000.\n"));
    }

    #[test]
    fn negative_topping_price_is_accepted() {
        let mut log = OrderLog::new();
        let (outcome, out) = run_with("2 1 Y coupon -3", &mut log);
        assert!(out.ends_with("You ordered a Cheese Burger with coupon for -3.000000.\n"));
        assert!(matches!(outcome, Outcome::Ordered { logged: true, .. }));
        assert_eq!(log.total(), -3.0);
    }

    #[test]
    fn log_grows_once_per_topped_run() {
        let mut log = OrderLog::new();
        run_with("1 1 Y basil 0.5", &mut log);
        run_with("1 2 N", &mut log);
        run_with("2 1 y onion 0.25", &mut log);
        run_with("4", &mut log);
        assert_eq!(log.len(), 2);
        assert_eq!(log.total(), 10.75);
    }

    #[test]
    fn precision_follows_config() {
        let mut log = OrderLog::new();
        let mut out = Vec::new();
        let config = MarketConfig {
            price_precision: 2,
            ..plain_config()
        };
        Session::new("1 2 N".as_bytes(), &mut out, config)
            .run(&mut log)
            .unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("You ordered a Pepperoni Pizza for 12.00.\n"));
    }
}
