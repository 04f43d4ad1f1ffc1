//! # Order Log
//!
//! An append-only record of placed orders. Entries are boxed [`FoodItem`]s so
//! plain and decorated items share one list; nothing is removed or changed
//! once appended.
//!
//! Code that places orders takes an `&mut OrderLog` from its caller. The
//! process-wide log behind [`OrderLog::instance`] exists for the binary, which
//! hands it down; tests build their own with [`OrderLog::new`].

use crate::model::FoodItem;
use once_cell::sync::Lazy;
use std::sync::Mutex;

static INSTANCE: Lazy<Mutex<OrderLog>> = Lazy::new(|| {
    log::debug!("creating process-wide order log");
    Mutex::new(OrderLog::new())
});

#[derive(Debug, Default)]
pub struct OrderLog {
    orders: Vec<Box<dyn FoodItem>>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide log, created on first access and never torn down.
    pub fn instance() -> &'static Mutex<OrderLog> {
        &INSTANCE
    }

    pub fn place_order<F: FoodItem + 'static>(&mut self, order: F) {
        log::debug!(
            "placing order #{}: {} ({})",
            self.orders.len() + 1,
            order.description(),
            order.price()
        );
        self.orders.push(Box::new(order));
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn FoodItem> {
        self.orders.iter().map(|order| order.as_ref())
    }

    /// Sum of every logged order's price.
    pub fn total(&self) -> f64 {
        self.iter().map(|order| order.price()).sum()
    }
}
