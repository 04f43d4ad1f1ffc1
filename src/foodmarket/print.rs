use console::style;
use foodmarket::catalog::MenuEntry;
use foodmarket::config::MarketConfig;
use foodmarket::model::FoodItem;
use foodmarket::order_log::OrderLog;
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 20;

pub(crate) fn print_menu(entries: &[MenuEntry], config: &MarketConfig) {
    let mut current = None;
    for entry in entries {
        if current != Some(entry.category) {
            if current.is_some() {
                println!();
            }
            println!("{}", style(entry.category).bold());
            current = Some(entry.category);
        }
        let label = entry.choice.label;
        let padding = LABEL_WIDTH.saturating_sub(label.width());
        println!(
            "  {}. {}{}{}",
            entry.number,
            label,
            " ".repeat(padding),
            config.format_price(entry.item.price())
        );
    }
}

pub(crate) fn print_summary(log: &OrderLog, config: &MarketConfig) {
    println!(
        "Orders placed: {}, total {}",
        log.len(),
        config.format_price(log.total())
    );
    for (i, order) in log.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            i + 1,
            order.description(),
            config.format_price(order.price())
        );
    }
}
