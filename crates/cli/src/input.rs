//! Parsing of console input.

use domain::Money;

use crate::error::InputError;

/// Word that ends product selection while ordering.
pub const FINISH_WORD: &str = "done";

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewProducts,
    SearchByCategory,
    SearchByPrice,
    SearchByRating,
    PlaceOrder,
    OrderHistory,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewProducts,
        MenuChoice::SearchByCategory,
        MenuChoice::SearchByPrice,
        MenuChoice::SearchByRating,
        MenuChoice::PlaceOrder,
        MenuChoice::OrderHistory,
        MenuChoice::Exit,
    ];

    /// Maps the typed menu number to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        let index: usize = input.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    /// Number shown next to the entry.
    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewProducts => "View products",
            MenuChoice::SearchByCategory => "Search products by category",
            MenuChoice::SearchByPrice => "Search products by price",
            MenuChoice::SearchByRating => "Search products by rating",
            MenuChoice::PlaceOrder => "Place an order",
            MenuChoice::OrderHistory => "View order history",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn parse_price(input: &str) -> Result<Money, InputError> {
    Ok(input.parse::<Money>()?)
}

/// Parses a rating threshold; `,` is accepted as the decimal separator.
pub fn parse_rating(input: &str) -> Result<f64, InputError> {
    let text = input.trim();
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| InputError::Rating(text.to_string()))
}

/// Parses a quantity. Zero is passed through; the order rejects it.
pub fn parse_quantity(input: &str) -> Result<u32, InputError> {
    let text = input.trim();
    text.parse::<u32>()
        .map_err(|_| InputError::Quantity(text.to_string()))
}

pub fn is_finish_word(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(FINISH_WORD)
}
