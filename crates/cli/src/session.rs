//! Interactive menu session.
//!
//! A session logs a user in and then loops over the main menu until the user
//! picks "Exit" or the input ends. It is generic over its input and output so
//! tests can drive it with scripted text.

use std::io::{BufRead, Write};
use std::sync::Arc;

use domain::{Order, Product, Searchable, Store, UserId};
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::input::{self, MenuChoice};
use crate::render;

/// One interactive run, from login to exit.
pub struct Session<'a, R, W> {
    store: &'a mut Store,
    input: R,
    output: W,
    max_login_attempts: u32,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut Store, input: R, output: W, max_login_attempts: u32) -> Self {
        Self {
            store,
            input,
            output,
            max_login_attempts: max_login_attempts.max(1),
        }
    }

    /// Runs the session to completion.
    ///
    /// # Errors
    ///
    /// - [`CliError::LoginFailed`] if no login attempt succeeded.
    /// - [`CliError::Io`] if the console fails.
    pub fn run(mut self) -> Result<(), CliError> {
        writeln!(self.output, "Welcome to the store!")?;

        let user_id = self.login()?;
        let login = self
            .store
            .user(user_id)
            .map(|u| u.login().to_string())
            .unwrap_or_default();
        info!(%login, "Session started");

        loop {
            writeln!(self.output, "\nWelcome, {login}!")?;
            for choice in MenuChoice::ALL {
                writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
            }

            let Some(line) = self.prompt("Choose a menu item: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Try again.")?;
                continue;
            };
            debug!(?choice, "Menu choice");

            match choice {
                MenuChoice::ViewProducts => self.view_products()?,
                MenuChoice::SearchByCategory => self.search_by_category()?,
                MenuChoice::SearchByPrice => self.search_by_price()?,
                MenuChoice::SearchByRating => self.search_by_rating()?,
                MenuChoice::PlaceOrder => self.place_order(user_id)?,
                MenuChoice::OrderHistory => self.order_history(user_id)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Thank you for using the store!")?;
                    break;
                }
            }
        }

        info!(%login, "Session ended");
        Ok(())
    }

    fn login(&mut self) -> Result<UserId, CliError> {
        let mut attempts = 0;
        for attempt in 1..=self.max_login_attempts {
            let Some(login) = self.prompt("Enter login: ")? else {
                break;
            };
            attempts = attempt;
            let Some(password) = self.prompt("Enter password: ")? else {
                break;
            };

            if let Some(user) = self.store.authenticate(&login, &password) {
                return Ok(user.id());
            }

            warn!(attempt, "Login rejected");
            if attempt < self.max_login_attempts {
                writeln!(self.output, "Invalid login or password. Try again.")?;
            }
        }

        writeln!(self.output, "Login failed. Exiting.")?;
        Err(CliError::LoginFailed { attempts })
    }

    fn view_products(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "Product list:")?;
        let products = self.store.list_all().to_vec();
        self.write_products(&products)
    }

    fn search_by_category(&mut self) -> Result<(), CliError> {
        let Some(category) = self.prompt("Enter a category to search: ")? else {
            return Ok(());
        };

        let results = self.store.search_by_category(&category);
        if results.is_empty() {
            writeln!(self.output, "No products found in category '{category}'.")?;
            return Ok(());
        }

        writeln!(self.output, "Products in category '{category}':")?;
        self.write_products(&results)
    }

    fn search_by_price(&mut self) -> Result<(), CliError> {
        let Some(min_text) = self.prompt("Enter the minimum price: ")? else {
            return Ok(());
        };
        let min = match input::parse_price(&min_text) {
            Ok(min) => min,
            Err(e) => return self.report(e),
        };

        let Some(max_text) = self.prompt("Enter the maximum price: ")? else {
            return Ok(());
        };
        let max = match input::parse_price(&max_text) {
            Ok(max) => max,
            Err(e) => return self.report(e),
        };

        let results = self.store.search_by_price_range(min, max);
        if results.is_empty() {
            writeln!(self.output, "No products found in the given price range.")?;
            return Ok(());
        }

        writeln!(self.output, "Products priced {min}-{max}:")?;
        self.write_products(&results)
    }

    fn search_by_rating(&mut self) -> Result<(), CliError> {
        let Some(text) = self.prompt("Enter the minimum rating: ")? else {
            return Ok(());
        };
        let min_rating = match input::parse_rating(&text) {
            Ok(r) => r,
            Err(e) => return self.report(e),
        };

        let results = self.store.search_by_rating(min_rating);
        if results.is_empty() {
            writeln!(self.output, "No products found with the given rating.")?;
            return Ok(());
        }

        writeln!(self.output, "Products rated {min_rating} and above:")?;
        self.write_products(&results)
    }

    fn place_order(&mut self, user_id: UserId) -> Result<(), CliError> {
        writeln!(self.output, "Choose products to order:")?;
        let products = self.store.list_all().to_vec();
        self.write_products(&products)?;

        let mut order = Order::new();
        let prompt = format!(
            "\nEnter a product name (or '{}' to finish): ",
            input::FINISH_WORD
        );

        loop {
            let Some(name) = self.prompt(&prompt)? else {
                break;
            };
            if input::is_finish_word(&name) {
                break;
            }

            let Some(product) = self.store.find_product(&name) else {
                writeln!(self.output, "Product not found. Try again.")?;
                continue;
            };

            let Some(text) = self.prompt(&format!("Enter quantity for '{}': ", product.name()))?
            else {
                break;
            };

            let added = match input::parse_quantity(&text) {
                Ok(quantity) => order
                    .add_item(Arc::clone(&product), quantity)
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match added {
                Ok(()) => writeln!(
                    self.output,
                    "Product '{}' added to the order.",
                    product.name()
                )?,
                Err(error) => {
                    warn!(product = product.name(), %error, "Rejected quantity");
                    writeln!(self.output, "Invalid quantity. Try again.")?;
                }
            }
        }

        if !order.has_items() {
            writeln!(self.output, "The order was not placed.")?;
            return Ok(());
        }

        let placed = self.store.place_order(user_id, order)?;
        writeln!(self.output, "Order placed successfully!")?;
        writeln!(self.output, "{}", render::order(&placed))?;
        Ok(())
    }

    fn order_history(&mut self, user_id: UserId) -> Result<(), CliError> {
        writeln!(self.output, "Order history:")?;
        if let Some(user) = self.store.user(user_id) {
            writeln!(self.output, "{}", render::user(user))?;
        }
        let orders = self.store.orders_for(user_id);
        if orders.is_empty() {
            writeln!(self.output, "You have no orders.")?;
            return Ok(());
        }

        for order in orders {
            writeln!(self.output, "{}", render::order(order))?;
        }
        Ok(())
    }

    fn write_products(&mut self, products: &[Arc<Product>]) -> Result<(), CliError> {
        for product in products {
            writeln!(self.output, "{}", render::product(product))?;
        }
        Ok(())
    }

    fn report(&mut self, error: impl std::fmt::Display) -> Result<(), CliError> {
        warn!(%error, "Rejected input");
        writeln!(self.output, "Error: {error}")?;
        Ok(())
    }

    /// Writes `text`, then reads one line. `None` means the input ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
