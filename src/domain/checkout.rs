//! Simulated checkout.
//!
//! Validates the cardholder name and card-expiry month captured by the
//! presentation layer and produces a [`Receipt`]. No payment is processed.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::order::{OrderSnapshot, SnapshotLine};

/// Checkout form rejections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Please enter your name")]
    EmptyName,

    #[error("Invalid card expiry '{0}', expected YYYY-MM")]
    InvalidExpiry(String),
}

/// Raw form values as entered by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub card_expiry: String,
}

impl CheckoutForm {
    pub fn new(name: impl Into<String>, card_expiry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_expiry: card_expiry.into(),
        }
    }

    /// Trim and validate every field.
    ///
    /// # Errors
    /// `CheckoutError::EmptyName` for a blank name, `InvalidExpiry` for an
    /// expiry that is not a real year-month.
    pub fn validate(&self) -> Result<ValidCheckout, CheckoutError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CheckoutError::EmptyName);
        }
        let card_expiry = CardExpiry::parse(&self.card_expiry)?;

        Ok(ValidCheckout {
            name: name.to_string(),
            card_expiry,
        })
    }
}

/// A checkout form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCheckout {
    pub name: String,
    pub card_expiry: CardExpiry,
}

/// Card expiry as a calendar year-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardExpiry {
    year: i32,
    month: u32,
}

impl CardExpiry {
    /// Parse a `YYYY-MM` month value.
    ///
    /// Only the last four characters of the year part are kept, so a year
    /// field that received extra leading digits still yields a 4-digit year.
    ///
    /// # Errors
    /// `CheckoutError::InvalidExpiry` if the value is not `<year>-<month>`
    /// with a 4-digit year and a month in 01..=12.
    pub fn parse(raw: &str) -> Result<Self, CheckoutError> {
        let invalid = || CheckoutError::InvalidExpiry(raw.to_string());

        let (year_part, month_part) = raw.trim().split_once('-').ok_or_else(invalid)?;

        let year_digits = year_part
            .char_indices()
            .rev()
            .nth(3)
            .map_or(year_part, |(idx, _)| &year_part[idx..]);

        if year_digits.len() != 4 || !year_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if month_part.len() != 2 || !month_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year_digits.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;

        Ok(Self {
            year: first_day.year(),
            month: first_day.month(),
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for CardExpiry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Confirmation of a completed (simulated) checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Confirmation id.
    pub id: Uuid,
    pub customer_name: String,
    pub card_expiry: CardExpiry,
    /// Lines captured when checkout started.
    pub lines: Vec<SnapshotLine>,
    pub grand_total: Decimal,
    pub placed_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(checkout: ValidCheckout, order: OrderSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: checkout.name,
            card_expiry: checkout.card_expiry,
            lines: order.lines,
            grand_total: order.grand_total,
            placed_at: Utc::now(),
        }
    }

    /// Message shown to the customer once the order is placed.
    pub fn confirmation_message(&self) -> String {
        format!("Thanks, {}! Your order is on its way!", self.customer_name)
    }
}
