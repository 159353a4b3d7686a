//! Terminal View - Text Rendering of the Widget
//!
//! Implements `OrderView` over any `std::io::Write`. The order summary is
//! only printed once it has become visible (after the first add), the same
//! way the browser widget keeps the section hidden until then.

use std::fmt::Write as _;
use std::io::Write;

use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::catalog::Catalog;
use crate::domain::checkout::Receipt;
use crate::domain::order::OrderSnapshot;
use crate::ports::order_view::{OrderView, Screen};

/// Menu prices and line totals, without trailing zeros: `$8.5`.
pub fn format_price(amount: Decimal) -> String {
  format!("${}", amount.normalize())
}

/// Grand totals, always two decimals: `$25.50`.
pub fn format_total(amount: Decimal) -> String {
  format!("${:.2}", amount.round_dp(2))
}

/// Text renderer writing to `out`.
pub struct TerminalView<W: Write> {
  out: W,
  screen: Screen,
}

impl<W: Write> TerminalView<W> {
  pub const fn new(out: W) -> Self {
    Self {
      out,
      screen: Screen::Menu {
        order_visible: false,
      },
    }
  }

  pub const fn screen(&self) -> Screen {
    self.screen
  }

  /// Print an arbitrary block of text (banner, help, JSON dumps).
  pub fn print(&mut self, text: &str) {
    self.emit(text);
  }

  pub const fn get_ref(&self) -> &W {
    &self.out
  }

  pub fn into_inner(self) -> W {
    self.out
  }

  fn emit(&mut self, text: &str) {
    if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
      warn!(error = %e, "Failed to write to terminal");
    }
  }
}

impl<W: Write> OrderView for TerminalView<W> {
  fn render_menu(&mut self, catalog: &Catalog) {
    let mut text = String::from("\n=== Menu ===\n");
    for item in catalog.all() {
      let _ = writeln!(text, "[{}] {} {}", item.id, item.emoji, item.name);
      if !item.ingredients.is_empty() {
        let _ = writeln!(text, "    {}", item.ingredients.join(", "));
      }
      let _ = writeln!(text, "    {}", format_price(item.price));
    }
    self.emit(&text);
  }

  fn render_order(&mut self, snapshot: &OrderSnapshot) {
    if !matches!(self.screen, Screen::Menu { order_visible: true }) {
      return;
    }

    let mut text = String::from("\n--- Your order ---\n");
    for line in &snapshot.lines {
      let _ = writeln!(
        text,
        "{:<20} {:>3}  {}",
        line.name,
        line.quantity,
        format_price(line.line_total)
      );
    }
    let _ = writeln!(text, "Total: {}", format_total(snapshot.grand_total));
    self.emit(&text);
  }

  fn show_screen(&mut self, screen: Screen) {
    self.screen = screen;
    if screen == Screen::Checkout {
      self.emit("\n=== Checkout ===\nEnter card details: pay <YYYY-MM> <name>\n");
    }
  }

  fn show_confirmation(&mut self, receipt: &Receipt) {
    let text = format!(
      "\n{}\nConfirmation: {}\nCharged: {}\n",
      receipt.confirmation_message(),
      receipt.id,
      format_total(receipt.grand_total)
    );
    self.emit(&text);
  }

  fn show_error(&mut self, message: &str) {
    self.emit(&format!("! {message}\n"));
  }
}
