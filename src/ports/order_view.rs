//! Order View Port - Presentation Boundary
//!
//! The ordering session pushes everything the customer sees through
//! this trait. Adapters decide how it is drawn (terminal, browser, ...).
//! The view never reads or mutates order state itself.

use crate::domain::catalog::Catalog;
use crate::domain::checkout::Receipt;
use crate::domain::order::OrderSnapshot;

/// Which part of the widget is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Menu list, with the order summary once something was added.
  Menu { order_visible: bool },
  /// Checkout form.
  Checkout,
  /// Success message after submitting the form.
  Confirmation,
}

/// Trait for presentation adapters.
pub trait OrderView {
  /// Draw the full menu.
  fn render_menu(&mut self, catalog: &Catalog);

  /// Redraw the order summary (lines + total).
  fn render_order(&mut self, snapshot: &OrderSnapshot);

  /// Switch the visible screen.
  fn show_screen(&mut self, screen: Screen);

  /// Show the confirmation for a completed checkout.
  fn show_confirmation(&mut self, receipt: &Receipt);

  /// Surface a recoverable problem to the customer.
  fn show_error(&mut self, message: &str);
}
