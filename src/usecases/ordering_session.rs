//! Ordering Session - Widget Flow
//!
//! Drives one customer's visit through the widget:
//! - Browsing: add/remove menu items, order summary re-rendered each time
//! - Checkout: order captured and cleared, waiting for the form
//! - Completed: receipt issued, confirmation shown
//!
//! Every state change is pushed to the `OrderView` port.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::domain::catalog::{Catalog, ItemId};
use crate::domain::checkout::{CheckoutError, CheckoutForm, Receipt};
use crate::domain::error::MenuError;
use crate::domain::order::{OrderAction, OrderAggregator, OrderSnapshot};
use crate::ports::order_view::{OrderView, Screen};

/// Errors surfaced by session commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
  #[error(transparent)]
  Menu(#[from] MenuError),

  #[error(transparent)]
  Checkout(#[from] CheckoutError),

  #[error("Your order is empty")]
  EmptyOrder,

  #[error("'{command}' is not available during {stage}")]
  WrongStage {
    command: &'static str,
    stage: &'static str,
  },
}

/// Customer actions understood by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
  Add(ItemId),
  Remove(ItemId),
  StartCheckout,
  Submit(CheckoutForm),
  NewOrder,
}

impl SessionCommand {
  const fn label(&self) -> &'static str {
    match self {
      Self::Add(_) => "add",
      Self::Remove(_) => "remove",
      Self::StartCheckout => "checkout",
      Self::Submit(_) => "pay",
      Self::NewOrder => "new",
    }
  }
}

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
  Browsing { order_visible: bool },
  /// Holds the order captured when checkout started.
  Checkout { pending: OrderSnapshot },
  Completed { receipt: Receipt },
}

impl Stage {
  const fn label(&self) -> &'static str {
    match self {
      Self::Browsing { .. } => "browsing",
      Self::Checkout { .. } => "checkout",
      Self::Completed { .. } => "completed",
    }
  }

  const fn screen(&self) -> Screen {
    match self {
      Self::Browsing { order_visible } => Screen::Menu {
        order_visible: *order_visible,
      },
      Self::Checkout { .. } => Screen::Checkout,
      Self::Completed { .. } => Screen::Confirmation,
    }
  }
}

/// One customer's ordering session over a shared catalog.
pub struct OrderingSession<V: OrderView> {
  order: OrderAggregator,
  view: V,
  stage: Stage,
}

impl<V: OrderView> OrderingSession<V> {
  /// Create a session with an empty order.
  pub fn new(catalog: Arc<Catalog>, view: V) -> Self {
    Self {
      order: OrderAggregator::new(catalog),
      view,
      stage: Stage::Browsing {
        order_visible: false,
      },
    }
  }

  /// Draw the initial menu and empty order.
  pub fn start(&mut self) {
    info!(items = self.order.catalog().len(), "Ordering session started");
    self.view.render_menu(self.order.catalog());
    self.view.show_screen(self.stage.screen());
    self.view.render_order(&self.order.snapshot());
  }

  /// Handle one customer command.
  ///
  /// # Errors
  /// Returns `SessionError` when the command refers to an unknown item,
  /// the checkout form is invalid, the order is empty at checkout, or the
  /// command does not apply to the current stage. State is unchanged on
  /// error.
  #[instrument(skip(self), fields(stage = self.stage.label()))]
  pub fn handle(&mut self, command: SessionCommand) -> Result<(), SessionError> {
    let label = command.label();
    let result = match command {
      SessionCommand::Add(id) => self.modify(label, OrderAction::Increment(id)),
      SessionCommand::Remove(id) => self.modify(label, OrderAction::Decrement(id)),
      SessionCommand::StartCheckout => self.start_checkout(),
      SessionCommand::Submit(form) => self.submit(&form),
      SessionCommand::NewOrder => self.new_order(),
    };

    if let Err(e) = &result {
      warn!(command = label, error = %e, "Command rejected");
      self.view.show_error(&e.to_string());
    }
    result
  }

  pub const fn stage(&self) -> &Stage {
    &self.stage
  }

  pub const fn order(&self) -> &OrderAggregator {
    &self.order
  }

  pub const fn view(&self) -> &V {
    &self.view
  }

  /// Direct view access for output outside the session flow (help, dumps).
  pub fn view_mut(&mut self) -> &mut V {
    &mut self.view
  }

  pub fn into_view(self) -> V {
    self.view
  }

  /// Apply a quantity change while browsing and re-render the order.
  fn modify(&mut self, label: &'static str, action: OrderAction) -> Result<(), SessionError> {
    let Stage::Browsing { order_visible } = self.stage else {
      return Err(self.wrong_stage(label));
    };

    self.order.apply(action)?;

    if matches!(action, OrderAction::Increment(_)) && !order_visible {
      self.stage = Stage::Browsing {
        order_visible: true,
      };
      self.view.show_screen(self.stage.screen());
    }

    let snapshot = self.order.snapshot();
    debug!(
      ?action,
      lines = snapshot.lines.len(),
      total = %snapshot.grand_total,
      "Order updated"
    );
    self.view.render_order(&snapshot);
    Ok(())
  }

  /// Capture the order, clear it and show the checkout form.
  fn start_checkout(&mut self) -> Result<(), SessionError> {
    if !matches!(self.stage, Stage::Browsing { .. }) {
      return Err(self.wrong_stage("checkout"));
    }
    if !self.order.has_any_items() {
      return Err(SessionError::EmptyOrder);
    }

    let pending = self.order.snapshot();
    self.order.reset();

    info!(
      lines = pending.lines.len(),
      total = %pending.grand_total,
      "Checkout started"
    );

    self.stage = Stage::Checkout { pending };
    self.view.show_screen(self.stage.screen());
    self.view.render_order(&self.order.snapshot());
    Ok(())
  }

  /// Validate the form and issue the receipt.
  fn submit(&mut self, form: &CheckoutForm) -> Result<(), SessionError> {
    let Stage::Checkout { pending } = &self.stage else {
      return Err(self.wrong_stage("pay"));
    };

    let checkout = form.validate()?;
    let receipt = Receipt::new(checkout, pending.clone());

    info!(
      receipt_id = %receipt.id,
      total = %receipt.grand_total,
      expiry = %receipt.card_expiry,
      "Order placed"
    );

    self.view.show_screen(Screen::Confirmation);
    self.view.show_confirmation(&receipt);
    self.stage = Stage::Completed { receipt };
    Ok(())
  }

  /// Leave the confirmation and start over.
  fn new_order(&mut self) -> Result<(), SessionError> {
    if !matches!(self.stage, Stage::Completed { .. }) {
      return Err(self.wrong_stage("new"));
    }

    self.order.reset();
    self.stage = Stage::Browsing {
      order_visible: false,
    };
    self.view.show_screen(self.stage.screen());
    self.view.render_order(&self.order.snapshot());
    Ok(())
  }

  fn wrong_stage(&self, command: &'static str) -> SessionError {
    SessionError::WrongStage {
      command,
      stage: self.stage.label(),
    }
  }
}
