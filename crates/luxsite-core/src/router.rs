//! # View Router
//!
//! Holds the current [`View`] and the product [`Modal`].
//!
//! Transitions are flat: any view may follow any view, there are no guards
//! and no back-stack. The modal is independent of the view, so a product can
//! stay open while the shopper navigates.
//!
//! ```text
//!            set_view("cart")            set_view("bogus-view")
//!   Home ──────────────────────► Cart ─────────────────────────► Cart
//!                                       (rejected, view untouched)
//!
//!   Closed ──open_product(p)──► Showing(p) ──open_product(q)──► Showing(q)
//!      ▲                                                            │
//!      └────────────────────────── close_modal() ◄─────────────────┘
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::types::{Modal, Product, View};

/// Current view and modal for one session.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    view: View,
    modal: Modal,
}

impl ViewRouter {
    /// Starts on [`View::Home`] with no modal open.
    pub fn new() -> Self {
        ViewRouter::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Switches to `view`.
    pub fn navigate(&mut self, view: View) {
        debug!(from = %self.view, to = %view, "navigate");
        self.view = view;
    }

    /// Switches to the view called `name`.
    ///
    /// Unknown names are rejected with [`ValidationError::NotAllowed`] and the
    /// current view stays as it was. This is the same no-op in every build;
    /// callers that want to surface the mistake can inspect the error.
    pub fn set_view(&mut self, name: &str) -> Result<View, ValidationError> {
        match name.parse::<View>() {
            Ok(view) => {
                self.navigate(view);
                Ok(view)
            }
            Err(err) => {
                warn!(requested = name, current = %self.view, "rejected view transition");
                Err(err)
            }
        }
    }

    /// Shows `product`, replacing whatever was shown before.
    pub fn open_product(&mut self, product: Arc<Product>) {
        debug!(product_id = %product.id, "open product modal");
        self.modal = Modal::Showing(product);
    }

    /// Closes the modal. Closing an already closed modal is a no-op.
    pub fn close_modal(&mut self) {
        if self.modal.is_open() {
            debug!("close product modal");
        }
        self.modal = Modal::Closed;
    }

    /// Closes the modal and hands back the product it was showing.
    pub fn take_modal_product(&mut self) -> Option<Arc<Product>> {
        match std::mem::take(&mut self.modal) {
            Modal::Closed => None,
            Modal::Showing(product) => Some(product),
        }
    }
}
