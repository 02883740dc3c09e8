use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use super::errors::CartError;
use super::model::{CartItemId, CartLineItem, GreenAlternative};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Settled,
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadState::Idle => write!(f, "idle"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Settled => write!(f, "settled"),
        }
    }
}

/// Pre-swap state of one item, held only until the backend answers.
#[derive(Debug, PartialEq)]
pub struct SwapTicket {
    pub cart_item_id: CartItemId,
    pub alternative: GreenAlternative,
    previous_swapped: bool,
}

/// Immutable view of the client's cart. Every transition returns a new snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub donated: Vec<CartLineItem>,
    pub load_state: LoadState,
    pub pending_donation: Option<CartLineItem>,
    pub swaps_in_flight: BTreeSet<CartItemId>,
}

impl CartSnapshot {
    pub fn item(&self, cart_item_id: CartItemId) -> Option<&CartLineItem> {
        self.items
            .iter()
            .find(|item| item.cart_item_id == cart_item_id)
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn loading(&self) -> Self {
        Self {
            load_state: LoadState::Loading,
            ..self.clone()
        }
    }

    pub fn loaded(&self, items: Vec<CartLineItem>) -> Self {
        Self {
            items,
            load_state: LoadState::Settled,
            ..self.clone()
        }
    }

    /// Settles loading and keeps whatever items were already there.
    pub fn load_failed(&self) -> Self {
        Self {
            load_state: LoadState::Settled,
            ..self.clone()
        }
    }

    /// Optimistically marks an item as swapped.
    pub fn begin_swap(&self, cart_item_id: CartItemId) -> Result<(Self, SwapTicket), CartError> {
        let item = self.item(cart_item_id).ok_or(CartError::ItemNotFound)?;
        if self.swaps_in_flight.contains(&cart_item_id) {
            return Err(CartError::SwapInFlight);
        }
        if item.swapped {
            return Err(CartError::AlreadySwapped);
        }
        let alternative = item
            .product
            .green_alternative()
            .cloned()
            .ok_or(CartError::NoGreenAlternative)?;

        let ticket = SwapTicket {
            cart_item_id,
            alternative,
            previous_swapped: item.swapped,
        };
        let mut next = self.with_swapped_flag(cart_item_id, true);
        next.swaps_in_flight.insert(cart_item_id);
        Ok((next, ticket))
    }

    /// Installs the backend's representation of the swapped line.
    ///
    /// A line donated while the swap was in flight stays gone.
    pub fn confirm_swap(&self, ticket: SwapTicket, updated: CartLineItem) -> Self {
        let mut next = self.clone();
        next.swaps_in_flight.remove(&ticket.cart_item_id);
        next.items = next
            .items
            .into_iter()
            .map(|item| {
                if item.cart_item_id == ticket.cart_item_id {
                    CartLineItem {
                        swapped: true,
                        ..updated.clone()
                    }
                } else {
                    item
                }
            })
            .collect();
        next
    }

    pub fn revert_swap(&self, ticket: SwapTicket) -> Self {
        let mut next = self.with_swapped_flag(ticket.cart_item_id, ticket.previous_swapped);
        next.swaps_in_flight.remove(&ticket.cart_item_id);
        next
    }

    /// Stages an item for donation without touching the backend.
    pub fn request_donation(&self, cart_item_id: CartItemId) -> Result<Self, CartError> {
        let candidate = self
            .item(cart_item_id)
            .cloned()
            .ok_or(CartError::ItemNotFound)?;
        Ok(Self {
            pending_donation: Some(candidate),
            ..self.clone()
        })
    }

    pub fn cancel_donation(&self) -> Self {
        Self {
            pending_donation: None,
            ..self.clone()
        }
    }

    /// Moves the donated line from the live cart to the donated sequence.
    ///
    /// A line already gone from the live cart is left alone, and a donation
    /// staged for another item stays staged.
    pub fn donation_confirmed(&self, cart_item_id: CartItemId) -> Self {
        let mut next = self.donation_settled(cart_item_id);
        let position = next
            .items
            .iter()
            .position(|item| item.cart_item_id == cart_item_id);
        if let Some(index) = position {
            let item = next.items.remove(index);
            next.donated.push(item);
        }
        next
    }

    /// Drops the staged donation only when it still refers to `cart_item_id`.
    pub fn donation_settled(&self, cart_item_id: CartItemId) -> Self {
        let staged_here = self
            .pending_donation
            .as_ref()
            .is_some_and(|item| item.cart_item_id == cart_item_id);
        if staged_here {
            self.cancel_donation()
        } else {
            self.clone()
        }
    }

    fn with_swapped_flag(&self, cart_item_id: CartItemId, swapped: bool) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.cart_item_id == cart_item_id {
                    CartLineItem {
                        swapped,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self {
            items,
            ..self.clone()
        }
    }
}

/// Single owner of the current cart snapshot.
///
/// Writers read the installed snapshot, build the next one and install it while
/// holding the lock; the lock is never held across a network call.
#[derive(Debug, Default)]
pub struct CartStore {
    current: RwLock<Arc<CartSnapshot>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Arc<CartSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn apply(
        &self,
        transition: impl FnOnce(&CartSnapshot) -> CartSnapshot,
    ) -> Arc<CartSnapshot> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(transition(&current));
        *current = next.clone();
        next
    }

    pub fn try_apply<T, E>(
        &self,
        transition: impl FnOnce(&CartSnapshot) -> Result<(CartSnapshot, T), E>,
    ) -> Result<(Arc<CartSnapshot>, T), E> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let (next, value) = transition(&current)?;
        let next = Arc::new(next);
        *current = next.clone();
        Ok((next, value))
    }
}
