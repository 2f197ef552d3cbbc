// kiyho/src/lib.rs

//! Kiyho: the cart, catalog and checkout core of the Kiyho handbag storefront.
//!
//! Everything here is synchronous and single-owner. The pieces:
//!  - `Catalog`: the static, read-only product list with id lookup and filtering.
//!  - `CartManager`: the ordered cart, written through to a `KeyValueStore`
//!    after every mutation and restored from it at startup.
//!  - `KeyValueStore`: the persistence seam, with in-memory and file backends.
//!  - `Checkout`: order summary pricing, mock payment and cart clearing.
//!  - `validation`: login and registration form checks.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod store;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::cart::{CartChange, CartLine, CartManager, CART_STORAGE_KEY};
pub use crate::catalog::{Catalog, Product, ProductFilter, ProductId};
pub use crate::checkout::{
  Checkout, MockPaymentGateway, OrderSummary, PaymentConfirmation, PaymentGateway, PaymentMethod, Receipt,
};
pub use crate::error::{CheckoutError, KiyhoError, KiyhoResult};
pub use crate::store::{FileStore, KeyValueStore, MemoryStore};

/*
    Typical page lifecycle:
    1. Build the catalog once (`Catalog::kiyho_collection()` or `Catalog::from_json`) and wrap it in an `Arc`.
    2. Open the store and call `CartManager::restored(store, catalog)`.
    3. On each UI event call `add_item` / `remove_item` / `update_quantity`, then re-read
       `lines()`, `total_price()` and `total_item_count()` to re-render.
    4. On checkout, `Checkout::new(gateway).complete(&mut cart, method)` returns a `Receipt`
       and leaves the cart empty. On logout, `end_session()`.
*/
