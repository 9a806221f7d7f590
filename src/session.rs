use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::cart::Cart;

/// Server-side session state: one cart per authenticated user, created empty
/// on first access and destroyed on logout.
///
/// Each cart sits behind its own `Mutex`, which is the per-identity critical
/// section for cart mutations: concurrent requests for the same user (double
/// clicks, two tabs) serialize on it, so every read-modify-write lands and
/// the net effect equals some ordering of the calls. Checkout holds the same
/// lock across its database transaction, which turns a duplicate submission
/// into an empty-cart guard instead of a duplicate order.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    carts: Arc<RwLock<HashMap<Uuid, Arc<Mutex<Cart>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cart handle for a user, creating an empty cart on first
    /// use. Callers lock the returned handle for the whole mutation.
    pub async fn cart(&self, user_id: Uuid) -> Arc<Mutex<Cart>> {
        {
            let carts = self.carts.read().await;
            if let Some(cart) = carts.get(&user_id) {
                return Arc::clone(cart);
            }
        }
        let mut carts = self.carts.write().await;
        Arc::clone(carts.entry(user_id).or_default())
    }

    /// Drops the user's session cart. Called on logout; a later request
    /// starts over with an empty cart.
    pub async fn end_session(&self, user_id: Uuid) {
        self.carts.write().await.remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_access_creates_an_empty_cart() {
        let store = SessionStore::new();
        let cart = store.cart(Uuid::from_u128(1)).await;
        assert!(cart.lock().await.is_empty());
    }

    #[tokio::test]
    async fn same_user_gets_the_same_cart() {
        let store = SessionStore::new();
        let user = Uuid::from_u128(1);

        store
            .cart(user)
            .await
            .lock()
            .await
            .add_item(Uuid::from_u128(7), "Monstera", 1250);

        let again = store.cart(user).await;
        assert_eq!(again.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn carts_are_isolated_between_users() {
        let store = SessionStore::new();
        store
            .cart(Uuid::from_u128(1))
            .await
            .lock()
            .await
            .add_item(Uuid::from_u128(7), "Monstera", 1250);

        let other = store.cart(Uuid::from_u128(2)).await;
        assert!(other.lock().await.is_empty());
    }

    #[tokio::test]
    async fn end_session_destroys_the_cart() {
        let store = SessionStore::new();
        let user = Uuid::from_u128(1);
        store
            .cart(user)
            .await
            .lock()
            .await
            .add_item(Uuid::from_u128(7), "Monstera", 1250);

        store.end_session(user).await;

        let fresh = store.cart(user).await;
        assert!(fresh.lock().await.is_empty());
    }

    // N concurrent adds must serialize on the per-user lock and all land.
    #[tokio::test]
    async fn concurrent_adds_conserve_quantity() {
        let store = SessionStore::new();
        let user = Uuid::from_u128(1);
        let plant = Uuid::from_u128(7);

        let mut handles = Vec::new();
        for _ in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let cart = store.cart(user).await;
                let mut cart = cart.lock().await;
                cart.add_item(plant, "Monstera", 1250);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let cart = store.cart(user).await;
        let cart = cart.lock().await;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 50);
        assert_eq!(cart.total(), 50 * 1250);
    }
}
