use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One plant's position in a cart. `unit_price` is captured when the plant
/// is first added and never re-read from the catalog, so the order later
/// records exactly what the customer was shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub plant_id: Uuid,
    pub name: String,
    /// Price in minor units (cents) at the time the line was created.
    pub unit_price: i64,
    pub quantity: i32,
}

/// Ordered line items pending purchase for one authenticated user.
///
/// Invariants: a `plant_id` appears at most once (quantity accumulates
/// instead), and every line has quantity >= 1. A line that would reach
/// quantity 0 is removed, never kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Adds one unit of a plant. An existing line for the same plant keeps
    /// its originally captured price; only the quantity grows.
    pub fn add_item(&mut self, plant_id: Uuid, name: &str, unit_price: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.plant_id == plant_id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            plant_id,
            name: name.to_string(),
            unit_price,
            quantity: 1,
        });
    }

    /// Increments the quantity of the line at `index`. An out-of-range index
    /// is ignored; the storefront UI navigates by cart position and may race
    /// with its own removals.
    pub fn increase_quantity(&mut self, index: usize) {
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity += 1;
        }
    }

    /// Decrements the quantity of the line at `index`, dropping the line
    /// when it reaches zero. Out-of-range indexes are ignored.
    pub fn decrease_quantity(&mut self, index: usize) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        line.quantity -= 1;
        if line.quantity <= 0 {
            self.lines.remove(index);
        }
    }

    /// Removes the line at `index` regardless of quantity. Indexes past the
    /// removed line shift down by one. Out-of-range indexes are ignored.
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    /// Sum of `unit_price * quantity` over all lines, in minor units.
    /// Integer arithmetic, so totals are exact to the cent.
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(|l| l.unit_price * l.quantity as i64)
            .sum()
    }

    /// Empties the cart. Called after a committed checkout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn add_same_plant_accumulates_quantity() {
        let mut cart = Cart::new();
        cart.add_item(plant(7), "Monstera", 1250);
        cart.add_item(plant(7), "Monstera", 1250);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[0].unit_price, 1250);
        assert_eq!(cart.total(), 2500);
    }

    #[test]
    fn add_keeps_price_captured_on_first_add() {
        let mut cart = Cart::new();
        cart.add_item(plant(7), "Monstera", 1250);
        // Catalog price changed between adds; the line keeps the old price.
        cart.add_item(plant(7), "Monstera", 9999);

        assert_eq!(cart.lines()[0].unit_price, 1250);
        assert_eq!(cart.total(), 2500);
    }

    #[test]
    fn quantity_matches_number_of_adds() {
        let mut cart = Cart::new();
        for _ in 0..25 {
            cart.add_item(plant(1), "Fern", 300);
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 25);
    }

    #[test]
    fn decrease_at_quantity_one_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(plant(3), "Cactus", 900);
        cart.decrease_quantity(0);

        assert!(cart.is_empty());
        assert!(!cart.lines().iter().any(|l| l.plant_id == plant(3)));
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn increase_then_decrease_round_trips() {
        let mut cart = Cart::new();
        cart.add_item(plant(2), "Bonsai", 4500);
        cart.increase_quantity(0);
        cart.increase_quantity(0);
        assert_eq!(cart.lines()[0].quantity, 3);

        cart.decrease_quantity(0);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 9000);
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(plant(1), "Fern", 300);

        cart.increase_quantity(5);
        cart.decrease_quantity(5);
        cart.remove_line(5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn remove_shifts_later_indexes_down() {
        let mut cart = Cart::new();
        cart.add_item(plant(1), "Fern", 300);
        cart.add_item(plant(2), "Bonsai", 4500);
        cart.add_item(plant(3), "Cactus", 900);

        cart.remove_line(0);
        assert_eq!(cart.lines()[0].plant_id, plant(2));
        assert_eq!(cart.lines()[1].plant_id, plant(3));
    }

    #[test]
    fn empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total(), 0);
    }

    #[test]
    fn total_sums_across_lines() {
        let mut cart = Cart::new();
        cart.add_item(plant(1), "Fern", 1999);
        cart.add_item(plant(1), "Fern", 1999);
        cart.add_item(plant(1), "Fern", 1999);
        cart.add_item(plant(2), "Bonsai", 4500);

        assert_eq!(cart.total(), 3 * 1999 + 4500);
    }

    #[test]
    fn clear_empties_all_lines() {
        let mut cart = Cart::new();
        cart.add_item(plant(1), "Fern", 300);
        cart.add_item(plant(2), "Bonsai", 4500);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }
}
