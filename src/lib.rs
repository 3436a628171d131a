//! Rearranging cars in a parking lot that has exactly one empty slot.
//!
//! ```
//! use carpark::{Arrangement, Car, Item, Slot};
//!
//! let source = Arrangement::new([
//!     (Slot(1), Item::Car(Car(1))),
//!     (Slot(2), Item::Car(Car(2))),
//!     (Slot(3), Item::Empty),
//! ]).unwrap();
//! let goal = Arrangement::new([
//!     (Slot(1), Item::Car(Car(2))),
//!     (Slot(2), Item::Car(Car(1))),
//!     (Slot(3), Item::Empty),
//! ]).unwrap();
//!
//! let moves = source.compute_minimal_moves(&goal).unwrap();
//! assert_eq!(moves.len(), 3);
//!
//! let mut lot = source.clone();
//! lot.apply_all(&moves).unwrap();
//! assert_eq!(lot, goal);
//! ```

pub mod arrangement;
pub mod bimap;
pub mod config;
pub mod error;
pub mod moves;
mod rearrange;

pub use arrangement::{Arrangement, Car, Item, Slot};
pub use bimap::BiMap;
pub use error::{ParkingError, Result};
pub use moves::{DetailedMove, Move};
