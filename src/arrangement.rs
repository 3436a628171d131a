use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::bimap::BiMap;
use crate::error::{ParkingError, Result};
use crate::moves::DetailedMove;

/// A parking space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(pub u32);

/// A car that can be parked in exactly one slot at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Car(pub u32);

/// What a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Empty,
    Car(Car),
}

impl Item {
    pub fn is_empty(&self) -> bool {
        matches!(self, Item::Empty)
    }

    pub fn car(&self) -> Option<Car> {
        match *self {
            Item::Car(car) => Some(car),
            Item::Empty => None,
        }
    }
}

impl From<Car> for Item {
    fn from(car: Car) -> Self {
        Item::Car(car)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Space {}", self.0)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Car {}", self.0)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Empty => write!(f, "empty"),
            Item::Car(car) => write!(f, "{}", car),
        }
    }
}

/// One configuration of the lot: every slot holds one item and exactly one
/// slot is empty.
///
/// Two arrangements are equal when every slot holds the same item, which
/// makes them usable as keys when deduplicating visited states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arrangement {
    lot: BiMap<Slot, Item>,
}

impl Arrangement {
    /// Builds an arrangement from a total slot to item mapping.
    pub fn new(pairs: impl IntoIterator<Item = (Slot, Item)>) -> Result<Self> {
        let pairs: Vec<(Slot, Item)> = pairs.into_iter().collect();

        let empties = pairs.iter().filter(|(_, item)| item.is_empty()).count();
        if empties != 1 {
            return Err(ParkingError::InvalidArrangement(format!(
                "expected exactly one empty slot, found {}",
                empties
            )));
        }

        let count = pairs.len();
        let lot = BiMap::new(pairs).ok_or_else(|| {
            ParkingError::InvalidArrangement("a car is parked in more than one slot".into())
        })?;
        if lot.len() != count {
            return Err(ParkingError::InvalidArrangement(
                "a slot is listed more than once".into(),
            ));
        }

        Ok(Self { lot })
    }

    /// Slots `1..=size` with car `i` in slot `i` and the last slot empty.
    pub fn parked_in_order(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(ParkingError::InvalidArrangement(
                "a lot needs at least one slot".into(),
            ));
        }

        Self::new((1..=size).map(|i| {
            let item = if i == size {
                Item::Empty
            } else {
                Item::Car(Car(i))
            };
            (Slot(i), item)
        }))
    }

    /// A uniformly random rearrangement of the same items over the same slots.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let slots = self.slots();
        let mut items: Vec<Item> = slots.iter().filter_map(|s| self.item_at(*s)).collect();
        items.shuffle(rng);

        let lot = BiMap::new(slots.into_iter().zip(items))
            .expect("a permutation of a bijection is a bijection");
        Self { lot }
    }

    pub fn len(&self) -> usize {
        self.lot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lot.is_empty()
    }

    pub fn item_at(&self, slot: Slot) -> Option<Item> {
        self.lot.value(&slot).copied()
    }

    pub fn slot_of(&self, car: Car) -> Option<Slot> {
        self.lot.key(&Item::Car(car)).copied()
    }

    pub fn empty_slot(&self) -> Slot {
        *self
            .lot
            .key(&Item::Empty)
            .expect("arrangement lost its empty slot")
    }

    pub fn contains_slot(&self, slot: Slot) -> bool {
        self.lot.contains_key(&slot)
    }

    /// All slots in ascending order.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self.lot.keys().copied().collect();
        slots.sort_unstable();
        slots
    }

    /// All parked cars in ascending order.
    pub fn cars(&self) -> Vec<Car> {
        let mut cars: Vec<Car> = self.lot.values().filter_map(Item::car).collect();
        cars.sort_unstable();
        cars
    }

    /// Whether `other` holds the same cars over the same slots.
    pub fn is_rearrangement_of(&self, other: &Arrangement) -> bool {
        self.len() == other.len()
            && self.lot.keys().all(|slot| other.contains_slot(*slot))
            && self.cars() == other.cars()
    }

    /// Moves `car` into the empty slot, leaving its old slot empty.
    pub(crate) fn park(&mut self, car: Car) -> DetailedMove {
        let to = self.empty_slot();
        let from = self
            .slot_of(car)
            .expect("only cars from this lot are moved");

        self.lot.set(to, Item::Car(car));
        self.lot.set(from, Item::Empty);
        debug_assert_eq!(self.empty_slot(), from);

        DetailedMove { car, from, to }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.slots() {
            if let Some(item) = self.item_at(slot) {
                writeln!(f, "{}: {}", slot, item)?;
            }
        }
        Ok(())
    }
}
