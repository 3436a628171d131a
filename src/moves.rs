use std::fmt;

use crate::arrangement::{Arrangement, Car, Slot};
use crate::error::{ParkingError, Result};

/// A relocation of one car into the slot that is empty at that moment.
///
/// `from` is absent when the origin is not recorded; replaying such a move
/// takes the car from wherever it is currently parked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub car: Car,
    pub from: Option<Slot>,
    pub to: Slot,
}

/// A relocation with both endpoints known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetailedMove {
    pub car: Car,
    pub from: Slot,
    pub to: Slot,
}

impl From<DetailedMove> for Move {
    fn from(mv: DetailedMove) -> Self {
        Move {
            car: mv.car,
            from: Some(mv.from),
            to: mv.to,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(f, "{}: {} -> {}", self.car, from, self.to),
            None => write!(f, "{}: -> {}", self.car, self.to),
        }
    }
}

impl fmt::Display for DetailedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.car, self.from, self.to)
    }
}

impl Arrangement {
    /// Applies one move, checking that it lands in the empty slot.
    ///
    /// On error the arrangement is left untouched.
    pub fn apply(&mut self, mv: &Move) -> Result<DetailedMove> {
        let illegal = |reason: &str| ParkingError::IllegalMove {
            car: mv.car,
            to: mv.to,
            reason: reason.to_string(),
        };

        let current = self
            .slot_of(mv.car)
            .ok_or_else(|| illegal("car is not parked in this lot"))?;
        if let Some(from) = mv.from {
            if from != current {
                return Err(illegal(&format!("car is parked in {}, not {}", current, from)));
            }
        }
        if mv.to != self.empty_slot() {
            return Err(illegal("destination is not the empty slot"));
        }

        Ok(self.park(mv.car))
    }

    /// Applies a sequence of moves in order, stopping at the first illegal one.
    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) -> Result<()> {
        for mv in moves {
            self.apply(mv)?;
        }
        Ok(())
    }

    pub fn make_moves(&mut self, moves: &[DetailedMove]) -> Result<()> {
        for mv in moves {
            self.apply(&Move::from(*mv))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::Item;

    fn source() -> Arrangement {
        Arrangement::new([
            (Slot(1), Item::Car(Car(1))),
            (Slot(2), Item::Empty),
            (Slot(3), Item::Car(Car(2))),
        ])
        .unwrap()
    }

    #[test]
    fn test_apply_legal_move() {
        let mut lot = source();
        let done = lot
            .apply(&Move {
                car: Car(1),
                from: Some(Slot(1)),
                to: Slot(2),
            })
            .unwrap();

        assert_eq!(done.from, Slot(1));
        assert_eq!(lot.empty_slot(), Slot(1));
        assert_eq!(lot.item_at(Slot(2)), Some(Item::Car(Car(1))));
    }

    #[test]
    fn test_apply_without_origin() {
        let mut lot = source();
        lot.apply(&Move {
            car: Car(2),
            from: None,
            to: Slot(2),
        })
        .unwrap();
        assert_eq!(lot.empty_slot(), Slot(3));
    }

    #[test]
    fn test_apply_rejects_occupied_destination() {
        let mut lot = source();
        let before = lot.clone();
        let err = lot
            .apply(&Move {
                car: Car(1),
                from: Some(Slot(1)),
                to: Slot(3),
            })
            .unwrap_err();

        assert!(matches!(err, ParkingError::IllegalMove { car: Car(1), .. }));
        assert_eq!(lot, before);
    }

    #[test]
    fn test_apply_rejects_wrong_origin_and_unknown_car() {
        let mut lot = source();
        assert!(lot
            .apply(&Move {
                car: Car(1),
                from: Some(Slot(3)),
                to: Slot(2),
            })
            .is_err());
        assert!(lot
            .apply(&Move {
                car: Car(9),
                from: None,
                to: Slot(2),
            })
            .is_err());
    }

    #[test]
    fn test_make_moves_stops_at_first_illegal_move() {
        let mut lot = source();
        let moves = [
            DetailedMove {
                car: Car(1),
                from: Slot(1),
                to: Slot(2),
            },
            DetailedMove {
                car: Car(2),
                from: Slot(3),
                to: Slot(2),
            },
        ];

        assert!(lot.make_moves(&moves).is_err());
        assert_eq!(lot.empty_slot(), Slot(1));
    }

    #[test]
    fn test_display() {
        let mv = DetailedMove {
            car: Car(3),
            from: Slot(1),
            to: Slot(2),
        };
        assert_eq!(mv.to_string(), "Car 3: Space 1 -> Space 2");
        assert_eq!(Move::from(mv).to_string(), "Car 3: Space 1 -> Space 2");
    }
}
