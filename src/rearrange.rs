//! Move planning between two arrangements of the same lot.
//!
//! Every algorithm works on its own copy of the source arrangement, so the
//! caller's arrangements are never touched. All moves go into the slot that
//! is empty at that moment.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::arrangement::{Arrangement, Car, Item, Slot};
use crate::error::{ParkingError, Result};
use crate::moves::{DetailedMove, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarStatus {
    NotRearranged,
    /// On the active recursion path.
    Rearranging,
    Rearranged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotStatus {
    Empty,
    NotEmpty,
}

impl Arrangement {
    /// Fails unless `goal` parks the same cars over the same slots.
    pub fn check_goal(&self, goal: &Arrangement) -> Result<()> {
        if self.len() != goal.len() {
            return Err(ParkingError::incompatible(format!(
                "goal has {} slots, source has {}",
                goal.len(),
                self.len()
            )));
        }
        if let Some(missing) = self.slots().into_iter().find(|s| !goal.contains_slot(*s)) {
            return Err(ParkingError::incompatible(format!(
                "{} is missing from the goal",
                missing
            )));
        }
        if self.cars() != goal.cars() {
            return Err(ParkingError::incompatible(
                "goal parks a different set of cars",
            ));
        }
        Ok(())
    }

    /// Plans a valid move sequence slot by slot.
    ///
    /// Slots are fixed in ascending order. A slot holding the wrong car costs
    /// three moves: the wanted car steps into the empty slot, the current car
    /// takes the wanted car's old slot and the wanted car moves in.
    pub fn compute_moves(&self, goal: &Arrangement) -> Result<Vec<Move>> {
        self.check_goal(goal)?;

        let mut current = self.clone();
        let mut moves: Vec<Move> = Vec::new();

        for slot in self.slots() {
            let want = goal.item_at(slot).expect("goal shares the source slots");
            let have = current.item_at(slot).expect("working copy keeps its slots");
            if want == have {
                continue;
            }

            match (want, have) {
                (Item::Empty, Item::Car(held)) => moves.push(current.park(held).into()),
                (Item::Car(wanted), Item::Empty) => moves.push(current.park(wanted).into()),
                (Item::Car(wanted), Item::Car(held)) => {
                    moves.push(current.park(wanted).into());
                    moves.push(current.park(held).into());
                    moves.push(current.park(wanted).into());
                }
                (Item::Empty, Item::Empty) => unreachable!("equal items are skipped"),
            }
        }

        debug_assert_eq!(&current, goal);
        debug!(
            algorithm = "linear",
            slots = self.len(),
            moves = moves.len(),
            "planned moves"
        );
        Ok(moves)
    }

    /// Plans a sequence with the fewest possible moves.
    ///
    /// Each cycle of `L` misplaced cars costs `L + 1` moves: the last car of
    /// the cycle steps into the empty slot, the rest of the cycle falls into
    /// place behind it and it then takes the slot the first car left. Chains
    /// ending in the empty slot cost one move per car, and cars already in
    /// their goal slot are never moved.
    pub fn compute_minimal_moves(&self, goal: &Arrangement) -> Result<Vec<Move>> {
        self.check_goal(goal)?;

        let mut solver = CycleSolver::new(self, goal);
        for slot in self.slots() {
            let Some(Item::Car(car)) = self.item_at(slot) else {
                continue;
            };
            if solver.status[&car] != CarStatus::Rearranged {
                solver.rearrange(car);
                solver.close_cycle();
            }
        }

        debug_assert_eq!(&solver.current, goal);
        debug!(
            algorithm = "minimal",
            slots = self.len(),
            moves = solver.moves.len(),
            "planned moves"
        );
        Ok(solver.moves)
    }

    /// Enumerates every move sequence from `self` to `goal` that never
    /// revisits an arrangement.
    ///
    /// The search is exhaustive and only practical for small lots. An
    /// incompatible goal yields no sequences; a goal equal to `self` yields
    /// the single empty sequence.
    pub fn enumerate_move_sequences(&self, goal: &Arrangement) -> Vec<Vec<DetailedMove>> {
        if self.check_goal(goal).is_err() {
            return Vec::new();
        }

        let mut search = Enumerator {
            goal,
            current: self.clone(),
            path: HashSet::new(),
            moves: Vec::new(),
            solutions: Vec::new(),
        };
        search.visit();

        debug!(
            algorithm = "enumerate",
            slots = self.len(),
            solutions = search.solutions.len(),
            "enumerated move sequences"
        );
        search.solutions
    }
}

struct CycleSolver<'a> {
    goal: &'a Arrangement,
    current: Arrangement,
    status: HashMap<Car, CarStatus>,
    slots: HashMap<Slot, SlotStatus>,
    /// The car that stepped aside to open its cycle.
    parked: Option<Car>,
    moves: Vec<Move>,
}

impl<'a> CycleSolver<'a> {
    fn new(source: &Arrangement, goal: &'a Arrangement) -> Self {
        let status = source
            .cars()
            .into_iter()
            .map(|car| {
                let status = if source.slot_of(car) == goal.slot_of(car) {
                    CarStatus::Rearranged
                } else {
                    CarStatus::NotRearranged
                };
                (car, status)
            })
            .collect();

        let empty = source.empty_slot();
        let slots = source
            .slots()
            .into_iter()
            .map(|slot| {
                let status = if slot == empty {
                    SlotStatus::Empty
                } else {
                    SlotStatus::NotEmpty
                };
                (slot, status)
            })
            .collect();

        Self {
            goal,
            current: source.clone(),
            status,
            slots,
            parked: None,
            moves: Vec::new(),
        }
    }

    fn rearrange(&mut self, car: Car) {
        self.status.insert(car, CarStatus::Rearranging);
        let desired = self.goal.slot_of(car).expect("goal parks every source car");

        if self.slots[&desired] == SlotStatus::NotEmpty {
            let occupant = self
                .current
                .item_at(desired)
                .and_then(|item| item.car())
                .expect("occupied slot holds a car");

            if self.status[&occupant] == CarStatus::Rearranging {
                // The chain came back to its start.
                self.relocate(car);
                self.parked = Some(car);
                return;
            }
            self.rearrange(occupant);
        }

        debug_assert_eq!(self.current.empty_slot(), desired);
        self.relocate(car);
        self.status.insert(car, CarStatus::Rearranged);
    }

    /// Moves the parked car into the slot its cycle left empty.
    fn close_cycle(&mut self) {
        if let Some(car) = self.parked.take() {
            debug_assert_eq!(self.goal.slot_of(car), Some(self.current.empty_slot()));
            self.relocate(car);
            self.status.insert(car, CarStatus::Rearranged);
        }
    }

    fn relocate(&mut self, car: Car) {
        let mv = self.current.park(car);
        self.slots.insert(mv.from, SlotStatus::Empty);
        self.slots.insert(mv.to, SlotStatus::NotEmpty);
        trace!(car = mv.car.0, from = mv.from.0, to = mv.to.0, "move");
        self.moves.push(mv.into());
    }
}

struct Enumerator<'a> {
    goal: &'a Arrangement,
    current: Arrangement,
    /// Arrangements on the current search path, excluding `current`.
    path: HashSet<Arrangement>,
    moves: Vec<DetailedMove>,
    solutions: Vec<Vec<DetailedMove>>,
}

impl Enumerator<'_> {
    fn visit(&mut self) {
        if &self.current == self.goal {
            self.solutions.push(self.moves.clone());
            return;
        }
        if self.path.contains(&self.current) {
            return;
        }

        self.path.insert(self.current.clone());
        for car in self.current.cars() {
            let mv = self.current.park(car);
            self.moves.push(mv);

            self.visit();

            self.moves.pop();
            // The car's old slot is empty again, so parking it undoes the move.
            self.current.park(car);
        }
        self.path.remove(&self.current);
    }
}
