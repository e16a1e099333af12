//! A `Polymer` is a buffer of units, ASCII letters whose case encodes their
//! polarity, in which adjacent same-letter, opposite-case pairs cancel.

use failure::Error;
use itertools::Itertools;
use std::fmt;
use std::fs;
use std::path::Path;

/// A single unit: the letter is the unit's type, the case its polarity.
pub type Unit = u8;

/// The bit that distinguishes an ASCII letter from its opposite-case
/// counterpart. Two units react exactly when they differ in this bit alone.
const CASE_BIT: Unit = 0x20;

/// Reject inputs of this many bytes or more. A puzzle input is a single line
/// well under 64 KiB, so anything bigger is garbage.
pub const MAX_LEN: usize = 1 << 16;

/// True if `left` and `right` are the same letter in opposite cases.
///
/// Non-letters never react, so stray bytes in a loaded buffer are inert
/// rather than wrong: `'\n'` and `'*'` differ in exactly the case bit, but
/// they don't cancel.
fn units_react(left: Unit, right: Unit) -> bool {
    left.is_ascii_alphabetic() && (left ^ right) == CASE_BIT
}

/// One position in a polymer's buffer. Removing a unit tombstones its slot as
/// `Empty` in place; surviving units keep their positions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Unit(Unit),
    Empty,
}

impl Slot {
    fn unit(self) -> Option<Unit> {
        match self {
            Slot::Unit(unit) => Some(unit),
            Slot::Empty => None,
        }
    }

    fn is_live(self) -> bool {
        self.unit().is_some()
    }

    /// True if `self` and `other` hold reacting units. An empty slot reacts
    /// with nothing.
    fn reacts_with(self, other: Slot) -> bool {
        match (self, other) {
            (Slot::Unit(left), Slot::Unit(right)) => units_react(left, right),
            _ => false,
        }
    }
}

/// An ordered buffer of unit slots, some of which may have been tombstoned by
/// reduction or deletion. Cloning a polymer copies the whole buffer, so
/// clones mutate independently of their original.
#[derive(Clone, Debug)]
pub struct Polymer {
    slots: Vec<Slot>,
}

impl<'a> From<&'a [u8]> for Polymer {
    fn from(units: &'a [u8]) -> Polymer {
        Polymer {
            slots: units.iter().map(|&unit| Slot::Unit(unit)).collect(),
        }
    }
}

impl<'a> From<&'a str> for Polymer {
    fn from(units: &'a str) -> Polymer {
        Polymer::from(units.as_bytes())
    }
}

impl Polymer {
    /// Read a polymer from the file at `path`.
    ///
    /// The whole file is one run of units, except that trailing whitespace
    /// (the newline ending the input line) is stripped so it doesn't count
    /// toward the polymer's length. Inputs of `MAX_LEN` bytes or more are
    /// rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Polymer, Error> {
        let path = path.as_ref();
        let mut bytes = fs::read(path)
            .map_err(|err| format_err!("can't read puzzle input {:?}: {}", path, err))?;
        if bytes.len() >= MAX_LEN {
            bail!(
                "puzzle input {:?} is implausibly large: {} bytes",
                path,
                bytes.len()
            );
        }
        while bytes.last().map_or(false, |&byte| byte.is_ascii_whitespace()) {
            bytes.pop();
        }
        Ok(Polymer::from(&bytes[..]))
    }

    /// The number of live units. Tombstoned slots don't count.
    pub fn len(&self) -> usize {
        self.units().count()
    }

    pub fn is_empty(&self) -> bool {
        self.units().next().is_none()
    }

    /// Iterate over the live units in order, skipping tombstones.
    pub fn units<'a>(&'a self) -> impl Iterator<Item = Unit> + 'a {
        self.slots.iter().filter_map(|slot| slot.unit())
    }

    /// True if no two adjacent live units react (that is, if `reduce` would
    /// leave this polymer unchanged).
    pub fn is_stable(&self) -> bool {
        self.units()
            .tuple_windows()
            .all(|(left, right)| !units_react(left, right))
    }

    /// Index of the first live slot at or after `from`, if any.
    fn next_live(&self, from: usize) -> Option<usize> {
        (from..self.slots.len()).find(|&i| self.slots[i].is_live())
    }

    /// Index of the last live slot strictly before `from`, if any.
    fn prev_live(&self, from: usize) -> Option<usize> {
        (0..from).rev().find(|&i| self.slots[i].is_live())
    }

    /// Cancel reacting adjacent pairs, cascades included, until the polymer
    /// is stable, tombstoning every unit removed. Returns the number of units
    /// still live.
    ///
    /// A single left-to-right scan suffices: a cancellation can only create a
    /// new reacting pair immediately to its own left, so after each one the
    /// left cursor backs up one live unit instead of the scan restarting.
    pub fn reduce(&mut self) -> usize {
        let mut live = self.len();

        let mut a = match self.next_live(0) {
            Some(first) => first,
            None => return live,
        };
        let mut b = match self.next_live(a + 1) {
            Some(second) => second,
            None => return live,
        };

        loop {
            if self.slots[a].reacts_with(self.slots[b]) {
                self.slots[a] = Slot::Empty;
                self.slots[b] = Slot::Empty;
                live -= 2;
                a = match self.prev_live(a) {
                    // Reconsider the unit left of the hole: it may react with
                    // whatever now follows it.
                    Some(prev) => prev,
                    // The whole prefix is gone; start a fresh pair beyond b.
                    None => match self.next_live(b + 1) {
                        Some(next) => next,
                        None => return live,
                    },
                };
            } else {
                a = b;
            }
            // Everything between a and the old b is tombstoned, so this finds
            // b's successor in both arms above.
            b = match self.next_live(a + 1) {
                Some(next) => next,
                None => return live,
            };
        }
    }

    /// Tombstone every occurrence of `unit`, upper- and lowercase alike,
    /// without reducing anything. Returns how many slots were emptied. The
    /// argument may itself be in either case.
    pub fn delete_unit(&mut self, unit: Unit) -> usize {
        let mut deleted = 0;
        for slot in &mut self.slots {
            if let Slot::Unit(u) = *slot {
                if u == unit || u == (unit ^ CASE_BIT) {
                    *slot = Slot::Empty;
                    deleted += 1;
                }
            }
        }
        deleted
    }

    /// Reduce 26 copies of this polymer, each with one unit type deleted up
    /// front, and return the deletion that shrinks it furthest as
    /// `(unit, reduced length)`. The reported unit is lowercase; ties go to
    /// the unit earliest in the alphabet.
    pub fn best_deletion(&self) -> (Unit, usize) {
        (b'a'..=b'z')
            .map(|unit| {
                let mut candidate = self.clone();
                candidate.delete_unit(unit);
                (unit, candidate.reduce())
            })
            .min_by_key(|&(_unit, len)| len)
            .unwrap()
    }
}

impl fmt::Display for Polymer {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for unit in self.units() {
            write!(fmt, "{}", unit as char)?;
        }
        Ok(())
    }
}
