/*!
Partial beliefs about the occupant of a cell.

For each of the three hazards a cell may be known to be free of the hazard, known to hold the hazard, or neither.
These three values are a [Belief], and the beliefs about each hazard at a cell together make a [HazardBelief].

A hazard belief is *safe* when every hazard is known to be absent.

```rust
# use pacard::structures::belief::{Belief, Classification, HazardBelief};
# use pacard::structures::label::Label;
let mut belief = HazardBelief::default();
assert_eq!(belief.classification(), Classification::Unknown);

belief.set(Label::Wumpus, Belief::Absent);
belief.set(Label::Teleporter, Belief::Absent);
assert_eq!(belief.classification(), Classification::Uncertain);

belief.set(Label::Poison, Belief::Absent);
assert!(belief.is_safe());
```
*/

use crate::structures::label::Label;

/// What is known about one hazard at one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Belief {
    /// The absence of the hazard is entailed.
    Absent,

    /// The presence of the hazard is entailed.
    Present,

    /// Neither the presence nor the absence of the hazard is (yet) entailed.
    #[default]
    Unknown,
}

impl Belief {
    /// Whether the belief is either [Absent](Belief::Absent) or [Present](Belief::Present).
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// The belief as a truth value, if resolved.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Absent => Some(false),
            Self::Present => Some(true),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Present => write!(f, "present"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// How a cell is classified, given what is known of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Every hazard is absent.
    Safe,

    /// Some hazard is present.
    Hazardous,

    /// Some, but not every, hazard is known to be absent, and no hazard is known to be present.
    Uncertain,

    /// Nothing is known.
    Unknown,
}

/// What is known about each hazard at one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HazardBelief {
    pub wumpus: Belief,
    pub teleporter: Belief,
    pub poison: Belief,
}

impl HazardBelief {
    /// A belief with every hazard absent.
    pub fn safe() -> Self {
        HazardBelief {
            wumpus: Belief::Absent,
            teleporter: Belief::Absent,
            poison: Belief::Absent,
        }
    }

    /// The belief about the hazard of `label`.
    ///
    /// Labels which are not hazards have no belief, and are reported as [Unknown](Belief::Unknown).
    pub fn get(&self, label: Label) -> Belief {
        match label {
            Label::Wumpus => self.wumpus,
            Label::Teleporter => self.teleporter,
            Label::Poison => self.poison,
            _ => Belief::Unknown,
        }
    }

    /// Sets the belief about the hazard of `label`, ignoring labels which are not hazards.
    pub fn set(&mut self, label: Label, belief: Belief) {
        match label {
            Label::Wumpus => self.wumpus = belief,
            Label::Teleporter => self.teleporter = belief,
            Label::Poison => self.poison = belief,
            _ => {
                log::warn!("A belief about {label} was dropped as {label} is not a hazard")
            }
        }
    }

    /// Pairs of each hazard with its belief, in query order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, Belief)> + '_ {
        Label::HAZARDS.into_iter().map(|label| (label, self.get(label)))
    }

    pub fn is_safe(&self) -> bool {
        self.iter().all(|(_, belief)| belief == Belief::Absent)
    }

    /// Whether some hazard is known to be present.
    pub fn is_hazardous(&self) -> bool {
        self.iter().any(|(_, belief)| belief == Belief::Present)
    }

    pub fn classification(&self) -> Classification {
        if self.is_safe() {
            Classification::Safe
        } else if self.is_hazardous() {
            Classification::Hazardous
        } else if self.iter().any(|(_, belief)| belief.is_resolved()) {
            Classification::Uncertain
        } else {
            Classification::Unknown
        }
    }
}

impl std::fmt::Display for HazardBelief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "wumpus: {}, teleporter: {}, poison: {}",
            self.wumpus, self.teleporter, self.poison
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(HazardBelief::safe().classification(), Classification::Safe);

        let mut belief = HazardBelief::default();
        belief.set(Label::Poison, Belief::Absent);
        assert_eq!(belief.classification(), Classification::Uncertain);

        belief.set(Label::Teleporter, Belief::Present);
        assert_eq!(belief.classification(), Classification::Hazardous);
        assert!(belief.is_hazardous());
    }

    #[test]
    fn non_hazards_are_ignored() {
        let mut belief = HazardBelief::safe();
        belief.set(Label::Safe, Belief::Present);
        belief.set(Label::WumpusStench, Belief::Present);

        assert_eq!(belief, HazardBelief::safe());
        assert_eq!(belief.get(Label::Safe), Belief::Unknown);
    }
}
