/*!
Labels of the predicates which describe a cave.

There are two families of label:
- *Unique* labels, which describe what occupies a cell.
  The wumpus, a teleporter, and a poison capsule are *hazards*, and a cell without any hazard is *safe*.
- *Indicator* labels, which describe what is sensed at a cell.
  An indicator holds at a cell if and only if some adjacent cell is occupied by the corresponding hazard.

```rust
# use pacard::structures::label::Label;
assert!(Label::Wumpus.is_deadly());
assert!(!Label::Teleporter.is_deadly());

assert_eq!(Label::Poison.indicator(), Some(Label::PoisonChemicals));
assert_eq!(Label::TeleporterGlow.hazard(), Some(Label::Teleporter));
assert_eq!(Label::Safe.indicator(), None);
```
*/

/// The label of a predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The wumpus occupies the cell.
    Wumpus,

    /// A teleporter occupies the cell.
    Teleporter,

    /// A poison capsule occupies the cell.
    Poison,

    /// No hazard occupies the cell.
    Safe,

    /// Chemicals from a poison capsule are sensed at the cell.
    PoisonChemicals,

    /// The glow of a teleporter is sensed at the cell.
    TeleporterGlow,

    /// The stench of the wumpus is sensed at the cell.
    WumpusStench,
}

impl Label {
    /// The hazards, in the order they are queried.
    pub const HAZARDS: [Label; 3] = [Label::Teleporter, Label::Wumpus, Label::Poison];

    /// The indicators, in the order of their hazards.
    pub const INDICATORS: [Label; 3] = [
        Label::TeleporterGlow,
        Label::WumpusStench,
        Label::PoisonChemicals,
    ];

    /// Whether entering a cell with the label is fatal.
    ///
    /// A teleporter carries the agent away, but is not fatal.
    pub fn is_deadly(&self) -> bool {
        matches!(self, Self::Wumpus | Self::Poison)
    }

    /// Whether the label is one of the wumpus, a teleporter, or a poison capsule.
    pub fn is_hazard(&self) -> bool {
        matches!(self, Self::Wumpus | Self::Teleporter | Self::Poison)
    }

    /// Whether the label describes the occupant of a cell.
    pub fn is_unique(&self) -> bool {
        self.is_hazard() || self.is_safe()
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe)
    }

    pub fn is_teleporter(&self) -> bool {
        matches!(self, Self::Teleporter)
    }

    /// Whether the label describes something sensed at a cell.
    pub fn is_indicator(&self) -> bool {
        matches!(
            self,
            Self::PoisonChemicals | Self::TeleporterGlow | Self::WumpusStench
        )
    }

    /// The indicator emitted by a hazard, if the label is a hazard.
    pub fn indicator(&self) -> Option<Label> {
        match self {
            Self::Wumpus => Some(Self::WumpusStench),
            Self::Teleporter => Some(Self::TeleporterGlow),
            Self::Poison => Some(Self::PoisonChemicals),
            _ => None,
        }
    }

    /// The hazard indicated by an indicator, if the label is an indicator.
    pub fn hazard(&self) -> Option<Label> {
        match self {
            Self::WumpusStench => Some(Self::Wumpus),
            Self::TeleporterGlow => Some(Self::Teleporter),
            Self::PoisonChemicals => Some(Self::Poison),
            _ => None,
        }
    }

    /// The single character used to display the label.
    pub fn as_char(&self) -> char {
        match self {
            Self::Wumpus => 'w',
            Self::Teleporter => 't',
            Self::Poison => 'p',
            Self::Safe => 'o',
            Self::PoisonChemicals => 'c',
            Self::TeleporterGlow => 'g',
            Self::WumpusStench => 's',
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_partition() {
        let all = [
            Label::Wumpus,
            Label::Teleporter,
            Label::Poison,
            Label::Safe,
            Label::PoisonChemicals,
            Label::TeleporterGlow,
            Label::WumpusStench,
        ];

        for label in all {
            assert_ne!(label.is_unique(), label.is_indicator());
            assert_eq!(label.is_teleporter(), label == Label::Teleporter);
        }
    }

    #[test]
    fn indicators_match_hazards() {
        for hazard in Label::HAZARDS {
            let indicator = hazard.indicator().expect("hazard without indicator");
            assert!(indicator.is_indicator());
            assert_eq!(indicator.hazard(), Some(hazard));
        }

        for (hazard, indicator) in Label::HAZARDS.iter().zip(Label::INDICATORS) {
            assert_eq!(hazard.indicator(), Some(indicator));
        }
    }
}
