//! Ability target kinds
//!
//! The closed set of ability slots a classification rule can apply to.
//! Rule specs declare one or more targets; the registry expands a spec
//! into one compiled rule per declared target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The ability slot a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AbilityTarget {
    /// Captain ability (passive, always active while leading)
    Captain,
    /// Regular special ability (activated, charges over turns)
    Special,
    /// Super special ability
    SuperSpecial,
    /// Swap/change effect of a dual-form unit
    Swap,
    /// Sailor/crew ability (passive while on the crew)
    Sailor,
    /// Limit-break note
    LimitBreak,
    /// Potential ability (unlocked through limit break)
    Potential,
    /// Support ability (granted while assigned as a supporter)
    Support,
    /// Activation criteria text of a super special
    SuperSpecialCriteria,
}

impl AbilityTarget {
    /// Every target kind, in canonical presentation order.
    pub const ALL: [AbilityTarget; 9] = [
        AbilityTarget::Captain,
        AbilityTarget::Special,
        AbilityTarget::SuperSpecial,
        AbilityTarget::Swap,
        AbilityTarget::Sailor,
        AbilityTarget::LimitBreak,
        AbilityTarget::Potential,
        AbilityTarget::Support,
        AbilityTarget::SuperSpecialCriteria,
    ];

    /// Stable machine-readable identifier (matches the serde form).
    pub fn id(&self) -> &'static str {
        match self {
            Self::Captain => "captain",
            Self::Special => "special",
            Self::SuperSpecial => "superSpecial",
            Self::Swap => "swap",
            Self::Sailor => "sailor",
            Self::LimitBreak => "limitBreak",
            Self::Potential => "potential",
            Self::Support => "support",
            Self::SuperSpecialCriteria => "superSpecialCriteria",
        }
    }

    /// Human-readable singular label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Captain => "captain ability",
            Self::Special => "special",
            Self::SuperSpecial => "super special",
            Self::Swap => "swap effect",
            Self::Sailor => "sailor ability",
            Self::LimitBreak => "limit break note",
            Self::Potential => "potential ability",
            Self::Support => "support ability",
            Self::SuperSpecialCriteria => "super special criteria",
        }
    }

    /// Plural label substituted for the `%targets%` placeholder in rule
    /// names. "super specials" is a named irregular; the generic case is
    /// the target id with a plural "s".
    pub fn plural_label(&self) -> &'static str {
        match self {
            Self::Captain => "captains",
            Self::Special => "specials",
            Self::SuperSpecial => "super specials",
            Self::Swap => "swaps",
            Self::Sailor => "sailors",
            Self::LimitBreak => "limit breaks",
            Self::Potential => "potentials",
            Self::Support => "supports",
            Self::SuperSpecialCriteria => "super special criteria",
        }
    }
}

impl fmt::Display for AbilityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AbilityTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AbilityTarget::ALL
            .iter()
            .find(|t| t.id() == s)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("unknown ability target: '{}'", s)))
    }
}
