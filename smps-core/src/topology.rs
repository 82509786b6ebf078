//! Converter topologies
//!
//! The engine supports a closed set of six DC-DC topologies. Three share a
//! ground between input and output; three transfer energy through a
//! transformer and therefore take a turns ratio (Np/Ns).
//!
//! ```text
//! Non-isolated          Isolated
//! ------------          --------
//! buck       step-down  flyback    isolated buck-boost
//! boost      step-up    forward    isolated buck
//! buck-boost inverting  push-pull  center-tapped
//! ```

use core::fmt;
use core::str::FromStr;

use crate::constants::converter::{DUTY_CYCLE_MAX, DUTY_CYCLE_MAX_TRANSFORMER_RESET, DUTY_CYCLE_MIN};
use crate::errors::{ParseTopologyError, TopologyResult};

/// Switch-mode converter topology
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// Step-down converter
    #[default]
    Buck,
    /// Step-up converter
    Boost,
    /// Inverting buck-boost converter
    BuckBoost,
    /// Isolated buck-boost; the transformer stores the energy
    Flyback,
    /// Isolated buck with a reset winding
    Forward,
    /// Center-tapped transformer driven by two alternating switches
    PushPull,
}

impl Topology {
    /// All topologies in picker order, non-isolated first.
    pub const ALL: [Topology; 6] = [
        Topology::Buck,
        Topology::Boost,
        Topology::BuckBoost,
        Topology::Flyback,
        Topology::Forward,
        Topology::PushPull,
    ];

    /// Topologies without galvanic isolation.
    pub fn non_isolated() -> impl Iterator<Item = Topology> {
        Self::ALL.into_iter().filter(|t| !t.is_isolated())
    }

    /// Transformer-coupled topologies.
    pub fn isolated() -> impl Iterator<Item = Topology> {
        Self::ALL.into_iter().filter(|t| t.is_isolated())
    }

    /// Whether the topology uses a transformer and so consumes a turns ratio.
    pub const fn is_isolated(self) -> bool {
        matches!(self, Topology::Flyback | Topology::Forward | Topology::PushPull)
    }

    /// Stable kebab-case identifier used on the wire.
    pub const fn id(self) -> &'static str {
        match self {
            Topology::Buck => "buck",
            Topology::Boost => "boost",
            Topology::BuckBoost => "buck-boost",
            Topology::Flyback => "flyback",
            Topology::Forward => "forward",
            Topology::PushPull => "push-pull",
        }
    }

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Topology::Buck => "Buck",
            Topology::Boost => "Boost",
            Topology::BuckBoost => "Buck-Boost",
            Topology::Flyback => "Flyback",
            Topology::Forward => "Forward",
            Topology::PushPull => "Push-Pull",
        }
    }

    /// One-line description of what the converter does.
    pub const fn description(self) -> &'static str {
        match self {
            Topology::Buck => "Step-Down",
            Topology::Boost => "Step-Up",
            Topology::BuckBoost => "Inverting",
            Topology::Flyback => "Isolated Buck-Boost",
            Topology::Forward => "Isolated Buck",
            Topology::PushPull => "Center-Tap",
        }
    }

    /// Inclusive `(min, max)` range the duty cycle is clamped to.
    ///
    /// Forward and push-pull stop below 50 % so the transformer core resets
    /// every period.
    pub const fn duty_limits(self) -> (f64, f64) {
        match self {
            Topology::Forward | Topology::PushPull => {
                (DUTY_CYCLE_MIN, DUTY_CYCLE_MAX_TRANSFORMER_RESET)
            }
            _ => (DUTY_CYCLE_MIN, DUTY_CYCLE_MAX),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Topology {
    type Err = ParseTopologyError;

    /// Accepts the wire identifier case-insensitively; `_` and spaces may
    /// stand in for `-` (`"Push Pull"`, `"buck_boost"`).
    fn from_str(s: &str) -> TopologyResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTopologyError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|t| same_identifier(trimmed, t.id()))
            .ok_or(ParseTopologyError::Unknown)
    }
}

fn same_identifier(input: &str, id: &str) -> bool {
    let normalize = |c: char| match c {
        '_' | ' ' => '-',
        c => c.to_ascii_lowercase(),
    };
    input.len() == id.len() && input.chars().map(normalize).eq(id.chars())
}
