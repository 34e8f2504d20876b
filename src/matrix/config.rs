//! Configuration for loading matrices from text

use std::fmt;
use std::str::FromStr;

/// What the parser does with an entry whose coordinate lies outside the
/// `rows x cols` declared in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Store the entry as given
    #[default]
    Ignore,
    /// Drop the entry and log a warning
    Skip,
    /// Fail the parse with a format error naming the line
    Reject,
}

impl BoundsPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            BoundsPolicy::Ignore => "ignore",
            BoundsPolicy::Skip => "skip",
            BoundsPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(BoundsPolicy::Ignore),
            "skip" => Ok(BoundsPolicy::Skip),
            "reject" => Ok(BoundsPolicy::Reject),
            other => Err(format!(
                "unknown bounds policy \"{other}\" (expected ignore, skip or reject)"
            )),
        }
    }
}

/// Options for [`parse_matrix`](crate::parse_matrix)
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Handling of entries outside the declared dimensions
    pub bounds: BoundsPolicy,
}

impl ParseOptions {
    /// Options with the given bounds policy
    pub fn with_bounds(bounds: BoundsPolicy) -> Self {
        Self { bounds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores_bounds() {
        assert_eq!(ParseOptions::default().bounds, BoundsPolicy::Ignore);
    }

    #[test]
    fn test_bounds_policy_from_str() {
        assert_eq!("skip".parse::<BoundsPolicy>(), Ok(BoundsPolicy::Skip));
        assert_eq!("REJECT".parse::<BoundsPolicy>(), Ok(BoundsPolicy::Reject));
        assert!("clamp".parse::<BoundsPolicy>().is_err());
    }

    #[test]
    fn test_bounds_policy_display_round_trips() {
        for policy in [BoundsPolicy::Ignore, BoundsPolicy::Skip, BoundsPolicy::Reject] {
            assert_eq!(policy.to_string().parse::<BoundsPolicy>(), Ok(policy));
        }
    }
}
