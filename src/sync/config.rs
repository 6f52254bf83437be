/*!
 * Algorithm Selection
 * Maps command-surface algorithm names onto lock implementations
 */

use std::fmt;
use std::str::FromStr;

use crate::core::errors::ConfigError;

/// Lock algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Baseline blocking mutex with no custom fast path
    Mutex,
    /// Atomic-counter fast path, semaphore slow path
    Benaphore,
    /// Benaphore with a bounded spin phase before blocking
    Hybrid,
}

impl Algorithm {
    /// Every selectable algorithm, in command-surface order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Mutex, Algorithm::Benaphore, Algorithm::Hybrid];

    /// The command-surface name; `mutex2` selects the hybrid lock.
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Mutex => "mutex",
            Algorithm::Benaphore => "benaphore",
            Algorithm::Hybrid => "mutex2",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutex" => Ok(Algorithm::Mutex),
            "benaphore" => Ok(Algorithm::Benaphore),
            "mutex2" => Ok(Algorithm::Hybrid),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_round_trips() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.as_str().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_mutex2_selects_hybrid() {
        let parsed: Algorithm = "mutex2".parse().unwrap();
        assert_eq!(parsed, Algorithm::Hybrid);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let result = "spinlock".parse::<Algorithm>();
        assert_eq!(
            result,
            Err(ConfigError::UnknownAlgorithm("spinlock".to_string()))
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("Mutex".parse::<Algorithm>().is_err());
        assert!("BENAPHORE".parse::<Algorithm>().is_err());
    }
}
