//! Operation Timing Table
//!
//! Maps an operator symbol to the simulated cost (in milliseconds) a worker spends on it.
//! Values come from the environment and silently fall back to defaults when a variable
//! is missing or does not parse.

pub const ENV_TIME_ADDITION: &str = "TIME_ADDITION_MS";
pub const ENV_TIME_SUBTRACTION: &str = "TIME_SUBTRACTION_MS";
pub const ENV_TIME_MULTIPLICATION: &str = "TIME_MULTIPLICATIONS_MS";
pub const ENV_TIME_DIVISION: &str = "TIME_DIVISIONS_MS";

pub const DEFAULT_ADDITIVE_MS: u64 = 2000;
pub const DEFAULT_MULTIPLICATIVE_MS: u64 = 3000;
pub const DEFAULT_UNKNOWN_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationTimings {
    pub addition_ms: u64,
    pub subtraction_ms: u64,
    pub multiplication_ms: u64,
    pub division_ms: u64,
}

impl OperationTimings {
    /// Reads the four `TIME_*_MS` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the table from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: u64| {
            lookup(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            addition_ms: read(ENV_TIME_ADDITION, DEFAULT_ADDITIVE_MS),
            subtraction_ms: read(ENV_TIME_SUBTRACTION, DEFAULT_ADDITIVE_MS),
            multiplication_ms: read(ENV_TIME_MULTIPLICATION, DEFAULT_MULTIPLICATIVE_MS),
            division_ms: read(ENV_TIME_DIVISION, DEFAULT_MULTIPLICATIVE_MS),
        }
    }

    /// Same cost for every operator. Handy for tests and local runs.
    pub fn uniform(ms: u64) -> Self {
        Self {
            addition_ms: ms,
            subtraction_ms: ms,
            multiplication_ms: ms,
            division_ms: ms,
        }
    }

    /// Simulated duration for an operator symbol. Never fails.
    pub fn duration_for(&self, symbol: &str) -> u64 {
        match symbol {
            "+" => self.addition_ms,
            "-" => self.subtraction_ms,
            "*" => self.multiplication_ms,
            "/" => self.division_ms,
            _ => DEFAULT_UNKNOWN_MS,
        }
    }
}

impl Default for OperationTimings {
    fn default() -> Self {
        Self {
            addition_ms: DEFAULT_ADDITIVE_MS,
            subtraction_ms: DEFAULT_ADDITIVE_MS,
            multiplication_ms: DEFAULT_MULTIPLICATIVE_MS,
            division_ms: DEFAULT_MULTIPLICATIVE_MS,
        }
    }
}
