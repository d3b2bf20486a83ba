//! Property-test run profile read from the environment.
//!
//! Property suites across the workspace size themselves through one shared
//! profile so CI can raise case counts, or enable forking, without code
//! changes.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable enabling proptest process forking.
pub const SPANNING_PBT_FORK_ENV_KEY: &str = "SPANNING_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, falling back to the supplied
    /// defaults when a variable is unset or malformed.
    ///
    /// Malformed values are reported through a `warn` event.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanning_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(PROPTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(SPANNING_PBT_FORK_ENV_KEY, parse_switch).unwrap_or(default_fork),
        }
    }

    /// Cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn read_override<T>(key: &'static str, parse: fn(&str) -> Result<T, &'static str>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(raw.trim())
        .inspect_err(|reason| {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason,
                "ignoring malformed property-test override",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be an unsigned integer"),
    }
}

fn parse_switch(raw: &str) -> Result<bool, &'static str> {
    if ["1", "true", "yes", "on"]
        .iter()
        .any(|accepted| raw.eq_ignore_ascii_case(accepted))
    {
        Ok(true)
    } else if ["0", "false", "no", "off"]
        .iter()
        .any(|accepted| raw.eq_ignore_ascii_case(accepted))
    {
        Ok(false)
    } else {
        Err("expected one of 1/0, true/false, yes/no, on/off")
    }
}
