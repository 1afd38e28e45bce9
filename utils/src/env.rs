// SPDX-License-Identifier: GPL-3.0-only

use std::env;

/// Returns the value of the given environment variable, treating blank values as unset
pub fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_none() {
        assert_eq!(non_empty_env("ROOMVIEW_UTILS_TEST_SURELY_UNSET"), None);
    }
}
