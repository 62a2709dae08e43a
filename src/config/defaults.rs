// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toasts**: Per-severity auto-dismiss durations
//! - **Transitions**: Entrance delay and exit transition length

// ==========================================================================
// Toast Duration Defaults
// ==========================================================================

/// Default lifetime of a success toast (in milliseconds).
pub const DEFAULT_SUCCESS_TOAST_MS: u64 = 3000;

/// Default lifetime of an error toast (in milliseconds).
pub const DEFAULT_ERROR_TOAST_MS: u64 = 5000;

/// Default lifetime of a warning toast (in milliseconds).
pub const DEFAULT_WARNING_TOAST_MS: u64 = 4000;

/// Default lifetime of an info toast (in milliseconds).
pub const DEFAULT_INFO_TOAST_MS: u64 = 3000;

/// Longest accepted toast lifetime. Zero keeps a toast until dismissed.
pub const MAX_TOAST_MS: u64 = 60_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay before the entrance transition is applied (in milliseconds).
pub const DEFAULT_ENTRANCE_DELAY_MS: u64 = 10;

/// Maximum entrance delay.
pub const MAX_ENTRANCE_DELAY_MS: u64 = 100;

/// Length of the exit transition before a node is removed or hidden.
pub const DEFAULT_EXIT_TRANSITION_MS: u64 = 300;

/// Maximum exit transition length.
pub const MAX_EXIT_TRANSITION_MS: u64 = 2000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_longest_and_warnings_outlast_success() {
        assert!(DEFAULT_ERROR_TOAST_MS > DEFAULT_WARNING_TOAST_MS);
        assert!(DEFAULT_WARNING_TOAST_MS > DEFAULT_SUCCESS_TOAST_MS);
        assert_eq!(DEFAULT_SUCCESS_TOAST_MS, DEFAULT_INFO_TOAST_MS);
    }

    #[test]
    fn defaults_are_within_bounds() {
        assert!(DEFAULT_ERROR_TOAST_MS <= MAX_TOAST_MS);
        assert!(DEFAULT_ENTRANCE_DELAY_MS <= MAX_ENTRANCE_DELAY_MS);
        assert!(DEFAULT_EXIT_TRANSITION_MS <= MAX_EXIT_TRANSITION_MS);
    }
}
