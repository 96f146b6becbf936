pub use registra_utils_derive::trace_instrument;

/// Version string reported by `--version` and in logs.
pub const fn registra_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// #### Example
/// ```rust
/// # use registra_utils::assert_matches;
/// let result: Result<u8, &str> = Err("empty");
/// assert_matches!(result, Err("empty"));
/// assert_matches!(Some(3), Some(x) if *x > 2);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            value => ::core::panic!(
                "assertion failed: `{value:?}` does not match `{}`",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr) => {{
        let value = $expr;
        match (&value) {
            $pat if $guard => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "assertion failed: `{value:?}` does not satisfy `{}`",
                ::core::stringify!($guard)
            ),
            _ => ::core::panic!(
                "assertion failed: `{value:?}` does not match `{}`",
                ::core::stringify!($pat)
            ),
        }
    }};
}
