//! Shared test utilities for the workspace.

/// Helper macro to create a 32-byte array with a specific last byte.
///
/// Returns a value converted with `.into()`, so it can become `[u8; 32]` or any
/// 32-byte newtype that implements `From<[u8; 32]>`.
#[macro_export]
macro_rules! b32 {
    ($v:expr) => {{
        let mut arr = [0_u8; 32];
        arr[31] = $v;
        arr.into()
    }};
}

/// Helper macro to create a sorted vector of 32-byte values.
#[macro_export]
macro_rules! b32s {
    ($($v:expr),* $(,)?) => {{
        let mut v = vec![$( $crate::b32!($v) ),*];
        v.sort();
        v
    }};
}

/// Helper macro to create a 32-byte array filled with one byte.
#[macro_export]
macro_rules! filled {
    ($v:expr) => {{
        let arr: [u8; 32] = [$v; 32];
        arr.into()
    }};
}
