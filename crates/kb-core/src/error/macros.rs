//! Error macros for kb

/// Macro for returning configuration errors
#[macro_export]
macro_rules! bail_config {
    ($($arg:tt)*) => {
        return Err($crate::error::KbError::configuration(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::KbError::UsageError($msg.to_string()))
    };
}
