//! Error macros for graphwalk

/// Macro for returning invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for returning unknown vertex errors
#[macro_export]
macro_rules! bail_unknown_vertex {
    ($id:expr) => {
        return Err($crate::error::GraphError::unknown_vertex($id))
    };
}

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
