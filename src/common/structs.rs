/// Message-carrying error for bootstrap failures.
pub mod custom_error;
