pub mod certificate_reload_result;
pub mod certificate_status;
