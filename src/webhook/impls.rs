pub mod webhook_outcome;
pub mod webhook_service_data;
