pub mod webhook_service_data;
