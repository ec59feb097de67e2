pub mod push_gateway;
pub mod remote_config_service;
