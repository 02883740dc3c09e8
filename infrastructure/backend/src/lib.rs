pub mod agent_service;
pub mod cart_gateway;
pub mod client;
pub mod dto;
