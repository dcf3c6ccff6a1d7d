pub mod joiner_service;
