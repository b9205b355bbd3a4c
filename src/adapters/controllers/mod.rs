pub mod file_controller;
pub mod health_controller;
pub mod slug_controller;
pub mod webhook_controller;
