pub mod file_dto;
pub mod slug_dto;
pub mod webhook_dto;
