// Application layer: request DTOs and the use cases that validate them.

pub mod dto;
pub mod use_cases;
