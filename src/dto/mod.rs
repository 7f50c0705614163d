pub mod lesson_dto;
pub mod quiz_dto;
