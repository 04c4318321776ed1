pub mod use_chat;
pub mod use_exam_session;
pub mod use_study_shell;

pub use use_chat::use_chat;
pub use use_exam_session::use_exam_session;
pub use use_study_shell::use_study_shell;
