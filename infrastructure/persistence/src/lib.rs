pub mod storage;
pub mod chat_history {
    pub mod entity;
    pub mod repository;
}
