pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod smart_cart {
    pub mod dto;
    pub mod routes;
}
pub mod dashboard {
    pub mod dto;
    pub mod routes;
}
pub mod chat {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
