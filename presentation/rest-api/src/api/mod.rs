pub mod error;
pub mod tags;
pub mod catalog {
    pub mod dto;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod ingredient {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod recipe {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
