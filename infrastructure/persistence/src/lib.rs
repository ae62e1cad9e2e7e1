pub mod db;
pub mod errors;
pub mod transaction;
pub mod visibility;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod details {
    pub mod fields;
    pub mod repository;
    pub mod table;
}
pub mod course {
    pub mod entity;
}
pub mod training_session {
    pub mod entity;
}
pub mod seminar {
    pub mod entity;
}
pub mod media {
    pub mod entity;
    pub mod image_repository;
    pub mod owner_adapter;
}
