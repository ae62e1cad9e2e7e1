pub mod application {
    pub mod catalog {
        pub mod coordinator;
        pub mod create;
        pub mod delete;
        pub mod get;
        pub mod list;
        pub mod publication;
        pub mod restore;
        pub mod update;
    }
    pub mod media {
        pub mod attachments;
        pub mod images;
        pub mod videos;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod transaction;
    pub mod shared {
        pub mod diff;
        pub mod validation;
        pub mod value_objects;
    }
    pub mod product {
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod details;
        pub mod errors;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get;
            pub mod list;
            pub mod publication;
            pub mod restore;
            pub mod update;
        }
    }
    pub mod course {
        pub mod model;
    }
    pub mod training_session {
        pub mod model;
    }
    pub mod seminar {
        pub mod model;
    }
    pub mod media {
        pub mod errors;
        pub mod model;
        pub mod owner;
        pub mod services;
        pub mod use_cases {
            pub mod attachments;
            pub mod images;
            pub mod videos;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
