pub mod application {
    pub mod food_item {
        pub mod classify_expiry;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_expiring;
        pub mod update;
        pub mod upload_image;
        #[cfg(test)]
        pub(crate) mod test_support;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod food_item {
        pub mod errors;
        pub mod expiry;
        pub mod file_name;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod classify_expiry;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_expiring;
            pub mod update;
            pub mod upload_image;
        }
    }
    pub mod shared {
        pub mod clock;
        pub mod dates;
        pub mod value_objects;
    }
}
