pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod signing_cert_datasource;
        pub(crate) mod sns_api_datasource;
        pub(crate) mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod sns_api {
            pub(crate) mod common;
            pub(crate) mod confirm_subscription_response_model;
            pub(crate) mod unsubscribe_response_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod sns_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod notification_outcome;
        pub mod sns_notification;
        pub mod subscription_response;
    }
    pub mod repositories {
        pub mod sns_repository;
    }
}

pub mod config;
mod constants;
pub mod errors;
pub mod util;
