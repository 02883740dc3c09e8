pub mod application {
    #[cfg(test)]
    pub(crate) mod mocks;
    pub mod cart {
        pub mod auto_swap;
        pub mod cancel_donation;
        pub mod confirm_donation;
        pub mod load;
        pub mod request_donation;
    }
    pub mod chat {
        pub mod clear_history;
        pub mod load_history;
        pub mod send_message;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notification;
    pub mod cart {
        pub mod dashboard;
        pub mod errors;
        pub mod expiry;
        pub mod gateway;
        pub mod metrics;
        pub mod model;
        pub mod outcome;
        pub mod state;
        pub mod use_cases {
            pub mod auto_swap;
            pub mod cancel_donation;
            pub mod confirm_donation;
            pub mod load;
            pub mod request_donation;
        }
    }
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod clear_history;
            pub mod load_history;
            pub mod send_message;
        }
    }
}
