pub mod shared {
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod webhooks {
        pub mod application {
            pub mod errors;
        }
        pub mod core {
            pub mod event_record;
        }
        pub mod use_cases {
            pub mod ingest_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
