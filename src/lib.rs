pub mod shared {
    pub mod http;
    pub mod infrastructure {
        pub mod activity_store;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod seed;
            pub mod state;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod commit;
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod sign_up {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
