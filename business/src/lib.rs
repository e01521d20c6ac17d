pub mod application {
    pub mod dashboard {
        pub mod controller;
        pub mod fallback;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notification;
    pub mod store;
    pub mod product {
        pub mod errors;
        pub mod expiry;
        pub mod model;
    }
    pub mod pricing {
        pub mod heuristic;
    }
    pub mod recommendation {
        pub mod model;
        pub mod workflow;
    }
    pub mod waste {
        pub mod stats;
    }
}
