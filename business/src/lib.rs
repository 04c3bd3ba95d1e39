pub mod application {
    pub mod ingredient {
        pub mod identify;
    }
    pub mod recipe {
        pub mod generate;
    }
}

pub mod domain {
    pub mod catalog;
    pub mod logger;
    pub mod ingredient {
        pub mod errors;
        pub mod image;
        pub mod services;
        pub mod use_cases {
            pub mod identify;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod selection {
        pub mod model;
    }
}
