pub mod application {
    pub mod product {
        pub mod add;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_in_stock;
        pub mod locks;
        pub mod order;
        pub mod quantity_change;
        pub mod restock;
        pub mod ship;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod naming;
        pub mod policies;
        pub mod quantity;
        pub mod repository;
        pub mod validation;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_in_stock;
            pub mod order;
            pub mod restock;
            pub mod ship;
        }
    }
}
