pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod list_books_cmd;
        pub mod remove_book_cmd;
        pub mod update_book_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod factory;
}

pub mod utils;
