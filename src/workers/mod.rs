pub(crate) mod books;
