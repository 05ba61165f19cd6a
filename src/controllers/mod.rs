pub(crate) mod book;
pub(crate) mod token;
