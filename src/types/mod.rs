pub(crate) mod book;
pub(crate) mod request;
pub(crate) mod response;
pub(crate) mod user;
