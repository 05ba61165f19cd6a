use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

pub(crate) type BookId = String;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub(crate) struct Author {
    #[serde(default)]
    pub(crate) firstname: String,
    #[serde(default)]
    pub(crate) lastname: String,
}

impl Author {
    pub(crate) fn new(firstname: &str, lastname: &str) -> Self {
        Self {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub(crate) struct Book {
    pub(crate) id: BookId,
    pub(crate) isbn: String,
    pub(crate) title: String,
    pub(crate) author: Option<Author>,
}

impl Book {
    pub(crate) fn from_new(id: BookId, book: NewBook) -> Self {
        Self {
            id,
            isbn: book.isbn,
            title: book.title,
            author: book.author,
        }
    }
}

/// Body of create and update requests; the id always comes from the server.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct NewBook {
    #[serde(default)]
    pub(crate) isbn: String,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) author: Option<Author>,
}

#[derive(Debug)]
pub(crate) enum Operation {
    List,
    Get(BookId),
    Create(NewBook),
    Update(BookId, NewBook),
    Delete(BookId),
}

#[derive(Debug)]
pub(crate) enum Response {
    List(Vec<Book>),
    Book(Book),
    NotFound,
}

#[derive(Debug)]
pub(crate) struct Command {
    pub(crate) operation: Operation,
    pub(crate) tx: oneshot::Sender<Response>,
}

impl Command {
    pub(crate) fn list(tx: oneshot::Sender<Response>) -> Self {
        Self {
            operation: Operation::List,
            tx,
        }
    }

    pub(crate) fn get(id: BookId, tx: oneshot::Sender<Response>) -> Self {
        Self {
            operation: Operation::Get(id),
            tx,
        }
    }

    pub(crate) fn create(book: NewBook, tx: oneshot::Sender<Response>) -> Self {
        Self {
            operation: Operation::Create(book),
            tx,
        }
    }

    pub(crate) fn update(id: BookId, book: NewBook, tx: oneshot::Sender<Response>) -> Self {
        Self {
            operation: Operation::Update(id, book),
            tx,
        }
    }

    pub(crate) fn delete(id: BookId, tx: oneshot::Sender<Response>) -> Self {
        Self {
            operation: Operation::Delete(id),
            tx,
        }
    }
}
