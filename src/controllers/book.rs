use tokio::sync::{mpsc, oneshot};

use crate::core::error::Error;
use crate::types::book::{Book, BookId, Command, NewBook, Response};

/// Handle to the book store worker.
#[derive(Clone, Debug)]
pub(crate) struct BookController {
    tx: mpsc::Sender<Command>,
}

impl BookController {
    pub(crate) fn new(tx: mpsc::Sender<Command>) -> Self {
        Self { tx }
    }

    async fn request(
        &self,
        command: impl FnOnce(oneshot::Sender<Response>) -> Command,
    ) -> Result<Response, Error> {
        let (tx, rx) = oneshot::channel();

        if let Err(e) = self.tx.send(command(tx)).await {
            tracing::error!("{}", e);
            return Err(Error::Internal);
        }

        rx.await.map_err(|e| {
            tracing::error!("{}", e);
            Error::Internal
        })
    }

    pub(crate) async fn list(&self) -> Result<Vec<Book>, Error> {
        match self.request(Command::list).await? {
            Response::List(books) => Ok(books),
            _ => Err(Error::Internal),
        }
    }

    pub(crate) async fn get(&self, id: BookId) -> Result<Book, Error> {
        match self.request(|tx| Command::get(id, tx)).await? {
            Response::Book(book) => Ok(book),
            Response::NotFound => Err(Error::BookNotFound),
            _ => Err(Error::Internal),
        }
    }

    pub(crate) async fn create(&self, book: NewBook) -> Result<Book, Error> {
        match self.request(|tx| Command::create(book, tx)).await? {
            Response::Book(book) => Ok(book),
            _ => Err(Error::Internal),
        }
    }

    pub(crate) async fn update(&self, id: BookId, book: NewBook) -> Result<Book, Error> {
        match self.request(|tx| Command::update(id, book, tx)).await? {
            Response::Book(book) => Ok(book),
            Response::NotFound => Err(Error::BookNotFound),
            _ => Err(Error::Internal),
        }
    }

    pub(crate) async fn delete(&self, id: BookId) -> Result<Vec<Book>, Error> {
        match self.request(|tx| Command::delete(id, tx)).await? {
            Response::List(books) => Ok(books),
            _ => Err(Error::Internal),
        }
    }
}
