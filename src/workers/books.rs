use rand::Rng;
use tokio::sync::mpsc;

use crate::types::book::{Author, Book, BookId, Command, NewBook, Operation, Response};

const ID_RANGE: std::ops::Range<u32> = 0..10_000_000;

/// Owns the book collection. All access goes through the command channel.
#[derive(Debug)]
pub(crate) struct BookStore {
    books: Vec<Book>,
    rx: mpsc::Receiver<Command>,
}

impl BookStore {
    fn new(books: Vec<Book>, rx: mpsc::Receiver<Command>) -> Self {
        Self { books, rx }
    }

    fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn get(&self, id: &str) -> Option<Book> {
        self.books.iter().find(|book| book.id == id).cloned()
    }

    fn create(&mut self, book: NewBook) -> Book {
        let book = Book::from_new(self.fresh_id(), book);

        self.books.push(book.clone());

        book
    }

    fn update(&mut self, id: BookId, book: NewBook) -> Option<Book> {
        let index = self.books.iter().position(|item| item.id == id)?;

        self.books.remove(index);

        let book = Book::from_new(id, book);
        self.books.push(book.clone());

        Some(book)
    }

    fn delete(&mut self, id: &str) -> Vec<Book> {
        if let Some(index) = self.books.iter().position(|book| book.id == id) {
            self.books.remove(index);
            tracing::info!(%id, "book deleted");
        }

        self.list()
    }

    fn fresh_id(&self) -> BookId {
        let mut rng = rand::rng();

        loop {
            let id = rng.random_range(ID_RANGE).to_string();

            if !self.books.iter().any(|book| book.id == id) {
                return id;
            }
        }
    }

    fn process_command(&mut self, command: Command) {
        let response = match command.operation {
            Operation::List => Response::List(self.list()),
            Operation::Get(id) => match self.get(&id) {
                Some(book) => Response::Book(book),
                None => Response::NotFound,
            },
            Operation::Create(book) => {
                let book = self.create(book);
                tracing::info!(id = %book.id, "book created");
                Response::Book(book)
            }
            Operation::Update(id, book) => match self.update(id, book) {
                Some(book) => {
                    tracing::info!(id = %book.id, "book updated");
                    Response::Book(book)
                }
                None => Response::NotFound,
            },
            Operation::Delete(id) => Response::List(self.delete(&id)),
        };

        if command.tx.send(response).is_err() {
            tracing::error!("failed to send book store response");
        }
    }

    #[tracing::instrument(skip_all)]
    pub(crate) async fn run(&mut self) {
        while let Some(command) = self.rx.recv().await {
            self.process_command(command);
        }

        tracing::debug!("book store channel closed");
    }
}

fn seed() -> Vec<Book> {
    vec![
        Book {
            id: "1".to_string(),
            isbn: "2127182".to_string(),
            title: "Book One".to_string(),
            author: Some(Author::new("Kamran", "Ahmad")),
        },
        Book {
            id: "2".to_string(),
            isbn: "4467186".to_string(),
            title: "Book Two".to_string(),
            author: Some(Author::new("John", "Tyler")),
        },
    ]
}

pub(crate) fn new(seed_books: bool) -> (mpsc::Sender<Command>, BookStore) {
    let (tx, rx) = mpsc::channel(16);

    let books = if seed_books { seed() } else { Vec::new() };

    (tx, BookStore::new(books, rx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store() -> BookStore {
        new(true).1
    }

    fn new_book(title: &str) -> NewBook {
        NewBook {
            isbn: "9780261103573".to_string(),
            title: title.to_string(),
            author: Some(Author::new("J. R. R.", "Tolkien")),
        }
    }

    #[test]
    fn test_seeded_contents() {
        let store = make_store();

        let ids: Vec<_> = store.list().into_iter().map(|book| book.id).collect();
        assert_eq!(ids, vec!["1", "2"]);

        assert!(new(false).1.list().is_empty());
    }

    #[test]
    fn test_create_then_get() {
        let mut store = make_store();

        let created = store.create(new_book("The Hobbit"));
        assert!(!created.id.is_empty());

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "The Hobbit");
        assert_eq!(fetched.isbn, "9780261103573");
        assert_eq!(fetched.author, Some(Author::new("J. R. R.", "Tolkien")));
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_created_ids_are_unique() {
        let mut store = BookStore::new(Vec::new(), mpsc::channel(1).1);

        for _ in 0..200 {
            store.create(new_book("Copy"));
        }

        let mut ids: Vec<_> = store.list().into_iter().map(|book| book.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_get_missing() {
        let store = make_store();

        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_update_preserves_id_and_moves_to_end() {
        let mut store = make_store();

        let updated = store.update("1".to_string(), new_book("Renamed")).unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.title, "Renamed");

        let books = store.list();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, "2");
        assert_eq!(books[1], updated);
    }

    #[test]
    fn test_update_missing_leaves_collection_unchanged() {
        let mut store = make_store();
        let before = store.list();

        assert_eq!(store.update("missing".to_string(), new_book("Nope")), None);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete() {
        let mut store = make_store();

        let remaining = store.delete("1");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "2");
    }

    #[test]
    fn test_delete_missing_leaves_collection_unchanged() {
        let mut store = make_store();
        let before = store.list();

        assert_eq!(store.delete("missing"), before);
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_delete_logs_only_removed_books() {
        let mut store = make_store();
        let captured = Captured::default();
        let writer = captured.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            store.delete("missing");
            store.delete("1");
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("book deleted").count(), 1);
        assert!(output.contains("id=1"));
        assert!(!output.contains("id=missing"));
    }

    #[tokio::test]
    async fn test_commands_round_trip() {
        let (tx, mut store) = new(true);

        tokio::spawn(async move {
            store.run().await;
        });

        let (resp_tx, resp_rx) = tokio::sync::oneshot::channel();
        tx.send(Command::get("2".to_string(), resp_tx)).await.unwrap();

        match resp_rx.await.unwrap() {
            Response::Book(book) => assert_eq!(book.title, "Book Two"),
            other => panic!("unexpected response: {:?}", other),
        }

        let (resp_tx, resp_rx) = tokio::sync::oneshot::channel();
        tx.send(Command::get("404".to_string(), resp_tx))
            .await
            .unwrap();

        assert!(matches!(resp_rx.await.unwrap(), Response::NotFound));
    }
}
