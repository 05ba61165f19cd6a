use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::book::{Book, BookId, NewBook};

#[instrument(skip(state))]
pub(crate) async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<Book>>, Error> {
    let books = state.book_controller.list().await?;

    Ok(Json(books))
}

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Json<Book>, Error> {
    let book = state.book_controller.get(id).await?;

    Ok(Json(book))
}

#[instrument(skip(state, body))]
pub(crate) async fn post(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Book>, Error> {
    let params: NewBook = serde_json::from_slice(&body)?;

    let book = state.book_controller.create(params).await?;

    Ok(Json(book))
}

#[instrument(skip(state, body))]
pub(crate) async fn put(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    body: Bytes,
) -> Result<Json<Book>, Error> {
    let params: NewBook = serde_json::from_slice(&body)?;

    let book = state.book_controller.update(id, params).await?;

    Ok(Json(book))
}

#[instrument(skip(state))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Json<Vec<Book>>, Error> {
    let books = state.book_controller.delete(id).await?;

    Ok(Json(books))
}
