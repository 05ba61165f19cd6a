use crate::controllers::book::BookController;
use crate::controllers::token::TokenController;
use crate::core::config::Args;
use crate::core::error::ConfigError;
use crate::workers;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) token_controller: TokenController,
    pub(crate) book_controller: BookController,
}

impl AppState {
    pub(crate) fn new(args: &Args) -> Result<Self, ConfigError> {
        args.validate()?;

        let (tx, mut store) = workers::books::new(args.seed_books);

        tokio::spawn(async move {
            store.run().await;
        });

        Ok(AppState {
            token_controller: TokenController::new(&args.secret, args.token_lifetime),
            book_controller: BookController::new(tx),
        })
    }
}
