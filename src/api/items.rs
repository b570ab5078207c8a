//! Programming items and their test cases.

use crate::error::{ApiError, MissingCredential};
use crate::http::NeuDevClient;
use crate::session::Session;
use crate::types::{Id, Item, ItemDraft, ItemQuery, ItemType, Message, ProgrammingLanguage, Reply};

impl NeuDevClient {
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn item_types(&self, session: &Session) -> Result<Vec<ItemType>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get("/teacher/itemTypes".into()).bearer(token).send_list("item types").await
    }

    /// Items of one type, optionally narrowed by scope and owner.
    ///
    /// An empty query sends no query string at all.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn items(&self, session: &Session, item_type_id: Id, query: &ItemQuery) -> Result<Vec<Item>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/teacher/items/itemType/{item_type_id}"))
            .bearer(token)
            .query(query.pairs())
            .send_list("items")
            .await
    }

    /// Every item of one type.
    ///
    /// # Errors
    ///
    /// Same as [`NeuDevClient::items`].
    pub async fn items_by_item_type(&self, session: &Session, item_type_id: Id) -> Result<Vec<Item>, ApiError> {
        self.items(session, item_type_id, &ItemQuery::default()).await
    }

    /// One item with its test cases.
    ///
    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn item_details(&self, session: &Session, item_id: Id) -> Result<Item, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get(format!("/teacher/items/{item_id}")).bearer(token).send("item").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn create_item(&self, session: &Session, draft: &ItemDraft) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.post("/teacher/items".into()).bearer(token).json(draft)?.send("item").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn update_item(&self, session: &Session, item_id: Id, draft: &ItemDraft) -> Result<Reply, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.put(format!("/teacher/items/{item_id}")).bearer(token).json(draft)?.send("item").await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn delete_item(&self, session: &Session, item_id: Id) -> Result<Message, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.delete(format!("/teacher/items/{item_id}")).bearer(token).send_ack().await
    }

    /// # Errors
    ///
    /// Unauthorized without a token; otherwise the normalised backend error.
    pub async fn programming_languages(&self, session: &Session) -> Result<Vec<ProgrammingLanguage>, ApiError> {
        let token = session.token(MissingCredential::Token)?;
        self.get("/teacher/programmingLanguages".into())
            .bearer(token)
            .send_list("programming languages")
            .await
    }
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
