//! The per-session document register.
//!
//! All engine operations that depend on "the current document" go through a
//! [`DocumentSession`] owned by the caller. Each logical session gets its
//! own instance; there is no process-wide register, so concurrent sessions
//! cannot interfere with each other.

use chrono::Utc;
use uuid::Uuid;

use crate::evaluate;
use crate::model::{Answer, Conversation, Document, Question, Summary};
use crate::questions;
use crate::retrieval::{self, RetrievedAnswer, NO_CONTENT_ANSWER, NO_CONTENT_REFERENCE};
use crate::summary::generate_summary;

/// Session state: the active document, its derived summary, and the
/// append-only conversation log.
///
/// Single-owner, single-writer: operations take `&self` or `&mut self` and
/// run synchronously to completion. No operation performs I/O.
#[derive(Debug, Default)]
pub struct DocumentSession {
    document: Option<Document>,
    summary: Option<Summary>,
    conversations: Vec<Conversation>,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active document and recompute its summary.
    pub fn set_document(&mut self, document: Document) {
        tracing::debug!(id = %document.id, kind = %document.kind, name = %document.name, "document set");
        self.summary = Some(generate_summary(&document.content));
        self.document = Some(document);
    }

    /// The active document, if one has been set.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// The summary of the active document. Present exactly when a document
    /// is set; recomputed on every [`set_document`](Self::set_document).
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Generate the question batch for the active document.
    ///
    /// Returns an empty batch when no document is set.
    pub fn generate_questions(&self) -> Vec<Question> {
        match &self.document {
            Some(document) => questions::generate_questions(&document.content),
            None => Vec::new(),
        }
    }

    /// Evaluate a user answer against a question. Works without a document;
    /// the evaluation only needs the question's reference answer.
    pub fn evaluate_answer(&self, question: &Question, user_answer: &str) -> Answer {
        evaluate::evaluate_answer(question, user_answer)
    }

    /// Answer a free-text question from the active document, appending the
    /// exchange to the conversation log.
    pub fn answer_question(&mut self, user_question: &str) -> Conversation {
        let retrieved = match &self.document {
            Some(document) => retrieval::retrieve_answer(&document.content, user_question),
            None => RetrievedAnswer {
                answer: NO_CONTENT_ANSWER.to_string(),
                reference: NO_CONTENT_REFERENCE.to_string(),
            },
        };

        let conversation = Conversation {
            id: Uuid::new_v4(),
            question: user_question.to_string(),
            answer: retrieved.answer,
            document_reference: retrieved.reference,
            timestamp: Utc::now(),
        };
        self.conversations.push(conversation.clone());
        conversation
    }

    /// The append-only conversation history of this session.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentKind;
    use crate::summary::EMPTY_DOCUMENT_SUMMARY;

    fn make_document(content: &str) -> Document {
        Document {
            id: Uuid::new_v4(),
            name: "notes.txt".into(),
            kind: DocumentKind::Text,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    const DOC: &str = "Compilers translate source code into machine instructions. \
        Optimizing compilers rearrange instructions for speed. \
        Most compilers verify types before any code generation happens.";

    #[test]
    fn setting_a_document_computes_its_summary() {
        let mut session = DocumentSession::new();
        assert!(session.summary().is_none());

        session.set_document(make_document(DOC));
        let summary = session.summary().unwrap();
        assert!(summary.word_count > 0);
        assert!(summary.text.contains("Compilers translate"));
    }

    #[test]
    fn summary_is_recomputed_on_new_document() {
        let mut session = DocumentSession::new();
        session.set_document(make_document(DOC));
        let first = session.summary().unwrap().clone();

        session.set_document(make_document("   "));
        let second = session.summary().unwrap();
        assert_eq!(second.text, EMPTY_DOCUMENT_SUMMARY);
        assert_ne!(first.text, second.text);
    }

    #[test]
    fn no_document_yields_no_questions() {
        let session = DocumentSession::new();
        assert!(session.generate_questions().is_empty());
    }

    #[test]
    fn questions_come_from_the_active_document() {
        let mut session = DocumentSession::new();
        session.set_document(make_document(DOC));
        let questions = session.generate_questions();
        assert!(!questions.is_empty());
        assert_eq!(questions[0].id, "1");
    }

    #[test]
    fn answering_without_a_document_uses_the_fixed_response() {
        let mut session = DocumentSession::new();
        let conversation = session.answer_question("What is this about?");
        assert_eq!(conversation.answer, NO_CONTENT_ANSWER);
        assert_eq!(conversation.document_reference, NO_CONTENT_REFERENCE);
    }

    #[test]
    fn conversation_log_is_append_only() {
        let mut session = DocumentSession::new();
        session.set_document(make_document(DOC));

        let first = session.answer_question("What do compilers do?");
        let second = session.answer_question("What about optimization?");

        let log = session.conversations();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].id, first.id);
        assert_eq!(log[1].id, second.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn independent_sessions_do_not_interfere() {
        let mut left = DocumentSession::new();
        let mut right = DocumentSession::new();

        left.set_document(make_document(DOC));
        right.answer_question("Anything loaded?");

        assert!(left.conversations().is_empty());
        assert_eq!(right.conversations().len(), 1);
        assert!(right.document().is_none());
    }
}
