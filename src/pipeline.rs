//! Turn orchestration: translate the input, complete, translate the reply.

use crate::completion::CompletionBackend;
use crate::error::ChatResult;
use crate::session::{Role, Session};
use crate::translation::Translator;

/// One transcript line prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub role: Role,
    pub content: String,
}

/// Drives one chat turn at a time against the two remote adapters.
///
/// A session is only ever mutated through [`ChatPipeline::submit`]; a turn
/// that fails mid-flight leaves every message appended before the failure
/// in place and appends nothing further.
pub struct ChatPipeline {
    translator: Box<dyn Translator>,
    completion: Box<dyn CompletionBackend>,
}

impl ChatPipeline {
    pub fn new(translator: Box<dyn Translator>, completion: Box<dyn CompletionBackend>) -> Self {
        Self {
            translator,
            completion,
        }
    }

    /// Runs one full turn and returns the reply as it was appended, or
    /// `None` when the input was empty and nothing happened.
    ///
    /// The user's text is translated with the current display language as
    /// the target before it is stored. With an auto-detecting translator
    /// this is a pass-through whenever the text is already in that
    /// language.
    pub async fn submit(&self, session: &mut Session, raw_text: &str) -> ChatResult<Option<String>> {
        if raw_text.is_empty() {
            return Ok(None);
        }

        let language = session.language();

        let translated_input = self.translator.translate(raw_text, language).await?;
        session.append(Role::User, translated_input);

        // The user message above survives any failure below.
        let reply = self.completion.complete(session.history()).await?;
        let display_reply = self.translator.translate(&reply, language).await?;

        session.append(Role::Assistant, display_reply.clone());
        Ok(Some(display_reply))
    }

    /// Prepares the transcript for display: user messages verbatim,
    /// assistant messages re-translated to the current display language on
    /// every call.
    pub async fn render(&self, session: &Session) -> ChatResult<Vec<RenderedMessage>> {
        let language = session.language();
        let mut rendered = Vec::with_capacity(session.turns().len());

        for message in session.turns() {
            let content = match message.role {
                Role::Assistant => self.translator.translate(&message.content, language).await?,
                Role::System | Role::User => message.content.clone(),
            };
            rendered.push(RenderedMessage {
                role: message.role,
                content,
            });
        }

        Ok(rendered)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ChatError;
    use crate::session::{Message, SYSTEM_PROMPT};
    use crate::translation::Language;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Identity translator that records every (text, target) call.
    #[derive(Default)]
    struct RecordingTranslator {
        calls: Arc<Mutex<Vec<(String, Language)>>>,
        fail: bool,
    }

    #[async_trait]
    impl Translator for RecordingTranslator {
        async fn translate(&self, text: &str, target: Language) -> ChatResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), target));
            if self.fail {
                return Err(ChatError::translation("stub failure"));
            }
            Ok(text.to_string())
        }
    }

    /// Completion stub returning a canned reply, or failing when `reply`
    /// is `None`.
    #[derive(Default)]
    struct StubCompletion {
        reply: Option<String>,
        calls: Arc<AtomicUsize>,
        seen_history_len: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompletionBackend for StubCompletion {
        async fn complete(&self, history: &[Message]) -> ChatResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen_history_len.store(history.len(), Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| ChatError::completion("stub failure"))
        }
    }

    fn pipeline_with(
        translator: RecordingTranslator,
        completion: StubCompletion,
    ) -> ChatPipeline {
        ChatPipeline::new(Box::new(translator), Box::new(completion))
    }

    #[tokio::test]
    async fn test_successful_turn_appends_user_then_assistant() {
        let translator = RecordingTranslator::default();
        let completion = StubCompletion {
            reply: Some("Hello".to_string()),
            ..StubCompletion::default()
        };
        let pipeline = pipeline_with(translator, completion);

        let mut session = Session::new();
        let reply = pipeline.submit(&mut session, "Hi").await.unwrap();

        assert_eq!(reply.as_deref(), Some("Hello"));
        assert_eq!(
            session.history(),
            &[
                Message::new(Role::System, SYSTEM_PROMPT),
                Message::new(Role::User, "Hi"),
                Message::new(Role::Assistant, "Hello"),
            ]
        );
    }

    #[tokio::test]
    async fn test_completion_sees_full_history_including_system_prompt() {
        let completion = StubCompletion {
            reply: Some("ok".to_string()),
            ..StubCompletion::default()
        };
        let seen_len = Arc::clone(&completion.seen_history_len);
        let pipeline = pipeline_with(RecordingTranslator::default(), completion);

        let mut session = Session::new();
        pipeline.submit(&mut session, "one").await.unwrap();
        pipeline.submit(&mut session, "two").await.unwrap();

        // system + user/assistant pair + second user message
        assert_eq!(seen_len.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_failed_completion_keeps_only_the_user_message() {
        let completion = StubCompletion::default(); // reply: None => fails
        let pipeline = pipeline_with(RecordingTranslator::default(), completion);

        let mut session = Session::new();
        let result = pipeline.submit(&mut session, "Hi").await;

        assert!(matches!(result, Err(ChatError::Completion { .. })));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[1].role, Role::User);
    }

    #[tokio::test]
    async fn test_failed_reply_translation_keeps_only_the_user_message() {
        let translator = RecordingTranslator::default();
        let calls = Arc::clone(&translator.calls);
        let completion = StubCompletion {
            reply: Some("Hello".to_string()),
            ..StubCompletion::default()
        };
        let pipeline = ChatPipeline::new(
            Box::new(FailSecondTranslator {
                inner: translator,
                seen: AtomicUsize::new(0),
            }),
            Box::new(completion),
        );

        let mut session = Session::new();
        let result = pipeline.submit(&mut session, "Hi").await;

        assert!(matches!(result, Err(ChatError::Translation { .. })));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[1].role, Role::User);
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    /// Passes the first translate call through and fails the second.
    struct FailSecondTranslator {
        inner: RecordingTranslator,
        seen: AtomicUsize,
    }

    #[async_trait]
    impl Translator for FailSecondTranslator {
        async fn translate(&self, text: &str, target: Language) -> ChatResult<String> {
            let result = self.inner.translate(text, target).await;
            if self.seen.fetch_add(1, Ordering::SeqCst) == 0 {
                result
            } else {
                Err(ChatError::translation("stub failure"))
            }
        }
    }

    #[tokio::test]
    async fn test_failed_input_translation_leaves_history_untouched() {
        let translator = RecordingTranslator {
            fail: true,
            ..RecordingTranslator::default()
        };
        let completion = StubCompletion {
            reply: Some("unused".to_string()),
            ..StubCompletion::default()
        };
        let completion_calls = Arc::clone(&completion.calls);
        let pipeline = pipeline_with(translator, completion);

        let mut session = Session::new();
        let result = pipeline.submit(&mut session, "Hi").await;

        assert!(matches!(result, Err(ChatError::Translation { .. })));
        assert_eq!(session.history().len(), 1);
        assert_eq!(completion_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_input_is_a_no_op_with_zero_adapter_calls() {
        let translator = RecordingTranslator::default();
        let translator_calls = Arc::clone(&translator.calls);
        let completion = StubCompletion {
            reply: Some("unused".to_string()),
            ..StubCompletion::default()
        };
        let completion_calls = Arc::clone(&completion.calls);
        let pipeline = pipeline_with(translator, completion);

        let mut session = Session::new();
        let reply = pipeline.submit(&mut session, "").await.unwrap();

        assert!(reply.is_none());
        assert_eq!(session.history().len(), 1);
        assert!(translator_calls.lock().unwrap().is_empty());
        assert_eq!(completion_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_system_prompt_stays_first_across_turns_and_resets() {
        let completion = StubCompletion {
            reply: Some("reply".to_string()),
            ..StubCompletion::default()
        };
        let pipeline = pipeline_with(RecordingTranslator::default(), completion);

        let mut session = Session::new();
        for _ in 0..3 {
            pipeline.submit(&mut session, "turn").await.unwrap();
            assert_eq!(session.history()[0].role, Role::System);
        }

        session.reset();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, Role::System);
        assert_eq!(session.language(), Language::En);
    }

    #[tokio::test]
    async fn test_input_is_translated_toward_the_display_language() {
        let translator = RecordingTranslator::default();
        let calls = Arc::clone(&translator.calls);
        let completion = StubCompletion {
            reply: Some("Antwort".to_string()),
            ..StubCompletion::default()
        };
        let pipeline = pipeline_with(translator, completion);

        let mut session = Session::new();
        session.set_language(Language::De);
        pipeline.submit(&mut session, "Hallo").await.unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0], ("Hallo".to_string(), Language::De));
        assert_eq!(calls[1], ("Antwort".to_string(), Language::De));
    }

    #[tokio::test]
    async fn test_render_retranslates_assistant_messages_only() {
        let translator = RecordingTranslator::default();
        let calls = Arc::clone(&translator.calls);
        let completion = StubCompletion {
            reply: Some("Hello".to_string()),
            ..StubCompletion::default()
        };
        let pipeline = pipeline_with(translator, completion);

        let mut session = Session::new();
        pipeline.submit(&mut session, "Hi").await.unwrap();

        // Switch language after the turn; the next render must go back to
        // the translator for the assistant message, and never for the user
        // message.
        session.set_language(Language::Pl);
        calls.lock().unwrap().clear();

        let rendered = pipeline.render(&session).await.unwrap();

        assert_eq!(
            rendered,
            vec![
                RenderedMessage {
                    role: Role::User,
                    content: "Hi".to_string(),
                },
                RenderedMessage {
                    role: Role::Assistant,
                    content: "Hello".to_string(),
                },
            ]
        );

        let calls = calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[("Hello".to_string(), Language::Pl)]);
    }

    #[tokio::test]
    async fn test_render_runs_once_per_stored_assistant_message() {
        let translator = RecordingTranslator::default();
        let calls = Arc::clone(&translator.calls);
        let completion = StubCompletion {
            reply: Some("answer".to_string()),
            ..StubCompletion::default()
        };
        let pipeline = pipeline_with(translator, completion);

        let mut session = Session::new();
        pipeline.submit(&mut session, "one").await.unwrap();
        pipeline.submit(&mut session, "two").await.unwrap();

        calls.lock().unwrap().clear();
        pipeline.render(&session).await.unwrap();
        assert_eq!(calls.lock().unwrap().len(), 2);

        // Rendering again re-translates again; nothing is cached.
        pipeline.render(&session).await.unwrap();
        assert_eq!(calls.lock().unwrap().len(), 4);
    }
}
