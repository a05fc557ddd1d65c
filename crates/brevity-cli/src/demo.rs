use crate::prompts::DemoPrompt;
use brevity_model::{Answer, LengthCategory, QuestionAnswerer, Summarizer};

pub struct QuestionResult {
    pub question: String,
    pub answer: brevity_model::Result<Answer>,
}

pub struct PromptResult {
    pub summary: String,
    pub questions: Vec<QuestionResult>,
}

/// Summarize one passage, then ask every question against the summary.
///
/// A failed summary aborts the prompt; a failed answer is recorded and the
/// remaining questions are still asked.
pub async fn run_prompt(
    summarizer: &dyn Summarizer,
    answerer: &dyn QuestionAnswerer,
    text: &str,
    length: LengthCategory,
    questions: &[&str],
) -> brevity_model::Result<PromptResult> {
    let summary = summarizer.summarize(text, length.bounds()).await?;

    let mut results = Vec::with_capacity(questions.len());
    for question in questions {
        let answer = answerer.answer(question, &summary).await;
        results.push(QuestionResult {
            question: question.to_string(),
            answer,
        });
    }

    Ok(PromptResult {
        summary,
        questions: results,
    })
}

pub async fn run_demo_prompt(
    summarizer: &dyn Summarizer,
    answerer: &dyn QuestionAnswerer,
    prompt: &DemoPrompt,
) -> brevity_model::Result<PromptResult> {
    run_prompt(summarizer, answerer, prompt.text, prompt.length, &prompt.questions).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::DEMO_PROMPTS;
    use async_trait::async_trait;
    use brevity_model::{LengthBounds, ModelError};
    use std::sync::Mutex;

    struct FirstSentence {
        bounds: Mutex<Vec<LengthBounds>>,
    }

    #[async_trait]
    impl Summarizer for FirstSentence {
        async fn summarize(
            &self,
            text: &str,
            bounds: LengthBounds,
        ) -> brevity_model::Result<String> {
            self.bounds.lock().unwrap().push(bounds);
            Ok(text.split_inclusive('.').next().unwrap_or(text).to_string())
        }

        fn model_id(&self) -> &str {
            "first-sentence"
        }
    }

    struct ContextEcho {
        contexts: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl QuestionAnswerer for ContextEcho {
        async fn answer(&self, question: &str, context: &str) -> brevity_model::Result<Answer> {
            self.contexts.lock().unwrap().push(context.to_string());
            if self.fail_on == Some(question) {
                return Err(ModelError::EmptyResponse);
            }
            Ok(Answer {
                answer: context.to_string(),
                score: 1.0,
                start: 0,
                end: context.len(),
            })
        }
    }

    #[tokio::test]
    async fn questions_are_asked_against_the_summary() {
        let summarizer = FirstSentence {
            bounds: Mutex::new(Vec::new()),
        };
        let answerer = ContextEcho {
            contexts: Mutex::new(Vec::new()),
            fail_on: None,
        };

        let prompt = &DEMO_PROMPTS[3];
        let result = run_demo_prompt(&summarizer, &answerer, prompt).await.unwrap();

        assert_eq!(
            result.summary,
            "The sun is a star at the center of our solar system."
        );
        assert_eq!(result.questions.len(), 3);
        assert!(answerer
            .contexts
            .lock()
            .unwrap()
            .iter()
            .all(|context| context == &result.summary));
        assert_eq!(
            *summarizer.bounds.lock().unwrap(),
            vec![LengthCategory::Short.bounds()]
        );
    }

    #[tokio::test]
    async fn failed_answer_does_not_stop_remaining_questions() {
        let summarizer = FirstSentence {
            bounds: Mutex::new(Vec::new()),
        };
        let answerer = ContextEcho {
            contexts: Mutex::new(Vec::new()),
            fail_on: Some("second?"),
        };

        let result = run_prompt(
            &summarizer,
            &answerer,
            "One. Two.",
            LengthCategory::Medium,
            &["first?", "second?", "third?"],
        )
        .await
        .unwrap();

        assert!(result.questions[0].answer.is_ok());
        assert!(result.questions[1].answer.is_err());
        assert!(result.questions[2].answer.is_ok());
    }

    #[test]
    fn demo_prompts_cover_every_length() {
        for category in LengthCategory::ALL {
            assert!(DEMO_PROMPTS.iter().any(|p| p.length == category));
        }
    }
}
