use shared::{Icon, SuggestionEntry};
use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::services::notifier::{Notifier, NotifierHandle};

pub fn suggestions() -> Vec<SuggestionEntry> {
    vec![
        SuggestionEntry::with_icon("Send appointment reminders by SMS", Icon::Bell),
        SuggestionEntry::with_icon("Show a weekly revenue chart", Icon::Chart),
        SuggestionEntry::new("Let clients join a waitlist"),
        SuggestionEntry::with_icon("Suggest rebooking after each visit", Icon::Clock),
    ]
}

pub fn acknowledgement(text: &str) -> String {
    format!("Thanks! We noted your suggestion: \"{}\"", text)
}

/// Tells the user their pick was noted. Nothing else happens yet.
pub fn acknowledge(entry: &SuggestionEntry, notifier: &dyn Notifier) {
    tracing::info!(suggestion = entry.text, "Suggestion selected");
    if let Err(e) = notifier.notify(&acknowledgement(entry.text)) {
        tracing::warn!("Failed to show suggestion notice: {}", e);
    }
}

#[function_component(SuggestionStrip)]
pub fn suggestion_strip() -> Html {
    let notifier = use_context::<NotifierHandle>().unwrap_or_default();

    html! {
        <div class="suggestion-strip">
            <IconGlyph icon={Icon::Sparkles} class={classes!("suggestion-lead")} />
            { for suggestions().into_iter().map(|entry| {
                let text = entry.text;
                let icon = entry.icon;
                let notifier = notifier.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    acknowledge(&entry, notifier.notifier());
                });

                html! {
                    <button type="button" class="suggestion-chip" key={text} {onclick}>
                        if let Some(icon) = icon {
                            <IconGlyph icon={icon} />
                        }
                        { text }
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifier::NotifyError;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct Recording(RefCell<Vec<String>>);

    impl Notifier for Recording {
        fn notify(&self, message: &str) -> Result<(), NotifyError> {
            self.0.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Failing(Cell<usize>);

    impl Notifier for Failing {
        fn notify(&self, _message: &str) -> Result<(), NotifyError> {
            self.0.set(self.0.get() + 1);
            Err(NotifyError::NoWindow)
        }
    }

    #[test]
    fn test_each_chip_sends_one_notice_with_its_text() {
        for entry in suggestions() {
            let notifier = Recording::default();

            acknowledge(&entry, &notifier);

            let sent = notifier.0.borrow();
            assert_eq!(sent.len(), 1);
            assert!(sent[0].contains(entry.text));
        }
    }

    #[test]
    fn test_failed_notice_is_swallowed() {
        let entry = &suggestions()[0];
        let notifier = Failing::default();

        acknowledge(entry, &notifier);

        assert_eq!(notifier.0.get(), 1);
    }

    #[test]
    fn test_suggestions_are_stable() {
        let list = suggestions();
        assert!(!list.is_empty());
        assert_eq!(list, suggestions());
        assert_eq!(list[2].icon, None);
    }

    #[tokio::test]
    async fn test_renders_one_chip_per_suggestion() {
        let html = yew::ServerRenderer::<SuggestionStrip>::new()
            .hydratable(false)
            .render()
            .await;

        let list = suggestions();
        assert_eq!(html.matches(r#"class="suggestion-chip""#).count(), list.len());
        for entry in list {
            assert!(html.contains(entry.text), "missing chip: {}", entry.text);
        }
    }
}
