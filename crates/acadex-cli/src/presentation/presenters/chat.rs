use crate::presentation::view_models::{AskViewModel, CommandResultViewModel, Guidance};

pub fn present_ask(model: &str, prompt: &str, reply: &str) -> CommandResultViewModel<AskViewModel> {
    let content = AskViewModel {
        model: model.to_string(),
        prompt: prompt.to_string(),
        reply: reply.trim().to_string(),
    };

    CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("Continue the conversation interactively").with_command("acadex chat"),
    )
}
