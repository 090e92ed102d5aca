use crate::catalog::{self, Component};
use crate::config::Config;
use crate::llm::client::GeminiClient;
use crate::llm::interpreter::ModificationResult;
use crate::llm::ModificationRequest;
use crate::session::Transcript;
use crate::ui::display;
use crate::ui::prompt::Prompt;
use anyhow::{anyhow, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct App {
    config: Config,
    client: GeminiClient,
    prompt: Prompt,
    transcript: Transcript,
    selected: Option<&'static Component>,
    // Working copy of the selected component's source; successful
    // modifications replace it so follow-up requests compound.
    working_source: String,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let client = GeminiClient::new(&config)?;

        Ok(Self {
            config,
            client,
            prompt: Prompt::new(),
            transcript: Transcript::new(),
            selected: None,
            working_source: String::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}", "Welcome to component-assist!".bright_green().bold());
        println!("Pick a component with /use <name>, then describe the change you want.");
        println!("Type /help for commands or 'exit' to quit.");

        loop {
            let selected_name = self.selected.map(|c| c.name);
            let input = self.prompt.get_input(selected_name)?;
            let input_trimmed = input.trim();

            if input_trimmed.is_empty() {
                continue;
            }

            if input_trimmed.eq_ignore_ascii_case("exit") || input_trimmed.eq_ignore_ascii_case("quit") {
                break;
            }

            if let Err(e) = self.handle_input(input_trimmed).await {
                display::print_error(&format!("{:#}", e));
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    async fn handle_input(&mut self, input: &str) -> Result<()> {
        if let Some(command) = input.strip_prefix('/') {
            let mut parts = command.splitn(2, char::is_whitespace);
            let name = parts.next().unwrap_or("");
            let argument = parts.next().unwrap_or("").trim();

            match name {
                "help" => self.print_help(),
                "list" => display::print_catalog(catalog::all()),
                "use" => self.select(argument)?,
                "show" => self.show()?,
                "reset" => self.reset()?,
                "test" => self.test_connection().await,
                "history" => display::print_history(&self.transcript, self.config.ui.show_timestamps),
                _ => display::print_error(&format!("Unknown command: /{}", name)),
            }
            return Ok(());
        }

        self.request_modification(input).await
    }

    pub fn select(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(anyhow!("Usage: /use <component>. Try /list to see the catalog."));
        }

        let component = catalog::find(name)
            .ok_or_else(|| anyhow!("No component named '{}'. Try /list.", name))?;

        self.selected = Some(component);
        self.working_source = component.source.to_string();
        println!(
            "Selected {}: {}",
            component.title.bright_cyan().bold(),
            component.description
        );
        Ok(())
    }

    fn show(&self) -> Result<()> {
        let component = self.require_selection()?;
        display::print_component(component, &self.working_source);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        let component = self.require_selection()?;
        self.working_source = component.source.to_string();
        println!("Restored the original {} source.", component.title);
        Ok(())
    }

    async fn test_connection(&self) {
        let spinner = self.spinner("Probing API endpoint...");
        let probe = self.client.test_connection().await;
        spinner.finish_and_clear();
        display::print_probe(&probe);
    }

    /// One modification exchange against the current working copy.
    pub async fn request_modification(&mut self, instruction: &str) -> Result<()> {
        let component = self.require_selection()?;

        let request = ModificationRequest::new(
            component.title,
            &self.working_source,
            instruction,
        );
        self.transcript.push_user(instruction);

        let spinner = self.spinner("Asking the model...");
        let outcome = self.client.modify_component(&request).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(result) => {
                match &result {
                    ModificationResult::Success {
                        updated_code,
                        description,
                    } => {
                        self.working_source = updated_code.clone();
                        self.transcript.push_assistant(description);
                    }
                    ModificationResult::Failure { error, .. } => {
                        self.transcript.push_assistant(error);
                    }
                }
                display::print_result(&result);
            }
            Err(e) => {
                let message = translate_transport_error(&e);
                self.transcript.push_assistant(&message);
                display::print_error(&message);
            }
        }

        Ok(())
    }

    fn require_selection(&self) -> Result<&'static Component> {
        self.selected
            .ok_or_else(|| anyhow!("No component selected. Pick one with /use <name>."))
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /list            show the component catalog");
        println!("  /use <name>      select a component to work on");
        println!("  /show            print the current working source");
        println!("  /reset           restore the original catalog source");
        println!("  /test            probe the API endpoint");
        println!("  /history         show this session's conversation");
        println!("  exit             quit");
        println!("Anything else is sent to the model as a modification request.");
    }
}

// Status-code heuristics live here, one level above the client, so the
// transport error stays raw and the user still gets an actionable line.
fn translate_transport_error(error: &anyhow::Error) -> String {
    let raw = format!("{:#}", error);
    if raw.contains("429") {
        format!("Rate limit reached; wait a moment and resend. ({})", raw)
    } else if raw.contains("403") {
        format!("The API rejected the key; check your credentials. ({})", raw)
    } else if raw.contains("400") {
        format!("The API rejected the request as malformed. ({})", raw)
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_status_codes() {
        let rate_limited = anyhow!("Generative language API error: 429 Too Many Requests - slow down");
        assert!(translate_transport_error(&rate_limited).starts_with("Rate limit reached"));

        let forbidden = anyhow!("Generative language API error: 403 Forbidden - bad key");
        assert!(translate_transport_error(&forbidden).contains("credentials"));

        let other = anyhow!("connection refused");
        assert_eq!(translate_transport_error(&other), "connection refused");
    }
}
