use crate::catalog::{Component, ComponentKind};
use crate::llm::client::ConnectionProbe;
use crate::llm::interpreter::ModificationResult;
use crate::session::{Role, Transcript};
use colored::Colorize;
use strum::IntoEnumIterator;

pub fn print_catalog(components: &[Component]) {
    for kind in ComponentKind::iter() {
        let in_kind: Vec<&Component> = components.iter().filter(|c| c.kind == kind).collect();
        if in_kind.is_empty() {
            continue;
        }
        println!("{}", kind.to_string().as_str().bold().underline());
        for component in in_kind {
            println!(
                "  {:<12} {}",
                component.name.bright_cyan(),
                component.description
            );
        }
        println!();
    }
}

pub fn print_component(component: &Component, source: &str) {
    println!(
        "{} {} {}",
        component.title.bold(),
        format!("({})", component.kind).as_str().dimmed(),
        component.description.dimmed()
    );
    println!("{}", source.bright_white());
}

pub fn print_result(result: &ModificationResult) {
    match result {
        ModificationResult::Success {
            updated_code,
            description,
        } => {
            println!("{} {}", "✓".bright_green(), description.bright_green());
            println!("\n{}\n", updated_code.bright_white());
        }
        ModificationResult::Failure { description, error } => {
            println!("{} {}", "✗".bright_red(), error.bright_red());
            if !description.trim().is_empty() {
                println!("\n{}\n", description);
            }
        }
    }
}

pub fn print_probe(probe: &ConnectionProbe) {
    if probe.success {
        println!("{} API connection OK", "✓".bright_green());
    } else {
        println!(
            "{} API connection failed: {}",
            "✗".bright_red(),
            probe.error.as_deref().unwrap_or("unknown error")
        );
    }
}

pub fn print_history(transcript: &Transcript, show_timestamps: bool) {
    if transcript.is_empty() {
        println!("{}", "No messages yet.".dimmed());
        return;
    }

    for message in transcript.messages() {
        let label = match message.role {
            Role::User => "you".bright_cyan().bold(),
            Role::Assistant => "assistant".bright_magenta().bold(),
        };
        if show_timestamps {
            println!(
                "{} {} {}",
                message.timestamp.format("%H:%M:%S").to_string().as_str().dimmed(),
                label,
                message.text
            );
        } else {
            println!("{} {}", label, message.text);
        }
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bright_red().bold(), message);
}
