//! Terminal renderer for the home view.

use std::sync::{Mutex, PoisonError};

use colored::*;

use super::home::{HomeRenderer, HomeView};

/// Prints what changed since the previous render.
///
/// Only fields that differ from the last rendered view are printed, so a
/// dispatch that touches the draft alone produces no output.
#[derive(Default)]
pub struct TerminalRenderer {
    last: Mutex<Option<HomeView>>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HomeRenderer for TerminalRenderer {
    fn render(&self, view: &HomeView) {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = last.take().unwrap_or_default();

        for line in changed_lines(&previous, view) {
            println!("{line}");
        }

        *last = Some(view.clone());
    }
}

fn changed_lines(previous: &HomeView, view: &HomeView) -> Vec<String> {
    let mut lines = Vec::new();

    if !view.is_user_signed_in && view.sign_in_links != previous.sign_in_links {
        lines.push(format!("{}", "🔐 Sign in to create short links:".bright_blue().bold()));
        for link in &view.sign_in_links {
            lines.push(format!("   {:<9} {}", link.provider.to_string().bold(), link.link));
        }
    }

    if view.should_show_promo && !previous.should_show_promo {
        lines.push(format!(
            "{}",
            "💡 Install the browser extension to shorten links in one click.".cyan()
        ));
    }

    if view.input_err != previous.input_err
        && let Some(input_err) = &view.input_err
    {
        lines.push(format!("{} {}", "⚠️ ".yellow(), input_err.yellow()));
    }

    if view.err != previous.err
        && let Some(err) = &view.err
    {
        lines.push(format!("{} {}", "❌".red(), err.name.red().bold()));
        lines.push(format!("   {}", err.description));
    }

    if view.short_link != previous.short_link
        && let Some(short_link) = &view.short_link
    {
        lines.push(format!("{} {}", "✨ Short link:".green().bold(), short_link.bright_white()));
        if let Some(created) = &view.created_url {
            lines.push(format!("   {} {}", "→".dimmed(), created.original_url.dimmed()));
        }
    }

    if view.auto_complete_suggestions != previous.auto_complete_suggestions {
        for entry in &view.auto_complete_suggestions {
            lines.push(format!(
                "   {:<20} {}  {}",
                entry.alias().bold(),
                entry.url.original_url,
                entry
                    .created_at
                    .format("created %Y-%m-%d %H:%M UTC")
                    .to_string()
                    .dimmed()
            ));
        }
    }

    lines
}
