//! Shared rendering helpers for command output.

use cardsense_application::Advice;
use cardsense_core::settings::CardSettings;
use colored::Colorize;

/// Renders a toggle value the way the settings screens word it.
pub fn toggle_label(on: bool) -> colored::ColoredString {
    if on {
        "Enabled".green()
    } else {
        "Disabled".bright_black()
    }
}

/// Prints a settings record as an indented toggle list.
pub fn print_settings(settings: &CardSettings, currency: &str) {
    println!("  Online Transactions:   {}", toggle_label(settings.online_enabled));
    println!("  International:         {}", toggle_label(settings.international_enabled));
    println!("  Contactless / POS:     {}", toggle_label(settings.contactless_enabled));
    println!("  NFC / Tap & Pay:       {}", toggle_label(settings.nfc_enabled));
    println!("  Virtual Card:          {}", toggle_label(settings.virtual_card_enabled));
    println!("  Auto-EMI:              {}", toggle_label(settings.auto_emi));
    println!("  Real-time alerts:      {}", toggle_label(settings.notifications));
    println!("  Monthly limit (suggested): {}{}", currency, settings.monthly_limit);
    if let Some(note) = &settings.note {
        println!("  {}", format!("Notes: {}", note).bright_black());
    }
}

/// Prints a classification outcome plus its recommended settings.
pub fn print_advice(advice: &Advice, currency: &str) {
    println!(
        "{}",
        format!("Recommended profile: {}", advice.persona).green().bold()
    );
    if !advice.reasons.is_empty() {
        println!(
            "{}",
            format!("Reasoning: {}", advice.reasons.join("; ")).bright_blue()
        );
    }
    println!("{}", "Suggested settings:".bold());
    print_settings(&advice.settings, currency);
}
