//! Interactive advisory session.
//!
//! Drives the questionnaire, then drops into a small REPL where the user
//! can review the recommendation, tweak and apply it, inspect the applied
//! settings, and reset either the settings or the whole session. All
//! effects are simulated; nothing leaves the process.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use cardsense_application::AdvisorUseCase;
use cardsense_core::answers::{EmiFrequency, SpendLevel, TransactionMode};
use cardsense_core::config::AppConfig;
use cardsense_core::session::SessionState;
use cardsense_core::settings::CardSettings;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

type Repl = Editor<CliHelper, DefaultHistory>;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/review".to_string(),
                "/apply".to_string(),
                "/quick".to_string(),
                "/applied".to_string(),
                "/reset".to_string(),
                "/restart".to_string(),
                "/help".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Runs an interactive advisory session until the user quits.
pub fn run(config: &AppConfig) -> Result<()> {
    let usecase = AdvisorUseCase::new();
    let mut state = SessionState::new();

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Cardsense Advisor ===".bright_magenta().bold());
    println!(
        "{}",
        "Answer a few questions about your card usage to get a settings recommendation."
            .bright_black()
    );
    println!();

    run_questionnaire(&mut rl, &usecase, &mut state, config)?;

    println!();
    println!(
        "{}",
        "Type '/review' to inspect the recommendation, '/help' for all commands.".bright_black()
    );

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match trimmed {
                    "/quit" | "quit" | "exit" => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    "/help" => print_help(),
                    "/review" => show_review(&usecase, &state, config),
                    "/apply" => apply_with_overrides(&mut rl, &usecase, &mut state, config)?,
                    "/quick" => quick_apply(&usecase, &mut state),
                    "/applied" => show_applied(&state, config),
                    "/reset" => {
                        usecase.reset_applied(&mut state);
                        println!("{}", "Settings reset.".green());
                    }
                    "/restart" => {
                        usecase.reset_session(&mut state);
                        println!(
                            "{}",
                            "Session reset. Please re-run questionnaire.".yellow()
                        );
                        run_questionnaire(&mut rl, &usecase, &mut state, config)?;
                    }
                    other => {
                        println!("{}", format!("Unknown command: {}", other).bright_black());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Asks the questionnaire questions, then classifies and shows the outcome.
///
/// Defaults mirror the original form: skipping a question keeps its shown
/// default, and an unparseable reply falls back to the default with a
/// warning rather than failing the run.
fn run_questionnaire(
    rl: &mut Repl,
    usecase: &AdvisorUseCase,
    state: &mut SessionState,
    config: &AppConfig,
) -> Result<()> {
    println!("{}", "Tell us about your card usage".bold());

    let name = ask_text(rl, "Your name", state.answers.name.as_deref().unwrap_or(""))?;
    state.answers.name = if name.is_empty() { None } else { Some(name) };

    let default_spend = state.answers.monthly_spend.unwrap_or(30_000);
    state.answers.monthly_spend = Some(ask_amount(
        rl,
        "Approx. monthly card spend",
        default_spend,
        &config.currency_symbol,
    )?);

    state.answers.preferred_mode = Some(ask_parsed(
        rl,
        "Where do you use your card most? (online / in-store / emi / mixed)",
        TransactionMode::Online,
        "online",
    )?);

    state.answers.online_spend = Some(ask_parsed(
        rl,
        "Online spend level (low / medium / high)",
        SpendLevel::Medium,
        "medium",
    )?);

    state.answers.travels_internationally =
        Some(ask_yes_no(rl, "Do you travel internationally?", false)?);

    state.answers.prefers_contactless = Some(ask_yes_no(
        rl,
        "Do you often use contactless / tap-to-pay?",
        true,
    )?);

    state.answers.uses_emi = Some(ask_parsed(
        rl,
        "How often do you convert purchases to EMI? (never / occasionally / often)",
        EmiFrequency::Occasionally,
        "occasionally",
    )?);

    state.answers.security_first = Some(ask_yes_no(
        rl,
        "Do you prefer stricter security (disable online/contactless) over convenience?",
        false,
    )?);

    state.answers.new_to_credit =
        Some(ask_yes_no(rl, "Are you new to credit / thin-file?", false)?);

    state.answers.notifications = Some(ask_yes_no(
        rl,
        "Receive real-time decline & suspicious activity alerts?",
        true,
    )?);

    println!();
    println!(
        "{}",
        format!(
            "Summary: {} — monthly {}{}",
            state.answers.name.as_deref().unwrap_or("(no name)"),
            config.currency_symbol,
            state.answers.monthly_spend.unwrap_or(0)
        )
        .bright_black()
    );

    let advice = usecase.classify_and_recommend(state);
    println!();
    super::utils::print_advice(&advice, &config.currency_symbol);
    Ok(())
}

fn show_review(usecase: &AdvisorUseCase, state: &SessionState, config: &AppConfig) {
    match usecase.review(state) {
        None => println!(
            "{}",
            "No recommendation yet. Please complete the questionnaire first.".yellow()
        ),
        Some(advice) => {
            println!(
                "{}",
                format!("Recommended Profile: {}", advice.persona).bold()
            );
            println!(
                "{}",
                chrono::Local::now()
                    .format("%d %b %Y, %H:%M")
                    .to_string()
                    .bright_black()
            );
            super::utils::print_settings(&advice.settings, &config.currency_symbol);
            if !advice.reasons.is_empty() {
                println!(
                    "{}",
                    format!("Reasoning: {}", advice.reasons.join("; ")).bright_blue()
                );
            }
            println!(
                "{}",
                "Use '/apply' to tweak and apply, or '/quick' to apply as-is.".bright_black()
            );
        }
    }
}

/// The review-and-apply flow: every toggle can be flipped before applying,
/// the limit comes from the recommendation, and the note is not carried
/// into the applied record.
fn apply_with_overrides(
    rl: &mut Repl,
    usecase: &AdvisorUseCase,
    state: &mut SessionState,
    config: &AppConfig,
) -> Result<()> {
    let Some(advice) = usecase.review(state) else {
        println!(
            "{}",
            "No recommendation yet. Please complete the questionnaire first.".yellow()
        );
        return Ok(());
    };

    println!("{}", "Tweak the suggested settings before applying:".bold());
    let reco = &advice.settings;
    let record = CardSettings {
        online_enabled: ask_yes_no(rl, "Enable Online Transactions?", reco.online_enabled)?,
        international_enabled: ask_yes_no(
            rl,
            "Enable International Transactions?",
            reco.international_enabled,
        )?,
        contactless_enabled: ask_yes_no(
            rl,
            "Enable Contactless / POS?",
            reco.contactless_enabled,
        )?,
        nfc_enabled: ask_yes_no(rl, "Enable NFC / Tap & Pay?", reco.nfc_enabled)?,
        virtual_card_enabled: ask_yes_no(
            rl,
            "Enable Virtual Single-use Cards for Online?",
            reco.virtual_card_enabled,
        )?,
        auto_emi: ask_yes_no(rl, "Suggest Auto-EMI for big purchases?", reco.auto_emi)?,
        notifications: ask_yes_no(rl, "Receive real-time alerts?", reco.notifications)?,
        monthly_limit: reco.monthly_limit,
        note: None,
    };

    usecase.apply(state, record);
    println!(
        "{}",
        "Settings applied to your profile (simulated). Type '/applied' to review.".green()
    );
    Ok(())
}

fn quick_apply(usecase: &AdvisorUseCase, state: &mut SessionState) {
    match usecase.quick_apply(state) {
        Ok(_) => println!("{}", "Applied recommended settings (simulated).".green()),
        Err(e) => println!("{}", e.to_string().yellow()),
    }
}

fn show_applied(state: &SessionState, config: &AppConfig) {
    println!("{}", "Your Current Settings (simulated)".bold());
    super::utils::print_settings(&state.applied, &config.currency_symbol);
    let last = state
        .last_persona
        .map(|p| p.to_string())
        .unwrap_or_else(|| "—".to_string());
    println!(
        "{}",
        format!("Last recommended profile: {}", last).bright_black()
    );
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  /review   Show the current recommendation");
    println!("  /apply    Tweak the recommendation, then apply it");
    println!("  /quick    Apply the recommendation as-is");
    println!("  /applied  Show the applied settings");
    println!("  /reset    Reset applied settings to defaults");
    println!("  /restart  Clear answers and re-run the questionnaire");
    println!("  /quit     Exit");
}

// ===== Prompt helpers =====

fn ask_text(rl: &mut Repl, prompt: &str, default: &str) -> Result<String> {
    let shown = if default.is_empty() {
        format!("{}: ", prompt)
    } else {
        format!("{} [{}]: ", prompt, default)
    };
    let line = read_reply(rl, &shown)?;
    if line.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(line)
    }
}

fn ask_amount(rl: &mut Repl, prompt: &str, default: u32, currency: &str) -> Result<u32> {
    let shown = format!("{} ({}) [{}]: ", prompt, currency, default);
    let line = read_reply(rl, &shown)?;
    if line.is_empty() {
        return Ok(default);
    }
    match line.replace(',', "").parse::<u32>() {
        Ok(amount) => Ok(amount),
        Err(_) => {
            println!(
                "{}",
                format!("Not a number, keeping {}{}.", currency, default).yellow()
            );
            Ok(default)
        }
    }
}

fn ask_yes_no(rl: &mut Repl, prompt: &str, default: bool) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let line = read_reply(rl, &format!("{} {}: ", prompt, hint))?;
    match line.to_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => {
            println!(
                "{}",
                format!("Didn't catch '{}', keeping the default.", other).yellow()
            );
            Ok(default)
        }
    }
}

fn ask_parsed<T: std::str::FromStr + Copy>(
    rl: &mut Repl,
    prompt: &str,
    default: T,
    default_label: &str,
) -> Result<T> {
    let line = read_reply(rl, &format!("{} [{}]: ", prompt, default_label))?;
    if line.is_empty() {
        return Ok(default);
    }
    match line.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => {
            println!(
                "{}",
                format!("Didn't catch '{}', keeping '{}'.", line, default_label).yellow()
            );
            Ok(default)
        }
    }
}

/// Reads one reply, treating CTRL-C/CTRL-D as "keep the default".
fn read_reply(rl: &mut Repl, prompt: &str) -> Result<String> {
    match rl.readline(prompt) {
        Ok(line) => Ok(line.trim().to_string()),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}
