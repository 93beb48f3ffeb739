use anyhow::{Result, bail};
use cardsense_application::AdvisorUseCase;
use cardsense_core::answers::{AnswerSet, EmiFrequency, SpendLevel, TransactionMode};
use cardsense_core::config::AppConfig;
use cardsense_core::session::SessionState;
use clap::Args;

use super::utils;

/// Answers for a one-shot classification. Omitted flags are treated as
/// skipped questions (no signal), exactly like the interactive flow.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Cardholder name (informational only)
    #[arg(long)]
    name: Option<String>,
    /// Approx. monthly card spend in rupees
    #[arg(long)]
    monthly_spend: Option<u32>,
    /// Preferred transaction mode: online, in-store, emi, mixed
    #[arg(long)]
    preferred_mode: Option<String>,
    /// Online spend level: low, medium, high
    #[arg(long)]
    online_spend: Option<String>,
    /// Travels internationally: yes or no
    #[arg(long)]
    travels_internationally: Option<String>,
    /// Often uses contactless / tap-to-pay: yes or no
    #[arg(long)]
    prefers_contactless: Option<String>,
    /// EMI conversion habit: never, occasionally, often
    #[arg(long)]
    uses_emi: Option<String>,
    /// Prefers stricter security over convenience: yes or no
    #[arg(long)]
    security_first: Option<String>,
    /// New to credit / thin credit file: yes or no
    #[arg(long)]
    new_to_credit: Option<String>,
    /// Real-time alert opt-in: yes or no
    #[arg(long)]
    notifications: Option<String>,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ClassifyArgs, config: &AppConfig) -> Result<()> {
    let answers = to_answer_set(&args)?;

    let mut state = SessionState::new();
    state.answers = answers;
    let advice = AdvisorUseCase::new().classify_and_recommend(&mut state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    utils::print_advice(&advice, &config.currency_symbol);
    Ok(())
}

fn to_answer_set(args: &ClassifyArgs) -> Result<AnswerSet> {
    Ok(AnswerSet {
        name: args.name.clone(),
        monthly_spend: args.monthly_spend,
        preferred_mode: parse_opt::<TransactionMode>(&args.preferred_mode, "--preferred-mode")?,
        online_spend: parse_opt::<SpendLevel>(&args.online_spend, "--online-spend")?,
        travels_internationally: parse_yes_no(&args.travels_internationally, "--travels-internationally")?,
        prefers_contactless: parse_yes_no(&args.prefers_contactless, "--prefers-contactless")?,
        uses_emi: parse_opt::<EmiFrequency>(&args.uses_emi, "--uses-emi")?,
        security_first: parse_yes_no(&args.security_first, "--security-first")?,
        new_to_credit: parse_yes_no(&args.new_to_credit, "--new-to-credit")?,
        notifications: parse_yes_no(&args.notifications, "--notifications")?,
    })
}

fn parse_opt<T: std::str::FromStr>(value: &Option<String>, flag: &str) -> Result<Option<T>> {
    match value {
        None => Ok(None),
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => bail!("Unrecognized value '{}' for {}", raw, flag),
        },
    }
}

fn parse_yes_no(value: &Option<String>, flag: &str) -> Result<Option<bool>> {
    match value.as_deref() {
        None => Ok(None),
        Some(raw) => match raw.to_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(Some(true)),
            "no" | "n" | "false" => Ok(Some(false)),
            _ => bail!("Expected yes or no for {}, got '{}'", flag, raw),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no_variants() {
        assert_eq!(parse_yes_no(&Some("Yes".to_string()), "--x").unwrap(), Some(true));
        assert_eq!(parse_yes_no(&Some("n".to_string()), "--x").unwrap(), Some(false));
        assert_eq!(parse_yes_no(&None, "--x").unwrap(), None);
        assert!(parse_yes_no(&Some("maybe".to_string()), "--x").is_err());
    }

    #[test]
    fn test_omitted_flags_stay_unanswered() {
        let args = ClassifyArgs {
            name: None,
            monthly_spend: Some(150_000),
            preferred_mode: None,
            online_spend: None,
            travels_internationally: None,
            prefers_contactless: None,
            uses_emi: None,
            security_first: None,
            new_to_credit: None,
            notifications: None,
            json: false,
        };
        let answers = to_answer_set(&args).unwrap();
        assert_eq!(answers.monthly_spend, Some(150_000));
        assert!(answers.new_to_credit.is_none());
    }
}
