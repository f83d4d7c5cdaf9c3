//! Deterministic assembly of the gift-suggestion prompt.
//!
//! Builds the natural-language context block describing a person, the
//! itemized gift-history block, and the final system instruction sent to
//! the completion provider. This is a pure serialization step: for the same
//! person + gift snapshot the output is byte-identical.

use chrono::NaiveDate;

/// Profile attributes of a person, as fed into the context block.
///
/// Fields that are `None`, blank, or an empty sequence are omitted from the
/// rendered context entirely (no blank lines, no empty lists).
#[derive(Debug, Clone, Default)]
pub struct PersonProfile {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub interests: Vec<String>,
    pub hobbies: Vec<String>,
    pub clothing_size: Option<String>,
    pub shoe_size: Option<String>,
    pub favorite_colors: Vec<String>,
    pub notes: Option<String>,
}

/// One prior gift, as rendered into the gift-history block.
#[derive(Debug, Clone)]
pub struct GiftHistoryItem {
    pub name: String,
    pub description: Option<String>,
}

/// Fixed preamble establishing the assistant role.
const PREAMBLE: &str = "Jsi pomocník pro návrhy dárků. \
                        Pomáháš uživatelům vybrat vhodný dárek pro jejich blízké.";

/// Fixed directive: flag suggestions that duplicate a prior gift and offer
/// an alternative.
const DUPLICATE_DIRECTIVE: &str = "DŮLEŽITÉ: Pokud navrhuješ dárek, který je podobný \
                                   nějakému z historie, upozorni na to uživatele a navrhni alternativu.";

/// Fixed closing tone instruction.
const TONE_DIRECTIVE: &str = "Odpovídej v češtině, buď přátelský a nápomocný.";

/// Render the profile context block, one `Label: value` line per populated
/// field. Lines appear in a fixed order; absent fields produce no line.
/// Sequence fields are joined with `", "`.
pub fn person_context(profile: &PersonProfile) -> String {
    let mut lines = vec![format!("Jméno: {}", profile.name)];

    if let Some(birth_date) = profile.birth_date {
        lines.push(format!("Datum narození: {birth_date}"));
    }
    if !profile.interests.is_empty() {
        lines.push(format!("Zájmy: {}", profile.interests.join(", ")));
    }
    if !profile.hobbies.is_empty() {
        lines.push(format!("Koníčky: {}", profile.hobbies.join(", ")));
    }
    if let Some(size) = non_blank(&profile.clothing_size) {
        lines.push(format!("Velikost oblečení: {size}"));
    }
    if let Some(size) = non_blank(&profile.shoe_size) {
        lines.push(format!("Velikost bot: {size}"));
    }
    if !profile.favorite_colors.is_empty() {
        lines.push(format!(
            "Oblíbené barvy: {}",
            profile.favorite_colors.join(", ")
        ));
    }
    if let Some(notes) = non_blank(&profile.notes) {
        lines.push(format!("Poznámky: {notes}"));
    }

    lines.join("\n")
}

/// Render the gift-history block, or `None` when there are no gifts.
///
/// The block preserves the caller-supplied order (the person detail view
/// loads gifts newest first) and renders one `- name` line per gift, with
/// `: description` appended when present.
pub fn gift_history(gifts: &[GiftHistoryItem]) -> Option<String> {
    if gifts.is_empty() {
        return None;
    }

    let lines: Vec<String> = gifts
        .iter()
        .map(|gift| match gift.description.as_deref() {
            Some(description) if !description.is_empty() => {
                format!("- {}: {}", gift.name, description)
            }
            _ => format!("- {}", gift.name),
        })
        .collect();

    Some(format!("Historie dárků:\n{}", lines.join("\n")))
}

/// Compose the full system instruction for the completion provider.
///
/// Concatenates the fixed preamble, the profile context, the gift-history
/// block (when present), and the duplicate-gift directive. The caller's
/// free-text message is passed to the provider separately as the user role;
/// it is never merged into this string.
pub fn system_prompt(profile: &PersonProfile, gifts: &[GiftHistoryItem]) -> String {
    let context = person_context(profile);
    let history = match gift_history(gifts) {
        Some(block) => format!("\n\n{block}"),
        None => String::new(),
    };

    format!(
        "{PREAMBLE}\n\nMáš k dispozici tyto informace o osobě:\n{context}{history}\n\n\
         {DUPLICATE_DIRECTIVE}\n\n{TONE_DIRECTIVE}"
    )
}

/// `Some(value)` only when the optional string is present and non-blank.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
