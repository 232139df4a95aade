//! Prompt texts for the scripted intake dialogue.
//!
//! Every reply the service speaks lives here so the transition/output table
//! stays auditable in one place. Templated prompts are small `format!`
//! helpers; everything else is a fixed constant.

/// Opening prompt for a new call.
pub const GREETING: &str = "Hello, thank you for calling. May I have your name?";

/// Re-prompt when name extraction fails.
pub const RETRY_NAME: &str =
    "I am sorry, I did not catch your name. Could you please tell me your name?";

/// Prompt for the service issue once the callback number is stored.
pub const ASK_ISSUE: &str = "Thank you. And what is the nature of your service issue?";

/// Re-prompt when phone extraction fails.
pub const RETRY_PHONE: &str =
    "I did not catch that. Could you please repeat your 10-digit callback number?";

/// Closing acknowledgment for turns after standard intake completed.
pub const CLOSING: &str =
    "Thank you for calling. Our team will be in touch shortly. Goodbye.";

/// Safety check spoken the moment emergency language is detected.
pub const EMERGENCY_CONFIRMATION: &str =
    "This sounds like an emergency. Are you and everyone on site in a safe location?";

/// Prompt for the dispatch address once safety is confirmed.
pub const EMERGENCY_ASK_ADDRESS: &str =
    "Thank you. What is the exact address of the property?";

/// Closing acknowledgment for turns after the emergency intake completed.
pub const EMERGENCY_CLOSING: &str =
    "Help is on the way. Please stay safe until the technician arrives. Goodbye.";

/// Reply to a `call_ended` event; the call has hung up, so this text is not
/// spoken, but the protocol requires exactly one response per event.
pub const GOODBYE: &str = "Goodbye.";

/// Fallback for unknown event types.
pub const FALLBACK: &str = "I am sorry, I do not understand. Could you please repeat that?";

/// Prompt for the callback number, addressed by name.
pub fn ask_phone(name: &str) -> String {
    format!("Thank you {name}. And what is your callback number?")
}

/// Completion echo: confirms name and issue and promises follow-up.
pub fn confirm_lead(name: &str, issue: &str) -> String {
    format!(
        "Thank you {name}. We have noted your issue: {issue}. \
         A member of our team will call you back shortly."
    )
}

/// Confirms the dispatch address and promises an emergency technician.
pub fn confirm_dispatch(address: &str) -> String {
    format!(
        "We have your address as {address}. \
         An emergency technician is being dispatched now."
    )
}
