//! Greeting "typing" animation.
//!
//! The text is revealed one character at a time. Each frame is the whole
//! prefix revealed so far, so a client only ever needs to replace a single
//! display slot with the latest frame.

use std::time::Duration;

use tokio::sync::mpsc;

/// Default pause between characters.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(30);

/// Successive prefixes of `text`, one per character, ending with the full text.
pub fn frames(text: &str) -> impl Iterator<Item = String> + '_ {
    text.char_indices()
        .map(move |(i, c)| text[..i + c.len_utf8()].to_string())
}

/// Send every frame of `text` to `tx`, sleeping `delay` after each one.
///
/// Stops early, returning `false`, if the receiver is gone.
pub async fn type_out(text: &str, delay: Duration, tx: &mpsc::Sender<String>) -> bool {
    for frame in frames(text) {
        if tx.send(frame).await.is_err() {
            return false;
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    true
}
