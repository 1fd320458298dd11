use alloc::format;
use alloc::string::{String, ToString};

use crate::*;

/// Every piece of text the game can show, some carrying template arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageId {
    CountLabel,
    GoButton,
    NotAnInteger,
    OutOfRange { min: TileCount, max: TileCount },
    Ready { min: TileCount, max: TileCount },
    Creating,
    Waiting { seconds: u32 },
    Scrambling { pass: u8, total: u8 },
    ClickToPlay,
    WrongOrder,
    Won,
}

/// Supplies display text; the game never inspects what comes back.
pub trait MessageCatalog {
    fn text(&self, id: MessageId) -> String;
}

/// Built-in English strings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct English;

impl MessageCatalog for English {
    fn text(&self, id: MessageId) -> String {
        use MessageId::*;
        match id {
            CountLabel => "How many buttons to create?".to_string(),
            GoButton => "Go!".to_string(),
            NotAnInteger => "Please enter a whole number.".to_string(),
            OutOfRange { min, max } => format!("Please enter a number between {} and {}.", min, max),
            Ready { min, max } => format!("Enter a number ({}–{}) and press Go.", min, max),
            Creating => "Creating buttons...".to_string(),
            Waiting { seconds } => format!(
                "Memorize the order… starting in {} second{}…",
                seconds,
                if seconds == 1 { "" } else { "s" }
            ),
            Scrambling { pass, total } => format!("Scrambling {}/{}…", pass, total),
            ClickToPlay => "Now click buttons in the original order.".to_string(),
            WrongOrder => "Wrong order!".to_string(),
            Won => "Excellent memory!".to_string(),
        }
    }
}
