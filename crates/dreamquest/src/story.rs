//! Narrative content. These blocks are opaque payloads as far as the game
//! logic is concerned; the one thing that matters is that the secret token
//! appears only in the victory block.

pub const SECRET_TOKEN: &str = "TI404{fbrySl.latt∆mCH4.##blurr3d}";

const WELCOME: &str = "\
===============================================
    WELCOME TO THE DREAM QUEST
===============================================

You stand at the edge of a mystical forest. Ancient runes
glow softly on the trees, and the wind carries whispers of
forgotten knowledge.

A hooded figure approaches...

\"Greetings, traveler. I am the Guardian of Digital Secrets.
To claim the prize you seek, you must prove your worth
through wisdom and courage.\"

Choose your path:
A) Enter the Enchanted Forest
B) Seek the Oracle's Wisdom
C) Challenge the Guardian directly
[a/b/c] > ";

const FOREST_DEFEAT: &str = "\
You walk deeper into the forest. The trees whisper ancient
codes... but the path behind you is gone, and every turn
leads back to the same clearing.

GAME OVER - Try again, brave soul.

The dream fades to black...";

const GUARDIAN_REDIRECT: &str = "\
The Guardian laughs heartily. \"Brave, but foolish!
One must earn wisdom before wielding power.\"

You are carried back to the beginning...

Press Enter to continue...";

const RIDDLE: &str = "\
You approach the Oracle's chamber. She speaks in riddles:

\"The prize you seek begins with the sacred prefix of your
realm, bears the symbol of change, and ends with the blur
of confusion. Numbers dance within.\"

The Oracle presents you with three crystals:

A) Crystal of Truth
B) Crystal of Deception
C) Crystal of Illusion

Which crystal holds the true prize?
[a/b/c] > ";

const CRYSTAL_CRUMBLES: &str = "\
The crystal crumbles to dust. \"Not all that glitters is gold...\"
Try again, seeker of truth.

Press Enter to choose again...";

const INVALID_CHOICE: &str = "Invalid choice. Please enter 'a', 'b', or 'c'.";

#[derive(Debug)]
pub struct Story {
    token: String,
}

impl Story {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn welcome(&self) -> &'static str {
        WELCOME
    }

    pub fn forest_defeat(&self) -> &'static str {
        FOREST_DEFEAT
    }

    pub fn guardian_redirect(&self) -> &'static str {
        GUARDIAN_REDIRECT
    }

    pub fn riddle(&self) -> &'static str {
        RIDDLE
    }

    pub fn crystal_crumbles(&self) -> &'static str {
        CRYSTAL_CRUMBLES
    }

    pub fn invalid_choice(&self) -> &'static str {
        INVALID_CHOICE
    }

    pub fn victory(&self) -> String {
        format!(
            "\
=== CONGRATULATIONS! ===

The Crystal of Truth blazes with brilliant light!
You have proven yourself worthy, noble adventurer.

The Guardian nods approvingly:
\"Wisdom before action, and truth over illusion. Well done.\"

Your prize: {}

===============================================
    QUEST COMPLETED SUCCESSFULLY!
===============================================

Thank you for playing Dream Quest!",
            self.token
        )
    }
}

impl Default for Story {
    fn default() -> Self {
        Self::new(SECRET_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_victory_block_discloses_the_token() {
        let story = Story::default();
        assert!(story.victory().contains(SECRET_TOKEN));
        assert!(!story.welcome().contains(SECRET_TOKEN));
        assert!(!story.riddle().contains(SECRET_TOKEN));
        assert!(!story.crystal_crumbles().contains(SECRET_TOKEN));
    }

    #[test]
    fn token_is_injected_not_hardcoded() {
        let story = Story::new("TEST{token}");
        assert!(story.victory().contains("TEST{token}"));
        assert!(!story.victory().contains(SECRET_TOKEN));
    }
}
