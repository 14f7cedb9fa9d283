use unicode_width::UnicodeWidthStr;

/// Speaker labels padded so the colons after both names line up.
///
/// Padding is placed before the label, which keeps `name:` and the message
/// adjacent in the output.
#[derive(Debug, Clone)]
pub struct SpeakerLabels<'a> {
    pub user: &'a str,
    pub bot: &'a str,
    pub user_pad: String,
    pub bot_pad: String,
}

impl<'a> SpeakerLabels<'a> {
    pub fn new(user: &'a str, bot: &'a str) -> Self {
        Self {
            user,
            bot,
            user_pad: padding(user, user, bot),
            bot_pad: padding(bot, user, bot),
        }
    }
}

/// Spaces needed to widen `name` to the longer of the two display names.
pub fn padding(name: &str, user_name: &str, bot_name: &str) -> String {
    let width = user_name.width().max(bot_name.width());
    " ".repeat(width.saturating_sub(name.width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_name_is_padded() {
        let labels = SpeakerLabels::new("User", "Bot");
        assert_eq!(labels.user_pad, "");
        assert_eq!(labels.bot_pad, " ");
    }

    #[test]
    fn equal_names_need_no_padding() {
        let labels = SpeakerLabels::new("Ann", "Bob");
        assert!(labels.user_pad.is_empty());
        assert!(labels.bot_pad.is_empty());
    }

    #[test]
    fn wide_characters_count_double() {
        // each CJK character occupies two columns
        assert_eq!(padding("AI", "用户", "AI"), "  ");
    }
}
