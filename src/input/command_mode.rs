use crate::calendar::CategoryFilter;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Reload,
    NewEvent(Option<String>),
    Filter(CategoryFilter),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    let Some(name) = parts.first() else {
        return Command::Error("Empty command".to_string());
    };

    match *name {
        "q" | "quit" => Command::Quit,
        "r" | "reload" => Command::Reload,
        "help" => Command::Help,
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "filter" => match parts.get(1) {
            None => Command::Error("filter requires a category (all, work, personal, other)".to_string()),
            Some(arg) => CategoryFilter::parse(arg)
                .map(Command::Filter)
                .unwrap_or_else(|| Command::Error(format!("Unknown category: {}", arg))),
        },
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Category;

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_reload_command() {
        assert_eq!(parse_command(":r"), Command::Reload);
        assert_eq!(parse_command(":reload"), Command::Reload);
    }

    #[test]
    fn parse_new_event_with_multiple_words() {
        let cmd = parse_command(":new Sprint planning session");
        assert_eq!(cmd, Command::NewEvent(Some("Sprint planning session".to_string())));
    }

    #[test]
    fn parse_new_without_title_returns_blank_title() {
        assert_eq!(parse_command(":new"), Command::NewEvent(None));
    }

    #[test]
    fn parse_filter_command() {
        assert_eq!(parse_command(":filter personal"), Command::Filter(CategoryFilter::Only(Category::Personal)));
        assert_eq!(parse_command(":filter all"), Command::Filter(CategoryFilter::All));
    }

    #[test]
    fn parse_filter_with_unknown_category_returns_error() {
        assert!(matches!(parse_command(":filter hobbies"), Command::Error(_)));
        assert!(matches!(parse_command(":filter"), Command::Error(_)));
    }

    #[test]
    fn parse_theme_command() {
        assert_eq!(parse_command(":theme nord"), Command::Theme("nord".to_string()));
    }

    #[test]
    fn parse_help_command() {
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn parse_unknown_command_returns_error() {
        assert!(matches!(parse_command(":unknown"), Command::Error(_)));
    }

    #[test]
    fn parse_command_without_colon_returns_error() {
        assert!(matches!(parse_command("quit"), Command::Error(_)));
    }

    #[test]
    fn parse_empty_command_returns_error() {
        assert!(matches!(parse_command(":"), Command::Error(_)));
    }
}
