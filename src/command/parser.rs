//! Cascading pattern-based classification of free-text commands.
//!
//! An ordered table of prefix rules is evaluated first-match-wins; more
//! specific prefixes sit above their shorter cousins ("clear task" before
//! "task"). The parser is total: anything unmatched echoes back.

use super::types::Intent;

/// One classification rule: a case-insensitive prefix and a builder that
/// receives the full line and the text after the prefix.
struct Rule {
    prefix: &'static str,
    build: fn(line: &str, rest: &str) -> Intent,
}

const RULES: &[Rule] = &[
    Rule {
        prefix: "hello",
        build: |line, _| Intent::Echo {
            reply: format!("Hello! I received your message: {line}"),
        },
    },
    Rule {
        prefix: "time",
        build: |_, _| Intent::TimeQuery,
    },
    Rule {
        prefix: "status",
        build: |_, _| Intent::StatusQuery,
    },
    Rule {
        prefix: "clear task",
        build: |_, _| Intent::TaskClear,
    },
    Rule {
        prefix: "task",
        build: |_, _| Intent::TaskQuery,
    },
    Rule {
        prefix: "open ",
        build: |_, rest| parse_open(rest.trim()),
    },
    Rule {
        prefix: "list apps",
        build: |_, _| Intent::ListApps,
    },
    Rule {
        prefix: "running apps",
        build: |_, _| Intent::ListRunningApps,
    },
    Rule {
        prefix: "close ",
        build: |_, rest| Intent::CloseApp {
            app_name: rest.trim().to_string(),
        },
    },
];

/// Classify one input line. Total; never errors.
pub fn parse(line: &str) -> Intent {
    for rule in RULES {
        if starts_with_ci(line, rule.prefix) {
            return (rule.build)(line, &line[rule.prefix.len()..]);
        }
    }
    Intent::Echo {
        reply: format!("Echo: {line}"),
    }
}

/// Sub-parser for the text after `open `.
fn parse_open(command: &str) -> Intent {
    if let Some((app_name, message_part)) = split_once_ci(command, " and send a message to ") {
        parse_message_part(app_name, message_part)
    } else if let Some((app_name, message_part)) = split_once_ci(command, " and send a message ") {
        parse_message_part(app_name, message_part)
    } else if let Some((app_name, action)) = split_once_ci(command, " and ") {
        Intent::OpenAndAction {
            app_name: app_name.trim().to_string(),
            action: action.trim().to_string(),
        }
    } else {
        Intent::OpenApp {
            app_name: extract_app_name(command),
        }
    }
}

/// Split `message_part` into recipient and body. Both body separators absent
/// is a parse failure, reported through Echo rather than an error.
fn parse_message_part(app_name: &str, message_part: &str) -> Intent {
    let message_part = message_part.trim();
    let split = split_once_ci(message_part, " that says ")
        .or_else(|| split_once_ci(message_part, " saying "));

    match split {
        Some((recipient, message_text)) => Intent::OpenAndMessage {
            app_name: app_name.trim().to_string(),
            recipient: strip_quotes(recipient.trim()).to_string(),
            message_text: strip_quotes(message_text.trim()).to_string(),
        },
        None => Intent::Echo {
            reply: format!("❌ Could not parse message: {message_part}"),
        },
    }
}

/// Application tokens recognized inside an `open` command, in match priority
/// order. First containment match wins; this is not longest-match.
const KNOWN_APPS: &[&str] = &[
    "messages", "message", "mail", "email", "safari", "chrome", "firefox",
    "terminal", "finder", "notes", "calendar", "slack", "discord", "zoom",
    "notion", "figma", "vscode", "code", "xcode", "photos", "preview",
    "spotify", "music", "itunes", "textedit", "pages", "numbers", "keynote",
];

/// Pull an application name out of free text.
fn extract_app_name(command: &str) -> String {
    let lower = command.to_lowercase();
    for token in KNOWN_APPS {
        if lower.contains(token) {
            return match *token {
                "vscode" | "xcode" => title_case(token),
                _ => capitalize(token),
            };
        }
    }
    match command.split_whitespace().next() {
        Some(word) => capitalize(word),
        None => command.trim().to_string(),
    }
}

fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Split on the first case-insensitive occurrence of `separator`.
fn split_once_ci<'a>(text: &'a str, separator: &str) -> Option<(&'a str, &'a str)> {
    let width = separator.len();
    if width == 0 || width > text.len() {
        return None;
    }
    for index in 0..=text.len() - width {
        if text.is_char_boundary(index)
            && text.is_char_boundary(index + width)
            && text[index..index + width].eq_ignore_ascii_case(separator)
        {
            return Some((&text[..index], &text[index + width..]));
        }
    }
    None
}

fn strip_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '\'' || c == '"')
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_uses_the_template() {
        assert_eq!(
            parse("hello there"),
            Intent::Echo {
                reply: "Hello! I received your message: hello there".to_string()
            }
        );
    }

    #[test]
    fn simple_prefixes_classify() {
        assert_eq!(parse("time please"), Intent::TimeQuery);
        assert_eq!(parse("STATUS"), Intent::StatusQuery);
        assert_eq!(parse("task"), Intent::TaskQuery);
        assert_eq!(parse("list apps"), Intent::ListApps);
        assert_eq!(parse("running apps now"), Intent::ListRunningApps);
    }

    #[test]
    fn clear_task_wins_over_task() {
        assert_eq!(parse("clear task now"), Intent::TaskClear);
        assert_eq!(parse("task now"), Intent::TaskQuery);
    }

    #[test]
    fn unmatched_input_echoes_verbatim() {
        assert_eq!(
            parse("what is the meaning of life"),
            Intent::Echo {
                reply: "Echo: what is the meaning of life".to_string()
            }
        );
        assert_eq!(parse(""), Intent::Echo { reply: "Echo: ".to_string() });
    }

    #[test]
    fn open_and_message_round_trips() {
        assert_eq!(
            parse("open messages and send a message to Avery that says hi there"),
            Intent::OpenAndMessage {
                app_name: "messages".to_string(),
                recipient: "Avery".to_string(),
                message_text: "hi there".to_string(),
            }
        );
    }

    #[test]
    fn message_quotes_are_stripped() {
        assert_eq!(
            parse("open messages and send a message to Avery that says 'it works!'"),
            Intent::OpenAndMessage {
                app_name: "messages".to_string(),
                recipient: "Avery".to_string(),
                message_text: "it works!".to_string(),
            }
        );
    }

    #[test]
    fn saying_is_an_accepted_body_separator() {
        assert_eq!(
            parse("open messages and send a message to Avery saying it works"),
            Intent::OpenAndMessage {
                app_name: "messages".to_string(),
                recipient: "Avery".to_string(),
                message_text: "it works".to_string(),
            }
        );
    }

    #[test]
    fn recipientless_message_phrase_still_splits() {
        assert_eq!(
            parse("open messages and send a message Avery saying hi"),
            Intent::OpenAndMessage {
                app_name: "messages".to_string(),
                recipient: "Avery".to_string(),
                message_text: "hi".to_string(),
            }
        );
    }

    #[test]
    fn missing_body_separator_is_a_parse_failure_echo() {
        assert_eq!(
            parse("open messages and send a message to Avery"),
            Intent::Echo {
                reply: "❌ Could not parse message: Avery".to_string()
            }
        );
    }

    #[test]
    fn open_and_action_splits_once() {
        assert_eq!(
            parse("open safari and go to the news"),
            Intent::OpenAndAction {
                app_name: "safari".to_string(),
                action: "go to the news".to_string(),
            }
        );
    }

    #[test]
    fn known_tokens_resolve_to_canonical_names() {
        assert_eq!(
            parse("open the messages app"),
            Intent::OpenApp { app_name: "Messages".to_string() }
        );
        assert_eq!(
            parse("open vscode"),
            Intent::OpenApp { app_name: "Vscode".to_string() }
        );
    }

    #[test]
    fn unknown_apps_fall_back_to_the_first_word() {
        assert_eq!(
            parse("open blender please"),
            Intent::OpenApp { app_name: "Blender".to_string() }
        );
    }

    #[test]
    fn empty_open_remainder_is_passed_through() {
        assert_eq!(parse("open "), Intent::OpenApp { app_name: String::new() });
    }

    #[test]
    fn close_extracts_the_trimmed_remainder() {
        assert_eq!(
            parse("close  Safari "),
            Intent::CloseApp { app_name: "Safari".to_string() }
        );
    }

    #[test]
    fn parsing_is_total_over_arbitrary_input() {
        for line in ["open", "   ", "ope n safari", "\u{1F600} unicode", "close", "任务"] {
            // Must classify without panicking; anything unmatched echoes.
            let _ = parse(line);
        }
    }
}
