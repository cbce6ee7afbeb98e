use board_core::ElementId;

/// One line typed at the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    List,
    Click(ElementId),
    Reload,
    Dismiss,
    Help,
    Quit,
}

pub(crate) const HELP: &str =
    "commands: list | click <n> | reload | dismiss | help | quit";

pub(crate) fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::List);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "click" | "c" => {
            let element = words
                .next()
                .ok_or_else(|| "click needs an element number".to_string())?;
            let element = element
                .parse::<ElementId>()
                .map_err(|_| format!("not an element number: {element}"))?;
            Command::Click(element)
        }
        "reload" | "r" => Command::Reload,
        "dismiss" => Command::Dismiss,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command: {other}")),
    };

    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument: {extra}"));
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command("click 3"), Ok(Command::Click(3)));
        assert_eq!(parse_command("  C 0 "), Ok(Command::Click(0)));
        assert_eq!(parse_command("reload"), Ok(Command::Reload));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command(""), Ok(Command::List));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("click").is_err());
        assert!(parse_command("click x").is_err());
        assert!(parse_command("click 1 2").is_err());
        assert!(parse_command("bookmark 42").is_err());
    }
}
