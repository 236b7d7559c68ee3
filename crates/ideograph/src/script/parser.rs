//! Chumsky parser for single editor commands
//!
//! Each statement is one command; splitting the script into statements
//! (lines, `;`, comments) happens in the module root.

use chumsky::prelude::*;

use super::Command;
use crate::core::{NodeId, Point, Theme};

/// Parse one already-trimmed statement into a command
pub(super) fn parse_statement(input: &str) -> Result<Command, String> {
    let parser = command_parser().then_ignore(end());

    parser
        .parse(input)
        .into_result()
        .map_err(|errors| format!("parse errors: {:?}", errors))
}

fn spaces<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

fn integer<'src>() -> impl Parser<'src, &'src str, u32> + Clone {
    one_of('0'..='9')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .map(|s| s.parse::<u32>().unwrap_or(0))
}

fn node_id<'src>() -> impl Parser<'src, &'src str, NodeId> + Clone {
    integer().map(NodeId).labelled("node id")
}

fn number<'src>() -> impl Parser<'src, &'src str, f64> + Clone {
    just('-')
        .or_not()
        .then(one_of('0'..='9').repeated().at_least(1).collect::<String>())
        .then(
            just('.')
                .ignore_then(one_of('0'..='9').repeated().at_least(1).collect::<String>())
                .or_not(),
        )
        .map(|((sign, whole), frac)| {
            let mut literal = String::new();
            if sign.is_some() {
                literal.push('-');
            }
            literal.push_str(&whole);
            if let Some(frac) = frac {
                literal.push('.');
                literal.push_str(&frac);
            }
            literal.parse::<f64>().unwrap_or(0.0)
        })
        .labelled("number")
}

fn quoted<'src>() -> impl Parser<'src, &'src str, String> + Clone {
    just('"')
        .ignore_then(none_of('"').repeated().collect::<String>())
        .then_ignore(just('"'))
        .labelled("quoted label")
}

fn point<'src>() -> impl Parser<'src, &'src str, Point> + Clone {
    number()
        .then_ignore(spaces())
        .then(number())
        .map(|(x, y)| Point::new(x, y))
}

fn command_parser<'src>() -> impl Parser<'src, &'src str, Command> + Clone {
    let add = just("add")
        .then(spaces())
        .ignore_then(node_id())
        .then_ignore(spaces())
        .then(quoted())
        .map(|(parent, text)| Command::Add { parent, text });

    let rename = just("rename")
        .then(spaces())
        .ignore_then(node_id())
        .then_ignore(spaces())
        .then(quoted())
        .map(|(id, text)| Command::Rename { id, text });

    let remove = just("remove")
        .then(spaces())
        .ignore_then(node_id())
        .map(|id| Command::Remove { id });

    let select = just("select")
        .then(spaces())
        .ignore_then(node_id())
        .map(|id| Command::Select { id });

    let root = just("root").to(Command::ReturnToRoot);

    let zoom = just("zoom").then(spaces()).ignore_then(
        just("in")
            .to(Command::ZoomIn)
            .or(just("out").to(Command::ZoomOut)),
    );

    let drag = just("drag").then(spaces()).ignore_then(
        just("begin")
            .then(spaces())
            .ignore_then(point())
            .map(|at| Command::DragBegin { at })
            .or(just("to")
                .then(spaces())
                .ignore_then(point())
                .map(|at| Command::DragTo { at }))
            .or(just("end").to(Command::DragEnd)),
    );

    let theme = just("theme").then(spaces()).ignore_then(
        just("light")
            .to(Command::SetTheme {
                theme: Theme::Light,
            })
            .or(just("dark").to(Command::SetTheme { theme: Theme::Dark })),
    );

    add.or(rename)
        .or(remove)
        .or(select)
        .or(root)
        .or(zoom)
        .or(drag)
        .or(theme)
        .labelled("command")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let command = parse_statement("add 1 \"Branch A\"").unwrap();
        assert_eq!(
            command,
            Command::Add {
                parent: NodeId(1),
                text: "Branch A".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rename_keeps_inner_spaces() {
        let command = parse_statement("rename 2 \"  padded  \"").unwrap();
        assert_eq!(
            command,
            Command::Rename {
                id: NodeId(2),
                text: "  padded  ".to_string()
            }
        );
    }

    #[test]
    fn test_parse_remove_select_root() {
        assert_eq!(
            parse_statement("remove 3").unwrap(),
            Command::Remove { id: NodeId(3) }
        );
        assert_eq!(
            parse_statement("select 2").unwrap(),
            Command::Select { id: NodeId(2) }
        );
        assert_eq!(parse_statement("root").unwrap(), Command::ReturnToRoot);
    }

    #[test]
    fn test_parse_zoom() {
        assert_eq!(parse_statement("zoom in").unwrap(), Command::ZoomIn);
        assert_eq!(parse_statement("zoom out").unwrap(), Command::ZoomOut);
        assert!(parse_statement("zoom sideways").is_err());
    }

    #[test]
    fn test_parse_drag() {
        assert_eq!(
            parse_statement("drag begin 10 20").unwrap(),
            Command::DragBegin {
                at: Point::new(10.0, 20.0)
            }
        );
        assert_eq!(
            parse_statement("drag to -4.5 0.25").unwrap(),
            Command::DragTo {
                at: Point::new(-4.5, 0.25)
            }
        );
        assert_eq!(parse_statement("drag end").unwrap(), Command::DragEnd);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(
            parse_statement("theme dark").unwrap(),
            Command::SetTheme { theme: Theme::Dark }
        );
        assert_eq!(
            parse_statement("theme light").unwrap(),
            Command::SetTheme {
                theme: Theme::Light
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_statement("frobnicate 1").is_err());
        assert!(parse_statement("add \"no parent\"").is_err());
        assert!(parse_statement("add 1 unquoted").is_err());
        assert!(parse_statement("remove").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert!(parse_statement("root extra").is_err());
    }
}
