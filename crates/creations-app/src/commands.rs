//! Shell commands and their parser.
//!
//! Commands are one line each: a verb followed by arguments. Forms with
//! several free-text fields separate them with `|`.

use creations_core::auth::{AccountForm, LoginForm};
use creations_core::feedback::{FeedbackForm, FeedbackKind};
use creations_core::{ElementId, SuggestionQuery};
use std::num::NonZeroU32;
use thiserror::Error;

/// A parse failure, shown to the user with the command's usage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command `{0}`. Type `help` for a list.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Not a number: `{0}`")]
    InvalidNumber(String),
}

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Products,
    /// Open the design tool for a product.
    Design(String),
    Text(String),
    Image(String),
    /// Replace the selected text's content.
    EditText(String),
    /// Replace the selected image's source.
    ImageSrc(String),
    Select(ElementId),
    Move { x: i32, y: i32 },
    Font(u32),
    ColorText(String),
    Resize { width: NonZeroU32, height: NonZeroU32 },
    Remove,
    Layers,
    Save,
    Finalize,
    Clear,
    Order,
    Confirm,
    Suggest(SuggestionQuery),
    Prefs,
    FavColor(String),
    FavStyle(String),
    PrefsSave,
    PrefsClear,
    Blog,
    Post(String),
    SignUp(AccountForm),
    LogIn(LoginForm),
    Feedback(FeedbackForm),
    Quit,
}

/// Usage line and description for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }

    /// Every command, in the order `help` lists them.
    pub fn all() -> &'static [CommandHelp] {
        COMMANDS
    }

    fn usage_of(verb: &str) -> &'static str {
        COMMANDS
            .iter()
            .find(|c| c.usage.split_whitespace().next() == Some(verb))
            .map_or("help", |c| c.usage)
    }
}

const COMMANDS: &[CommandHelp] = &[
    CommandHelp::new("help", "Show this list"),
    CommandHelp::new("products", "List products you can customize"),
    CommandHelp::new("design <product>", "Open the design tool for a product"),
    CommandHelp::new("text <content>", "Add a text element"),
    CommandHelp::new("image <url>", "Add an image element"),
    CommandHelp::new("edit-text <content>", "Change the selected text"),
    CommandHelp::new("image-src <url>", "Change the selected image's URL"),
    CommandHelp::new("select <id>", "Select an element"),
    CommandHelp::new("move <x> <y>", "Move the selected element"),
    CommandHelp::new("font <size>", "Set the selected text's font size"),
    CommandHelp::new("color-text <#hex>", "Set the selected text's color"),
    CommandHelp::new("resize <width> <height>", "Resize the selected image"),
    CommandHelp::new("remove", "Remove the selected element"),
    CommandHelp::new("layers", "List the design's elements"),
    CommandHelp::new("save", "Save the design"),
    CommandHelp::new("finalize", "Save the design and proceed to order"),
    CommandHelp::new("clear", "Remove every element from the design"),
    CommandHelp::new("order", "Review the order for the finalized design"),
    CommandHelp::new("confirm", "Place the order"),
    CommandHelp::new(
        "suggest <keywords> [| product] [| style]",
        "Get design ideas",
    ),
    CommandHelp::new("prefs", "Show your preferences"),
    CommandHelp::new("fav-color <color>", "Pick or unpick a favorite color"),
    CommandHelp::new("fav-style <style>", "Pick or unpick a preferred style"),
    CommandHelp::new("prefs-save", "Save your color and style picks"),
    CommandHelp::new("prefs-clear", "Clear all preferences"),
    CommandHelp::new("blog", "List blog posts"),
    CommandHelp::new("post <slug>", "Read a blog post"),
    CommandHelp::new(
        "signup <name> | <email> | <password> | <confirm> | <date of birth>",
        "Create an account",
    ),
    CommandHelp::new("login <email> <password>", "Log in"),
    CommandHelp::new(
        "feedback <kind> | <rating 0-5> | <comments> [| email]",
        "Send feedback (kinds: general, design_process, product_quality, website_ux)",
    ),
    CommandHelp::new("quit", "Save and exit"),
];

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let usage = || ParseError::Usage(CommandHelp::usage_of(verb));

        let command = match verb {
            "help" | "?" => Command::Help,
            "products" => Command::Products,
            "design" => Command::Design(required(rest).ok_or_else(usage)?),
            "text" => Command::Text(required(rest).ok_or_else(usage)?),
            "image" => Command::Image(required(rest).ok_or_else(usage)?),
            "edit-text" => Command::EditText(required(rest).ok_or_else(usage)?),
            "image-src" => Command::ImageSrc(required(rest).ok_or_else(usage)?),
            "select" => Command::Select(ElementId::from(required(rest).ok_or_else(usage)?)),
            "move" => {
                let [x, y] = two_args(rest).ok_or_else(usage)?;
                Command::Move {
                    x: number(x)?,
                    y: number(y)?,
                }
            }
            "font" => Command::Font(number(&required(rest).ok_or_else(usage)?)?),
            "color-text" => Command::ColorText(required(rest).ok_or_else(usage)?),
            "resize" => {
                let [width, height] = two_args(rest).ok_or_else(usage)?;
                Command::Resize {
                    width: number(width)?,
                    height: number(height)?,
                }
            }
            "remove" => Command::Remove,
            "layers" => Command::Layers,
            "save" => Command::Save,
            "finalize" => Command::Finalize,
            "clear" => Command::Clear,
            "order" => Command::Order,
            "confirm" => Command::Confirm,
            "suggest" => Command::Suggest(suggestion_query(rest)),
            "prefs" => Command::Prefs,
            "fav-color" => Command::FavColor(required(rest).ok_or_else(usage)?),
            "fav-style" => Command::FavStyle(required(rest).ok_or_else(usage)?),
            "prefs-save" => Command::PrefsSave,
            "prefs-clear" => Command::PrefsClear,
            "blog" => Command::Blog,
            "post" => Command::Post(required(rest).ok_or_else(usage)?),
            "signup" => {
                let fields = fields(rest);
                let [name, email, password, confirm_password, date_of_birth] =
                    <[String; 5]>::try_from(fields).map_err(|_| usage())?;
                Command::SignUp(AccountForm {
                    name,
                    email,
                    password,
                    confirm_password,
                    date_of_birth,
                })
            }
            "login" => {
                let [email, password] = two_args(rest).ok_or_else(usage)?;
                Command::LogIn(LoginForm {
                    email: email.to_string(),
                    password: password.to_string(),
                })
            }
            "feedback" => Command::Feedback(feedback_form(rest).ok_or_else(usage)??),
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required(rest: &str) -> Option<String> {
    (!rest.is_empty()).then(|| rest.to_string())
}

fn two_args(rest: &str) -> Option<[&str; 2]> {
    let mut args = rest.split_whitespace();
    match (args.next(), args.next(), args.next()) {
        (Some(a), Some(b), None) => Some([a, b]),
        _ => None,
    }
}

fn number<T: std::str::FromStr>(arg: &str) -> Result<T, ParseError> {
    arg.parse()
        .map_err(|_| ParseError::InvalidNumber(arg.to_string()))
}

/// Split `|`-separated fields, trimming each.
fn fields(rest: &str) -> Vec<String> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split('|').map(|f| f.trim().to_string()).collect()
}

/// `keywords [| product] [| style]`; blank or `any` means no choice.
fn suggestion_query(rest: &str) -> SuggestionQuery {
    let mut fields = fields(rest).into_iter();
    let choice = |field: Option<String>| {
        field.filter(|f| !f.is_empty() && !f.eq_ignore_ascii_case("any"))
    };

    SuggestionQuery {
        keywords: fields.next().unwrap_or_default(),
        product: choice(fields.next()),
        style: choice(fields.next()),
    }
}

fn feedback_form(rest: &str) -> Option<Result<FeedbackForm, ParseError>> {
    let fields = fields(rest);
    if !(3..=4).contains(&fields.len()) {
        return None;
    }
    let kind = FeedbackKind::from_name(&fields[0])?;
    let rating = match number(&fields[1]) {
        Ok(rating) => rating,
        Err(e) => return Some(Err(e)),
    };

    Some(Ok(FeedbackForm {
        kind,
        rating,
        comments: fields[2].clone(),
        email: fields.get(3).cloned().filter(|e| !e.is_empty()),
    }))
}
