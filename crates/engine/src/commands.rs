//! Line commands for the interactive front end.

use std::str::FromStr;

use clisland_domain::{ChoiceId, DomainError, EventId, InteractionType};

pub const HELP: &str = "\
commands:
  start <name>                  start a new season
  advance                       move to the next day
  choose <choice-id>            pick a choice on the current event
  trigger <event-id>            make an event current
  interact <character> <type>   conversation | date | challenge | gift | argument
  events                        list events available right now
  characters                    list available characters
  relationship <character>      show the relationship with a character
  status                        show the current game state
  save | load                   persist or reload the game
  end                           end the season now
  delete                        throw the current game away
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start(String),
    Advance,
    Choose(ChoiceId),
    Trigger(EventId),
    Interact {
        character: String,
        interaction_type: InteractionType,
    },
    Events,
    Characters,
    Relationship(String),
    Status,
    Save,
    Load,
    End,
    Delete,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();
        let joined = rest.join(" ");

        let command = match verb.as_str() {
            "start" if !joined.is_empty() => Self::Start(joined),
            "start" => return Err(CommandError::Usage("start <name>")),
            "advance" | "next" => Self::Advance,
            "choose" | "choice" => match rest.as_slice() {
                [id] => Self::Choose(ChoiceId::new(*id)),
                _ => return Err(CommandError::Usage("choose <choice-id>")),
            },
            "trigger" => match rest.as_slice() {
                [id] => Self::Trigger(id.parse()?),
                _ => return Err(CommandError::Usage("trigger <event-id>")),
            },
            "interact" => match rest.split_last() {
                Some((kind, name)) if !name.is_empty() => Self::Interact {
                    character: name.join(" "),
                    interaction_type: kind.parse()?,
                },
                _ => return Err(CommandError::Usage("interact <character> <type>")),
            },
            "events" => Self::Events,
            "characters" => Self::Characters,
            "relationship" if !joined.is_empty() => Self::Relationship(joined),
            "relationship" => return Err(CommandError::Usage("relationship <character>")),
            "status" => Self::Status,
            "save" => Self::Save,
            "load" => Self::Load,
            "end" => Self::End,
            "delete" => Self::Delete,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
