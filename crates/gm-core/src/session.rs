//! Line-oriented command channel over a [`GameMaster`].
//!
//! `GmSession` turns one line of user input into one manager call (or one
//! turn) and returns the text to show. Values given on the command line are
//! parsed as JSON when possible and stored as strings otherwise, so
//! `state set day 3` stores a number and `state set weather rain` a string.

use serde_json::Value;

use crate::character::CharacterRecord;
use crate::config::GmConfig;
use crate::error::{GmError, GmResult};
use crate::gm::GameMaster;
use crate::world::log::render;

/// An interactive game master session.
#[derive(Debug)]
pub struct GmSession {
    gm: GameMaster,
    finished: bool,
}

impl GmSession {
    /// Start a session with the placeholder turn resolver.
    pub fn new(config: GmConfig) -> Self {
        Self::from_game_master(GameMaster::new(config))
    }

    /// Wrap an existing game master (e.g. one with a custom resolver).
    pub fn from_game_master(gm: GameMaster) -> Self {
        Self {
            gm,
            finished: false,
        }
    }

    /// The underlying game master.
    pub fn game_master(&self) -> &GameMaster {
        &self.gm
    }

    /// The underlying game master, mutably.
    pub fn game_master_mut(&mut self) -> &mut GameMaster {
        &mut self.gm
    }

    /// Whether a `quit` command has ended the session.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> GmResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = split_word(trimmed);
        match cmd.to_lowercase().as_str() {
            "act" => self.do_act(rest),
            "character" | "char" => self.do_character(rest),
            "party" => Ok(self.do_party()),
            "give" => self.do_give(rest),
            "take" => self.do_take(rest),
            "transfer" => self.do_transfer(rest),
            "inventory" | "inv" => self.do_inventory(rest),
            "xp" => self.do_xp(rest),
            "levelup" => self.do_level_up(rest),
            "progress" => self.do_progress(rest),
            "lore" => self.do_lore(rest),
            "state" => self.do_state(rest),
            "event" => self.do_event(rest),
            "events" => self.do_events(rest),
            "roll" => self.do_roll(rest),
            "check" => self.do_check(rest),
            "export" => self.do_export(rest),
            "status" => Ok(self.do_status()),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => {
                self.finished = true;
                Ok("Goodbye!".to_string())
            }
            other => Err(GmError::UnknownCommand(other.to_string())),
        }
    }

    fn do_act(&mut self, rest: &str) -> GmResult<String> {
        let (id, action) = split_word(rest);
        if id.is_empty() || action.is_empty() {
            return Err(usage("act <character> <action>"));
        }
        self.gm.perform_action(action, id)
    }

    fn do_character(&mut self, rest: &str) -> GmResult<String> {
        let (sub, args) = split_word(rest);
        match sub.to_lowercase().as_str() {
            "add" => {
                let (id, name) = split_word(args);
                if id.is_empty() || name.is_empty() {
                    return Err(usage("character add <id> <name>"));
                }
                self.gm
                    .characters_mut()
                    .add_character(id, CharacterRecord::new().with("name", name));
                Ok(format!("Character added: {id} ({name})"))
            }
            "set" => {
                let (id, rest) = split_word(args);
                let (attribute, value) = split_word(rest);
                if id.is_empty() || attribute.is_empty() || value.is_empty() {
                    return Err(usage("character set <id> <attribute> <value>"));
                }
                let update = CharacterRecord::new().with(attribute, parse_value(value));
                if self.gm.characters_mut().update_character(id, update) {
                    Ok(format!("{id}.{attribute} = {value}"))
                } else {
                    Ok(format!("Character not found: {id}"))
                }
            }
            "show" if !args.is_empty() => {
                Ok(self.gm.characters().get_character(args).to_json().to_string())
            }
            _ => Err(usage("character add|set|show ...")),
        }
    }

    fn do_party(&self) -> String {
        let characters = self.gm.characters();
        if characters.is_empty() {
            return "The party is empty.".to_string();
        }
        let mut out = format!("Party ({}):\n", characters.len());
        for (i, (id, record)) in characters.iter().enumerate() {
            out.push_str(&format!("  {}. {id}", i + 1));
            if let Some(name) = record.name() {
                out.push_str(&format!(" ({name})"));
            }
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    fn do_give(&mut self, rest: &str) -> GmResult<String> {
        let (id, item) = split_word(rest);
        if id.is_empty() || item.is_empty() {
            return Err(usage("give <character> <item>"));
        }
        self.gm.inventory_mut().add_item(id, item);
        Ok(format!("{id} receives {item}"))
    }

    fn do_take(&mut self, rest: &str) -> GmResult<String> {
        let (id, item) = split_word(rest);
        if id.is_empty() || item.is_empty() {
            return Err(usage("take <character> <item>"));
        }
        if self.gm.inventory_mut().remove_item(id, item) {
            Ok(format!("{id} loses {item}"))
        } else {
            Ok(format!("{id} has no {item}"))
        }
    }

    fn do_transfer(&mut self, rest: &str) -> GmResult<String> {
        let (from, rest) = split_word(rest);
        let (to, item) = split_word(rest);
        if from.is_empty() || to.is_empty() || item.is_empty() {
            return Err(usage("transfer <from> <to> <item>"));
        }
        if self.gm.inventory_mut().transfer_item(from, to, item) {
            Ok(format!("{from} hands {item} to {to}"))
        } else {
            Ok(format!("{from} has no {item}"))
        }
    }

    fn do_inventory(&self, id: &str) -> GmResult<String> {
        if id.is_empty() {
            return Err(usage("inventory <character>"));
        }
        let items = self.gm.inventory().list_inventory(id);
        if items.is_empty() {
            Ok(format!("{id} carries nothing."))
        } else {
            Ok(format!("{id} carries: {}", items.join(", ")))
        }
    }

    fn do_xp(&mut self, rest: &str) -> GmResult<String> {
        let (id, amount) = split_word(rest);
        let amount: i64 = amount
            .parse()
            .map_err(|_| usage("xp <character> <amount>"))?;
        if id.is_empty() {
            return Err(usage("xp <character> <amount>"));
        }
        self.gm.progression_mut().add_xp(id, amount);
        Ok(format!("{id}: {}", self.gm.progression().get_progression(id)))
    }

    fn do_level_up(&mut self, id: &str) -> GmResult<String> {
        if id.is_empty() {
            return Err(usage("levelup <character>"));
        }
        self.gm.progression_mut().level_up(id);
        Ok(format!("{id}: {}", self.gm.progression().get_progression(id)))
    }

    fn do_progress(&self, id: &str) -> GmResult<String> {
        if id.is_empty() {
            return Err(usage("progress <character>"));
        }
        Ok(format!("{id}: {}", self.gm.progression().get_progression(id)))
    }

    fn do_lore(&mut self, rest: &str) -> GmResult<String> {
        let (sub, args) = split_word(rest);
        match sub.to_lowercase().as_str() {
            "add" => {
                let Some((title, content)) = args.split_once('=') else {
                    return Err(usage("lore add <title> = <content>"));
                };
                let (title, content) = (title.trim(), content.trim());
                if title.is_empty() {
                    return Err(usage("lore add <title> = <content>"));
                }
                self.gm.lore_mut().add_lore(title, content);
                Ok(format!("Lore recorded: {title}"))
            }
            "show" if !args.is_empty() => {
                let lore = self.gm.lore();
                if lore.contains(args) {
                    Ok(format!("{args}\n{}", lore.get_lore(args)))
                } else {
                    Ok(format!("No lore titled '{args}'."))
                }
            }
            "search" if !args.is_empty() => {
                let hits = self.gm.lore().query_lore(args);
                if hits.is_empty() {
                    return Ok(format!("No lore mentions '{args}'."));
                }
                let mut out = format!("Lore matching '{args}' ({}):\n", hits.len());
                for (title, content) in hits {
                    out.push_str(&format!("  {title}: {content}\n"));
                }
                Ok(out.trim_end().to_string())
            }
            _ => Err(usage("lore add|show|search ...")),
        }
    }

    fn do_state(&mut self, rest: &str) -> GmResult<String> {
        let (sub, args) = split_word(rest);
        match sub.to_lowercase().as_str() {
            "set" => {
                let (key, value) = split_word(args);
                if key.is_empty() || value.is_empty() {
                    return Err(usage("state set <key> <value>"));
                }
                self.gm.world_mut().update_state(key, parse_value(value));
                Ok(format!("{key} = {value}"))
            }
            "get" if !args.is_empty() => match self.gm.world().get_state(args) {
                Some(value) => Ok(format!("{args} = {}", render(value))),
                None => Ok(format!("{args} is not set.")),
            },
            _ => Err(usage("state set|get ...")),
        }
    }

    fn do_event(&mut self, text: &str) -> GmResult<String> {
        if text.is_empty() {
            return Err(usage("event <text>"));
        }
        self.gm.world_mut().log_event(text);
        Ok("Event logged.".to_string())
    }

    fn do_events(&self, rest: &str) -> GmResult<String> {
        let count = if rest.is_empty() {
            self.gm.config().recent_events
        } else {
            rest.parse().map_err(|_| usage("events [count]"))?
        };
        let log = self.gm.world().get_event_log();
        if log.is_empty() {
            return Ok("No events yet.".to_string());
        }
        let recent = log.recent(count);
        let mut out = format!(
            "Events ({} total, showing last {}):\n",
            log.len(),
            recent.len()
        );
        for entry in recent {
            out.push_str(&format!("  {}\n", entry.event));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_roll(&mut self, rest: &str) -> GmResult<String> {
        let sides = if rest.is_empty() {
            self.gm.config().default_sides
        } else {
            let digits = rest.strip_prefix(['d', 'D']).unwrap_or(rest);
            digits.parse().map_err(|_| usage("roll [sides]"))?
        };
        let roll = self.gm.dice_mut().roll_dice(sides)?;
        Ok(format!("Rolled {roll} on a d{sides}"))
    }

    fn do_check(&mut self, rest: &str) -> GmResult<String> {
        let usage_text = "check <skill> [difficulty] [sides]";
        let mut parts = rest.split_whitespace();
        let skill: i32 = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| usage(usage_text))?;
        let difficulty = match parts.next() {
            Some(s) => s.parse().map_err(|_| usage(usage_text))?,
            None => self.gm.config().default_difficulty,
        };
        let sides = match parts.next() {
            Some(s) => s.parse().map_err(|_| usage(usage_text))?,
            None => self.gm.config().default_sides,
        };
        let dice = self.gm.dice_mut();
        let result = dice.skill_check(skill, difficulty, sides)?;
        Ok(dice.show_roll(&result))
    }

    fn do_export(&self, format: &str) -> GmResult<String> {
        let log = self.gm.world().get_event_log();
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(log.export_markdown()),
            "text" | "txt" => Ok(log.export_text()),
            other => Err(GmError::InvalidCommand(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> String {
        let gm = &self.gm;
        format!(
            "Session: {}\nCharacters: {}\nInventories: {}\nLore entries: {}\nEvents: {}",
            gm.session_id(),
            gm.characters().len(),
            gm.inventory().len(),
            gm.lore().len(),
            gm.world().get_event_log().len(),
        )
    }
}

const HELP: &str = "\
Game Master Commands:
  act <character> <action>            Resolve a turn
  character add <id> <name>           Add a character
  character set <id> <attr> <value>   Update an existing character
  character show <id>                 Show a character record
  party                               List characters
  give <character> <item>             Add an item
  take <character> <item>             Remove an item
  transfer <from> <to> <item>         Move an item between characters
  inventory <character>               List items
  xp <character> <amount>             Award (or remove) XP
  levelup <character>                 Raise level by one
  progress <character>                Show XP and level
  lore add <title> = <content>        Record lore
  lore show <title>                   Show a lore entry
  lore search <keyword>               Search lore
  state set <key> <value>             Set world state
  state get <key>                     Show world state
  event <text>                        Log a world event
  events [count]                      Show recent events
  roll [sides]                        Roll a die (default d20)
  check <skill> [difficulty] [sides]  Skill check
  export [markdown|text]              Export the event log
  status                              Show session status
  help                                Show this help
  quit                                Exit";

/// Split off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (input, ""),
    }
}

/// JSON if it parses, a JSON string otherwise.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn usage(text: &str) -> GmError {
    GmError::InvalidCommand(format!("usage: {text}"))
}
