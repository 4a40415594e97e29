// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    order: Vec<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        if !self.commands.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.commands.insert(name, cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Verb names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    /// Usage lines in registration order, for /help.
    pub fn usages(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .map(|cmd| cmd.usage().to_string())
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cd::CdCommand;
use super::del::DelCommand;
use super::get::GetCommand;
use super::help::HelpCommand;
use super::history::HistoryCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::rename::RenameCommand;
use super::start::StartCommand;
use super::touch::TouchCommand;

/// Registry with the full verb set wired up.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Box::new(StartCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(GetCommand));
    registry.register(Box::new(DelCommand));
    registry.register(Box::new(RenameCommand));
    registry.register(Box::new(HistoryCommand));

    // /help renders the usage lines of everything registered before it,
    // plus its own.
    let mut usages = registry.usages();
    usages.push(HelpCommand::USAGE.to_string());
    registry.register(Box::new(HelpCommand::new(usages)));
    registry
}
