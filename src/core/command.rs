//! Command vocabulary exposed to the host.
//!
//! Commands are semantic: the host binds them to keys, palette entries or the
//! status affordance, and hands them back through `MonoScope::execute`.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Project-scoped quick open.
    Open,
    /// Flip between project and workspace scope.
    ToggleScope,

    /// Anything the host routes to us that we do not own.
    Custom(String),
}

impl Command {
    pub const ALL: &'static [Command] = &[Command::Open, Command::ToggleScope];

    pub fn name(&self) -> &str {
        match self {
            Command::Open => "monoScope.open",
            Command::ToggleScope => "monoScope.toggleScope",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "monoScope.open" => Command::Open,
            "monoScope.toggleScope" => Command::ToggleScope,
            _ => Command::Custom(name.to_string()),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Command::Open => "MonoScope: Quick Open (Project)",
            Command::ToggleScope => "MonoScope: Toggle Quick Open Scope",
            Command::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
