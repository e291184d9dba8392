//! Variable scope management.

use deduce_core::SyntaxId;
use std::collections::HashMap;

/// A variable binding in scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBinding {
    /// The name of the variable.
    pub name: String,
    /// The syntax category the variable was first used at.
    pub syntax: SyntaxId,
}

impl VarBinding {
    pub fn new(name: impl Into<String>, syntax: SyntaxId) -> Self {
        Self {
            name: name.into(),
            syntax,
        }
    }
}

/// A scope for variable bindings.
/// Each rule is checked in its own frame.
#[derive(Debug)]
pub struct Scope {
    /// Stack of scope frames. Each frame is a mapping from name to binding.
    frames: Vec<HashMap<String, VarBinding>>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Self {
            frames: vec![HashMap::new()],
        }
    }

    /// Push a new scope frame.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Pop the current scope frame.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Define a variable in the current scope.
    /// Returns `false` if the variable is already defined in the current frame.
    pub fn define(&mut self, binding: VarBinding) -> bool {
        let name = binding.name.clone();
        if let Some(frame) = self.frames.last_mut() {
            if frame.contains_key(&name) {
                return false;
            }
            frame.insert(name, binding);
            true
        } else {
            false
        }
    }

    /// Look up a variable by name, searching from innermost to outermost scope.
    pub fn lookup(&self, name: &str) -> Option<&VarBinding> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Check if a variable is defined in any scope.
    pub fn is_defined(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Get the syntax of a variable if defined.
    pub fn syntax_of(&self, name: &str) -> Option<SyntaxId> {
        self.lookup(name).map(|b| b.syntax)
    }

    /// Get the current depth (number of nested scopes).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
