use std::collections::HashMap;

use crate::ast::statements::LetStatement;

/// Flat name-to-binding table for a single parse session.
///
/// There is no shadowing and no block scoping: defining a name that is
/// already present replaces the earlier binding.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    objects: HashMap<String, LetStatement>,
}

impl Scope {
    pub fn new() -> Scope {
        Scope {
            objects: HashMap::new(),
        }
    }

    /// Records `stmt` as the binding for `name`, returning the binding
    /// it displaced, if any.
    pub fn define(&mut self, name: String, stmt: LetStatement) -> Option<LetStatement> {
        self.objects.insert(name, stmt)
    }

    /// Looks up the statement that last bound `name`.
    pub fn resolve(&self, name: &str) -> Option<&LetStatement> {
        self.objects.get(name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
