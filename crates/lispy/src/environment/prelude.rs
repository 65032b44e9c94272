//! Standard prelude with built-in functions

use super::Environment;
use crate::builtins::REGISTRY;
use crate::value::Builtin;

impl Environment {
    /// Create an environment with every built-in function registered.
    pub fn with_prelude() -> Self {
        let mut env = Self::new();
        env.load_prelude();
        env
    }

    /// Load the standard prelude into this environment.
    ///
    /// Existing bindings with builtin names are overwritten.
    pub fn load_prelude(&mut self) {
        for &(name, func) in REGISTRY {
            self.define_builtin(Builtin::new(name, func));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_prelude_registers_all_builtins() {
        let env = Environment::with_prelude();
        assert_eq!(env.len(), REGISTRY.len());
        for name in ["list", "head", "tail", "eval", "join", "def", "+", "max"] {
            assert!(
                matches!(env.lookup(name), Some(Value::Function(_))),
                "missing builtin {}",
                name
            );
        }
    }

    #[test]
    fn test_load_prelude_restores_overwritten_builtin() {
        let mut env = Environment::with_prelude();
        env.put("head", Value::Number(1.0));
        env.load_prelude();
        assert!(matches!(env.lookup("head"), Some(Value::Function(_))));
        assert_eq!(env.len(), REGISTRY.len());
    }
}
